//! Reactive wrapper around [`QueryCache`].
//!
//! The cache itself lives in a `StoredValue`; what pages subscribe to is one
//! generation counter per key root. Invalidating a root bumps its counter and
//! every list or report tracking it refetches.

use std::collections::HashMap;
use std::future::Future;

use contracts::shared::error::ApiError;
use contracts::shared::query::{QueryCache, QueryKey};
use contracts::shared::resource::CachePolicy;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    generations: RwSignal<HashMap<String, u64>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new()),
            generations: RwSignal::new(HashMap::new()),
        }
    }

    /// Tracked read: the calling effect reruns when `root` is invalidated.
    pub fn generation(&self, root: &str) -> u64 {
        self.generations
            .with(|g| g.get(root).copied().unwrap_or(0))
    }

    /// Mark every key under each root stale and notify subscribers.
    pub fn invalidate(&self, roots: &[&str]) {
        let mut bumped = Vec::with_capacity(roots.len());
        self.cache.update_value(|cache| {
            for root in roots {
                bumped.push((root.to_string(), cache.invalidate(root)));
            }
        });
        log::debug!("invalidate {:?}", roots);
        self.generations.update(|g| g.extend(bumped));
    }

    /// Last value stored for `key`, fresh or not.
    pub fn peek<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.cache.with_value(|cache| cache.get_any(key))
    }

    /// Serve `key` from cache while it is fresh, otherwise await `load` and
    /// store the result. Errors are not cached.
    pub async fn fetch<T, Fut>(
        &self,
        key: QueryKey,
        policy: CachePolicy,
        load: Fut,
    ) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut cached = None;
        self.cache
            .update_value(|cache| cached = cache.get_fresh::<T>(&key, now_ms()));
        if let Some(value) = cached {
            log::debug!("cache hit {}", key);
            return Ok(value);
        }

        let value = load.await?;
        self.cache.update_value(|cache| {
            let now = now_ms();
            cache.store(key, &value, policy, now);
            let evicted = cache.collect_garbage(now);
            if evicted > 0 {
                log::debug!("cache gc: {} entries", evicted);
            }
        });
        Ok(value)
    }

    pub fn forget(&self, key: &QueryKey) {
        self.cache.update_value(|cache| cache.remove(key));
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not found in context")
}
