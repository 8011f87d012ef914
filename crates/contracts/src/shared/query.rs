//! Client-side query cache.
//!
//! Keys are built only through the constructors below so that the same
//! entity always maps to the same root. Time is passed in explicitly (ms since
//! epoch) so the cache behaves identically in the browser and in tests.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::resource::{CachePolicy, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyScope {
    /// Collection query with its serialized parameters (empty when none).
    List(String),
    Item(i64),
    Stats(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    root: String,
    scope: KeyScope,
}

impl QueryKey {
    pub fn list(root: &str, params: &str) -> Self {
        Self {
            root: root.to_string(),
            scope: KeyScope::List(params.to_string()),
        }
    }

    pub fn item(root: &str, id: i64) -> Self {
        Self {
            root: root.to_string(),
            scope: KeyScope::Item(id),
        }
    }

    pub fn stats(root: &str, name: &str) -> Self {
        Self {
            root: root.to_string(),
            scope: KeyScope::Stats(name.to_string()),
        }
    }

    pub fn for_list<R: Resource>(params: &R::ListParams) -> Self {
        Self::list(R::KEY, &R::query_string(params))
    }

    pub fn for_item<R: Resource>(id: i64) -> Self {
        Self::item(R::KEY, id)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn scope(&self) -> &KeyScope {
        &self.scope
    }

    /// Array form of the key: `["usuarios"]`, `["usuarios", "q=ana"]`,
    /// `["usuarios", "7"]`, `["usuarios", "stats", "total"]`.
    pub fn segments(&self) -> Vec<String> {
        let mut out = vec![self.root.clone()];
        match &self.scope {
            KeyScope::List(params) if params.is_empty() => {}
            KeyScope::List(params) => out.push(params.clone()),
            KeyScope::Item(id) => out.push(id.to_string()),
            KeyScope::Stats(name) => {
                out.push("stats".to_string());
                out.push(name.clone());
            }
        }
        out
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.segments().join(", "))
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at: u64,
    last_used: u64,
    stale: bool,
    policy: CachePolicy,
}

impl CacheEntry {
    fn is_fresh(&self, now: u64) -> bool {
        !self.stale && now.saturating_sub(self.fetched_at) < self.policy.stale_time_ms
    }

    fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.last_used) >= self.policy.gc_time_ms
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    generations: HashMap<String, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key` if it is still within its stale time.
    pub fn get_fresh<T: DeserializeOwned>(&mut self, key: &QueryKey, now: u64) -> Option<T> {
        let entry = self.entries.get_mut(key)?;
        if !entry.is_fresh(now) {
            return None;
        }
        entry.last_used = now;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Cached value regardless of freshness, for showing something while a
    /// refetch is in flight.
    pub fn get_any<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entry = self.entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn store<T: Serialize>(&mut self, key: QueryKey, value: &T, policy: CachePolicy, now: u64) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
                last_used: now,
                stale: false,
                policy,
            },
        );
    }

    /// Mark every key under `root` stale and bump the root's generation.
    /// Returns the new generation.
    pub fn invalidate(&mut self, root: &str) -> u64 {
        for (key, entry) in self.entries.iter_mut() {
            if key.root() == root {
                entry.stale = true;
            }
        }
        let generation = self.generations.entry(root.to_string()).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn generation(&self, root: &str) -> u64 {
        self.generations.get(root).copied().unwrap_or(0)
    }

    pub fn remove(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Drop entries unused for longer than their gc time. Returns how many.
    pub fn collect_garbage(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_stale(&self, key: &QueryKey, now: u64) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_fresh(now))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page::Page;

    const POLICY: CachePolicy = CachePolicy::minutes(2, 10);

    #[test]
    fn list_key_without_params_is_just_the_root() {
        assert_eq!(QueryKey::list("usuarios", "").segments(), vec!["usuarios"]);
        assert_eq!(
            QueryKey::list("usuarios", "search=ana").segments(),
            vec!["usuarios", "search=ana"]
        );
        assert_eq!(QueryKey::item("telas", 4).to_string(), "[telas, 4]");
        assert_eq!(
            QueryKey::stats("ventas", "resumen").segments(),
            vec!["ventas", "stats", "resumen"]
        );
    }

    #[test]
    fn fresh_until_stale_time() {
        let mut cache = QueryCache::new();
        let key = QueryKey::list("telas", "");
        cache.store(key.clone(), &vec![1, 2], POLICY, 1_000);

        assert_eq!(cache.get_fresh::<Vec<i32>>(&key, 1_000 + 60_000), Some(vec![1, 2]));
        assert_eq!(cache.get_fresh::<Vec<i32>>(&key, 1_000 + 120_000), None);
        assert_eq!(cache.get_any::<Vec<i32>>(&key), Some(vec![1, 2]));
    }

    #[test]
    fn invalidate_marks_every_scope_of_the_root() {
        let mut cache = QueryCache::new();
        let list = QueryKey::list("proveedores", "");
        let item = QueryKey::item("proveedores", 3);
        let stats = QueryKey::stats("proveedores", "total");
        let other = QueryKey::list("telas", "");
        for key in [&list, &item, &stats, &other] {
            cache.store(key.clone(), &0, POLICY, 0);
        }

        assert_eq!(cache.generation("proveedores"), 0);
        assert_eq!(cache.invalidate("proveedores"), 1);

        assert!(cache.is_stale(&list, 10));
        assert!(cache.is_stale(&item, 10));
        assert!(cache.is_stale(&stats, 10));
        assert!(!cache.is_stale(&other, 10));
        assert_eq!(cache.generation("telas"), 0);
    }

    #[test]
    fn garbage_collection_uses_last_access() {
        let mut cache = QueryCache::new();
        let key = QueryKey::list("telas", "");
        cache.store(key.clone(), &1, POLICY, 0);

        // touched at 9 min, so still alive at 15 min
        assert!(cache.get_fresh::<i32>(&key, 60_000).is_some());
        cache.entries.get_mut(&key).unwrap().last_used = 9 * 60_000;
        assert_eq!(cache.collect_garbage(15 * 60_000), 0);
        assert_eq!(cache.collect_garbage(19 * 60_000), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn deleted_item_is_absent_after_refetch() {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Row {
            id: i64,
        }

        let mut cache = QueryCache::new();
        let key = QueryKey::list("proveedores", "");
        let before = Page::new(vec![Row { id: 1 }, Row { id: 2 }]);
        cache.store(key.clone(), &before, POLICY, 0);

        // delete succeeded on the server; the mutation invalidates the root
        cache.invalidate("proveedores");
        assert!(cache.get_fresh::<Page<Row>>(&key, 1).is_none());

        // the refetch stores what the server now returns
        let after = Page::new(vec![Row { id: 2 }]);
        cache.store(key.clone(), &after, POLICY, 2);
        let page: Page<Row> = cache.get_fresh(&key, 3).unwrap();
        assert!(page.items.iter().all(|row| row.id != 1));
    }
}
