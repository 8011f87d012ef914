//! Data hooks used by the pages.

use std::future::Future;
use std::marker::PhantomData;

use contracts::shared::debounce::Debouncer;
use contracts::shared::error::ApiError;
use contracts::shared::page::Page;
use contracts::shared::query::QueryKey;
use contracts::shared::resource::{invalidation_roots, CachePolicy, Resource};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::api::CrudService;
use super::query_client::{now_ms, use_query_client, QueryClient};

// ============================================================================
// use_crud
// ============================================================================

/// List state plus create/update/delete mutations for one resource.
///
/// Mutations resolve only after the server answered; on success they
/// invalidate the resource's key root and every dependent root, so any list
/// or report showing that data refetches.
pub struct CrudHandle<R: Resource> {
    pub data: RwSignal<Option<Page<R::Entity>>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub is_creating: RwSignal<bool>,
    pub is_updating: RwSignal<bool>,
    pub is_deleting: RwSignal<bool>,
    pub create_error: RwSignal<Option<ApiError>>,
    pub update_error: RwSignal<Option<ApiError>>,
    pub delete_error: RwSignal<Option<ApiError>>,
    client: QueryClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for CrudHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for CrudHandle<R> {}

impl<R: Resource> CrudHandle<R> {
    pub fn items(&self) -> Vec<R::Entity> {
        self.data
            .with(|data| data.as_ref().map(|p| p.items.clone()).unwrap_or_default())
    }

    /// Drop cached data of this resource and refetch.
    pub fn refetch(&self) {
        self.client.invalidate(&[R::KEY]);
    }

    pub async fn create(self, dto: R::CreateDto) -> Result<R::Entity, ApiError> {
        self.is_creating.set(true);
        self.create_error.set(None);
        let result = CrudService::<R>::create(&dto).await;
        self.is_creating.set(false);
        self.settle(&result, self.create_error);
        result
    }

    pub async fn update(self, id: i64, dto: R::UpdateDto) -> Result<R::Entity, ApiError> {
        self.is_updating.set(true);
        self.update_error.set(None);
        let result = CrudService::<R>::update(id, &dto).await;
        self.is_updating.set(false);
        self.settle(&result, self.update_error);
        result
    }

    pub async fn delete(self, id: i64) -> Result<(), ApiError> {
        self.is_deleting.set(true);
        self.delete_error.set(None);
        let result = CrudService::<R>::delete(id).await;
        self.is_deleting.set(false);
        if result.is_ok() {
            self.client.forget(&QueryKey::for_item::<R>(id));
        }
        self.settle(&result, self.delete_error);
        result
    }

    fn settle<T>(&self, result: &Result<T, ApiError>, slot: RwSignal<Option<ApiError>>) {
        match result {
            Ok(_) => self.client.invalidate(&invalidation_roots::<R>()),
            Err(e) => {
                log::warn!("{}: {}", R::KEY, e);
                slot.set(Some(e.clone()));
            }
        }
    }
}

pub fn use_crud<R: Resource>(params: Signal<R::ListParams>) -> CrudHandle<R> {
    let client = use_query_client();
    let handle = CrudHandle::<R> {
        data: RwSignal::new(None),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
        is_creating: RwSignal::new(false),
        is_updating: RwSignal::new(false),
        is_deleting: RwSignal::new(false),
        create_error: RwSignal::new(None),
        update_error: RwSignal::new(None),
        delete_error: RwSignal::new(None),
        client,
        _resource: PhantomData,
    };

    // Responses that arrive after a newer request started are ignored.
    let latest = StoredValue::new(0u64);

    Effect::new(move |_| {
        let params = params.get();
        let _generation = client.generation(R::KEY);

        latest.update_value(|n| *n += 1);
        let ticket = latest.get_value();

        let key = QueryKey::for_list::<R>(&params);
        if let Some(previous) = client.peek::<Page<R::Entity>>(&key) {
            handle.data.set(Some(previous));
        }
        handle.is_loading.set(true);

        spawn_local(async move {
            let result = client
                .fetch(key, R::POLICY, CrudService::<R>::list(&params))
                .await;
            if latest.get_value() != ticket {
                return;
            }
            match result {
                Ok(page) => {
                    handle.data.set(Some(page));
                    handle.error.set(None);
                }
                Err(e) => {
                    log::warn!("list {}: {}", R::KEY, e);
                    handle.error.set(Some(e));
                }
            }
            handle.is_loading.set(false);
        });
    });

    handle
}

// ============================================================================
// use_item
// ============================================================================

pub struct ItemHandle<R: Resource> {
    pub data: RwSignal<Option<R::Entity>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ItemHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ItemHandle<R> {}

/// Load one entity through the cache; `None` leaves the handle empty.
pub fn use_item<R: Resource>(id: Signal<Option<i64>>) -> ItemHandle<R> {
    let client = use_query_client();
    let handle = ItemHandle::<R> {
        data: RwSignal::new(None),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
        _resource: PhantomData,
    };
    let latest = StoredValue::new(0u64);

    Effect::new(move |_| {
        let id = id.get();
        let _generation = client.generation(R::KEY);
        latest.update_value(|n| *n += 1);
        let ticket = latest.get_value();

        let Some(id) = id else {
            handle.data.set(None);
            return;
        };
        handle.is_loading.set(true);

        spawn_local(async move {
            let result = client
                .fetch(QueryKey::for_item::<R>(id), R::POLICY, CrudService::<R>::get(id))
                .await;
            if latest.get_value() != ticket {
                return;
            }
            match result {
                Ok(entity) => {
                    handle.data.set(Some(entity));
                    handle.error.set(None);
                }
                Err(e) => handle.error.set(Some(e)),
            }
            handle.is_loading.set(false);
        });
    });

    handle
}

// ============================================================================
// use_stats
// ============================================================================

pub struct StatsHandle<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    root: &'static str,
    client: QueryClient,
}

impl<T: Send + Sync + 'static> Clone for StatsHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for StatsHandle<T> {}

impl<T: Send + Sync + 'static> StatsHandle<T> {
    /// Drop the cached result and recompute it.
    pub fn refetch(&self) {
        self.client.invalidate(&[self.root]);
    }
}

/// Derived data cached under `[root, "stats", name]`. Reruns `load` when the
/// params change or `root` is invalidated.
pub fn use_stats<P, T, F, Fut>(
    root: &'static str,
    policy: CachePolicy,
    params: Signal<P>,
    name: fn(&P) -> String,
    load: F,
) -> StatsHandle<T>
where
    P: Clone + Send + Sync + 'static,
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn(P) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_query_client();
    let handle = StatsHandle {
        data: RwSignal::new(None),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
        root,
        client,
    };
    let latest = StoredValue::new(0u64);

    Effect::new(move |_| {
        let params = params.get();
        let _generation = client.generation(root);
        latest.update_value(|n| *n += 1);
        let ticket = latest.get_value();
        handle.is_loading.set(true);

        let key = QueryKey::stats(root, &name(&params));
        spawn_local(async move {
            let result = client.fetch(key, policy, load(params)).await;
            if latest.get_value() != ticket {
                return;
            }
            match result {
                Ok(value) => {
                    handle.data.set(Some(value));
                    handle.error.set(None);
                }
                Err(e) => handle.error.set(Some(e)),
            }
            handle.is_loading.set(false);
        });
    });

    handle
}

// ============================================================================
// use_debounced
// ============================================================================

/// Follows `source` once it has been quiet for `delay_ms`.
///
/// Every change drops the pending `Timeout` (which clears it) and arms a new
/// one; unmounting drops it too.
pub fn use_debounced<T>(source: Signal<T>, delay_ms: u32) -> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let output = RwSignal::new(source.get_untracked());
    let state = StoredValue::new(Debouncer::<T>::new(u64::from(delay_ms)));
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |prev: Option<()>| {
        let value = source.get();
        if prev.is_none() {
            return;
        }
        state.update_value(|d| d.push(value, now_ms()));
        arm(state, timer, output, delay_ms);
    });

    on_cleanup(move || {
        state.update_value(|d| d.cancel());
        timer.update_value(|t| {
            t.take();
        });
    });

    output.into()
}

fn arm<T>(
    state: StoredValue<Debouncer<T>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    output: RwSignal<T>,
    wait_ms: u32,
) where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let timeout = Timeout::new(wait_ms, move || fire(state, timer, output));
    // replacing the previous handle cancels it
    timer.set_value(Some(timeout));
}

fn fire<T>(
    state: StoredValue<Debouncer<T>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    output: RwSignal<T>,
) where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let now = now_ms();
    let mut ready = None;
    state.update_value(|d| ready = d.poll(now));
    match ready {
        Some(value) => {
            if output.get_untracked() != value {
                output.set(value);
            }
        }
        None => {
            // The browser timer may fire a millisecond before the clock says
            // the window is over; re-arm for the remainder.
            let Some(deadline) = state.with_value(|d| d.deadline()) else {
                return;
            };
            let wait = deadline.saturating_sub(now).max(1) as u32;
            spawn_local(async move { arm(state, timer, output, wait) });
        }
    }
}
