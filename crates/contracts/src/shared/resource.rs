//! REST resource descriptors.
//!
//! One zero-sized type per entity ties together its DTOs, its REST path, its
//! cache key root and its cache policy. Services, hooks and list pages are
//! generic over this trait so each entity only declares data.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// How long a cached query stays fresh and how long an unused entry survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub stale_time_ms: u64,
    pub gc_time_ms: u64,
}

impl CachePolicy {
    pub const fn minutes(stale: u64, gc: u64) -> Self {
        Self {
            stale_time_ms: stale * 60_000,
            gc_time_ms: gc * 60_000,
        }
    }

    /// Catalogue data: rarely edited.
    pub const CATALOG: CachePolicy = CachePolicy::minutes(5, 30);
    /// Stock and production data: edited throughout the day.
    pub const OPERATIONAL: CachePolicy = CachePolicy::minutes(2, 10);
    /// Sales and orders.
    pub const TRANSACTIONAL: CachePolicy = CachePolicy::minutes(2, 15);
}

/// Marker for list parameters that carry nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

/// DTO type for an operation the resource does not expose. It has no values,
/// so such a request cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoDto {}

pub trait Resource: 'static {
    type Entity: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;
    type CreateDto: Serialize + Clone + Send + Sync + 'static;
    type UpdateDto: Serialize + Clone + Send + Sync + 'static;
    type ListParams: Serialize + Clone + PartialEq + Default + Send + Sync + 'static;

    /// Root of every cache key belonging to this entity.
    const KEY: &'static str;
    /// REST collection path, e.g. `/proveedores`.
    const PATH: &'static str;
    const POLICY: CachePolicy;
    /// Cache roots whose data is derived from this entity and must be
    /// refetched when it changes.
    const DEPENDENTS: &'static [&'static str] = &[];

    /// Singular name used in confirmations and titles.
    const ELEMENT_NAME: &'static str;
    /// Plural name used in page titles and navigation.
    const LIST_NAME: &'static str;

    fn id(entity: &Self::Entity) -> i64;

    /// Human label for pickers and confirmation dialogs.
    fn label(entity: &Self::Entity) -> String;

    /// Query string for a list request, without the leading `?`.
    fn query_string(params: &Self::ListParams) -> String {
        serde_qs::to_string(params).unwrap_or_default()
    }

    fn list_path(params: &Self::ListParams) -> String {
        let qs = Self::query_string(params);
        if qs.is_empty() {
            Self::PATH.to_string()
        } else {
            format!("{}?{}", Self::PATH, qs)
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

/// Every cache root a successful mutation of `R` must invalidate.
pub fn invalidation_roots<R: Resource>() -> Vec<&'static str> {
    let mut roots = vec![R::KEY];
    roots.extend(R::DEPENDENTS.iter().copied().filter(|k| *k != R::KEY));
    roots
}
