//! Storage abstractions for the service layer
//!
//! `RecordStore` is the keyed collection each entity lives in; the JSON
//! file-backed map is the only implementation shipped.

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod json_map_store;

pub use json_map_store::JsonMapStore;

/// Keyed collection of records.
///
/// Writes either fully apply (memory and backing medium) or return an error
/// with the collection unchanged.
#[async_trait]
pub trait RecordStore<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Send + 'static,
{
    /// Store `value` under `key`, returning the value it replaced.
    async fn insert(&self, key: K, value: V) -> Result<Option<V>, ServiceError>;

    async fn get(&self, key: &K) -> Option<V>;

    /// Every stored value, in no particular order.
    async fn values(&self) -> Vec<V>;

    /// Delete `key`, returning the removed value if there was one.
    async fn remove(&self, key: &K) -> Result<Option<V>, ServiceError>;

    async fn len(&self) -> usize;
}
