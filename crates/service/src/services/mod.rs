//! The registry service context.
//!
//! One `LegalService` is built at process start and shared by every request.
//! It owns the four record collections plus the clock and id sources; all
//! operations live in `registry` (create and read) and `linking` (case
//! mutations).

use std::{path::Path, sync::Arc};

use models::{Case, Client, Lawyer, Witness};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use configs::StorageConfig;

use crate::clock::{Clock, IdGenerator, SystemClock, UuidV4};
use crate::errors::ServiceError;
use crate::storage::{JsonMapStore, RecordStore};

mod linking;
mod registry;

pub type Store<V> = Arc<dyn RecordStore<String, V>>;

/// The four collections, keyed by generated id.
#[derive(Clone)]
pub struct Stores {
    pub clients: Store<Client>,
    pub lawyers: Store<Lawyer>,
    pub cases: Store<Case>,
    pub witnesses: Store<Witness>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            clients: JsonMapStore::<String, Client>::in_memory(),
            lawyers: JsonMapStore::<String, Lawyer>::in_memory(),
            cases: JsonMapStore::<String, Case>::in_memory(),
            witnesses: JsonMapStore::<String, Witness>::in_memory(),
        }
    }

    /// One JSON file per collection under `dir`.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let dir = dir.as_ref();
        Ok(Self {
            clients: JsonMapStore::<String, Client>::open(dir.join("clients.json")).await?,
            lawyers: JsonMapStore::<String, Lawyer>::open(dir.join("lawyers.json")).await?,
            cases: JsonMapStore::<String, Case>::open(dir.join("cases.json")).await?,
            witnesses: JsonMapStore::<String, Witness>::open(dir.join("witnesses.json")).await?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub clients: usize,
    pub lawyers: usize,
    pub cases: usize,
    pub witnesses: usize,
}

pub struct LegalService {
    clients: Store<Client>,
    lawyers: Store<Lawyer>,
    cases: Store<Case>,
    witnesses: Store<Witness>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    /// Held across every read-modify-write so two writers never interleave.
    write_lock: Mutex<()>,
}

impl LegalService {
    pub fn new(stores: Stores) -> Self {
        Self {
            clients: stores.clients,
            lawyers: stores.lawyers,
            cases: stores.cases,
            witnesses: stores.witnesses,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidV4),
            write_lock: Mutex::new(()),
        }
    }

    pub fn in_memory() -> Self { Self::new(Stores::in_memory()) }

    /// Build the service from configuration, loading any persisted records.
    pub async fn open(cfg: &StorageConfig) -> Result<Self, ServiceError> {
        let stores = if cfg.in_memory {
            Stores::in_memory()
        } else {
            Stores::open(&cfg.data_dir).await?
        };
        let svc = Self::new(stores);
        let counts = svc.record_counts().await;
        info!(
            in_memory = cfg.in_memory,
            data_dir = %cfg.data_dir,
            clients = counts.clients,
            lawyers = counts.lawyers,
            cases = counts.cases,
            witnesses = counts.witnesses,
            "records_loaded"
        );
        Ok(svc)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub async fn record_counts(&self) -> RecordCounts {
        RecordCounts {
            clients: self.clients.len().await,
            lawyers: self.lawyers.len().await,
            cases: self.cases.len().await,
            witnesses: self.witnesses.len().await,
        }
    }
}

/// Reject empty ids before touching any store.
pub(crate) fn require_ids(ids: &[&str], message: &str) -> Result<(), ServiceError> {
    if ids.iter().any(|id| id.is_empty()) {
        return Err(ServiceError::Validation(message.into()));
    }
    Ok(())
}

pub(crate) const INVALID_ID: &str = "Invalid ID";
pub(crate) const INVALID_IDS: &str = "Invalid IDs";
