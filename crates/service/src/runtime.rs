//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the binary prepares storage through
//! the service crate.

use configs::StorageConfig;

/// Ensure the data directory exists unless records are kept in memory.
pub async fn ensure_env(storage: &StorageConfig) -> anyhow::Result<()> {
    if storage.in_memory {
        return Ok(());
    }
    common::env::ensure_data_dir(&storage.data_dir).await
}
