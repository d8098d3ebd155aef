use std::{collections::HashMap, hash::Hash, path::{Path, PathBuf}, sync::Arc};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// Generic JSON file-backed key-value map store.
///
/// Keeps a `HashMap<K, V>` in memory and rewrites the whole JSON file after
/// every mutation. The file is replaced through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous snapshot intact. Without
/// a file path the store lives in memory only.
pub struct JsonMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
    file_path: Option<PathBuf>,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Open the store at `path`. Creates the file with an empty map if missing;
    /// a file that does not parse is an error rather than an empty store.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(ServiceError::internal)?;
            }
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Internal(format!("corrupt store {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                write_snapshot(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::internal(e)),
        };
        debug!(path = %file_path.display(), records = map.len(), "store_opened");

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path: Some(file_path) }))
    }

    /// Non-persistent store.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(HashMap::new())), file_path: None })
    }

    async fn save(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        match &self.file_path {
            Some(path) => write_snapshot(path, map).await,
            None => Ok(()),
        }
    }
}

async fn write_snapshot<T: Serialize>(path: &Path, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(value).map_err(ServiceError::internal)?;
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    fs::write(&tmp, data).await.map_err(ServiceError::internal)?;
    fs::rename(&tmp, path).await.map_err(ServiceError::internal)?;
    Ok(())
}

#[async_trait]
impl<K, V> RecordStore<K, V> for JsonMapStore<K, V>
where
    K: Eq + Hash + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn insert(&self, key: K, value: V) -> Result<Option<V>, ServiceError> {
        let mut map = self.inner.write().await;
        let previous = map.insert(key.clone(), value);
        if let Err(e) = self.save(&map).await {
            // roll back so memory matches the file
            match previous {
                Some(old) => { map.insert(key, old); }
                None => { map.remove(&key); }
            }
            return Err(e);
        }
        Ok(previous)
    }

    async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    async fn remove(&self, key: &K) -> Result<Option<V>, ServiceError> {
        let mut map = self.inner.write().await;
        let removed = map.remove(key);
        if let Some(old) = &removed {
            if let Err(e) = self.save(&map).await {
                map.insert(key.clone(), old.clone());
                return Err(e);
            }
        }
        Ok(removed)
    }

    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_map_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonMapStore::<String, String>::open(&tmp).await?;

        // initially empty
        assert_eq!(store.len().await, 0);
        assert!(tmp.exists());

        // insert and overwrite
        assert_eq!(store.insert("a".into(), "1".into()).await?, None);
        assert_eq!(store.insert("b".into(), "2".into()).await?, None);
        assert_eq!(store.insert("a".into(), "10".into()).await?, Some("1".to_string()));
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("10"));

        let mut values = store.values().await;
        values.sort();
        assert_eq!(values, vec!["10".to_string(), "2".to_string()]);

        // remove twice: second call reports absent
        assert_eq!(store.remove(&"b".into()).await?, Some("2".to_string()));
        assert_eq!(store.remove(&"b".into()).await?, None);

        // reload from disk
        let reloaded = JsonMapStore::<String, String>::open(&tmp).await?;
        assert_eq!(reloaded.len().await, 1);
        assert_eq!(reloaded.get(&"a".into()).await.as_deref(), Some("10"));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_rejected() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        tokio::fs::write(&tmp, b"{not json").await?;
        let res = JsonMapStore::<String, String>::open(&tmp).await;
        assert!(matches!(res, Err(ServiceError::Internal(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_write_rolls_back_memory() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("json_map_store_dir_{}", uuid::Uuid::new_v4()));
        let path = dir.join("records.json");
        let store = JsonMapStore::<String, String>::open(&path).await?;
        store.insert("kept".into(), "v".into()).await?;

        // pull the directory out from under the store so the next write fails
        tokio::fs::remove_dir_all(&dir).await?;
        assert!(store.insert("lost".into(), "v".into()).await.is_err());
        assert_eq!(store.get(&"lost".into()).await, None);
        assert!(store.remove(&"kept".into()).await.is_err());
        assert_eq!(store.get(&"kept".into()).await.as_deref(), Some("v"));
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_store_never_touches_disk() {
        let store = JsonMapStore::<String, u64>::in_memory();
        store.insert("n".into(), 1).await.unwrap();
        assert_eq!(store.get(&"n".into()).await, Some(1));
        assert_eq!(store.len().await, 1);
    }
}
