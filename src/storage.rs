use crate::errors::StoreError;
use crate::store::LocalStore;
use std::path::Path;
use tokio::fs;
use tracing::error;

pub async fn load_store(path: &Path) -> LocalStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse store file {}: {err}", path.display());
                LocalStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalStore::default(),
        Err(err) => {
            error!("failed to read store file {}: {err}", path.display());
            LocalStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &LocalStore) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(store).map_err(|source| StoreError::Encode {
        key: path.display().to_string(),
        source,
    })?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ADMIN_KEY;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("mindconnect_{}_{name}.json", std::process::id()))
    }

    #[tokio::test]
    async fn persisted_store_loads_back() {
        let path = temp_path("roundtrip");
        let mut store = LocalStore::new();
        store.set_item(ADMIN_KEY, "true");
        persist_store(&path, &store).await.unwrap();

        let loaded = load_store(&path).await;
        assert_eq!(loaded, store);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn unreadable_file_falls_back_to_empty() {
        let path = temp_path("garbage");
        std::fs::write(&path, b"not a store").unwrap();
        assert_eq!(load_store(&path).await, LocalStore::default());
        let _ = std::fs::remove_file(path);

        assert_eq!(load_store(&temp_path("absent")).await, LocalStore::default());
    }
}
