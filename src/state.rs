use crate::errors::StoreError;
use crate::storage::persist_store;
use crate::store::LocalStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub admin_password: Arc<str>,
    pub store: Arc<Mutex<LocalStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, admin_password: impl Into<Arc<str>>, store: LocalStore) -> Self {
        Self {
            data_path,
            admin_password: admin_password.into(),
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn persist(&self, store: &LocalStore) -> Result<(), StoreError> {
        persist_store(&self.data_path, store).await
    }
}
