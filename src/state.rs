use crate::catalog::Catalog;
use crate::models::ProgressRecord;
use crate::notify::Notifier;
use crate::storage::FileStore;
use crate::store::DailyProgressStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DailyProgressStore<FileStore>>,
    pub record: Arc<Mutex<ProgressRecord>>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(storage: FileStore, catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        let store = DailyProgressStore::new(storage, catalog);
        let record = store.load();
        Self {
            store: Arc::new(store),
            record: Arc::new(Mutex::new(record)),
            notifier,
        }
    }
}
