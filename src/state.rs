use crate::{config::RuntimeConfiguration, store::StudentStore};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state: the student store behind a mutex, plus the
/// runtime configuration. Cheap to clone, one store per process.
#[derive(Clone, Debug)]
pub struct RollcallState {
    store: Arc<Mutex<StudentStore>>,
    config: RuntimeConfiguration,
}

impl RollcallState {
    pub fn new(config: RuntimeConfiguration) -> Self {
        let store = if config.seed_demo_data() {
            StudentStore::with_demo_data()
        } else {
            StudentStore::new()
        };

        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }

    /// Locks the store for the duration of one handler's work. Guards must
    /// not be held across calls back into other handlers.
    pub async fn store(&self) -> MutexGuard<'_, StudentStore> {
        self.store.lock().await
    }

    #[allow(dead_code)]
    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }
}
