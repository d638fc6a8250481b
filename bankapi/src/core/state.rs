use std::sync::Arc;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// The in-memory database.
    /// Shared by every request handler; built and seeded once at startup.
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
