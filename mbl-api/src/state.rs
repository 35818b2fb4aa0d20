use std::sync::Arc;

use mbl_core::Catalog;
use mbl_notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(catalog: Catalog, notifier: Notifier) -> Self {
        Self {
            catalog: Arc::new(catalog),
            notifier: Arc::new(notifier),
        }
    }
}
