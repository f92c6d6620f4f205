use std::sync::Arc;
use todochat::pages::Pages;
use todochat::store::TodoStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(store: TodoStore, pages: Pages) -> Self {
        Self {
            store,
            pages: Arc::new(pages),
        }
    }
}
