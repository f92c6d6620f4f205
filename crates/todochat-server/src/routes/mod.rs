// Export route modules
pub mod chat;
pub mod pages;
pub mod time;
pub mod todos;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes(state.clone()))
        .merge(todos::routes(state))
        .merge(time::routes())
        .merge(chat::routes())
}
