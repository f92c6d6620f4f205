use crate::error::ServerError;
use crate::state::AppState;
use axum::{extract::State, response::Html, routing::get, Router};

// The page starts with no results; the list is filled in by search and add.
async fn index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    Ok(Html(state.pages.render_index(&[])?))
}

pub fn routes(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}
