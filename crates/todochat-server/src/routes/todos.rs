use crate::error::ServerError;
use crate::state::AppState;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchForm {
    #[serde(default)]
    search: String,
}

#[derive(Debug, Deserialize)]
struct NewTodoForm {
    #[serde(default)]
    title: String,
}

async fn search_todos(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ServerError> {
    let todos = state.store.search(&form.search);
    tracing::debug!(term = %form.search, matches = todos.len(), "search");
    Ok(Html(state.pages.render_todos(&todos)?))
}

async fn list_todos(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    Ok(Html(state.pages.render_todos(&state.store.list())?))
}

async fn add_todo(
    State(state): State<AppState>,
    Form(form): Form<NewTodoForm>,
) -> Result<Html<String>, ServerError> {
    let todos = state.store.add(&form.title)?;
    Ok(Html(state.pages.render_todos(&todos)?))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search_todos))
        .route("/todos", get(list_todos).post(add_todo))
        .with_state(state)
}
