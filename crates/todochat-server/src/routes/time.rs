use axum::{routing::get, Router};
use chrono::Local;

/// Current server time, polled by the page clock.
async fn server_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

pub fn routes() -> Router {
    Router::new().route("/time", get(server_time))
}
