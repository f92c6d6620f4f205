mod configuration;
mod error;
mod routes;
mod state;

use anyhow::Context;
use configuration::Settings;
use state::AppState;
use todochat::pages::Pages;
use todochat::store::TodoStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::new()?;

    let store = if settings.todos.seed {
        TodoStore::seeded()
    } else {
        TodoStore::new()
    };
    let pages = match &settings.templates.dir {
        Some(dir) => Pages::from_dir(dir),
        None => Pages::new(),
    }
    .context("failed to load page templates")?;

    let app = routes::configure(AppState::new(store, pages));

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
