use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use todochat::errors::TodoError;
use todochat::pages::RenderError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value in environment variable {env_var}: {message}")]
    InvalidEnvVar { env_var: String, message: String },

    #[error("Cannot resolve listen address {addr}")]
    InvalidAddress { addr: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Map a dotted settings key such as `server.port` to the environment
/// variable that sets it.
pub fn to_env_var(key: &str) -> String {
    let key = key.trim_start_matches("todochat.");
    format!("TODOCHAT_{}", key.replace('.', "__").to_uppercase())
}

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("failed to render page: {0}")]
    Render(#[from] RenderError),
}

impl From<TodoError> for ServerError {
    fn from(err: TodoError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ServerError::Render(err) => {
                // template details stay in the log
                tracing::error!("render error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
