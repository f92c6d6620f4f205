use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Malformed chat message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Binary frame is not valid UTF-8")]
    NotUtf8,

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo title must not be empty")]
    EmptyTitle,
}
