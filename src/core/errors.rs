use thiserror::Error;
use tokio::sync::mpsc::error::SendError;

#[derive(Error, Debug)]
pub enum WordriftError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event send error: {0}")]
    EventSend(String),

    #[error("WordriftError: {0}")]
    Custom(String),
}

impl<T> From<SendError<T>> for WordriftError {
    fn from(error: SendError<T>) -> Self {
        WordriftError::EventSend(error.to_string())
    }
}

impl From<std::io::Error> for WordriftError {
    fn from(error: std::io::Error) -> Self {
        WordriftError::Io(Box::new(error))
    }
}
