use crate::model::{BookingAction, BookingStatus};
use crate::validation::Verdict;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtistlyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Validation failed: {0}")]
    Validation(Verdict),

    #[error("Cannot {action} a booking that is already {from}")]
    InvalidTransition {
        from: BookingStatus,
        action: BookingAction,
    },

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Submission was cancelled")]
    Cancelled,

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ArtistlyError>;
