use std::path::PathBuf;

use thiserror::Error;

use crate::selector::CoreSelector;

pub type Result<T> = std::result::Result<T, UtilError>;

/// Errors that end a sampling cycle. None of them are retried.
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("source unavailable: {path}: {reason}", path = .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },
    #[error("counter snapshots taken for different selectors ({earlier} then {later})")]
    SelectorMismatch {
        earlier: CoreSelector,
        later: CoreSelector,
    },
}

impl UtilError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
