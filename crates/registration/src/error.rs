use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

/// How a remote fetch failed, as seen by callers deciding what to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    Unauthorized,
    NotFound,
    Transport,
}

impl fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::NotFound => write!(f, "not found"),
            Self::Transport => write!(f, "transport failure"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("Remote request to {url} failed ({status}): {message}")]
    Remote {
        status: RemoteStatus,
        url: String,
        message: String,
    },

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    ExportError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ImporterError {
    pub fn unauthorized(url: impl Into<String>) -> Self {
        Self::Remote {
            status: RemoteStatus::Unauthorized,
            url: url.into(),
            message: "credentials rejected".to_string(),
        }
    }

    pub fn not_found(url: impl Into<String>) -> Self {
        Self::Remote {
            status: RemoteStatus::NotFound,
            url: url.into(),
            message: "resource does not exist".to_string(),
        }
    }

    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            status: RemoteStatus::Transport,
            url: url.into(),
            message: message.into(),
        }
    }

    /// Classification of a remote failure, `None` for local errors.
    pub fn remote_status(&self) -> Option<RemoteStatus> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
