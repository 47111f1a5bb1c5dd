use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registration::{ImporterError, RemoteStatus};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

pub const MISSING_FIELDS_MESSAGE: &str =
    "You need to supply your Match ID, and your Shoot 'n Score It username and password";
pub const LOGIN_FAILED_MESSAGE: &str =
    "Failed to login to Shoot 'n Score It - please check your username and password.";
pub const UPSTREAM_FAILED_MESSAGE: &str =
    "Failed to retrieve data from Shoot 'n Score It - please try again later.";

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    MatchNotFound { match_id: String },
    Upstream(ImporterError),
    InternalServerError(String),
}

impl WebError {
    /// Classifies a pipeline failure for the match the caller asked about.
    pub fn from_importer(error: ImporterError, match_id: &str) -> Self {
        match error.remote_status() {
            Some(RemoteStatus::Unauthorized) => Self::Unauthorized,
            Some(RemoteStatus::NotFound) => Self::MatchNotFound {
                match_id: match_id.to_string(),
            },
            Some(RemoteStatus::Transport) => Self::Upstream(error),
            None => match error {
                ImporterError::ValidationError(msg) => Self::BadRequest(msg),
                other => Self::Upstream(other),
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => MISSING_FIELDS_MESSAGE.to_string(),
            Self::Unauthorized => LOGIN_FAILED_MESSAGE.to_string(),
            Self::MatchNotFound { match_id } => format!(
                "Couldn't find a match with ID {} - please check your match ID before trying again",
                match_id
            ),
            Self::Upstream(_) | Self::InternalServerError(_) => {
                UPSTREAM_FAILED_MESSAGE.to_string()
            }
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::MatchNotFound { match_id } => write!(f, "Match {} not found", match_id),
            Self::Upstream(e) => write!(f, "Upstream error: {}", e),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MatchNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            Self::Upstream(e) => tracing::error!("Upstream error: {:?}", e),
            Self::InternalServerError(msg) => tracing::error!("Internal server error: {}", msg),
            other => tracing::warn!("Request rejected: {}", other),
        }

        (status_code, Json(json!({ "response": self.message() }))).into_response()
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
