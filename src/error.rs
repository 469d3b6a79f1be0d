//! Error types for the passenger API client

use thiserror::Error;

/// Failure of a single request to the passenger API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network unreachable, connection reset, timeout
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response; the body is not parsed
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("passenger {0} not found")]
    NotFound(i64),

    /// 2xx response whose body is not the expected JSON
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::NotFound(_) => Some(reqwest::StatusCode::NOT_FOUND),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}

/// A passenger that the API would reject on creation
#[derive(Error, Debug)]
pub enum InvalidPassenger {
    #[error("ticket class must be 1, 2 or 3 (got {0})")]
    Class(i64),

    #[error("sex must be \"male\" or \"female\" (got {0:?})")]
    Sex(String),

    #[error("embark location must be C, Q or S (got {0:?})")]
    EmbarkLocation(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("age and fare must not be negative")]
    Negative,
}
