use thiserror::Error;
use types::DraftError;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never got a response: connection refused, DNS, CORS...
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid form: {0}")]
    Draft(#[from] DraftError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::Http {
                status: status.as_u16(),
                message: error.to_string(),
            },
            None => Self::Network(error.to_string()),
        }
    }
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
