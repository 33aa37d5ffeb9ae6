//! Error types for the CPL stats client

use reqwest::StatusCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, CplError>;

#[derive(Error, Debug)]
pub enum CplError {
    #[error("Timeout error fetching {url}: {source}")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error fetching data from {url}: {source}")]
    Request {
        url: String,
        status: Option<StatusCode>,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CplError {
    /// Classify a transport error for `url` into the timeout or request kind.
    pub fn from_reqwest(url: impl Into<String>, err: reqwest::Error) -> Self {
        let url = url.into();
        if err.is_timeout() {
            CplError::Timeout { url, source: err }
        } else {
            CplError::Request {
                url,
                status: err.status(),
                source: err,
            }
        }
    }

    /// HTTP status carried by a request error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CplError::Request { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CplError::Timeout { .. })
    }
}
