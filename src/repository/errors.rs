use serde::Serialize;
use thiserror::Error;

/// Why a fetch did not produce content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("resource not found")]
    NotFound,

    /// The request URL could not be built; nothing was sent.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

/// Content API settings that cannot be used to start the site.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiConfigError {
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("api base url cannot hold paths: {0}")]
    CannotBeABase(String),

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

/// Failure tag carried by a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    NetworkError,
    NonSuccessStatus,
    DecodeError,
    NotFound,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::NetworkError => "network-error",
            FailureKind::NonSuccessStatus => "non-2xx-status",
            FailureKind::DecodeError => "decode-error",
            FailureKind::NotFound => "not-found",
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network(_) | FetchError::InvalidUrl(_) => FailureKind::NetworkError,
            FetchError::Status(_) => FailureKind::NonSuccessStatus,
            FetchError::Decode(_) => FailureKind::DecodeError,
            FetchError::NotFound => FailureKind::NotFound,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_timeout() {
            FetchError::Network(format!("request timed out: {err}"))
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}
