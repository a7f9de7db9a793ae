use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The endpoint answered, but not with 200.
    #[error("Received response code {status}")]
    Status { status: u16 },

    /// Display is reqwest's top-level message only; the underlying cause
    /// is reachable through `source()`.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("invalid x-api-key header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("config error: {0}")]
    Config(String),
}

impl ProxyError {
    /// True when the server responded with a non-200 status.
    /// Everything else means the call never completed.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// HTTP status carried by a protocol failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
