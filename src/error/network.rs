use thiserror::Error;

/// Network-level failure, classified once at the transport boundary
/// (`TransportExecutor::execute`) into a single tagged enum rather than
/// matched ad hoc at each call site.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("connect timeout: {0}")]
    ConnectTimeout(String),

    #[error("read timeout: {0}")]
    ReadTimeout(String),

    #[error("no response received from server: {0}")]
    NoResponse(String),

    #[error("socket error: {0}")]
    OtherSocket(String),

    #[error("{0}")]
    Other(String),
}

impl NetworkError {
    /// Connection failure, socket reset, read timeout, or no response at
    /// all are retryable. `Other` is not assumed to be network-level and is
    /// not retryable on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NetworkError::ConnectTimeout(_)
                | NetworkError::ReadTimeout(_)
                | NetworkError::NoResponse(_)
                | NetworkError::OtherSocket(_)
        )
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                NetworkError::ConnectTimeout(err.to_string())
            } else {
                NetworkError::ReadTimeout(err.to_string())
            }
        } else if err.is_connect() {
            NetworkError::ConnectTimeout(err.to_string())
        } else if err.is_request() && err.status().is_none() && err.url().is_some() {
            NetworkError::NoResponse(err.to_string())
        } else if err.is_body() || err.is_decode() {
            NetworkError::OtherSocket(err.to_string())
        } else {
            NetworkError::Other(err.to_string())
        }
    }
}
