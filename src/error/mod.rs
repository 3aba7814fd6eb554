//! Error handling for the request execution core.
//!
//! A top enum over a handful of per-concern leaf types. There is no
//! API-level error here: mapping 4xx/5xx JSON bodies to typed errors is a
//! higher-level REST concern built on top of this crate — the retry core
//! only ever sees a [`Response`](crate::Response) or a [`NetworkError`].

pub mod network;

pub use network::NetworkError;
use thiserror::Error;

/// The single transport-error kind surfaced to callers.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A network-level failure, possibly after exhausting the retry
    /// budget.
    #[error("network error: {0}")]
    Network(#[source] NetworkError),

    /// The retry budget was exhausted mid-pause, with no usable prior
    /// response to fall back on.
    #[error("retry budget exhausted: {0}")]
    BudgetExhausted(String),

    /// `Cancellation::cancel()` fired while the executor was paused in
    /// backoff.
    #[error("request cancelled")]
    Cancelled,

    /// Any other, non-network transport failure (malformed URL, client
    /// construction failure, etc.); always non-retryable.
    #[error("transport error: {message}")]
    Other {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TransportError {
    pub fn other(message: impl Into<String>) -> Self {
        TransportError::Other {
            message: message.into(),
            source: None,
        }
    }

    pub fn other_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Advisory retryable hint — the retry decision has already been made
    /// internally by the time a caller observes this; it's offered for
    /// callers that want to retry again at a higher level.
    pub fn retryable(&self) -> bool {
        match self {
            TransportError::Network(e) => e.is_retryable(),
            TransportError::BudgetExhausted(_) => false,
            TransportError::Cancelled => false,
            TransportError::Other { .. } => false,
        }
    }
}

impl From<NetworkError> for TransportError {
    fn from(err: NetworkError) -> Self {
        TransportError::Network(err)
    }
}
