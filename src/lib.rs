//! # iam-http-client
//!
//! The request execution core of an API client for a cloud identity
//! provider: takes an abstract [`Request`], applies retry policy, backoff,
//! and rate-limit honoring, and delegates individual attempts to a pooled
//! HTTP transport, returning a normalized [`Response`].
//!
//! Two layered components compose the crate's behavior:
//!
//! - [`retry::RetryExecutor`] owns the retry loop: attempt accounting,
//!   elapsed-time budgeting, backoff computation, 429 reset-header
//!   parsing, and request state restoration between attempts.
//! - [`transport::TransportExecutor`] authenticates, sends, and normalizes
//!   a single attempt over a pooled `reqwest::Client`.
//!
//! Both implement [`Executor`], so `RetryExecutor<TransportExecutor>` is
//! the typical top-level client, but either can be swapped for a test
//! double.
//!
//! ```no_run
//! use iam_http_client::{Request, RetryConfig, RetryExecutor, TransportConfig, TransportExecutor};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = TransportExecutor::new(TransportConfig::default());
//! let retry = RetryExecutor::new(transport, RetryConfig::builder().build()?);
//! let response = retry.execute(Request::get("https://example.okta.com/api/v1/users")).await?;
//! println!("status: {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod executor;
pub mod headers;
pub mod query;
pub mod request;
pub mod response;
pub mod retry;
pub mod transport;

pub use error::{NetworkError, TransportError};
pub use executor::Executor;
pub use headers::Headers;
pub use query::QueryString;
pub use request::{Body, Request};
pub use response::Response;
pub use retry::{
    Backoff, Cancellation, DefaultBackoff, RetryConfig, RetryConfigBuilder, RetryExecutor,
};
pub use transport::{
    BearerToken, NoAuth, PoolConfig, ProxyConfig, RequestAuthenticator, TransportConfig,
    TransportConfigBuilder, TransportExecutor,
};
