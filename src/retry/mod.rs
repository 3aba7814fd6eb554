pub mod backoff;
pub mod cancellation;
pub mod config;
pub mod executor;

pub use backoff::{Backoff, DefaultBackoff};
pub use cancellation::Cancellation;
pub use config::{RetryConfig, RetryConfigBuilder};
pub use executor::RetryExecutor;
