use crate::retry::backoff::Backoff;
use derive_builder::Builder;
use std::sync::Arc;
use std::time::Duration;

/// Retry policy configuration: attempt cap, elapsed-time budget, and an
/// optional custom backoff schedule.
///
/// An owned-pattern `derive_builder` builder with stripped `Option`
/// setters.
#[derive(Clone, Builder)]
#[builder(name = "RetryConfigBuilder", pattern = "owned", setter(strip_option))]
pub struct RetryConfig {
    /// `<= 0` disables the attempt cap. Default 4.
    #[builder(default = 4)]
    pub max_attempts: i64,

    /// `None` disables the elapsed-time budget. Default `None`.
    #[builder(default = None)]
    pub max_elapsed: Option<Duration>,

    /// Overrides the default backoff schedule for non-429 retries when
    /// set. Default `None`.
    #[builder(default = None)]
    pub backoff: Option<Arc<dyn Backoff>>,
}

impl RetryConfig {
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    #[inline]
    pub fn attempts_enabled(&self) -> bool {
        self.max_attempts > 0
    }

    #[inline]
    pub fn elapsed_enabled(&self) -> bool {
        self.max_elapsed.is_some()
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            max_elapsed: None,
            backoff: None,
        }
    }
}

impl std::fmt::Debug for RetryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryConfig")
            .field("max_attempts", &self.max_attempts)
            .field("max_elapsed", &self.max_elapsed)
            .field("backoff", &self.backoff.as_ref().map(|_| "<custom>"))
            .finish()
    }
}
