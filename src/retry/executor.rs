use crate::error::TransportError;
use crate::executor::Executor;
use crate::headers::names;
use crate::retry::backoff::{Backoff, DefaultBackoff, parse_http_date};
use crate::retry::cancellation::Cancellation;
use crate::retry::config::RetryConfig;
use crate::{Request, Response};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Wraps an inner [`Executor`] with bounded-attempt, bounded-elapsed, and
/// rate-limit-aware retry.
///
/// All per-call state (attempt counter, timer, header/query snapshots) is
/// stack-local to a single `execute` invocation — `RetryExecutor` itself
/// holds nothing but its config and inner executor, so it is `Send + Sync`
/// and safely shared across concurrent calls.
pub struct RetryExecutor<E: Executor> {
    inner: E,
    config: RetryConfig,
}

impl<E: Executor> RetryExecutor<E> {
    pub fn new(inner: E, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    pub async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        self.execute_cancellable(request, &Cancellation::new())
            .await
    }

    pub async fn execute_cancellable(
        &self,
        mut request: Request,
        cancel: &Cancellation,
    ) -> Result<Response, TransportError> {
        let original_headers = request.headers.clone();
        let original_query = request.query.clone();
        let timer = Instant::now();

        let mut attempt: u32 = 0;
        let mut correlation_id: Option<String> = None;
        let mut last_response: Option<Response> = None;

        loop {
            if attempt > 0 {
                // Pre-attempt restoration: headers/query go back to their
                // original state before each retry.
                request.headers = original_headers.clone();
                request.query = original_query.clone();
                if correlation_id.is_none()
                    && let Some(resp) = &last_response
                    && let Some(id) = resp.request_id()
                {
                    correlation_id = Some(id.to_string());
                }

                // Pre-attempt pause.
                let upcoming = attempt + 1;
                match self.compute_delay(upcoming, timer.elapsed(), last_response.as_ref()) {
                    Some(delay) => {
                        if cancel.is_cancelled() {
                            return Err(TransportError::Cancelled);
                        }
                        tokio::select! {
                            _ = tokio::time::sleep(delay) => {}
                            _ = cancel.cancelled() => {
                                return Err(TransportError::Cancelled);
                            }
                        }
                    }
                    None => {
                        return match last_response {
                            Some(resp) => Ok(resp),
                            None => Err(TransportError::BudgetExhausted(
                                "next request would exceed the configured retry budget".into(),
                            )),
                        };
                    }
                }
            }

            // Correlation headers injection.
            if let Some(id) = &correlation_id
                && !id.is_empty()
            {
                request.headers.insert(names::RETRY_FOR, id.clone());
            }
            let upcoming_attempt_number = attempt + 1;
            if upcoming_attempt_number >= 2 {
                request
                    .headers
                    .insert(names::RETRY_COUNT, upcoming_attempt_number.to_string());
            }

            attempt += 1;

            match self.inner.execute(&mut request).await {
                Ok(response) => {
                    if self.retryable_response(&response)
                        && self.retry_permitted(attempt, timer.elapsed())
                    {
                        last_response = Some(response);
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    if self.retryable_error(&err) && self.retry_permitted(attempt, timer.elapsed())
                    {
                        last_response = None;
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }

    /// A response is retryable iff its status is 429, 503, or 504.
    fn retryable_response(&self, response: &Response) -> bool {
        matches!(response.status, 429 | 503 | 504)
    }

    fn retryable_error(&self, err: &TransportError) -> bool {
        match err {
            TransportError::Network(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Budget check: a retry is permitted when at least one cap is
    /// enabled, the attempt cap (if enabled) is not yet exceeded
    /// (`attempt <= max_attempts`), and the elapsed cap (if enabled) has
    /// not yet been reached (`elapsed < max_elapsed`). The comparisons are
    /// intentionally asymmetric (`<=` on attempts, `<` on elapsed).
    fn retry_permitted(&self, attempt: u32, elapsed: Duration) -> bool {
        if !self.config.attempts_enabled() && !self.config.elapsed_enabled() {
            return false;
        }
        let attempts_ok =
            !self.config.attempts_enabled() || i64::from(attempt) <= self.config.max_attempts;
        let elapsed_ok = match self.config.max_elapsed {
            Some(max) => elapsed < max,
            None => true,
        };
        attempts_ok && elapsed_ok
    }

    /// Computes the pre-attempt pause: a configured backoff schedule takes
    /// priority, then a 429 `Retry-After`-style reset header, then the
    /// default schedule. Whichever schedule produces the delay, the same
    /// forward-looking check applies: if pausing would push total elapsed
    /// time past the configured budget, the pause (and the attempt after
    /// it) is denied outright rather than shortened to fit. A clamped,
    /// truncated pause would still burn an attempt the budget was meant to
    /// deny.
    fn compute_delay(
        &self,
        upcoming_attempt: u32,
        elapsed: Duration,
        last_response: Option<&Response>,
    ) -> Option<Duration> {
        let delay = if let Some(strategy) = &self.config.backoff {
            strategy.delay(upcoming_attempt)
        } else if let Some(resp) = last_response
            && resp.status == 429
            && let Some(ms) = parse_429_delay(resp)
            && ms >= 0
        {
            Duration::from_millis(ms as u64)
        } else {
            // A negative computed delay (server clock ahead of ours) or an
            // unparseable reset/date header falls through to the default
            // schedule here instead of aborting.
            DefaultBackoff.delay(upcoming_attempt)
        };

        if let Some(max) = self.config.max_elapsed
            && elapsed + delay >= max
        {
            return None;
        }
        Some(delay)
    }
}

#[async_trait]
impl<E: Executor> Executor for RetryExecutor<E> {
    async fn execute(&self, request: &mut Request) -> Result<Response, TransportError> {
        RetryExecutor::execute(self, request.clone()).await
    }
}

/// Computes the 429 reset delay. Returns `None` when the reset/date headers
/// are missing or unparseable (the caller falls back to the default
/// schedule), otherwise the computed delay in milliseconds (which may be
/// negative).
fn parse_429_delay(response: &Response) -> Option<i64> {
    let reset = response.headers.get(names::RATE_LIMIT_RESET)?;
    if reset.is_empty() || !reset.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let reset_epoch_s: i64 = reset.parse().ok()?;
    let date_str = response.headers.date()?;
    let server_date_ms = parse_http_date(date_str)?;
    Some(reset_epoch_s * 1000 - server_date_ms + 1000)
}
