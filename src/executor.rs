use crate::error::TransportError;
use crate::{Request, Response};
use async_trait::async_trait;

/// A single-attempt request executor.
///
/// Implemented by [`crate::transport::TransportExecutor`] (the real
/// collaborator) and by test doubles. [`crate::retry::RetryExecutor`] wraps
/// any `Executor` and is itself an `Executor`, so retry executors can be
/// layered if ever needed.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, request: &mut Request) -> Result<Response, TransportError>;
}
