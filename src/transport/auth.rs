use crate::Request;
use async_trait::async_trait;

/// Applies credentials to an outgoing request. A trait seam: actual
/// credential resolution and signing schemes live above this crate.
#[async_trait]
pub trait RequestAuthenticator: Send + Sync {
    async fn authenticate(&self, request: &mut Request);
}

/// Adds no credentials at all.
pub struct NoAuth;

#[async_trait]
impl RequestAuthenticator for NoAuth {
    async fn authenticate(&self, _request: &mut Request) {}
}

/// A static bearer token added to every request's `Authorization` header.
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl RequestAuthenticator for BearerToken {
    async fn authenticate(&self, request: &mut Request) {
        request
            .headers
            .insert("authorization", format!("Bearer {}", self.0));
    }
}
