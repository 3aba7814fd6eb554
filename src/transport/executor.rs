use crate::error::{NetworkError, TransportError};
use crate::executor::Executor;
use crate::transport::auth::{NoAuth, RequestAuthenticator};
use crate::transport::config::TransportConfig;
use crate::{Headers, Request, Response};
use async_trait::async_trait;
use flate2::read::GzDecoder;
use std::io::Read;
use std::sync::Arc;

/// Sends a single request attempt over a pooled `reqwest::Client`.
///
/// This is the concrete collaborator `RetryExecutor` wraps: it carries no
/// retry logic of its own, only authentication, wire-format translation,
/// and response normalization.
pub struct TransportExecutor {
    client: reqwest::Client,
    authenticator: Arc<dyn RequestAuthenticator>,
    read_timeout: std::time::Duration,
}

impl TransportExecutor {
    pub fn new(config: TransportConfig) -> Self {
        Self::with_authenticator(config, Arc::new(NoAuth))
    }

    pub fn with_authenticator(
        config: TransportConfig,
        authenticator: Arc<dyn RequestAuthenticator>,
    ) -> Self {
        let client = Self::build_reqwest_client(&config);
        Self {
            client,
            authenticator,
            read_timeout: config.read_timeout,
        }
    }

    /// Builds the shared `reqwest::Client`. Redirects are disabled here so
    /// they surface to the retry layer as plain 3xx responses rather than
    /// being followed transparently.
    fn build_reqwest_client(config: &TransportConfig) -> reqwest::Client {
        let mut builder = reqwest::ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_per_route as usize)
            .redirect(reqwest::redirect::Policy::none());

        if let Some(proxy_config) = &config.proxy
            && let Ok(mut wire_proxy) = reqwest::Proxy::all(&proxy_config.url)
        {
            if let Some((user, pass)) = &proxy_config.basic_auth {
                wire_proxy = wire_proxy.basic_auth(user, pass);
            }
            builder = builder.proxy(wire_proxy);
        }

        builder.build().unwrap_or_else(|_| reqwest::Client::new())
    }

    fn build_wire_request(
        &self,
        request: &mut Request,
    ) -> Result<reqwest::Request, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.uri)
            .timeout(self.read_timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query.iter().collect::<Vec<_>>());
        }

        for (name, value) in request.headers.inner().iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body.as_mut().and_then(|b| b.take()) {
            builder = builder.body(body);
        }

        builder
            .build()
            .map_err(|e| TransportError::other_with_source("failed to build request", e))
    }

    async fn normalize_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Response, TransportError> {
        let status = response.status().as_u16();
        let headers: Headers = response.headers().clone().into();
        let content_length = response.content_length();

        let raw = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(NetworkError::from(e)))?;

        let body = if headers
            .content_encoding()
            .map(|v| v.to_ascii_lowercase().contains("gzip"))
            .unwrap_or(false)
        {
            decode_gzip(&raw)?
        } else {
            raw
        };

        Ok(Response {
            status,
            headers,
            body,
            content_length,
        })
    }
}

fn decode_gzip(raw: &[u8]) -> Result<bytes::Bytes, TransportError> {
    let mut decoder = GzDecoder::new(raw);
    let mut decoded = Vec::new();
    decoder
        .read_to_end(&mut decoded)
        .map_err(|e| TransportError::other_with_source("gzip decode failed", e))?;
    Ok(bytes::Bytes::from(decoded))
}

#[async_trait]
impl Executor for TransportExecutor {
    async fn execute(&self, request: &mut Request) -> Result<Response, TransportError> {
        self.authenticator.authenticate(request).await;
        let wire_request = self.build_wire_request(request)?;

        tracing::debug!(method = %request.method, uri = %request.uri, "sending request");

        let response = self
            .client
            .execute(wire_request)
            .await
            .map_err(|e| TransportError::Network(NetworkError::from(e)))?;

        self.normalize_response(response).await
    }
}

// Integration-style tests against a real listener live in
// `tests/transport_executor.rs`.
