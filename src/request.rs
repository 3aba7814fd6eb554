use crate::{Headers, QueryString};
use bytes::Bytes;

/// An HTTP request body.
///
/// `Bytes` is the rewindable case: it is cheap to clone before each attempt
/// since [`bytes::Bytes`] is refcounted, so every body-bearing request in
/// this crate is, in practice, rewindable. `OneShot` models a body that can
/// only be sent once: once `take()` has consumed it, a later attempt sees
/// `None` and is simply sent without a body.
#[derive(Debug, Clone)]
pub enum Body {
    Bytes(Bytes),
    OneShot(Option<Bytes>),
}

impl Body {
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Body::Bytes(bytes.into())
    }

    pub fn one_shot(bytes: impl Into<Bytes>) -> Self {
        Body::OneShot(Some(bytes.into()))
    }

    /// Returns the bytes to send for the *next* attempt, consuming a
    /// `OneShot` body in the process.
    pub fn take(&mut self) -> Option<Bytes> {
        match self {
            Body::Bytes(b) => Some(b.clone()),
            Body::OneShot(slot) => slot.take(),
        }
    }

    pub fn is_rewindable(&self) -> bool {
        matches!(self, Body::Bytes(_))
    }
}

/// A mutable abstract HTTP request.
///
/// Mutated in place by the executors (header/query restoration,
/// authentication, retry-correlation headers) and discarded once
/// `RetryExecutor::execute` returns.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: http::Method,
    pub uri: String,
    pub query: QueryString,
    pub headers: Headers,
    pub body: Option<Body>,
}

impl Request {
    pub fn new(method: http::Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            query: QueryString::new(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(http::Method::GET, uri)
    }

    pub fn post(uri: impl Into<String>) -> Self {
        Self::new(http::Method::POST, uri)
    }

    pub fn with_query(mut self, query: QueryString) -> Self {
        self.query = query;
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}
