//! Case-insensitive, multi-valued HTTP header map with typed accessors for
//! the handful of headers the retry and transport layers care about.

use http::{HeaderMap, HeaderName, HeaderValue};
use std::str::FromStr;

/// Well-known header names this crate reads or writes.
pub mod names {
    pub const DATE: &str = "date";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const CONTENT_ENCODING: &str = "content-encoding";
    pub const LINK: &str = "link";
    pub const REQUEST_ID: &str = "x-okta-request-id";
    pub const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";
    pub const RETRY_FOR: &str = "x-okta-retry-for";
    pub const RETRY_COUNT: &str = "x-okta-retry-count";
}

/// A case-insensitive, multi-valued header map.
///
/// Wraps [`http::HeaderMap`], which is already case-insensitive and
/// multi-valued; this type adds typed accessors for the headers the retry
/// and transport layers care about, and clones cheaply for the snapshot on
/// each retry attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(HeaderMap);

impl Headers {
    pub fn new() -> Self {
        Self(HeaderMap::new())
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_str(name),
            HeaderValue::from_str(&value.into()),
        ) {
            self.0.insert(name, value);
        }
    }

    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_str(name),
            HeaderValue::from_str(&value.into()),
        ) {
            self.0.append(name, value);
        }
    }

    pub fn remove(&mut self, name: &str) {
        if let Ok(name) = HeaderName::from_str(name) {
            self.0.remove(name);
        }
    }

    /// First value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.to_str().ok())
    }

    /// All values for `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    pub fn inner(&self) -> &HeaderMap {
        &self.0
    }

    pub fn inner_mut(&mut self) -> &mut HeaderMap {
        &mut self.0
    }

    /// `Date` header, verbatim (parsing is the caller's job — see
    /// `retry::backoff::parse_http_date`).
    pub fn date(&self) -> Option<&str> {
        self.get(names::DATE)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.get(names::CONTENT_TYPE)
    }

    /// All `Link` header values concatenated into one logical,
    /// comma-joined list.
    pub fn link(&self) -> Option<String> {
        let values = self.get_all(names::LINK);
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.get(names::REQUEST_ID)
    }

    pub fn content_encoding(&self) -> Option<&str> {
        self.get(names::CONTENT_ENCODING)
    }
}

impl From<HeaderMap> for Headers {
    fn from(map: HeaderMap) -> Self {
        Self(map)
    }
}
