use crate::Headers;
use bytes::Bytes;

/// An immutable-from-caller HTTP response.
///
/// The body is always fully buffered: by the time a `Response` exists, its
/// stream has already been read to completion and (if needed) gzip-decoded,
/// so it can be inspected more than once.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
    /// Pre-decode content length as reported by the transport, or `None`
    /// if unknown.
    pub content_length: Option<u64>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.content_type()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.headers.request_id()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
