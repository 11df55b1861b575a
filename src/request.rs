//! Incoming HTTP request view.

use http::request::Parts;

/// An incoming HTTP request as seen by a handler.
///
/// Only the envelope is exposed. The body is never read: every response in
/// this crate is a pure function of the request path, so the stream stays
/// untouched.
pub struct Request {
    parts: Parts,
}

impl Request {
    pub(crate) fn new(parts: Parts) -> Self {
        Self { parts }
    }

    pub fn method(&self) -> &http::Method {
        &self.parts.method
    }

    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    /// Case-insensitive header lookup. Returns `None` for absent headers and
    /// for values that are not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
