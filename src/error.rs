//! Unified error type.

use std::fmt;

use http::StatusCode;

/// The error type returned by saba's fallible operations.
///
/// Responder-side failures are infrastructure only: binding the listener or
/// accepting a connection. Per-request outcomes (404 and friends) are
/// expressed as HTTP [`Response`](crate::Response) values, never as `Error`s.
/// Fetcher-side failures cover the whole single attempt: transport, decode,
/// and an upstream non-success status.
#[derive(Debug)]
pub enum Error {
    /// The listening socket could not be bound, or an accept failed.
    Io(std::io::Error),
    /// The outbound request failed before a usable body arrived (connect,
    /// DNS, TLS, or JSON decode).
    Fetch(reqwest::Error),
    /// The upstream service answered, but not with a success status.
    Status(StatusCode),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Fetch(e) => write!(f, "fetch: {e}"),
            Self::Status(code) => write!(f, "unexpected upstream status: {code}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Fetch(e)
    }
}
