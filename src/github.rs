//! GitHub user lookup.
//!
//! A single best-effort GET against the users API. One attempt: no retries,
//! no timeout override, no rate-limit handling. The record comes back as
//! untyped JSON, since its shape belongs to GitHub rather than to this
//! crate, and every failure is returned to the caller, who decides how to
//! surface it.

use serde_json::Value;
use tracing::debug;

use crate::error::Error;

/// Base URL of the production API.
pub const GITHUB_API: &str = "https://api.github.com";

/// Client for the `/users/{login}` endpoint.
pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    /// A client pointed at [`GITHUB_API`].
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API)
    }

    /// A client pointed at an arbitrary base URL. Tests use this to swap in
    /// a local stub endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialised.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { http, base_url: base_url.into() }
    }

    /// Fetches one user record and returns the decoded body unmodified.
    ///
    /// A transport or decode failure maps to [`Error::Fetch`]; a response
    /// with a non-success status maps to [`Error::Status`].
    pub async fn fetch_user(&self, login: &str) -> Result<Value, Error> {
        let url = format!("{}/users/{login}", self.base_url);
        debug!(%url, "fetching user");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        Ok(response.json().await?)
    }
}

impl Default for UserClient {
    fn default() -> Self {
        Self::new()
    }
}
