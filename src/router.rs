//! Path-keyed request router.
//!
//! One radix tree, no method dimension: every response in this crate is a
//! pure function of the request path, so `POST /` and `GET /` land on the
//! same handler. Unmatched paths fall through to the fallback, which
//! defaults to the stock `404 Not Found` answer.

use std::sync::Arc;

use http::StatusCode;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::route`] call returns `self` so registrations chain.
pub struct Router {
    routes: MatchitRouter<BoxedHandler>,
    fallback: BoxedHandler,
}

impl Router {
    /// An empty router. Until routes are added, every path gets the 404
    /// fallback.
    pub fn new() -> Self {
        Self {
            routes: MatchitRouter::new(),
            fallback: not_found.into_boxed_handler(),
        }
    }

    /// Registers a handler for a path. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics on an invalid or duplicate path pattern; routes are
    /// registered at startup, so this is a programmer error.
    pub fn route(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Replaces the handler used when no route matches.
    pub fn fallback(mut self, handler: impl Handler) -> Self {
        self.fallback = handler.into_boxed_handler();
        self
    }

    /// Resolves a path to its handler. Always yields one: a miss is the
    /// fallback, never an error.
    pub(crate) fn lookup(&self, path: &str) -> BoxedHandler {
        match self.routes.at(path) {
            Ok(matched) => Arc::clone(matched.value),
            Err(_) => Arc::clone(&self.fallback),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock fallback: `404`, body `Not Found`, default content type.
async fn not_found(_req: Request) -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .text("Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErasedHandler as _;

    fn request(path: &str) -> Request {
        let (parts, ()) = http::Request::builder()
            .uri(path)
            .body(())
            .unwrap()
            .into_parts();
        Request::new(parts)
    }

    async fn hello(_req: Request) -> Response {
        Response::text("hi")
    }

    #[tokio::test]
    async fn registered_paths_resolve_to_their_handler() {
        let router = Router::new().route("/", hello);
        let response = router.lookup("/").call(request("/")).await.into_http();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unregistered_paths_resolve_to_the_404_fallback() {
        let router = Router::new().route("/", hello);
        for path in ["/nope", "/json/extra", "/favicon.ico"] {
            let response = router.lookup(path).call(request(path)).await.into_http();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
        }
    }

    #[tokio::test]
    async fn a_bare_router_answers_everything_with_404() {
        let router = Router::new();
        let response = router.lookup("/").call(request("/")).await.into_http();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn fallback_can_be_replaced() {
        async fn teapot(_req: Request) -> StatusCode {
            StatusCode::IM_A_TEAPOT
        }

        let router = Router::new().fallback(teapot);
        let response = router.lookup("/anything").call(request("/anything")).await.into_http();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_routes_panic_at_registration() {
        let _ = Router::new().route("/", hello).route("/", hello);
    }
}
