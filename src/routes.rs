//! The responder's fixed route table.
//!
//! Three behaviors, keyed by path alone:
//!
//! | Path | Status | Body |
//! |---|---|---|
//! | `/` | 200 | `Hello World!` |
//! | `/json` | 200 | `{"hello":"world"}` |
//! | anything else | 404 | `Not Found` |

use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Builds the route table. The 404 behavior is the router's stock fallback.
pub fn app() -> Router {
    Router::new()
        .route("/", index)
        .route("/json", hello_json)
}

/// `GET /` (or any other method; the path is all that matters).
async fn index(_req: Request) -> Response {
    Response::text("Hello World!")
}

/// `/json`: a fixed document as hand-built bytes, no serialiser on the hot path.
async fn hello_json(_req: Request) -> Response {
    Response::json(br#"{"hello":"world"}"#.to_vec())
}
