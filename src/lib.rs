//! # saba
//!
//! Two small HTTP pieces that share one toolbox. Nothing more. Nothing less.
//!
//! ## The responder
//!
//! Three fixed behaviors, selected by path alone; the method is never
//! consulted:
//!
//! | Path | Status | Body |
//! |---|---|---|
//! | `/` | 200 | `Hello World!` |
//! | `/json` | 200 | `{"hello":"world"}` |
//! | anything else | 404 | `Not Found` |
//!
//! The listening port comes from the `PORT` environment variable, read once
//! at startup into a [`Config`]. Unset means 3001.
//!
//! ```rust,no_run
//! use saba::{Config, Server, routes};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env();
//!     let server = Server::bind(config.addr()).await.expect("failed to bind");
//!     server.serve(routes::app()).await.expect("server error");
//! }
//! ```
//!
//! ## The fetcher
//!
//! [`UserClient`] performs a single GET against the GitHub users API and
//! returns the decoded record. One attempt, no retries, no timeout override.
//! Failures come back as an [`Error`]; the caller decides how to surface
//! them.
//!
//! ```rust,no_run
//! use saba::UserClient;
//!
//! # async fn run() -> Result<(), saba::Error> {
//! let user = UserClient::new().fetch_user("octocat").await?;
//! println!("{}", user["login"]);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod github;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod routes;

pub use config::{Config, DEFAULT_PORT};
pub use error::Error;
pub use github::{GITHUB_API, UserClient};
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
