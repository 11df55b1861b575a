//! Static responder entry point.
//!
//! Binds the port from [`Config`] (the `PORT` environment variable, default
//! 3001) and serves the fixed route table until a shutdown signal arrives.
//! A bind failure is fatal: there is nothing to recover to.

use saba::{Config, Server, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let server = Server::bind(config.addr())
        .await
        .expect("failed to bind listener");

    server.serve(routes::app()).await.expect("server error");
}
