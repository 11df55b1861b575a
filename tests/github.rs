//! Fetcher tests against a local stub endpoint.
//!
//! The stub is the crate's own server with a canned `/users/octocat` record;
//! everything else falls through to its 404, which doubles as the
//! user-not-found case.

use std::net::{Ipv4Addr, SocketAddr};

use http::StatusCode;
use saba::{Error, Request, Response, Router, Server, UserClient};

async fn octocat(_req: Request) -> Response {
    Response::json(br#"{"login":"octocat","id":583231,"type":"User"}"#.to_vec())
}

async fn spawn_stub() -> String {
    let server = Server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("bind");
    let addr = server.local_addr();
    let stub = Router::new().route("/users/octocat", octocat);
    tokio::spawn(server.serve(stub));
    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_user_decodes_the_record() {
    let base = spawn_stub().await;

    let user = UserClient::with_base_url(base)
        .fetch_user("octocat")
        .await
        .unwrap();

    assert_eq!(user["login"], "octocat");
    assert_eq!(user["id"], 583231);
}

#[tokio::test]
async fn missing_user_surfaces_the_status() {
    let base = spawn_stub().await;

    let err = UserClient::with_base_url(base)
        .fetch_user("ghost")
        .await
        .unwrap_err();

    match err {
        Error::Status(status) => assert_eq!(status, StatusCode::NOT_FOUND),
        other => panic!("expected a status error, got: {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_a_fetch_error() {
    // Bind then drop, leaving a port that refuses connections.
    let server = Server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("bind");
    let addr = server.local_addr();
    drop(server);

    let err = UserClient::with_base_url(format!("http://{addr}"))
        .fetch_user("octocat")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Fetch(_)), "got: {err}");
}
