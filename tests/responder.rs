//! Wire-level tests for the static responder.
//!
//! Each test binds a real listener on an ephemeral port and drives it with
//! an HTTP client, so the full hyper stack is exercised.

use std::net::{Ipv4Addr, SocketAddr};

use saba::{Server, routes};

async fn spawn_responder() -> SocketAddr {
    let server = Server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("bind");
    let addr = server.local_addr();
    tokio::spawn(server.serve(routes::app()));
    addr
}

#[tokio::test]
async fn root_serves_hello_world() {
    let addr = spawn_responder().await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Hello World!");
}

#[tokio::test]
async fn json_route_sets_content_type_and_body() {
    let addr = spawn_responder().await;

    let response = reqwest::get(format!("http://{addr}/json")).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"hello": "world"}));
}

#[tokio::test]
async fn unknown_paths_get_404_not_found() {
    let addr = spawn_responder().await;
    let client = reqwest::Client::new();

    for path in ["/nope", "/json/extra", "/favicon.ico", "/users/42"] {
        let response = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 404, "path {path}");
        assert_eq!(response.text().await.unwrap(), "Not Found", "path {path}");
    }
}

#[tokio::test]
async fn dispatch_ignores_the_method() {
    let addr = spawn_responder().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Hello World!");

    let response = client
        .delete(format!("http://{addr}/json"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
