//! Integration tests for the trailheads API over a real socket.
//!
//! Run with: cargo test --test integration


use std::net::SocketAddr;

use futures::future::join_all;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use trailheads_api::server;

/// A server running on an ephemeral localhost port.
struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<trailheads_api::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::run(listener, async move {
            stopped.await.ok();
        }));

        Self { addr, stop, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        self.stop.send(()).ok();
        self.handle.await.unwrap().unwrap();
    }
}

fn assert_json(response: &reqwest::Response) {
    let content_types: Vec<&str> = response
        .headers()
        .get_all(reqwest::header::CONTENT_TYPE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(content_types, vec!["application/json"]);
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_json(&response);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Welcome to the trailheads API");
    assert_eq!(body["trailheads"], "/trailheads");

    server.shutdown().await;
}

#[tokio::test]
async fn trailheads_returns_array() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/trailheads")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_json(&response);

    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 4);
    assert_eq!(body[0]["Name"], "Baxter's Gulch");
    assert!(body[0]["Longitude"].as_f64().unwrap() < 0.0);

    server.shutdown().await;
}

#[tokio::test]
async fn post_is_rejected() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client.post(server.url("/trailheads")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_json(&response);

    let response = client.get(server.url("/missing")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_json(&response);

    server.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_do_not_interfere() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let expected_root = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    let expected_trailheads = client
        .get(server.url("/trailheads"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();

    let requests = (0..64).map(|i| {
        let client = client.clone();
        let path = if i % 2 == 0 { "/" } else { "/trailheads" };
        let url = server.url(path);
        async move {
            let response = client.get(url).send().await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            (path, response.bytes().await.unwrap())
        }
    });

    for (path, body) in join_all(requests).await {
        let expected = if path == "/" {
            &expected_root
        } else {
            &expected_trailheads
        };
        assert_eq!(&body, expected, "unexpected body for {path}");
    }

    server.shutdown().await;
}
