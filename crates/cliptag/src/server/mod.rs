//! HTTP layer powered by Axum.

mod error;
mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use cliptag_core::Classifier;
use tokio::net::TcpListener;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

/// Build the API router.
///
/// `max_body_bytes` replaces axum's 2 MB default, which full-size base64
/// photos exceed.
pub fn router(classifier: Arc<Classifier>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/classify", post(handlers::classify))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(AppState { classifier })
}

/// Serve until Ctrl-C.
pub async fn run(
    listener: TcpListener,
    classifier: Arc<Classifier>,
    max_body_bytes: usize,
) -> std::io::Result<()> {
    serve_until(listener, classifier, max_body_bytes, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_until<F>(
    listener: TcpListener,
    classifier: Arc<Classifier>,
    max_body_bytes: usize,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(classifier, max_body_bytes))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliptag_core::config::ServerConfig;
    use cliptag_core::{ClassifyResponse, MockScorer, StatusMessage, TagCatalog, TagEntry};
    use std::collections::HashSet;
    use std::net::SocketAddr;
    use tokio::sync::oneshot;

    struct TestServer {
        addr: SocketAddr,
        stop: Option<oneshot::Sender<()>>,
    }

    impl TestServer {
        async fn start() -> Self {
            Self::start_with_body_limit(ServerConfig::default().max_body_bytes).await
        }

        async fn start_with_body_limit(max_body_bytes: usize) -> Self {
            let catalog = TagCatalog::from_entries(vec![
                TagEntry::new("cat", "猫"),
                TagEntry::new("dog", "犬"),
                TagEntry::new("bird", "鳥"),
            ])
            .unwrap();
            let classifier = Arc::new(Classifier::new(
                Arc::new(catalog),
                Box::new(MockScorer::new(0.3..0.9)),
                3,
            ));

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let (tx, rx) = oneshot::channel::<()>();
            tokio::spawn(serve_until(listener, classifier, max_body_bytes, async {
                let _ = rx.await;
            }));

            Self {
                addr,
                stop: Some(tx),
            }
        }

        fn url(&self, path: &str) -> String {
            format!("http://{}{}", self.addr, path)
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            if let Some(tx) = self.stop.take() {
                let _ = tx.send(());
            }
        }
    }

    async fn assert_root_message(client: &reqwest::Client, server: &TestServer) {
        let resp = client.get(server.url("/")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: StatusMessage = resp.json().await.unwrap();
        assert_eq!(body.message, "CLIP Demo Server is running");
    }

    #[tokio::test]
    async fn test_root_returns_status_message() {
        let server = TestServer::start().await;
        let client = reqwest::Client::new();

        assert_root_message(&client, &server).await;

        let resp = client
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "", "top_k": 1 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_root_message(&client, &server).await;

        let resp = client
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "", "top_k": 99 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        assert_root_message(&client, &server).await;
    }

    #[tokio::test]
    async fn test_classify_accepts_multi_megabyte_image() {
        let server = TestServer::start().await;
        let image_b64 = "A".repeat(3 * 1024 * 1024);

        let resp = reqwest::Client::new()
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": image_b64, "top_k": 2 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: ClassifyResponse = resp.json().await.unwrap();
        assert_eq!(body.top_k.len(), 2);
    }

    #[tokio::test]
    async fn test_classify_rejects_body_over_limit() {
        let server = TestServer::start_with_body_limit(1024).await;
        let image_b64 = "A".repeat(4096);

        let resp = reqwest::Client::new()
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": image_b64 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_classify_returns_sorted_localized_tags() {
        let server = TestServer::start().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "aGVsbG8=", "top_k": 2 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body: ClassifyResponse = resp.json().await.unwrap();
        assert_eq!(body.top_k.len(), 2);
        let tags: HashSet<&str> = body.top_k.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags.len(), 2);
        for item in &body.top_k {
            let expected = match item.tag.as_str() {
                "cat" => "猫",
                "dog" => "犬",
                "bird" => "鳥",
                other => panic!("unexpected tag {other}"),
            };
            assert_eq!(item.tag_ja, expected);
            assert!(item.score >= 0.3 && item.score < 0.9);
        }
        assert!(body.top_k[0].score >= body.top_k[1].score);
    }

    #[tokio::test]
    async fn test_classify_defaults_to_three() {
        let server = TestServer::start().await;
        let body: ClassifyResponse = reqwest::Client::new()
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body.top_k.len(), 3);
    }

    #[tokio::test]
    async fn test_classify_rejects_oversized_top_k() {
        let server = TestServer::start().await;
        let resp = reqwest::Client::new()
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "", "top_k": 4 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["detail"].as_str().unwrap().contains("top_k"));
    }

    #[tokio::test]
    async fn test_classify_rejects_missing_image() {
        let server = TestServer::start().await;
        let resp = reqwest::Client::new()
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "top_k": 1 }))
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_server_survives_rejected_requests() {
        let server = TestServer::start().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "", "top_k": 100 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

        let resp = client
            .post(server.url("/classify"))
            .json(&serde_json::json!({ "image_b64": "", "top_k": 1 }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
    }
}
