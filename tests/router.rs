//! In-process tests against the fully layered router.

use address_book::config::ServiceConfig;
use address_book::http::HttpServer;
use address_book::store::SharedAddressBook;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::json;
use tower::ServiceExt;

fn counted(rendered: &str, route: &str, status: u16) -> bool {
    rendered.lines().any(|line| {
        line.starts_with("address_book_requests_total")
            && line.contains(&format!("route=\"{}\"", route))
            && line.contains(&format!("status=\"{}\"", status))
    })
}

#[test]
fn test_requests_rejected_before_handlers_are_counted() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    let mut config = ServiceConfig::default();
    config.limits.max_body_bytes = 16;
    let book = SharedAddressBook::default();
    let app = HttpServer::new(config, book.clone()).router();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    metrics::with_local_recorder(&recorder, || {
        runtime.block_on(async {
            let res = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/contacts")
                        .header("content-type", "application/json")
                        .body(Body::from(json!({ "name": "x".repeat(64) }).to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

            let res = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/contacts/person/7")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND);

            let res = app
                .clone()
                .oneshot(Request::builder().uri("/people").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
        })
    });

    assert!(book.is_empty());

    let rendered = handle.render();
    assert!(counted(&rendered, "/contacts", 413), "{}", rendered);
    assert!(counted(&rendered, "/contacts/person/{id}", 404), "{}", rendered);
    assert!(counted(&rendered, "unmatched", 404), "{}", rendered);
}

#[tokio::test]
async fn test_router_serves_in_process() {
    let app = HttpServer::new(ServiceConfig::default(), SharedAddressBook::default()).router();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contacts")
                .header("host", "localhost:8282")
                .body(Body::from(r#"{"name":"Juan"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()["location"], "http://localhost:8282/contacts/person/1");
    assert!(res.headers().contains_key("x-request-id"));

    let res = app
        .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let book: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(book["personList"][0]["name"], "Juan");
}
