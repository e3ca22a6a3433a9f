//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the contacts routing table
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Bind server to listener
//! - Stop gracefully when the shutdown signal fires

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::contacts::{self, openapi};
use crate::http::request::{request_id_of, UuidRequestId};
use crate::observability::metrics;
use crate::store::SharedAddressBook;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one address book shared by every request.
    pub book: SharedAddressBook,
    /// Overrides scheme and authority of generated hrefs.
    pub public_base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(book: SharedAddressBook, config: &ServiceConfig) -> Self {
        Self {
            book,
            public_base_url: config.listener.public_base_url.as_deref().map(Arc::from),
        }
    }
}

/// HTTP server for the address book.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `book`.
    pub fn new(config: ServiceConfig, book: SharedAddressBook) -> Self {
        let state = AppState::new(book, &config);
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = request_id_of(request).unwrap_or("unknown"),
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        Router::new()
            .merge(contacts::router())
            .route("/openapi.json", get(openapi::openapi_document))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(layers)
            .with_state(state)
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
