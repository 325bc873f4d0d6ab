//! HTTP server for the gate.
//!
//! Wires the classifier into an axum router: the root route serves the
//! landing page, the configured mobile path runs the gate handler.  All
//! per-request state lives in `AppState`; the classifier itself is
//! immutable and shared.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::classifier::UaClassifier;
use crate::config::GateConfig;
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    pub classifier: Arc<UaClassifier>,
}

/// HTTP server serving the landing page and the gated mobile page.
pub struct GateServer {
    router: Router,
}

impl GateServer {
    /// Build the server from a validated configuration and a classifier.
    pub fn new(config: &GateConfig, classifier: Arc<UaClassifier>) -> Self {
        let state = AppState { classifier };
        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GateConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route(&config.gate.mobile_path, get(handlers::mobile_page))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Router handle, for in-process testing without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
