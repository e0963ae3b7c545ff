//! Application startup and lifecycle management.

use crate::config::{ContentConfig, StoreBackend};
use crate::handlers;
use crate::services::{
    CompletionProvider, ContentStore, InMemoryContentStore, MongoDb, OpenAiConfig, OpenAiProvider,
};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state: long-lived clients created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub completion: Arc<dyn CompletionProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api/chat", post(handlers::chat))
        .merge(handlers::content_resource_routes())
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the store and completion clients from configuration and bind the
    /// listener.
    pub async fn build(config: ContentConfig) -> Result<Self, AppError> {
        let store: Arc<dyn ContentStore> = match config.store.backend {
            StoreBackend::MongoDb => {
                let uri = config.mongodb.uri.as_deref().ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!("MONGODB_URI is required but not set"))
                })?;
                Arc::new(MongoDb::connect(uri, &config.mongodb.database).await?)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory content store; data is lost on restart");
                Arc::new(InMemoryContentStore::new())
            }
        };

        let provider = OpenAiProvider::new(OpenAiConfig {
            api_key: config.openai.api_key.clone(),
            model: config.openai.model.clone(),
            base_url: config.openai.base_url.clone(),
            timeout: Duration::from_secs(config.openai.timeout_secs),
        })
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

        tracing::info!(model = %provider.model(), "Initialized OpenAI completion provider");

        let state = AppState {
            store,
            completion: Arc::new(provider),
        };

        // Report connectivity without holding up startup; `/` stays
        // reachable whatever the store's state.
        let store = state.store.clone();
        tokio::spawn(async move {
            match store.health_check().await {
                Ok(()) => tracing::info!("Content store connected"),
                Err(e) => tracing::error!("Content store connection error: {}", e),
            }
        });

        Self::build_with_state(config.common.port, state).await
    }

    /// Bind `port` (0 picks a free one) and serve the given state.
    pub async fn build_with_state(port: u16, state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
