use content_service::config::ContentConfig;
use content_service::services::init_metrics;
use content_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("content-service", &log_level, otlp_endpoint.as_deref());

    // Initialize metrics recorder (must be before any metrics are recorded)
    if let Err(e) = init_metrics() {
        tracing::error!("Failed to install Prometheus recorder: {}", e);
    }

    let config = ContentConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Server running on http://localhost:{}", app.port());

    app.run_until_stopped().await
}
