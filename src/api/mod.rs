pub mod handlers;

use crate::adapters::NumbersApiClient;
use crate::config::ServerConfig;
use crate::core::ClassificationService;
use crate::utils::error::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClassificationService>,
}

impl AppState {
    pub fn new(service: ClassificationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Wire the production fact provider from `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let provider = NumbersApiClient::from_config(config)?;
        Ok(Self::new(ClassificationService::new(
            Arc::new(provider),
            config.fact_timeout(),
        )))
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/classify-number", get(handlers::classify_number))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);
    tracing::info!(
        "Fact provider: {} (timeout {}ms)",
        config.fact_api_url,
        config.fact_timeout_ms
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
