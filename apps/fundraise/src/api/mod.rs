//! # HTTP API
//!
//! axum router and server for the fundraising portal.
//!
//! ## Endpoints
//! - GET  /api/health
//! - POST /api/auth/login
//! - GET  /api/user/{id}
//! - GET  /api/leaderboard
//! - GET  /api/leaderboard/summary
//! - GET  /api/rewards/{user_id}
//! - GET  /api/rewards/{user_id}/summary
//! - GET  /api/rewards/{user_id}/progress/{tier_id}
//! - GET  /api/stats/{user_id}

pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use fundraise_core::{FundraisingService, InMemoryProvider};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AppConfig;

pub use error::{ApiError, ApiResult};

/// The service type served by the API.
pub type Service = FundraisingService<InMemoryProvider>;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
}

impl AppState {
    pub fn new(service: Service) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Create the API router without middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/user/{id}", get(handlers::get_user))
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route(
            "/api/leaderboard/summary",
            get(handlers::get_leaderboard_summary),
        )
        .route("/api/rewards/{user_id}", get(handlers::get_rewards))
        .route(
            "/api/rewards/{user_id}/summary",
            get(handlers::get_reward_summary),
        )
        .route(
            "/api/rewards/{user_id}/progress/{tier_id}",
            get(handlers::get_tier_progress),
        )
        .route("/api/stats/{user_id}", get(handlers::get_stats))
        .with_state(state)
}

/// Build the CORS layer. No configured origins means any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}

/// Router with tracing and CORS middleware.
pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.cors_origins)),
    )
}

/// Run the API server until Ctrl+C or SIGTERM.
pub async fn run_server(
    config: AppConfig,
    service: Service,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = config.socket_addr()?;
    info!(
        monthly_goal = service.monthly_goal(),
        users = service.leaderboard_summary().participants,
        "Serving demo data set"
    );
    let app = create_app(AppState::new(service), &config);

    let listener = TcpListener::bind(addr).await?;
    info!("Fundraise API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
