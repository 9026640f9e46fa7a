// Route exports
pub mod analytics;
pub mod donors;
pub mod notifications;
pub mod requests;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{DonorStore, MatchStore, RequestOrchestrator, RequestStore};
use crate::models::{HealthResponse, MessageResponse};
use crate::services::PostgresClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub donors: Arc<dyn DonorStore>,
    pub requests: Arc<dyn RequestStore>,
    pub matches: Arc<dyn MatchStore>,
    pub orchestrator: Arc<RequestOrchestrator>,
    pub postgres: Arc<PostgresClient>,
}

/// Configure all routes
///
/// Donor registration and the eligible-donor listing live at the root; the
/// rest of the surface sits under /api, matching the original deployment.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .configure(donors::configure)
        .service(
            web::scope("/api")
                .configure(requests::configure)
                .configure(notifications::configure)
                .configure(analytics::configure),
        );
}

/// Index banner
async fn index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "LifeLink Blood Donation Server is Active!".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
