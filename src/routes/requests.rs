use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreateBloodRequest, CreateRequestResponse, ErrorResponse, SmartMatchRequest,
    SmartMatchResponse,
};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/requests", web::post().to(create_request))
        .route("/requests", web::get().to(list_requests))
        .route("/smart-match", web::post().to(smart_match))
        .route("/match-history", web::get().to(match_history));
}

/// Create a blood request and notify eligible donors
///
/// POST /api/requests
async fn create_request(
    state: web::Data<AppState>,
    req: web::Json<CreateBloodRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for blood request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .orchestrator
        .handle_new_request(req.into_inner().into())
        .await
    {
        Ok(outcome) => {
            let notified_count = outcome.notified_count();
            HttpResponse::Ok().json(CreateRequestResponse {
                message: "Request created and notifications sent".to_string(),
                request: outcome.request,
                notified_count,
            })
        }
        Err(e) => {
            tracing::error!("Failed to create request: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create request".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all requests, newest first
///
/// GET /api/requests
async fn list_requests(state: web::Data<AppState>) -> impl Responder {
    match state.requests.find_all_sorted().await {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => {
            tracing::error!("Failed to fetch requests: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch requests".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Read-only eligible-donor match for a blood group
///
/// POST /api/smart-match
async fn smart_match(
    state: web::Data<AppState>,
    req: web::Json<SmartMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.orchestrator.smart_match(&req.blood_group).await {
        Ok(matches) => HttpResponse::Ok().json(SmartMatchResponse { matches }),
        Err(e) => {
            tracing::error!("Smart match failed for group {}: {}", req.blood_group, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Smart match failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Joined match history, newest first
///
/// GET /api/match-history
async fn match_history(state: web::Data<AppState>) -> impl Responder {
    match state.matches.find_history().await {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(e) => {
            tracing::error!("Failed to fetch match history: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch match history".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
