use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, MessageResponse, RegisterDonorRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/donor-register", web::post().to(register_donor))
        .route("/eligible-donors", web::get().to(eligible_donors));
}

/// Register a donor
///
/// POST /donor-register
async fn register_donor(
    state: web::Data<AppState>,
    req: web::Json<RegisterDonorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for donor registration: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let donor = req.into_inner().into_donor();

    match state.donors.insert(&donor).await {
        Ok(()) => {
            tracing::info!("Registered donor {} (group {})", donor.id, donor.blood_group);
            HttpResponse::Ok().json(MessageResponse {
                message: "Donor registered successfully".to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to register donor: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register donor".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all currently eligible donors
///
/// GET /eligible-donors
async fn eligible_donors(state: web::Data<AppState>) -> impl Responder {
    match state.orchestrator.eligible_donors().await {
        Ok(donors) => HttpResponse::Ok().json(donors),
        Err(e) => {
            tracing::error!("Failed to fetch eligible donors: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch eligible donors".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
