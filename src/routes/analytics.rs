use actix_web::{web, HttpResponse, Responder};

use crate::core::{count_by, RequestGroupField};
use crate::models::{AnalyticsResponse, ErrorResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analytics", web::get().to(analytics));
}

/// Grouped counts over donors and requests
///
/// GET /api/analytics
///
/// Recomputed from the current store snapshot on every call.
async fn analytics(state: web::Data<AppState>) -> impl Responder {
    let donors = match state.donors.find_all().await {
        Ok(donors) => donors,
        Err(e) => {
            tracing::error!("Failed to fetch donors for analytics: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to compute analytics".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let total_donors = count_by(&donors, |d| d.blood_group.as_str());

    let active_requests = match state
        .requests
        .count_grouped_by(RequestGroupField::Priority)
        .await
    {
        Ok(groups) => groups,
        Err(e) => {
            tracing::error!("Failed to group requests by priority: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to compute analytics".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let requests_by_location = match state
        .requests
        .count_grouped_by(RequestGroupField::Location)
        .await
    {
        Ok(groups) => groups,
        Err(e) => {
            tracing::error!("Failed to group requests by location: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to compute analytics".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    HttpResponse::Ok().json(AnalyticsResponse {
        total_donors,
        active_requests,
        requests_by_location,
    })
}
