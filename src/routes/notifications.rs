use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::messages::DEFAULT_BROADCAST_SUBJECT;
use crate::models::{BroadcastResponse, EmailDonorsRequest, ErrorResponse, NotifyDonorsRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/notify-donors", web::post().to(notify_donors))
        .route("/email-donors", web::post().to(email_donors));
}

/// Bulk SMS to donors of a blood group
///
/// POST /api/notify-donors
async fn notify_donors(
    state: web::Data<AppState>,
    req: web::Json<NotifyDonorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .orchestrator
        .broadcast_sms(&req.blood_group, &req.message)
        .await
    {
        Ok(summary) => HttpResponse::Ok().json(BroadcastResponse {
            message: "SMS sent to donors".to_string(),
            sent: summary.sent,
            failed: summary.failed,
            skipped: summary.skipped,
        }),
        Err(e) => {
            tracing::error!("SMS broadcast failed for group {}: {}", req.blood_group, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to send SMS".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Bulk email to donors of a blood group
///
/// POST /api/email-donors
async fn email_donors(
    state: web::Data<AppState>,
    req: web::Json<EmailDonorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let subject = req.subject.as_deref().unwrap_or(DEFAULT_BROADCAST_SUBJECT);

    match state
        .orchestrator
        .broadcast_email(&req.blood_group, subject, &req.message)
        .await
    {
        Ok(summary) => HttpResponse::Ok().json(BroadcastResponse {
            message: "Emails sent to donors".to_string(),
            sent: summary.sent,
            failed: summary.failed,
            skipped: summary.skipped,
        }),
        Err(e) => {
            tracing::error!(
                "Email broadcast failed for group {}: {}",
                req.blood_group,
                e
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to send emails".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
