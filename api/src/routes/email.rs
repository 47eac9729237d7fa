//! Generic email relay route

use actix_web::{web, HttpResponse};
use validator::Validate;

use wander_core::domain::EmailMessage;

use crate::dto::{SendEmailRequest, SendEmailResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/send-email
pub async fn send_email(
    state: web::Data<AppState>,
    request: web::Json<SendEmailRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let message = EmailMessage::from(request.into_inner());
    match state.reset_service.send_email(&message).await {
        Ok(message_id) => HttpResponse::Ok().json(SendEmailResponse {
            success: true,
            message_id,
        }),
        Err(e) => handle_domain_error(e),
    }
}
