use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/verify-otp
///
/// Every token or code failure answers `400 invalid_or_expired`, without
/// saying which check failed.
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .reset_service
        .verify_code(&request.otp_token, &request.code)
        .await
    {
        Ok(reset_token) => HttpResponse::Ok().json(VerifyOtpResponse {
            success: true,
            reset_token,
        }),
        Err(e) => handle_domain_error(e),
    }
}
