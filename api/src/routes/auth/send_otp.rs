use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/send-otp
///
/// # Request Body
///
/// ```json
/// { "email": "editor@wander.io" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "otpToken": "eyJlbWFpbCI6...Q.3fA..." }
/// ```
///
/// The same success response is returned whether or not an account exists
/// for the address.
pub async fn send_otp(
    state: web::Data<AppState>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.reset_service.send_code(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(SendOtpResponse {
            success: true,
            otp_token: result.otp_token,
        }),
        Err(e) => handle_domain_error(e),
    }
}
