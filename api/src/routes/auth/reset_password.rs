use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{ResetPasswordRequest, SuccessResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/reset-password
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .reset_service
        .reset_password(&request.reset_token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse { success: true }),
        Err(e) => handle_domain_error(e),
    }
}
