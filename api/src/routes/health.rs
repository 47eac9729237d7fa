use actix_web::{web, HttpResponse};
use wander_shared::HealthResponse;

use crate::state::AppState;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "wander-api",
        env!("CARGO_PKG_VERSION"),
        state.environment.to_string(),
    ))
}
