//! Type definitions shared by the API and service layers
//!
//! - `response` - API error and health check responses

pub mod response;

pub use response::{ErrorResponse, HealthResponse, HealthStatus};
