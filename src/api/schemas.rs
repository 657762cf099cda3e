// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Flat message body used by every non-payload response, success and
/// error alike
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome
    #[schema(example = "OTP sent to your email")]
    pub message: String,
}
