use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::signup_user::{SignupError, SignupInput};
use crate::shared::api::ApiMessage;
use crate::AppState;

/// Request body for native signup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// Display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,

    /// Date of birth, must imply age >= 13
    #[serde(rename = "dateOfBirth")]
    #[schema(example = "1990-01-01")]
    pub date_of_birth: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "OTP dispatched to the supplied email"),
        (status = 400, description = "Invalid input or email already registered"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email_for_log = req.email.clone().unwrap_or_default();

    let input = SignupInput {
        email: req.email,
        name: req.name,
        date_of_birth: req.date_of_birth,
    };

    match data.signup_use_case.execute(input).await {
        Ok(user) => {
            info!(email = %user.email, user_id = %user.id, "Signup accepted, OTP dispatched");
            // The code travels by email only; the response stays generic
            ApiMessage::ok("OTP sent to your email")
        }

        Err(
            err @ (SignupError::InvalidEmail
            | SignupError::MissingName
            | SignupError::MissingDateOfBirth
            | SignupError::TooYoung
            | SignupError::DuplicateEmail),
        ) => {
            warn!(email = %email_for_log, error = %err, "Signup rejected");
            ApiMessage::bad_request(&err.to_string())
        }

        Err(SignupError::RepositoryError(e)) => {
            error!(email = %email_for_log, error = %e, "Repository error during signup");
            ApiMessage::internal_error()
        }
    }
}
