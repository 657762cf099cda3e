use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::email_auth::{EmailAuthError, EmailAuthInput};
use crate::shared::api::ApiMessage;
use crate::AppState;

/// Request body for signup-or-resend
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailAuthRequest {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// Display name, stored when supplied
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,

    /// Date of birth, age-checked when supplied
    #[serde(rename = "dateOfBirth")]
    #[schema(example = "1990-01-01")]
    pub date_of_birth: Option<String>,
}

fn rate_limit_key(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[utoipa::path(
    post,
    path = "/api/auth/email-auth",
    tag = "auth",
    request_body = EmailAuthRequest,
    responses(
        (status = 200, description = "OTP dispatched to the supplied email"),
        (status = 400, description = "Invalid input or email bound to Google"),
        (status = 429, description = "Too many OTP requests from this address"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/email-auth")]
pub async fn email_auth_handler(
    http_req: HttpRequest,
    req: web::Json<EmailAuthRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Throttle before any store work happens
    let key = rate_limit_key(&http_req);
    if !data.email_auth_rate_limiter.allow(&key) {
        warn!(key = %key, "OTP request rate limit hit");
        return ApiMessage::too_many_requests("Too many OTP requests, please try again later");
    }

    let req = req.into_inner();
    let email_for_log = req.email.clone().unwrap_or_default();

    let input = EmailAuthInput {
        email: req.email,
        name: req.name,
        date_of_birth: req.date_of_birth,
    };

    match data.email_auth_use_case.execute(input).await {
        Ok(user) => {
            info!(email = %user.email, user_id = %user.id, "OTP issued");
            ApiMessage::ok("OTP sent to your email")
        }

        Err(
            err @ (EmailAuthError::InvalidEmail
            | EmailAuthError::TooYoung
            | EmailAuthError::ProviderMismatch
            | EmailAuthError::Conflict),
        ) => {
            warn!(email = %email_for_log, error = %err, "Email auth rejected");
            ApiMessage::bad_request(&err.to_string())
        }

        Err(EmailAuthError::RepositoryError(e)) => {
            error!(email = %email_for_log, error = %e, "Repository error during email auth");
            ApiMessage::internal_error()
        }
    }
}
