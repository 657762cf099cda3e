use actix_web::{post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::verify_otp::{VerifyOtpError, VerifyOtpInput};
use crate::shared::api::ApiMessage;
use crate::AppState;

/// Request body for OTP verification
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    /// Email address the code was sent to
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// The 6-digit code from the email
    #[schema(example = "123456")]
    pub otp: Option<String>,
}

/// Public projection of a user account. Pending-code fields and the
/// provider subject id never leave the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    /// User ID (UUID)
    pub id: String,

    /// Normalized email address
    pub email: String,

    /// Display name
    pub name: Option<String>,

    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(rename = "isGoogleUser")]
    pub is_google_user: bool,
}

impl From<User> for AuthUserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            date_of_birth: user.date_of_birth,
            is_google_user: user.is_google_user,
        }
    }
}

/// Success body shared by the token-issuing endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenResponse {
    /// Bearer token, 1 hour TTL
    pub token: String,

    pub user: AuthUserDto,
}

#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Account verified, token issued", body = AuthTokenResponse),
        (status = 400, description = "Missing fields, wrong code, or expired code"),
        (status = 404, description = "No account for that email"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/verify-otp")]
pub async fn verify_otp_handler(
    req: web::Json<VerifyOtpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email_for_log = req.email.clone().unwrap_or_default();

    let input = VerifyOtpInput {
        email: req.email,
        otp: req.otp,
    };

    match data.verify_otp_use_case.execute(input).await {
        Ok(output) => {
            info!(email = %output.user.email, user_id = %output.user.id, "OTP verified, token issued");
            HttpResponse::Ok().json(AuthTokenResponse {
                token: output.token,
                user: output.user.into(),
            })
        }

        Err(VerifyOtpError::UserNotFound) => {
            warn!(email = %email_for_log, "OTP verification for unknown email");
            ApiMessage::not_found("User not found")
        }

        Err(
            err @ (VerifyOtpError::MissingFields
            | VerifyOtpError::MalformedOtp
            | VerifyOtpError::InvalidOtp
            | VerifyOtpError::OtpExpired),
        ) => {
            warn!(email = %email_for_log, error = %err, "OTP verification rejected");
            ApiMessage::bad_request(&err.to_string())
        }

        Err(VerifyOtpError::TokenFailure(e)) => {
            error!(email = %email_for_log, error = %e, "Token issuance failed");
            ApiMessage::internal_error()
        }

        Err(VerifyOtpError::RepositoryError(e)) => {
            error!(email = %email_for_log, error = %e, "Repository error during OTP verification");
            ApiMessage::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::verify_otp::{IVerifyOtpUseCase, VerifyOtpOutput};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockVerifyOtpUseCase {
        result: Result<VerifyOtpOutput, VerifyOtpError>,
    }

    #[async_trait]
    impl IVerifyOtpUseCase for MockVerifyOtpUseCase {
        async fn execute(&self, _input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError> {
            self.result.clone()
        }
    }

    fn verified_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            name: Some("Jane".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            is_google_user: false,
            is_verified: true,
            otp: None,
            otp_expires: None,
            google_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn call(use_case: MockVerifyOtpUseCase) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_verify_otp(use_case)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(verify_otp_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/verify-otp")
            .set_json(VerifyOtpRequest {
                email: Some("jane@example.com".to_string()),
                otp: Some("123456".to_string()),
            })
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_success_returns_token_and_projection_only() {
        let user = verified_user();
        let user_id = user.id;
        let resp = call(MockVerifyOtpUseCase {
            result: Ok(VerifyOtpOutput {
                token: "signed.jwt.token".to_string(),
                user,
            }),
        })
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["token"], "signed.jwt.token");
        assert_eq!(body["user"]["id"], user_id.to_string());
        assert_eq!(body["user"]["email"], "jane@example.com");
        assert_eq!(body["user"]["dateOfBirth"], "1990-01-01");
        assert_eq!(body["user"]["isGoogleUser"], false);
        // The projection must not carry verification internals
        assert!(body["user"].get("otp").is_none());
        assert!(body["user"].get("otpExpires").is_none());
        assert!(body["user"].get("googleId").is_none());
    }

    #[actix_web::test]
    async fn test_unknown_email_is_not_found() {
        let resp = call(MockVerifyOtpUseCase {
            result: Err(VerifyOtpError::UserNotFound),
        })
        .await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found");
    }

    #[actix_web::test]
    async fn test_wrong_code_is_bad_request() {
        let resp = call(MockVerifyOtpUseCase {
            result: Err(VerifyOtpError::InvalidOtp),
        })
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid OTP");
    }

    #[actix_web::test]
    async fn test_expired_code_is_bad_request() {
        let resp = call(MockVerifyOtpUseCase {
            result: Err(VerifyOtpError::OtpExpired),
        })
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "OTP has expired");
    }

    #[actix_web::test]
    async fn test_signing_failure_is_opaque_500() {
        let resp = call(MockVerifyOtpUseCase {
            result: Err(VerifyOtpError::TokenFailure("no signing key".to_string())),
        })
        .await;

        assert_eq!(resp.status(), 500);
        let body = test::read_body(resp).await;
        let body_str = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body_str.contains("signing key"));
    }
}
