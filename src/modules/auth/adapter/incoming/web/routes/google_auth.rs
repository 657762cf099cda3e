use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::google_auth::{GoogleAuthError, GoogleAuthInput};
use crate::shared::api::ApiMessage;
use crate::AppState;

use super::verify_otp::AuthTokenResponse;

/// Request body for Google sign-in
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GoogleAuthRequest {
    /// Email address from the Google profile
    #[schema(example = "jane@gmail.com")]
    pub email: Option<String>,

    /// Google subject identifier
    #[serde(rename = "googleId")]
    #[schema(example = "104378912345678901234")]
    pub google_id: Option<String>,

    /// Display name from the Google profile
    #[serde(rename = "displayName")]
    #[schema(example = "Jane Doe")]
    pub display_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/auth/google",
    tag = "auth",
    request_body = GoogleAuthRequest,
    responses(
        (status = 200, description = "Signed in, token issued", body = AuthTokenResponse),
        (status = 400, description = "Missing fields or email bound to email/OTP"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/google")]
pub async fn google_auth_handler(
    req: web::Json<GoogleAuthRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email_for_log = req.email.clone().unwrap_or_default();

    let input = GoogleAuthInput {
        email: req.email,
        google_id: req.google_id,
        display_name: req.display_name,
    };

    match data.google_auth_use_case.execute(input).await {
        Ok(output) => {
            info!(email = %output.user.email, user_id = %output.user.id, "Google sign-in, token issued");
            HttpResponse::Ok().json(AuthTokenResponse {
                token: output.token,
                user: output.user.into(),
            })
        }

        Err(
            err @ (GoogleAuthError::MissingFields
            | GoogleAuthError::ProviderMismatch
            | GoogleAuthError::Conflict),
        ) => {
            warn!(email = %email_for_log, error = %err, "Google sign-in rejected");
            ApiMessage::bad_request(&err.to_string())
        }

        Err(GoogleAuthError::TokenFailure(e)) => {
            error!(email = %email_for_log, error = %e, "Token issuance failed");
            ApiMessage::internal_error()
        }

        Err(GoogleAuthError::RepositoryError(e)) => {
            error!(email = %email_for_log, error = %e, "Repository error during Google sign-in");
            ApiMessage::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::use_cases::google_auth::{GoogleAuthOutput, IGoogleAuthUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockGoogleAuthUseCase {
        result: Result<GoogleAuthOutput, GoogleAuthError>,
    }

    #[async_trait]
    impl IGoogleAuthUseCase for MockGoogleAuthUseCase {
        async fn execute(
            &self,
            _input: GoogleAuthInput,
        ) -> Result<GoogleAuthOutput, GoogleAuthError> {
            self.result.clone()
        }
    }

    fn google_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "jane@gmail.com".to_string(),
            name: Some("Jane".to_string()),
            date_of_birth: None,
            is_google_user: true,
            is_verified: true,
            otp: None,
            otp_expires: None,
            google_id: Some("104378912345678901234".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn call(use_case: MockGoogleAuthUseCase) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_google_auth(use_case)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(google_auth_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/google")
            .set_json(GoogleAuthRequest {
                email: Some("jane@gmail.com".to_string()),
                google_id: Some("104378912345678901234".to_string()),
                display_name: Some("Jane".to_string()),
            })
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_success_returns_token_without_subject_id() {
        let resp = call(MockGoogleAuthUseCase {
            result: Ok(GoogleAuthOutput {
                token: "signed.jwt.token".to_string(),
                user: google_user(),
            }),
        })
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["token"], "signed.jwt.token");
        assert_eq!(body["user"]["isGoogleUser"], true);
        assert!(body["user"].get("googleId").is_none());
    }

    #[actix_web::test]
    async fn test_native_bound_email_is_bad_request() {
        let resp = call(MockGoogleAuthUseCase {
            result: Err(GoogleAuthError::ProviderMismatch),
        })
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Email is registered with email/OTP");
    }

    #[actix_web::test]
    async fn test_missing_fields_is_bad_request() {
        let resp = call(MockGoogleAuthUseCase {
            result: Err(GoogleAuthError::MissingFields),
        })
        .await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_signing_failure_is_opaque_500() {
        let resp = call(MockGoogleAuthUseCase {
            result: Err(GoogleAuthError::TokenFailure("bad key".to_string())),
        })
        .await;

        assert_eq!(resp.status(), 500);
    }
}
