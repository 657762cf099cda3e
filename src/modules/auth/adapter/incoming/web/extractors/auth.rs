use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenIssuer;
use crate::shared::api::ApiMessage;

/// The identity a bearer token proves. Downstream handlers receive this
/// as an explicit parameter; nothing is stashed on the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_issuer = match req.app_data::<actix_web::web::Data<Arc<dyn TokenIssuer>>>() {
            Some(service) => service,
            None => {
                return ready(Err(create_api_error(ApiMessage::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiMessage::unauthorized(
                    "Missing or invalid authorization header",
                ))));
            }
        };

        // Expired, malformed, and bad-signature tokens all collapse into
        // the same generic rejection
        match token_issuer.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                email: claims.email,
            })),
            Err(_) => ready(Err(create_api_error(ApiMessage::unauthorized(
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
