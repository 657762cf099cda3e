use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenIssuer;

pub fn test_token_issuer() -> Arc<dyn TokenIssuer> {
    let jwt_config = JwtConfig::new("test_secret_key_for_testing_only".to_string(), 3600);
    Arc::new(JwtTokenService::new(jwt_config))
}

/// An Authorization header value carrying a freshly signed token.
pub fn bearer_for(issuer: &Arc<dyn TokenIssuer>, user_id: Uuid, email: &str) -> String {
    let token = issuer
        .issue_token(user_id, email)
        .expect("test token should sign");
    format!("Bearer {}", token)
}
