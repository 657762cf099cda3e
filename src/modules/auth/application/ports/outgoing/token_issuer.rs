// application/ports/outgoing/token_issuer.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

pub trait TokenIssuer: Send + Sync {
    /// Signs a token bound to the user's id and email, fixed TTL.
    fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError>;

    /// Rejects expired, malformed, or invalidly-signed tokens; yields
    /// the bound claims on success.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
