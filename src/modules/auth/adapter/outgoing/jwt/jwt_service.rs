use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_issuer::{
    TokenClaims, TokenError, TokenIssuer,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    /// Verify and decode a token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper function to create a test JwtTokenService
    fn create_test_jwt_service() -> JwtTokenService {
        let config = JwtConfig {
            secret_key: "FAKE_JWT_SECRET_FOR_TESTS_ONLY_0123456789".to_string(),
            token_expiry: 3600, // 1 hour
        };
        JwtTokenService::new(config)
    }

    #[test]
    fn test_issue_and_verify_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service
            .issue_token(user_id, "a@ex.com")
            .expect("Token should be generated");

        let claims = service.verify_token(&token);
        assert!(claims.is_ok(), "Token should be valid");
        let claims = claims.unwrap();
        assert_eq!(claims.sub, user_id, "User ID should match");
        assert_eq!(claims.email, "a@ex.com");
    }

    #[test]
    fn test_token_expires_exactly_one_hour_after_issuance() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id, "a@ex.com").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.exp > Utc::now().timestamp(), "Expiry is in the future");
    }

    #[test]
    fn test_expired_token() {
        let config = JwtConfig {
            secret_key: "FAKE_JWT_SECRET_FOR_TESTS_ONLY_0123456789".to_string(),
            token_expiry: -35, // Already expired (beyond leeway)
        };
        let service = JwtTokenService::new(config);
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id, "a@ex.com").unwrap();
        let result = service.verify_token(&token);

        assert!(result.is_err(), "Expired token should be invalid");
        assert!(matches!(result.unwrap_err(), TokenError::TokenExpired));
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id, "a@ex.com").unwrap();

        let different_config = JwtConfig {
            secret_key: "A_COMPLETELY_DIFFERENT_SECRET_KEY_9876543210".to_string(),
            token_expiry: 3600,
        };
        let different_service = JwtTokenService::new(different_config);

        let result = different_service.verify_token(&token);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TokenError::InvalidSignature));
    }

    #[test]
    fn test_malformed_token() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(result.is_err(), "Invalid token should fail verification");
        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let mut token = service.issue_token(user_id, "a@ex.com").unwrap();
        token.push('x');

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_jwt_service_clone_produces_compatible_keys() {
        let service = create_test_jwt_service();
        let cloned_service = service.clone();

        let user_id = Uuid::new_v4();
        let token = service.issue_token(user_id, "a@ex.com").unwrap();

        assert!(cloned_service.verify_token(&token).is_ok());
    }
}
