use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::domain::validation::normalize_email;
use crate::modules::auth::application::ports::outgoing::{
    token_issuer::TokenIssuer, user_repository::UserRepository,
};
use crate::modules::auth::application::services::otp::is_otp_expired;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("Email and OTP are required")]
    MissingFields,

    #[error("OTP must be 6 digits")]
    MalformedOtp,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Token issuance failed: {0}")]
    TokenFailure(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct VerifyOtpInput {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Clone)]
pub struct VerifyOtpOutput {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait IVerifyOtpUseCase: Send + Sync {
    async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError>;
}

/// Exchanges a pending code for a verified account and a bearer token.
/// The stored pair is cleared on success, so a code can be spent once.
pub struct VerifyOtpUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl<R> VerifyOtpUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            repository,
            token_issuer,
        }
    }
}

#[async_trait]
impl<R> IVerifyOtpUseCase for VerifyOtpUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: VerifyOtpInput) -> Result<VerifyOtpOutput, VerifyOtpError> {
        // 1. Both fields present, code exactly six characters
        let email = input
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(VerifyOtpError::MissingFields)?;
        let otp = input
            .otp
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .ok_or(VerifyOtpError::MissingFields)?;
        if otp.len() != 6 {
            return Err(VerifyOtpError::MalformedOtp);
        }

        // 2. Resolve the user behind the normalized email
        let email = normalize_email(email);
        let mut user = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::UserNotFound)?;

        // 3. Code must match the stored one exactly, then still be live.
        //    A consumed code leaves no stored value, so replays fall
        //    into the mismatch arm.
        match &user.otp {
            Some(stored) if stored == otp => {}
            _ => return Err(VerifyOtpError::InvalidOtp),
        }
        match user.otp_expires {
            Some(expires) if !is_otp_expired(expires) => {}
            _ => return Err(VerifyOtpError::OtpExpired),
        }

        // 4. Promote to verified and spend the code
        user.is_verified = true;
        user.clear_otp();
        let user = self
            .repository
            .save_user(user)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?;

        // 5. Hand out the bearer token
        let token = self
            .token_issuer
            .issue_token(user.id, &user.email)
            .map_err(|e| VerifyOtpError::TokenFailure(e.to_string()))?;

        Ok(VerifyOtpOutput { token, user })
    }
}
