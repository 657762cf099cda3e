use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::modules::auth::application::domain::validation::normalize_email;
use crate::modules::auth::application::ports::outgoing::{
    token_issuer::TokenIssuer, user_repository::UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GoogleAuthError {
    #[error("Google authentication data required")]
    MissingFields,

    #[error("Email is registered with email/OTP")]
    ProviderMismatch,

    #[error("Email already exists")]
    Conflict,

    #[error("Token issuance failed: {0}")]
    TokenFailure(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct GoogleAuthInput {
    pub email: Option<String>,
    pub google_id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleAuthOutput {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait IGoogleAuthUseCase: Send + Sync {
    async fn execute(&self, input: GoogleAuthInput) -> Result<GoogleAuthOutput, GoogleAuthError>;
}

/// Google sign-in. First contact creates the user already verified, no
/// OTP round trip; later calls pass straight through to token issuance.
///
/// Trusts the client-supplied profile (email, subject id, display name)
/// without verifying a Google ID token server-side; the stored subject
/// id is not re-checked on subsequent calls either. Callers are
/// expected to sit behind a frontend that completed the Google flow.
pub struct GoogleAuthUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl<R> GoogleAuthUseCase<R>
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
impl<R> IGoogleAuthUseCase for GoogleAuthUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: GoogleAuthInput) -> Result<GoogleAuthOutput, GoogleAuthError> {
        // 1. All three profile fields are mandatory
        let email = input
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|e| !e.is_empty())
            .ok_or(GoogleAuthError::MissingFields)?;
        let google_id = input
            .google_id
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .ok_or(GoogleAuthError::MissingFields)?
            .to_string();
        let display_name = input
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(GoogleAuthError::MissingFields)?
            .to_string();

        // 2. First contact creates a verified Google-bound user
        let user = match self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| GoogleAuthError::RepositoryError(e.to_string()))?
        {
            None => {
                let new_user = NewUser {
                    email,
                    name: Some(display_name),
                    date_of_birth: None,
                    is_google_user: true,
                    is_verified: true,
                    otp: None,
                    otp_expires: None,
                    google_id: Some(google_id),
                };
                match self.repository.create_user(new_user).await {
                    Ok(user) => user,
                    Err(UserRepositoryError::DuplicateEmail) => {
                        return Err(GoogleAuthError::Conflict)
                    }
                    Err(e) => return Err(GoogleAuthError::RepositoryError(e.to_string())),
                }
            }
            // 3. The provider branch picked at creation is final
            Some(user) if !user.is_google_user => return Err(GoogleAuthError::ProviderMismatch),
            Some(user) => user,
        };

        // 4. Token regardless of which branch ran
        let token = self
            .token_issuer
            .issue_token(user.id, &user.email)
            .map_err(|e| GoogleAuthError::TokenFailure(e.to_string()))?;

        Ok(GoogleAuthOutput { token, user })
    }
}
