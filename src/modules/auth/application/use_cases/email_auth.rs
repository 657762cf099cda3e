use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::modules::auth::application::domain::validation::{
    is_under_min_age, is_valid_email, normalize_email, parse_date_of_birth,
};
use crate::modules::auth::application::ports::outgoing::{
    user_repository::UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::services::otp::generate_otp;
use crate::modules::email::application::ports::outgoing::otp_notifier::OtpNotifier;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EmailAuthError {
    #[error("Valid email is required")]
    InvalidEmail,

    #[error("You must be at least 13 years old")]
    TooYoung,

    #[error("Email is registered with Google")]
    ProviderMismatch,

    #[error("Email already exists")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct EmailAuthInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
}

#[async_trait]
pub trait IEmailAuthUseCase: Send + Sync {
    async fn execute(&self, input: EmailAuthInput) -> Result<User, EmailAuthError>;
}

/// Signup-or-resend: unknown emails get a fresh pending user, known
/// native users get their code re-issued. Google-bound emails are
/// turned away.
pub struct EmailAuthUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn OtpNotifier>,
    otp_ttl: Duration,
}

impl<R> EmailAuthUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, notifier: Arc<dyn OtpNotifier>, otp_ttl: Duration) -> Self {
        Self {
            repository,
            notifier,
            otp_ttl,
        }
    }
}

#[async_trait]
impl<R> IEmailAuthUseCase for EmailAuthUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: EmailAuthInput) -> Result<User, EmailAuthError> {
        // 1. Validate the email shape against the normalized form
        let email = input
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|e| is_valid_email(e))
            .ok_or(EmailAuthError::InvalidEmail)?;

        // 2. Optional fields still have to pass their checks when present
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let date_of_birth = match input
            .date_of_birth
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            Some(raw) => {
                let dob = parse_date_of_birth(raw).ok_or(EmailAuthError::TooYoung)?;
                if is_under_min_age(dob, Utc::now()) {
                    return Err(EmailAuthError::TooYoung);
                }
                Some(dob)
            }
            None => None,
        };

        let existing = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| EmailAuthError::RepositoryError(e.to_string()))?;

        // 3. An email bound to Google can never re-enter the native flow
        if let Some(user) = &existing {
            if user.is_google_user {
                return Err(EmailAuthError::ProviderMismatch);
            }
        }

        let otp = generate_otp();
        let otp_expires = Utc::now() + self.otp_ttl;

        // 4. Create-or-reissue
        let user = match existing {
            None => {
                let new_user = NewUser {
                    email,
                    name,
                    date_of_birth,
                    is_google_user: false,
                    is_verified: false,
                    otp: Some(otp.clone()),
                    otp_expires: Some(otp_expires),
                    google_id: None,
                };
                match self.repository.create_user(new_user).await {
                    Ok(user) => user,
                    Err(UserRepositoryError::DuplicateEmail) => {
                        return Err(EmailAuthError::Conflict)
                    }
                    Err(e) => return Err(EmailAuthError::RepositoryError(e.to_string())),
                }
            }
            Some(mut user) => {
                user.set_otp(otp.clone(), otp_expires);
                if let Some(name) = name {
                    user.name = Some(name);
                }
                if let Some(dob) = date_of_birth {
                    user.date_of_birth = Some(dob);
                }
                self.repository
                    .save_user(user)
                    .await
                    .map_err(|e| EmailAuthError::RepositoryError(e.to_string()))?
            }
        };

        // 5. Best-effort notification
        let notifier = Arc::clone(&self.notifier);
        let recipient = user.email.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send_otp(&recipient, &otp).await {
                tracing::warn!(email = %recipient, error = %e, "Failed to send OTP email");
            }
        });

        Ok(user)
    }
}
