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
pub enum SignupError {
    #[error("Valid email is required")]
    InvalidEmail,

    #[error("Name is required")]
    MissingName,

    #[error("Date of birth is required")]
    MissingDateOfBirth,

    // Unparseable dates land here too: an age we cannot establish
    // does not clear the floor.
    #[error("You must be at least 13 years old")]
    TooYoung,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
}

#[async_trait]
pub trait ISignupUserUseCase: Send + Sync {
    async fn execute(&self, input: SignupInput) -> Result<User, SignupError>;
}

/// Native signup: creates an unverified user holding a fresh OTP and
/// dispatches the code by email without blocking the response.
pub struct SignupUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn OtpNotifier>,
    otp_ttl: Duration,
}

impl<R> SignupUserUseCase<R>
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
impl<R> ISignupUserUseCase for SignupUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: SignupInput) -> Result<User, SignupError> {
        // 1. Validate the email shape against the normalized form
        let email = input
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|e| is_valid_email(e))
            .ok_or(SignupError::InvalidEmail)?;

        // 2. Name is mandatory on the native path
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(SignupError::MissingName)?
            .to_string();

        // 3. Date of birth is mandatory and must clear the age floor
        let raw_dob = input
            .date_of_birth
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(SignupError::MissingDateOfBirth)?;
        let date_of_birth = parse_date_of_birth(raw_dob).ok_or(SignupError::TooYoung)?;
        if is_under_min_age(date_of_birth, Utc::now()) {
            return Err(SignupError::TooYoung);
        }

        // 4. New users only, regardless of which provider holds the email
        match self.repository.find_by_email(&email).await {
            Ok(Some(_)) => return Err(SignupError::DuplicateEmail),
            Ok(None) => {}
            Err(e) => return Err(SignupError::RepositoryError(e.to_string())),
        }

        // 5. Create the user in the pending state with a live code
        let otp = generate_otp();
        let otp_expires = Utc::now() + self.otp_ttl;
        let new_user = NewUser {
            email,
            name: Some(name),
            date_of_birth: Some(date_of_birth),
            is_google_user: false,
            is_verified: false,
            otp: Some(otp.clone()),
            otp_expires: Some(otp_expires),
            google_id: None,
        };

        let user = match self.repository.create_user(new_user).await {
            Ok(user) => user,
            // A concurrent signup can win the unique-index race
            Err(UserRepositoryError::DuplicateEmail) => return Err(SignupError::DuplicateEmail),
            Err(UserRepositoryError::DatabaseError(e)) => {
                return Err(SignupError::RepositoryError(e))
            }
            Err(e) => return Err(SignupError::RepositoryError(e.to_string())),
        };

        // 6. Best-effort notification; delivery failure never rolls back
        //    the created record
        let notifier = Arc::clone(&self.notifier);
        let recipient = user.email.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send_otp(&recipient, &otp).await {
                tracing::warn!(email = %recipient, error = %e, "Failed to send signup OTP email");
            }
        });

        Ok(user)
    }
}
