// application/ports/outgoing/user_repository.rs
use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{NewUser, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lookup keyed by an already-normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Inserts a new record. Surfaces `DuplicateEmail` when the unique
    /// index on email is violated, including by a concurrent insert.
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Persists mutations of an existing record, keyed by id.
    async fn save_user(&self, user: User) -> Result<User, UserRepositoryError>;
}
