pub mod rate_limiter;
pub mod token_issuer;
pub mod user_repository;

pub use rate_limiter::RateLimiter;
pub use token_issuer::{TokenClaims, TokenError, TokenIssuer};
pub use user_repository::{UserRepository, UserRepositoryError};
