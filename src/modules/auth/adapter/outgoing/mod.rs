pub mod jwt;
pub mod rate_limiter_memory;
pub mod sea_orm_entity;
pub mod user_repository_postgres;
