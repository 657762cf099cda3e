pub mod note_repository_postgres;
pub mod sea_orm_entity;
