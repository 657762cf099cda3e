pub use sea_orm_migration::prelude::*;

mod m20250612_091344_create_users_table;
mod m20250612_094821_create_notes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_091344_create_users_table::Migration),
            Box::new(m20250612_094821_create_notes_table::Migration),
        ]
    }
}
