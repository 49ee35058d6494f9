use sea_orm_migration::prelude::*;
pub use sea_orm_migration::prelude::{MigrationTrait, MigratorTrait};

mod m20241019_000001_create_tables;
mod m20241102_104512_add_round_room_details;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241019_000001_create_tables::Migration),
            Box::new(m20241102_104512_add_round_room_details::Migration),
        ]
    }
}
