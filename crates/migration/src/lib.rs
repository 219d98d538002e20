pub use sea_orm_migration::prelude::*;

mod m20250901_create_catalog_tables;
mod m20250902_add_catalog_indexes;
pub mod schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_create_catalog_tables::Migration),
            Box::new(m20250902_add_catalog_indexes::Migration),
        ]
    }
}
