//! Migrator registering entity-specific migrations in dependency order.
//! Lookup tables come first, then `product`, then `stock`; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_product_type;
mod m20240601_000002_create_site;
mod m20240601_000003_create_unit;
mod m20240601_000004_create_product;
mod m20240601_000005_create_stock;
mod m20240601_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_product_type::Migration),
            Box::new(m20240601_000002_create_site::Migration),
            Box::new(m20240601_000003_create_unit::Migration),
            Box::new(m20240601_000004_create_product::Migration),
            Box::new(m20240601_000005_create_stock::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000006_add_indexes::Migration),
        ]
    }
}
