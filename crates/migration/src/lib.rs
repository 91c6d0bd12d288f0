//! Migrator for the customer schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_customer;
mod m20240101_000002_add_customer_indexes;

pub use m20240101_000002_add_customer_indexes::{UNIQ_EMAIL, UNIQ_MOBILE_NO};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_customer::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_add_customer_indexes::Migration),
        ]
    }
}
