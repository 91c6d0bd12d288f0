/// Database connection and configuration tests
pub mod db_tests;

/// CRUD and existence-check tests for the customer table
pub mod crud_tests;

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::customer::CustomerFields;
use crate::db::connect;

/// Connect and migrate, or `None` when no database is reachable.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

/// Fields with a mobile number and email unlikely to collide across runs.
pub(crate) fn unique_fields() -> Result<CustomerFields> {
    let n = uuid::Uuid::new_v4().as_u128() % 10_000_000_000;
    Ok(CustomerFields {
        first_name: "Jon".into(),
        last_name: "Doe".into(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1994, 1, 1).ok_or_else(|| anyhow::anyhow!("bad date"))?,
        mobile_no: format!("{:010}", n),
        address_line_one: "12 Oak".into(),
        address_line_two: "Apt 4".into(),
        age: 30,
        gender: 0,
        email: format!("t{}@x.com", n),
    })
}
