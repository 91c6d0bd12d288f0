use crate::db::{config_from_env, connect_with_config};
use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};

/// Test connection with pool settings from `DatabaseConfig`
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let mut config = config_from_env();
    config.max_connections = 5;
    config.min_connections = 1;
    config.connect_timeout_secs = 5;

    let start = Instant::now();
    let db = match connect_with_config(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };
    let connection_time = start.elapsed();
    println!("Database connection established in {:?}", connection_time);

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let result = db.query_one(stmt).await?;
    let row = result.ok_or_else(|| anyhow::anyhow!("no row"))?;
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);

    assert!(connection_time < Duration::from_secs(10),
           "Connection took too long: {:?}", connection_time);
    Ok(())
}
