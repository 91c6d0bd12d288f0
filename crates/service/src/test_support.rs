#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{config_from_env, connect_with_config};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection to a migrated test database; errors when none is reachable.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let migrated = *MIGRATED
        .get_or_init(|| async {
            let mut cfg = config_from_env();
            cfg.min_connections = 1;
            cfg.connect_timeout_secs = 5;
            match connect_with_config(&cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return Err(anyhow::anyhow!("test database unavailable"));
    }

    // Return a fresh connection for the current test's runtime
    let mut cfg = config_from_env();
    cfg.max_connections = cfg.max_connections.max(20);
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    Ok(db)
}
