use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::customer::{repo::seaorm::SeaOrmCustomerRepository, repository::CustomerRepository};

fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

/// Open the pool and bring the schema up to date when configured to.
async fn connect_store(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(format!("{e:#}")))?;
    if cfg.database.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!("customer schema migrated");
    }
    Ok(db)
}

/// Wire state and router from a loaded config and an open connection.
pub fn build_app(cfg: &AppConfig, db: DatabaseConnection) -> Router {
    let repo: Arc<dyn CustomerRepository> = Arc::new(SeaOrmCustomerRepository { db });
    let state = ServerState::new(repo);
    routes::build_router(state, routes::build_cors(&cfg.cors))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();
    info!(version = env!("CARGO_PKG_VERSION"), pid = std::process::id(), "starting customer server");

    let cfg = load_config()?;
    let db = connect_store(&cfg).await?;
    let app = build_app(&cfg, db);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "customer server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
