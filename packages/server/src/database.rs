use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url());

    // Set connection pool options
    opt.max_connections(config.max_open_connections)
        .min_connections(config.max_idle_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("arena_server::entity::*")
        .sync(&db)
        .await?;

    info!(host = %config.host, database = %config.name, "Database schema synced");
    Ok(db)
}
