use std::sync::Arc;

use anyhow::Context;
use common::storage::ObjectStore;
use common::storage::s3::S3ObjectStore;
use tracing::{Level, info, warn};

use arena_server::build_router;
use arena_server::config::AppConfig;
use arena_server::database::init_db;
use arena_server::repository::SeaOrmArenaRepository;
use arena_server::state::AppState;
use arena_server::views::load_templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = init_db(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Database connected");

    let object_store: Option<Arc<dyn ObjectStore>> =
        match S3ObjectStore::new(&config.storage.s3_settings()) {
            Ok(store) => {
                info!(bucket = %config.storage.bucket_name, "Object storage ready");
                Some(Arc::new(store))
            }
            Err(e) => {
                warn!("Object storage unavailable, uploads disabled: {e}");
                None
            }
        };

    let templates = load_templates().context("Failed to load admin templates")?;
    let addr = config.server.socket_addr().context("Invalid server address")?;

    let state = AppState {
        arenas: Arc::new(SeaOrmArenaRepository::new(db)),
        object_store,
        config: Arc::new(config),
        templates: Arc::new(templates),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", addr);
    info!("Admin panel at http://{}/admin", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
