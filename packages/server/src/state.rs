use std::sync::Arc;

use common::storage::ObjectStore;
use tera::Tera;

use crate::config::AppConfig;
use crate::repository::ArenaRepository;

#[derive(Clone)]
pub struct AppState {
    pub arenas: Arc<dyn ArenaRepository>,
    /// `None` when object storage could not be initialised; uploads answer 503.
    pub object_store: Option<Arc<dyn ObjectStore>>,
    pub config: Arc<AppConfig>,
    pub templates: Arc<Tera>,
}
