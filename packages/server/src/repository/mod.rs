mod db;

use async_trait::async_trait;
use sea_orm::DbErr;

pub use db::SeaOrmArenaRepository;

use crate::entity::arena_config;
use crate::models::arena::ArenaConfigData;

/// Whether an upsert inserted a row (or revived a soft-deleted one) or replaced a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SaveOutcome::Created => "Created successfully",
            SaveOutcome::Updated => "Updated successfully",
        }
    }
}

/// Storage of arena configurations. Reads never return soft-deleted rows.
#[async_trait]
pub trait ArenaRepository: Send + Sync {
    async fn find_by_date(&self, date: &str) -> Result<Option<arena_config::Model>, DbErr>;

    async fn find_by_id(&self, id: i32) -> Result<Option<arena_config::Model>, DbErr>;

    /// All live rows, newest date first.
    async fn list(&self) -> Result<Vec<arena_config::Model>, DbErr>;

    /// Insert or fully replace the configuration for `data.date`.
    ///
    /// A live row keeps its id and `created_at`. A soft-deleted row for the
    /// same date is revived in place and reported as created.
    async fn upsert_by_date(
        &self,
        data: ArenaConfigData,
    ) -> Result<(arena_config::Model, SaveOutcome), DbErr>;

    /// Mark a live row deleted. Returns `false` when no live row has that id.
    async fn soft_delete(&self, id: i32) -> Result<bool, DbErr>;
}
