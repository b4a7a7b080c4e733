use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use tracing::debug;

use super::{ArenaRepository, SaveOutcome};
use crate::entity::arena_config::{self, ActiveModel, Column, Entity};
use crate::models::arena::ArenaConfigData;

pub struct SeaOrmArenaRepository {
    db: DatabaseConnection,
}

impl SeaOrmArenaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn live() -> Select<Entity> {
    Entity::find().filter(Column::DeletedAt.is_null())
}

fn assign(active: &mut ActiveModel, data: ArenaConfigData) {
    active.date = Set(data.date);
    active.team_a_name = Set(data.team_a_name);
    active.team_a_title = Set(data.team_a_title);
    active.team_a_slogan = Set(data.team_a_slogan);
    active.team_a_image = Set(data.team_a_image);
    active.team_a_memes = Set(data.team_a_memes);
    active.team_a_color = Set(data.team_a_color);
    active.team_b_name = Set(data.team_b_name);
    active.team_b_title = Set(data.team_b_title);
    active.team_b_slogan = Set(data.team_b_slogan);
    active.team_b_image = Set(data.team_b_image);
    active.team_b_memes = Set(data.team_b_memes);
    active.team_b_color = Set(data.team_b_color);
}

#[async_trait]
impl ArenaRepository for SeaOrmArenaRepository {
    async fn find_by_date(&self, date: &str) -> Result<Option<arena_config::Model>, DbErr> {
        live().filter(Column::Date.eq(date)).one(&self.db).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<arena_config::Model>, DbErr> {
        live().filter(Column::Id.eq(id)).one(&self.db).await
    }

    async fn list(&self) -> Result<Vec<arena_config::Model>, DbErr> {
        live().order_by_desc(Column::Date).all(&self.db).await
    }

    async fn upsert_by_date(
        &self,
        data: ArenaConfigData,
    ) -> Result<(arena_config::Model, SaveOutcome), DbErr> {
        let now = Utc::now();

        // The unique index spans soft-deleted rows, so look those up too.
        let existing = Entity::find()
            .filter(Column::Date.eq(data.date.as_str()))
            .one(&self.db)
            .await?;

        match existing {
            Some(row) => {
                let revived = row.deleted_at.is_some();
                let mut active: ActiveModel = row.into();
                assign(&mut active, data);
                active.updated_at = Set(now);
                if revived {
                    active.created_at = Set(now);
                    active.deleted_at = Set(None);
                }
                let model = active.update(&self.db).await?;
                debug!(id = model.id, date = %model.date, revived, "Replaced arena config");

                let outcome = if revived {
                    SaveOutcome::Created
                } else {
                    SaveOutcome::Updated
                };
                Ok((model, outcome))
            }
            None => {
                let mut active = ActiveModel {
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                    ..Default::default()
                };
                assign(&mut active, data);
                let model = active.insert(&self.db).await?;
                debug!(id = model.id, date = %model.date, "Inserted arena config");
                Ok((model, SaveOutcome::Created))
            }
        }
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
