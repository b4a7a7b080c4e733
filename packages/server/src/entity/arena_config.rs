use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One day's battle configuration. Meme columns hold JSON-encoded URL arrays.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "arena_configs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// `YYYY-MM-DD`. Unique across live and soft-deleted rows.
    #[sea_orm(unique, column_type = "String(StringLen::N(20))")]
    pub date: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub team_a_name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub team_a_title: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub team_a_slogan: String,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub team_a_image: String,
    #[sea_orm(column_type = "Text")]
    pub team_a_memes: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub team_a_color: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub team_b_name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub team_b_title: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub team_b_slogan: String,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub team_b_image: String,
    #[sea_orm(column_type = "Text")]
    pub team_b_memes: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub team_b_color: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,

    #[sea_orm(indexed)]
    pub deleted_at: Option<DateTimeUtc>,
}

impl ActiveModelBehavior for ActiveModel {}
