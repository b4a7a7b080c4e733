use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::arena_config;
use crate::error::AppError;

/// JSON text stored for an empty meme list.
pub const EMPTY_MEMES: &str = "[]";

/// Writable part of an arena configuration: the date plus both teams.
///
/// Unknown fields (`id`, timestamps) are ignored and missing strings default
/// to empty, so a full `ArenaConfigResponse` can be posted back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ArenaConfigData {
    /// Calendar day in `YYYY-MM-DD` form.
    #[schema(example = "2026-01-22")]
    pub date: String,

    #[schema(example = "蔡徐坤")]
    pub team_a_name: String,
    pub team_a_title: String,
    pub team_a_slogan: String,
    pub team_a_image: String,
    /// JSON-encoded array of image URLs. A plain JSON array is accepted too.
    #[serde(deserialize_with = "meme_json")]
    #[schema(example = "[\"https://cdn.example.com/a.png\"]")]
    pub team_a_memes: String,
    #[schema(example = "#ec4899")]
    pub team_a_color: String,

    pub team_b_name: String,
    pub team_b_title: String,
    pub team_b_slogan: String,
    pub team_b_image: String,
    #[serde(deserialize_with = "meme_json")]
    pub team_b_memes: String,
    #[schema(example = "#3b82f6")]
    pub team_b_color: String,
}

impl ArenaConfigData {
    /// Fixed line-up shown when no configuration exists for a day.
    pub fn default_for(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            team_a_name: "蔡徐坤".into(),
            team_a_title: "练习生".into(),
            team_a_slogan: "鸡你太美...".into(),
            team_a_image: String::new(),
            team_a_memes: EMPTY_MEMES.into(),
            team_a_color: "#ec4899".into(),
            team_b_name: "范小勤".into(),
            team_b_title: "挖掘机".into(),
            team_b_slogan: "我要开发5G...".into(),
            team_b_image: String::new(),
            team_b_memes: EMPTY_MEMES.into(),
            team_b_color: "#3b82f6".into(),
        }
    }

    /// Trim the date and reject an empty one. Blank meme columns become `[]`.
    pub fn validated(mut self) -> Result<Self, AppError> {
        self.date = self.date.trim().to_string();
        if self.date.is_empty() {
            return Err(AppError::Validation("Date must not be empty".into()));
        }
        for memes in [&mut self.team_a_memes, &mut self.team_b_memes] {
            if memes.trim().is_empty() {
                *memes = EMPTY_MEMES.to_string();
            }
        }
        Ok(self)
    }
}

impl From<arena_config::Model> for ArenaConfigData {
    fn from(m: arena_config::Model) -> Self {
        Self {
            date: m.date,
            team_a_name: m.team_a_name,
            team_a_title: m.team_a_title,
            team_a_slogan: m.team_a_slogan,
            team_a_image: m.team_a_image,
            team_a_memes: m.team_a_memes,
            team_a_color: m.team_a_color,
            team_b_name: m.team_b_name,
            team_b_title: m.team_b_title,
            team_b_slogan: m.team_b_slogan,
            team_b_image: m.team_b_image,
            team_b_memes: m.team_b_memes,
            team_b_color: m.team_b_color,
        }
    }
}

/// Accept either a JSON-encoded string or a JSON array of strings.
fn meme_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Memes {
        Encoded(String),
        List(Vec<String>),
        Null(()),
    }

    Ok(match Memes::deserialize(deserializer)? {
        Memes::Encoded(s) if s.trim().is_empty() => EMPTY_MEMES.to_string(),
        Memes::Encoded(s) => s,
        Memes::List(list) => encode_memes(&list),
        Memes::Null(()) => EMPTY_MEMES.to_string(),
    })
}

/// Decode a stored meme column. Empty or malformed text yields an empty list.
pub fn decode_memes(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn encode_memes(urls: &[String]) -> String {
    serde_json::to_string(urls).unwrap_or_else(|_| EMPTY_MEMES.to_string())
}

/// One team as served to the front-end, with memes decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct TeamConfig {
    pub name: String,
    pub title: String,
    pub slogan: String,
    pub image: String,
    pub memes: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArenaResponse {
    #[schema(example = "2026-01-22")]
    pub date: String,
    pub team_a: TeamConfig,
    pub team_b: TeamConfig,
}

impl From<ArenaConfigData> for ArenaResponse {
    fn from(d: ArenaConfigData) -> Self {
        Self {
            team_a: TeamConfig {
                name: d.team_a_name,
                title: d.team_a_title,
                slogan: d.team_a_slogan,
                image: d.team_a_image,
                memes: decode_memes(&d.team_a_memes),
                color: d.team_a_color,
            },
            team_b: TeamConfig {
                name: d.team_b_name,
                title: d.team_b_title,
                slogan: d.team_b_slogan,
                image: d.team_b_image,
                memes: decode_memes(&d.team_b_memes),
                color: d.team_b_color,
            },
            date: d.date,
        }
    }
}

impl From<arena_config::Model> for ArenaResponse {
    fn from(m: arena_config::Model) -> Self {
        ArenaConfigData::from(m).into()
    }
}

/// A stored configuration row. Meme columns stay JSON-encoded.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ArenaConfigResponse {
    pub id: i32,
    pub date: String,
    pub team_a_name: String,
    pub team_a_title: String,
    pub team_a_slogan: String,
    pub team_a_image: String,
    pub team_a_memes: String,
    pub team_a_color: String,
    pub team_b_name: String,
    pub team_b_title: String,
    pub team_b_slogan: String,
    pub team_b_image: String,
    pub team_b_memes: String,
    pub team_b_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<arena_config::Model> for ArenaConfigResponse {
    fn from(m: arena_config::Model) -> Self {
        Self {
            id: m.id,
            date: m.date,
            team_a_name: m.team_a_name,
            team_a_title: m.team_a_title,
            team_a_slogan: m.team_a_slogan,
            team_a_image: m.team_a_image,
            team_a_memes: m.team_a_memes,
            team_a_color: m.team_a_color,
            team_b_name: m.team_b_name,
            team_b_title: m.team_b_title,
            team_b_slogan: m.team_b_slogan,
            team_b_image: m.team_b_image,
            team_b_memes: m.team_b_memes,
            team_b_color: m.team_b_color,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArenaListResponse {
    pub total: usize,
    pub list: Vec<ArenaConfigResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArenaSaveResponse {
    #[schema(example = "Created successfully")]
    pub message: &'static str,
    pub data: ArenaConfigResponse,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Deleted successfully")]
    pub message: &'static str,
}
