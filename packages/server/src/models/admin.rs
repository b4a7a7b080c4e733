use serde::{Deserialize, Serialize};

use super::arena::ArenaConfigData;
use crate::entity::arena_config;
use crate::utils::meme_lines::{json_to_lines, lines_to_json};

/// Admin form submission. Meme fields carry one URL per line.
///
/// `id` is only present when the form was opened from an existing row. Saving
/// still goes by date.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminArenaForm {
    pub id: Option<i32>,
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
}

impl From<AdminArenaForm> for ArenaConfigData {
    fn from(f: AdminArenaForm) -> Self {
        Self {
            date: f.date,
            team_a_name: f.team_a_name,
            team_a_title: f.team_a_title,
            team_a_slogan: f.team_a_slogan,
            team_a_image: f.team_a_image,
            team_a_memes: lines_to_json(&f.team_a_memes),
            team_a_color: f.team_a_color,
            team_b_name: f.team_b_name,
            team_b_title: f.team_b_title,
            team_b_slogan: f.team_b_slogan,
            team_b_image: f.team_b_image,
            team_b_memes: lines_to_json(&f.team_b_memes),
            team_b_color: f.team_b_color,
        }
    }
}

/// Values rendered into the edit form.
#[derive(Debug, Serialize)]
pub struct ArenaFormView {
    pub id: Option<i32>,
    pub is_new: bool,
    #[serde(flatten)]
    pub data: ArenaConfigData,
}

impl ArenaFormView {
    /// Form for a configuration not yet stored, memes shown as lines.
    pub fn new_entry(mut data: ArenaConfigData) -> Self {
        data.team_a_memes = json_to_lines(&data.team_a_memes);
        data.team_b_memes = json_to_lines(&data.team_b_memes);
        Self {
            id: None,
            is_new: true,
            data,
        }
    }

    /// Re-display a rejected submission exactly as typed.
    pub fn resubmission(form: AdminArenaForm) -> Self {
        Self {
            id: form.id,
            is_new: form.id.is_none(),
            data: ArenaConfigData {
                date: form.date,
                team_a_name: form.team_a_name,
                team_a_title: form.team_a_title,
                team_a_slogan: form.team_a_slogan,
                team_a_image: form.team_a_image,
                team_a_memes: form.team_a_memes,
                team_a_color: form.team_a_color,
                team_b_name: form.team_b_name,
                team_b_title: form.team_b_title,
                team_b_slogan: form.team_b_slogan,
                team_b_image: form.team_b_image,
                team_b_memes: form.team_b_memes,
                team_b_color: form.team_b_color,
            },
        }
    }
}

impl ArenaFormView {
    pub fn title(&self) -> &'static str {
        if self.is_new {
            "New arena configuration"
        } else {
            "Edit arena configuration"
        }
    }
}

impl From<arena_config::Model> for ArenaFormView {
    fn from(m: arena_config::Model) -> Self {
        let id = m.id;
        Self {
            id: Some(id),
            is_new: false,
            ..Self::new_entry(m.into())
        }
    }
}
