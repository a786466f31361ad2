//! User preferences

use serde::{Deserialize, Serialize};

use crate::catalog::{DEFAULT_MODEL_ID, DEFAULT_TEMPLATE_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    Serif,
    #[default]
    Sans,
}

/// Stored preferences
///
/// Missing fields deserialize to their defaults, so a value saved by an
/// older client is merged over the current defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub font_type: FontType,
    pub model_id: String,
    pub prompt_template_id: String,
    pub custom_prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_type: FontType::Sans,
            model_id: DEFAULT_MODEL_ID.to_string(),
            prompt_template_id: DEFAULT_TEMPLATE_ID.to_string(),
            custom_prompt: String::new(),
        }
    }
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub font_type: Option<FontType>,
    pub model_id: Option<String>,
    pub prompt_template_id: Option<String>,
    pub custom_prompt: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// `current` with this patch applied
    pub fn apply(&self, current: &Settings) -> Settings {
        Settings {
            font_type: self.font_type.unwrap_or(current.font_type),
            model_id: self
                .model_id
                .clone()
                .unwrap_or_else(|| current.model_id.clone()),
            prompt_template_id: self
                .prompt_template_id
                .clone()
                .unwrap_or_else(|| current.prompt_template_id.clone()),
            custom_prompt: self
                .custom_prompt
                .clone()
                .unwrap_or_else(|| current.custom_prompt.clone()),
        }
    }
}
