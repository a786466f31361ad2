//! Chat request bodies
//!
//! [`ChatRequest`] is what a client posts for one turn; the server resolves
//! it into a [`CompletionBody`] for the upstream provider by prepending the
//! template's system prompt.

use serde::{Deserialize, Serialize};

use crate::catalog::{prompt_content, CUSTOM_TEMPLATE_ID, DEFAULT_MODEL_ID, DEFAULT_TEMPLATE_ID};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of a client chat request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

/// Body sent to the upstream completion API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl ChatRequest {
    /// Request for `messages` using the user's current settings.
    ///
    /// The custom prompt is only sent with the custom template.
    pub fn from_settings(settings: &Settings, messages: Vec<ChatMessage>) -> Self {
        let custom_prompt = (settings.prompt_template_id == CUSTOM_TEMPLATE_ID)
            .then(|| settings.custom_prompt.clone());
        Self {
            messages,
            model: Some(settings.model_id.clone()),
            prompt_template: Some(settings.prompt_template_id.clone()),
            custom_prompt,
        }
    }

    pub fn selected_model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|model| !model.is_empty())
            .unwrap_or(DEFAULT_MODEL_ID)
    }

    pub fn selected_template(&self) -> &str {
        self.prompt_template
            .as_deref()
            .filter(|template| !template.is_empty())
            .unwrap_or(DEFAULT_TEMPLATE_ID)
    }

    pub fn system_prompt(&self) -> &str {
        prompt_content(self.selected_template(), self.custom_prompt.as_deref())
    }

    /// System prompt followed by the conversation
    pub fn completion_messages(&self) -> Vec<ChatMessage> {
        std::iter::once(ChatMessage::system(self.system_prompt()))
            .chain(self.messages.iter().cloned())
            .collect()
    }

    pub fn completion_body(&self) -> CompletionBody {
        CompletionBody {
            model: self.selected_model().to_string(),
            messages: self.completion_messages(),
            stream: true,
        }
    }
}
