//! Chat-side collaborators of the renderer
//!
//! - [`SettingsStore`]: observable user preferences with a pluggable backend
//! - [`catalog`]: the models and system-prompt templates a client can pick
//! - [`ChatRequest`]: the request body a client sends for one turn
//! - [`FeedbackTally`]: like/dislike counts per rated question

pub mod backend;
pub mod catalog;
pub mod error;
pub mod feedback;
pub mod request;
pub mod settings;
pub mod store;

pub use backend::{MemoryBackend, SettingsBackend};
pub use catalog::{
    find_model, find_prompt_template, prompt_content, ModelInfo, PromptTemplate, MODELS,
    PROMPT_TEMPLATES,
};
pub use error::{Result, SettingsError};
pub use feedback::{feedback_key, FeedbackCounts, FeedbackTally, FeedbackVote};
pub use request::{ChatMessage, ChatRequest, ChatRole, CompletionBody};
pub use settings::{FontType, Settings, SettingsPatch};
pub use store::{ListenerId, SettingsStore, STORAGE_KEY};
