//! Per-question answer feedback
//!
//! A client rates an answer by sending `{"question": …, "liked": true|false}`.
//! Like and dislike counts are kept per question under
//! `question:<base64 of the question>`, together with the question text.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::backend::{MemoryBackend, SettingsBackend};
use crate::error::{Result, SettingsError};

pub const FEEDBACK_KEY_PREFIX: &str = "question:";

/// One rating of one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackVote {
    pub question: String,
    pub liked: bool,
}

impl FeedbackVote {
    pub fn new(question: impl Into<String>, liked: bool) -> Self {
        Self {
            question: question.into(),
            liked,
        }
    }

    /// Validate a raw request payload: `question` must be a non-empty string
    /// and `liked` a boolean.
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(payload).map_err(|_| SettingsError::InvalidPayload)?;
        let question = value
            .get("question")
            .and_then(Value::as_str)
            .filter(|question| !question.is_empty());
        let liked = value.get("liked").and_then(Value::as_bool);
        match (question, liked) {
            (Some(question), Some(liked)) => Ok(Self::new(question, liked)),
            _ => Err(SettingsError::InvalidPayload),
        }
    }
}

/// Stored counts for one question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackCounts {
    pub like: u64,
    pub dislike: u64,
    /// Question text, written by the first vote
    pub text: String,
}

/// Storage key for a question's counts.
pub fn feedback_key(question: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(question);
    format!("{}{}", FEEDBACK_KEY_PREFIX, encoded)
}

/// Like/dislike counter over a [`SettingsBackend`]
#[derive(Debug)]
pub struct FeedbackTally<B: SettingsBackend = MemoryBackend> {
    backend: B,
}

impl<B: SettingsBackend> FeedbackTally<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Counts for `question`; zero when it was never rated.
    pub fn counts(&self, question: &str) -> Result<FeedbackCounts> {
        match self.backend.load(&feedback_key(question))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(FeedbackCounts::default()),
        }
    }

    /// Add one vote and return the updated counts.
    pub fn record(&mut self, vote: &FeedbackVote) -> Result<FeedbackCounts> {
        if vote.question.is_empty() {
            return Err(SettingsError::InvalidPayload);
        }
        let mut counts = self.counts(&vote.question)?;
        if vote.liked {
            counts.like += 1;
        } else {
            counts.dislike += 1;
        }
        if counts.text.is_empty() {
            counts.text = vote.question.clone();
        }

        let key = feedback_key(&vote.question);
        self.backend.save(&key, &serde_json::to_string(&counts)?)?;
        debug!(%key, like = counts.like, dislike = counts.dislike, "recorded feedback");
        Ok(counts)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl Default for FeedbackTally {
    fn default() -> Self {
        Self::new(MemoryBackend::new())
    }
}
