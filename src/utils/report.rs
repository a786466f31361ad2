//! What a pipeline run did to its input.

use serde::Serialize;

use crate::core::pipeline::Stage;

/// Construct closed by the repair stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairKind {
    /// An unterminated fenced code block
    CodeFence,
    /// An unterminated `$$` block
    MathBlock,
    /// A dangling inline `$`
    InlineMath,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    /// Rendered text
    pub content: String,
    /// Whether the input was converted as a full LaTeX document
    pub document_mode: bool,
    /// Stages that changed the text, in execution order
    pub changed_stages: Vec<Stage>,
    /// Constructs closed at the end of the text
    pub repairs: Vec<RepairKind>,
}

impl RenderReport {
    /// Whether the pipeline left its input as it was
    pub fn is_unchanged(&self) -> bool {
        self.changed_stages.is_empty()
    }

    pub fn was_repaired(&self) -> bool {
        !self.repairs.is_empty()
    }
}
