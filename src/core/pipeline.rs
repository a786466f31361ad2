//! Stage orchestration
//!
//! The pipeline is re-run on the full accumulated text after every streamed
//! chunk, so every stage is a pure `&str -> String` function and the whole
//! pipeline is a fixed point on its own output.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::document::{convert_latex_document, is_latex_document};
use super::line_breaks::process_line_breaks;
use super::macros::remove_latex_macros;
use super::math_env::convert_math_environments;
use super::notation::{fix_math_block_indentation, normalize_math_notation};
use super::options::RenderOptions;
use super::repair::{fix_incomplete_code_blocks, fix_incomplete_inline_math, fix_incomplete_math};
use super::think::filter_think_tags;
use super::unwrapped::wrap_unwrapped_math;
use crate::utils::report::{RenderReport, RepairKind};

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    ThinkFilter,
    LineBreaks,
    MacroStrip,
    DocumentConversion,
    MathEnvironments,
    Notation,
    BlockIndentation,
    BareMath,
    Repair,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ThinkFilter => "think-filter",
            Stage::LineBreaks => "line-breaks",
            Stage::MacroStrip => "macro-strip",
            Stage::DocumentConversion => "document-conversion",
            Stage::MathEnvironments => "math-environments",
            Stage::Notation => "notation",
            Stage::BlockIndentation => "block-indentation",
            Stage::BareMath => "bare-math",
            Stage::Repair => "repair",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text flowing through the stages, plus which stages touched it
struct Run {
    text: String,
    changed: Vec<Stage>,
}

impl Run {
    fn new(content: &str) -> Self {
        Self {
            text: content.to_string(),
            changed: Vec::new(),
        }
    }

    /// Apply one stage; returns whether the text changed.
    fn apply(&mut self, stage: Stage, f: impl FnOnce(&str) -> String) -> bool {
        let next = f(&self.text);
        let changed = next != self.text;
        trace!(%stage, changed, len = next.len(), "stage applied");
        if changed {
            if !self.changed.contains(&stage) {
                self.changed.push(stage);
            }
            self.text = next;
        }
        changed
    }
}

/// Render streamed LLM output with the default options.
pub fn process_markdown_content(content: &str) -> String {
    process_with_options(content, &RenderOptions::default())
}

/// Render streamed LLM output.
pub fn process_with_options(content: &str, options: &RenderOptions) -> String {
    process_with_report(content, options).content
}

/// Render streamed LLM output and describe what the pipeline did.
pub fn process_with_report(content: &str, options: &RenderOptions) -> RenderReport {
    if content.is_empty() {
        return RenderReport::default();
    }

    let mut run = Run::new(content);
    run.apply(Stage::ThinkFilter, filter_think_tags);

    if options.hard_line_breaks {
        run.apply(Stage::LineBreaks, process_line_breaks);
    }
    if options.strip_macros {
        run.apply(Stage::MacroStrip, remove_latex_macros);
    }

    let document_mode = options.convert_documents && is_latex_document(&run.text);
    if document_mode {
        debug!(len = run.text.len(), "latex document detected");
        run.apply(Stage::DocumentConversion, convert_latex_document);
    } else if options.normalize_math {
        run.apply(Stage::MathEnvironments, convert_math_environments);
    }

    if options.normalize_math {
        run.apply(Stage::Notation, normalize_math_notation);
        run.apply(Stage::BlockIndentation, fix_math_block_indentation);
    }
    if options.wrap_bare_math {
        run.apply(Stage::BareMath, wrap_unwrapped_math);
    }

    let mut repairs = Vec::new();
    if options.repair_incomplete {
        if run.apply(Stage::Repair, fix_incomplete_code_blocks) {
            repairs.push(RepairKind::CodeFence);
        }
        if run.apply(Stage::Repair, fix_incomplete_math) {
            repairs.push(RepairKind::MathBlock);
        }
    }
    if options.repair_inline_math && run.apply(Stage::Repair, fix_incomplete_inline_math) {
        repairs.push(RepairKind::InlineMath);
    }
    if !repairs.is_empty() {
        debug!(?repairs, "closed incomplete constructs");
    }

    RenderReport {
        content: run.text,
        document_mode,
        changed_stages: run.changed,
        repairs,
    }
}
