//! Rendering options

use serde::{Deserialize, Serialize};

/// Switches for the optional pipeline stages
///
/// The think-tag filter always runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Turn single newlines between prose lines into Markdown hard breaks
    /// Default: true
    pub hard_line_breaks: bool,

    /// Remove `\newcommand`, `\def` and friends
    /// Default: true
    pub strip_macros: bool,

    /// Convert full LaTeX documents (`\documentclass`, sections, lists)
    /// Default: true
    pub convert_documents: bool,

    /// Rewrite math environments and delimiters into dollar form, trim
    /// delimiter padding and unindent `$$` lines
    /// Default: true
    pub normalize_math: bool,

    /// Wrap bare LaTeX commands found in prose
    /// Default: true
    pub wrap_bare_math: bool,

    /// Close unterminated code fences and `$$` blocks
    /// Default: true
    pub repair_incomplete: bool,

    /// Close a dangling inline `$`
    /// Default: false
    pub repair_inline_math: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hard_line_breaks: true,
            strip_macros: true,
            convert_documents: true,
            normalize_math: true,
            wrap_bare_math: true,
            repair_incomplete: true,
            repair_inline_math: false,
        }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the last render of a finished response, where a dangling
    /// `$` can no longer be closed by text still to come
    pub fn final_pass() -> Self {
        Self {
            repair_inline_math: true,
            ..Self::default()
        }
    }

    /// Only hide reasoning and close open constructs
    pub fn minimal() -> Self {
        Self {
            hard_line_breaks: false,
            strip_macros: false,
            convert_documents: false,
            normalize_math: false,
            wrap_bare_math: false,
            repair_incomplete: true,
            repair_inline_math: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::new();
        assert!(options.hard_line_breaks);
        assert!(options.wrap_bare_math);
        assert!(!options.repair_inline_math);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"wrapBareMath": false}"#).expect("valid options");
        assert_eq!(
            options,
            RenderOptions {
                wrap_bare_math: false,
                ..RenderOptions::default()
            }
        );
    }
}
