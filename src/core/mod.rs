//! Rendering pipeline
//!
//! Each stage is a pure text-to-text function and is exported for callers
//! that want to run a subset. [`process_markdown_content`] runs them all in
//! order:
//!
//! 1. [`filter_think_tags`]
//! 2. [`process_line_breaks`]
//! 3. [`remove_latex_macros`]
//! 4. [`convert_latex_document`] when [`is_latex_document`], otherwise
//!    [`convert_math_environments`]
//! 5. [`normalize_math_notation`] and [`fix_math_block_indentation`]
//! 6. [`wrap_unwrapped_math`]
//! 7. [`fix_incomplete_code_blocks`] and [`fix_incomplete_math`]

pub mod document;
pub mod line_breaks;
pub mod lines;
pub mod macros;
pub mod math_env;
pub mod notation;
pub mod options;
pub mod pipeline;
pub mod repair;
pub mod think;
pub mod unwrapped;

pub use document::{convert_latex_document, is_latex_document};
pub use line_breaks::process_line_breaks;
pub use lines::{classify, map_outside_code, Line, LineKind, Region};
pub use macros::remove_latex_macros;
pub use math_env::{collapse_escaped_delimiters, convert_delimiters, convert_math_environments};
pub use notation::{fix_math_block_indentation, normalize_math_notation};
pub use options::RenderOptions;
pub use pipeline::{process_markdown_content, process_with_options, process_with_report, Stage};
pub use repair::{
    fix_incomplete_code_blocks, fix_incomplete_inline_math, fix_incomplete_math, is_balanced,
};
pub use think::filter_think_tags;
pub use unwrapped::{count_math_commands, wrap_unwrapped_math};
