//! # Katexify
//!
//! Turns the text a chat model is streaming (cumulative, possibly cut off in
//! the middle of a code fence, a `$$` block or a macro definition) into
//! Markdown with dollar-delimited math that a KaTeX renderer accepts.
//!
//! ## Features
//!
//! - **Reasoning filter**: hides `<think>…</think>`, including a block that is
//!   still open
//! - **LaTeX normalization**: environments, `\(…\)` / `\[…\]`, macro
//!   definitions and whole `\documentclass` documents
//! - **Bare math detection**: wraps `\alpha + \beta` written without
//!   delimiters
//! - **Streaming safe**: fences and `$$` blocks are always balanced, so every
//!   intermediate render is valid
//!
//! ## Usage
//!
//! ```rust
//! use katexify::process_markdown_content;
//!
//! let rendered = process_markdown_content("Area: \\(\\pi r^2\\)");
//! assert_eq!(rendered, "Area: $\\pi r^2$");
//!
//! // A block cut off mid-stream is closed for display
//! assert_eq!(process_markdown_content("$$\nx^2"), "$$\nx^2$$");
//! ```
//!
//! Streaming a response chunk by chunk:
//!
//! ```rust
//! use katexify::{RenderOptions, ResponseStream};
//!
//! let mut stream = ResponseStream::new(RenderOptions::default());
//! stream.push_bytes(b"```rust\nfn main() {");
//! assert!(stream.rendered().ends_with("\n```"));
//! stream.push_bytes(b"}\n```");
//! assert_eq!(stream.finish(), "```rust\nfn main() {}\n```");
//! ```

pub mod core;
pub mod data;
pub mod stream;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::{
    process_markdown_content, process_with_options, process_with_report, RenderOptions, Stage,
};
pub use stream::{ResponseStream, StreamDecoder};
pub use utils::{Error, RenderReport, RepairKind, Result};

pub use katexify_settings as settings;
