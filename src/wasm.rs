//! WASM bindings for katexify
//!
//! This module exposes the rendering pipeline to JavaScript so a web client
//! can call it on every streamed chunk.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::RenderOptions;

/// Safely serialize a value to JsValue, returning an error object on failure.
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = ErrorResult {
            success: false,
            error: format!("Serialization error: {}", e),
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

#[derive(Serialize)]
struct ErrorResult {
    success: bool,
    error: String,
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render cumulative model output with the default options
///
/// # Arguments
/// * `input` - All text received so far for the current response
///
/// # Returns
/// Markdown with dollar-delimited math
#[wasm_bindgen(js_name = "processMarkdownContent")]
pub fn process_markdown_content_wasm(input: &str) -> String {
    crate::process_markdown_content(input)
}

/// Render with options and return the full report
///
/// `options` is a plain object with camelCase fields (`hardLineBreaks`,
/// `wrapBareMath`, ...); missing fields take their defaults and an invalid
/// value falls back to the defaults entirely.
#[wasm_bindgen(js_name = "processWithReport")]
pub fn process_with_report_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: RenderOptions = if options.is_undefined() || options.is_null() {
        RenderOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_default()
    };
    to_js_value(&crate::process_with_report(input, &opts))
}

/// Whether the text (outside code) is a full LaTeX document
#[wasm_bindgen(js_name = "isLatexDocument")]
pub fn is_latex_document_wasm(input: &str) -> bool {
    crate::core::is_latex_document(input)
}

/// Get version information
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
