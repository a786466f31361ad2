//! Reasoning markup filter

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref THINK_BLOCK: Regex =
        Regex::new(r"(?is)<think>.*?</think>").expect("valid think block regex");
    static ref THINK_OPEN: Regex = Regex::new(r"(?i)<think>").expect("valid think tag regex");
}

/// Remove `<think>…</think>` spans.
///
/// An unterminated `<think>` hides everything after it: the output is cut at
/// the tag so a reasoning block that is still streaming never leaks.
pub fn filter_think_tags(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let processed = THINK_BLOCK.replace_all(content, "");
    match THINK_OPEN.find(&processed) {
        Some(open) => processed[..open.start()].to_string(),
        None => processed.into_owned(),
    }
}
