//! Hard line breaks for prose

use super::lines::{classify, Line};

/// Turn single newlines inside prose paragraphs into Markdown hard breaks.
///
/// A prose text line followed by another prose text line gets two trailing
/// spaces. Code, math, structural lines and paragraph ends are left alone.
pub fn process_line_breaks(content: &str) -> String {
    let lines = classify(content);
    let mut out = String::with_capacity(content.len() + lines.len() * 2);

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.text);

        let next_is_text = lines.get(i + 1).is_some_and(Line::is_prose_text);
        if line.is_prose_text() && next_is_text && !line.text.ends_with("  ") {
            out.push_str("  ");
        }
    }

    out
}
