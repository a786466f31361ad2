//! Delimiter whitespace and indentation fixes

use lazy_static::lazy_static;
use regex::Regex;

use super::lines::{classify, map_outside_code};
use super::math_env::convert_delimiters;

lazy_static! {
    static ref BLOCK_INDENT: Regex = Regex::new(r"^[ \t]+\$\$").expect("valid indent regex");
    static ref BLOCK_TRAILING: Regex = Regex::new(r"\$\$[ \t]+$").expect("valid trailing regex");
}

/// Normalize dollar-delimited math and convert any leftover `\(…\)` / `\[…\]`.
pub fn normalize_math_notation(content: &str) -> String {
    map_outside_code(content, |text| {
        let trimmed = text
            .split('\n')
            .map(|line| match trim_block_padding(line) {
                Some(block) => block,
                None => trim_inline_padding(line),
            })
            .collect::<Vec<_>>()
            .join("\n");
        convert_delimiters(&trimmed)
    })
}

/// `$$  x  $$` on a line of its own becomes `$$x$$`.
fn trim_block_padding(line: &str) -> Option<String> {
    let body = line.trim_end();
    let content = body.trim_start();
    if content.len() < 4 || !content.starts_with("$$") || !content.ends_with("$$") {
        return None;
    }
    let inner = &content[2..content.len() - 2];
    if inner.contains('$') {
        return None;
    }
    let indent = &body[..body.len() - content.len()];
    Some(format!("{}$${}$$", indent, inner.trim()))
}

/// Trim padding inside `$ … $` pairs.
///
/// A pair opened by whitespace is always math. Padding before the closer
/// alone is trimmed only when the body does not start with a digit and no
/// digit follows the closer, so `$5 and $10` stays as written.
fn trim_inline_padding(line: &str) -> String {
    if !line.contains('$') {
        return line.to_string();
    }

    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' if bytes.get(i + 1) == Some(&b'$') => i += 2,
            b'$' => {
                let Some(close) = find_inline_close(bytes, i + 1) else {
                    break;
                };
                let inner = &line[i + 1..close];
                if is_padded_math(inner, &bytes[close + 1..]) {
                    out.push_str(&line[copied..i]);
                    out.push('$');
                    out.push_str(inner.trim());
                    out.push('$');
                    copied = close + 1;
                }
                i = close + 1;
            }
            _ => i += 1,
        }
    }
    out.push_str(&line[copied..]);
    out
}

fn is_padded_math(inner: &str, after_close: &[u8]) -> bool {
    let is_blank = |c: char| c == ' ' || c == '\t';
    if inner.trim().is_empty() {
        return false;
    }
    if inner.starts_with(is_blank) {
        return true;
    }
    inner.ends_with(is_blank)
        && !inner.starts_with(|c: char| c.is_ascii_digit())
        && !after_close.first().is_some_and(u8::is_ascii_digit)
}

fn find_inline_close(bytes: &[u8], mut i: usize) -> Option<usize> {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' if bytes.get(i + 1) == Some(&b'$') => return None,
            b'$' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Strip indentation before `$$` and trailing blanks after a line-final `$$`.
///
/// Four spaces of indentation would turn a math block into an indented code
/// block in Markdown.
pub fn fix_math_block_indentation(content: &str) -> String {
    let lines = classify(content);
    lines
        .iter()
        .map(|line| {
            if line.is_code() || !line.text.contains("$$") {
                return line.text.to_string();
            }
            let stripped = BLOCK_INDENT.replace(line.text, "$$$$");
            BLOCK_TRAILING.replace(&stripped, "$$$$").into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
