//! Closers for constructs cut off mid-stream
//!
//! Counts are taken over the whole text, fenced code included, so that the
//! number of fences and `$$` markers in the output is always even.

use super::lines::{classify, Region};

const FENCE: &str = "```";
const BLOCK_MATH: &str = "$$";

/// Whether fences and `$$` markers both come in pairs.
pub fn is_balanced(content: &str) -> bool {
    content.matches(FENCE).count() % 2 == 0 && content.matches(BLOCK_MATH).count() % 2 == 0
}

/// Close an unterminated fenced code block.
pub fn fix_incomplete_code_blocks(content: &str) -> String {
    if content.matches(FENCE).count() % 2 == 1 {
        format!("{}\n{}", content, FENCE)
    } else {
        content.to_string()
    }
}

/// Close an unterminated `$$` block.
pub fn fix_incomplete_math(content: &str) -> String {
    if content.matches(BLOCK_MATH).count() % 2 == 1 {
        format!("{}{}", content, BLOCK_MATH)
    } else {
        content.to_string()
    }
}

/// Close a dangling inline `$` on prose lines.
///
/// Escaped `\$` and `$$` are not counted. Nothing is appended when the text
/// already ends in `$`, since that would form a new `$$` marker.
pub fn fix_incomplete_inline_math(content: &str) -> String {
    if content.ends_with('$') {
        return content.to_string();
    }
    let singles: usize = classify(content)
        .iter()
        .filter(|line| line.region == Region::Prose)
        .map(|line| count_single_dollars(line.text))
        .sum();
    if singles % 2 == 1 {
        format!("{}$", content)
    } else {
        content.to_string()
    }
}

fn count_single_dollars(line: &str) -> usize {
    let bytes = line.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' if bytes.get(i + 1) == Some(&b'$') => i += 2,
            b'$' => {
                count += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_check() {
        assert!(is_balanced("```\nx\n```\n$$y$$"));
        assert!(!is_balanced("```\nx"));
        assert!(!is_balanced("$$\ny"));
    }

    #[test]
    fn test_open_fence_closed() {
        assert_eq!(
            fix_incomplete_code_blocks("```python\nprint(1)"),
            "```python\nprint(1)\n```"
        );
        assert_eq!(fix_incomplete_code_blocks("```\nx\n```"), "```\nx\n```");
    }

    #[test]
    fn test_open_math_closed() {
        assert_eq!(fix_incomplete_math("$$\nx^2 +"), "$$\nx^2 +$$");
        assert_eq!(fix_incomplete_math("$$x$$"), "$$x$$");
    }

    #[test]
    fn test_inline_dollar_closed() {
        assert_eq!(fix_incomplete_inline_math("so $x + y"), "so $x + y$");
        assert_eq!(fix_incomplete_inline_math("so $x$ and"), "so $x$ and");
    }

    #[test]
    fn test_inline_ignores_escapes_blocks_and_code() {
        let input = "cost \\$5\n```\necho $HOME\n```\n$$a$$";
        assert_eq!(fix_incomplete_inline_math(input), input);
    }

    #[test]
    fn test_inline_never_forms_block_marker() {
        assert_eq!(fix_incomplete_inline_math("total $"), "total $");
    }
}
