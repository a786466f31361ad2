//! Bare LaTeX detection
//!
//! Models often write `\alpha + \beta = \gamma` with no delimiters at all.
//! Each prose line is scored with a few cheap features; lines that are mostly
//! math are wrapped whole as a `$$` block, lines that mix prose and math get
//! each command span wrapped in `$…$`.

use lazy_static::lazy_static;
use regex::{Match, Regex};

use super::lines::{classify, Line, LineKind, Region};
use crate::data::commands::MATH_COMMANDS;

/// Braced arguments and sub/superscripts that follow a command name. NUL is
/// the span mask and never belongs to an argument.
const COMMAND_ARGS: &str = r"(?:[_^]?\{[^{}\n\x00]*\}|[_^][A-Za-z0-9])*";

lazy_static! {
    static ref MATH_COMMAND: Regex = {
        let mut names: Vec<&str> = MATH_COMMANDS.to_vec();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\\(?:{})", alternation)).expect("valid command catalog regex")
    };
    static ref COMMAND_WITH_ARGS: Regex =
        Regex::new(&format!(r"\\[a-zA-Z]+{}", COMMAND_ARGS)).expect("valid command regex");
    static ref MATH_SYMBOLS: Regex =
        Regex::new(r"[=+\-*/^_<>|()\[\]{}\s,.;:!?]").expect("valid symbol regex");
    static ref OPERATORS: Regex = Regex::new(r"[=+\-*/^_<>|]").expect("valid operator regex");
    static ref INLINE_WRAPPED: Regex = Regex::new(r"^\$[^$].*[^$]\$$").expect("valid inline regex");
    static ref INLINE_CODE: Regex = Regex::new(r"`[^`]*`").expect("valid code span regex");
    static ref EXISTING_MATH: Regex =
        Regex::new(r"\$\$.*?\$\$|\$[^$]*\$").expect("valid existing math regex");
    static ref COMMAND_SPAN: Regex = Regex::new(&format!(
        r"(?:\\[a-zA-Z]+{}[=+\-*/^_<>|()\[\]\s]*)+",
        COMMAND_ARGS
    ))
    .expect("valid span regex");
}

/// Measurements that decide whether a line is math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineFeatures {
    commands: usize,
    has_operators: bool,
    cjk: usize,
    residual: usize,
}

impl LineFeatures {
    fn measure(masked: &str) -> Self {
        let without_commands = COMMAND_WITH_ARGS.replace_all(masked, "");
        let residual = MATH_SYMBOLS.replace_all(&without_commands, "").chars().count();
        Self {
            commands: count_math_commands(masked),
            has_operators: OPERATORS.is_match(masked),
            cjk: masked.chars().filter(|c| is_cjk(*c)).count(),
            residual,
        }
    }

    fn is_math(&self) -> bool {
        self.commands >= 2
            || (self.commands >= 1 && self.has_operators && self.cjk == 0)
            || (self.commands >= 1 && self.residual <= 2 && self.cjk == 0)
    }

    fn has_significant_text(&self) -> bool {
        self.residual > 3 || self.cjk > 0
    }
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Number of catalog commands in `text`.
pub fn count_math_commands(text: &str) -> usize {
    MATH_COMMAND
        .find_iter(text)
        .filter(|m| is_whole_command(text, m))
        .count()
}

/// `\in` inside `\infinity` is not a match; names ending in `}` need no check.
fn is_whole_command(text: &str, m: &Match<'_>) -> bool {
    if !m.as_str().ends_with(|c: char| c.is_ascii_alphabetic()) {
        return true;
    }
    !text[m.end()..].starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Wrap bare LaTeX on prose lines in math delimiters.
pub fn wrap_unwrapped_math(content: &str) -> String {
    if !content.contains('\\') {
        return content.to_string();
    }
    classify(content)
        .iter()
        .map(|line| {
            if line.region == Region::Prose {
                wrap_line(line)
            } else {
                line.text.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &Line<'_>) -> String {
    let text = line.text;
    let trimmed = text.trim();
    if !trimmed.contains('\\') || is_already_wrapped(trimmed) {
        return text.to_string();
    }

    let masked = mask_existing_spans(text, ' ');
    let features = LineFeatures::measure(&masked);
    if !features.is_math() {
        return text.to_string();
    }

    // Headings and list items keep their marker outside the math.
    if line.kind == LineKind::Text && !features.has_significant_text() {
        let indent = &text[..text.len() - text.trim_start().len()];
        return format!("{}$${}$$", indent, trimmed);
    }
    // Spans must stop at masked regions, so mask with a byte no span matches.
    wrap_command_spans(text, &mask_existing_spans(text, '\0'))
}

fn is_already_wrapped(trimmed: &str) -> bool {
    (trimmed.starts_with("$$") && trimmed.ends_with("$$")) || INLINE_WRAPPED.is_match(trimmed)
}

/// Blank out inline code and existing math byte-for-byte with the ASCII
/// `fill`, so offsets into the masked line are offsets into the original.
fn mask_existing_spans(line: &str, fill: char) -> String {
    let mut ranges: Vec<(usize, usize)> = INLINE_CODE
        .find_iter(line)
        .map(|m| (m.start(), m.end()))
        .collect();
    let code_masked = blank_ranges(line, &ranges, fill);
    ranges.extend(
        EXISTING_MATH
            .find_iter(&code_masked)
            .map(|m| (m.start(), m.end())),
    );
    ranges.sort_unstable();
    blank_ranges(line, &ranges, fill)
}

fn blank_ranges(line: &str, ranges: &[(usize, usize)], fill: char) -> String {
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    for &(start, end) in ranges {
        if start < copied {
            continue;
        }
        out.push_str(&line[copied..start]);
        out.extend(std::iter::repeat(fill).take(end - start));
        copied = end;
    }
    out.push_str(&line[copied..]);
    out
}

fn wrap_command_spans(line: &str, masked: &str) -> String {
    let spans: Vec<(usize, usize)> = COMMAND_SPAN
        .find_iter(masked)
        .filter_map(|m| {
            let end = m.start() + m.as_str().trim_end().len();
            let before = line[..m.start()].trim_end();
            let after = line[m.end()..].trim_start();
            // An argument left unconsumed holds masked math or code.
            let open_argument = masked[m.end()..].starts_with('{');
            if before.ends_with('$') || after.starts_with('$') || open_argument {
                None
            } else {
                Some((m.start(), end))
            }
        })
        .collect();

    let mut out = line.to_string();
    for &(start, end) in spans.iter().rev() {
        out.replace_range(start..end, &format!("${}$", &line[start..end]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_rejects_prefix_matches() {
        assert_eq!(count_math_commands("\\alpha \\in \\infinity"), 2);
        assert_eq!(count_math_commands("\\begin{aligned}x"), 1);
        assert_eq!(count_math_commands("\\foo \\bar"), 1);
    }

    #[test]
    fn test_longest_name_wins() {
        assert_eq!(count_math_commands("\\varepsilon"), 1);
        assert_eq!(count_math_commands("\\leftrightarrow"), 1);
    }

    #[test]
    fn test_pure_math_line_block_wrapped() {
        assert_eq!(
            wrap_unwrapped_math("\\alpha + \\beta = \\gamma"),
            "$$\\alpha + \\beta = \\gamma$$"
        );
    }

    #[test]
    fn test_indent_preserved() {
        assert_eq!(
            wrap_unwrapped_math("  \\sum_{i=1}^n i = \\frac{n(n+1)}{2}"),
            "  $$\\sum_{i=1}^n i = \\frac{n(n+1)}{2}$$"
        );
    }

    #[test]
    fn test_short_residual_block_wrapped() {
        assert_eq!(wrap_unwrapped_math("x \\in A"), "$$x \\in A$$");
    }

    #[test]
    fn test_cjk_single_command_untouched() {
        let input = "这是一个 \\alpha 测试";
        assert_eq!(wrap_unwrapped_math(input), input);
    }

    #[test]
    fn test_cjk_with_commands_wrapped_inline() {
        assert_eq!(
            wrap_unwrapped_math("当 \\alpha 和 \\beta 相等"),
            "当 $\\alpha$ 和 $\\beta$ 相等"
        );
    }

    #[test]
    fn test_prose_with_single_command_untouched() {
        let input = "Then x \\in A holds";
        assert_eq!(wrap_unwrapped_math(input), input);
    }

    #[test]
    fn test_mixed_line_wraps_spans() {
        assert_eq!(
            wrap_unwrapped_math("The ratio \\frac{a}{b} and \\sqrt{2} appear here"),
            "The ratio $\\frac{a}{b}$ and $\\sqrt{2}$ appear here"
        );
    }

    #[test]
    fn test_list_item_keeps_marker() {
        assert_eq!(
            wrap_unwrapped_math("- \\alpha + \\beta"),
            "- $\\alpha + \\beta$"
        );
    }

    #[test]
    fn test_already_wrapped_untouched() {
        for input in ["$$\\alpha + \\beta$$", "$\\alpha + \\beta$"] {
            assert_eq!(wrap_unwrapped_math(input), input);
        }
    }

    #[test]
    fn test_existing_inline_math_masked() {
        let input = "Given $\\alpha$ and $\\beta$ we proceed with the proof";
        assert_eq!(wrap_unwrapped_math(input), input);
    }

    #[test]
    fn test_span_does_not_swallow_existing_math() {
        let out = wrap_unwrapped_math("We take \\alpha and \\beta then $x$ \\gamma right away");
        assert_eq!(out, "We take $\\alpha$ and $\\beta$ then $x$ \\gamma right away");
    }

    #[test]
    fn test_span_does_not_enter_argument_with_math() {
        let input = "The \\alpha value is \\mathrm{a $b$ c} more words here";
        let out = wrap_unwrapped_math(input);
        assert_eq!(out, "The $\\alpha$ value is \\mathrm{a $b$ c} more words here");
        assert_eq!(wrap_unwrapped_math(&out), out);
    }

    #[test]
    fn test_open_inline_math_not_rewrapped() {
        let input = "The value is $\\alpha + \\beta";
        assert_eq!(wrap_unwrapped_math(input), input);
    }

    #[test]
    fn test_inline_code_masked() {
        let input = "Type `\\alpha + \\beta` in the editor";
        assert_eq!(wrap_unwrapped_math(input), input);
    }

    #[test]
    fn test_code_and_math_regions_skipped() {
        let input = "```\n\\alpha + \\beta\n```\n$$\n\\alpha + \\beta\n$$";
        assert_eq!(wrap_unwrapped_math(input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = "The ratio \\frac{a}{b} and \\sqrt{2} appear here\n\\alpha = \\beta";
        let once = wrap_unwrapped_math(input);
        assert_eq!(wrap_unwrapped_math(&once), once);
    }
}
