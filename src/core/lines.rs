//! Line classification shared by every line-oriented stage
//!
//! A single pass tags each line with the region it belongs to (prose, fenced
//! code, display math) and its structural kind. Stages never track fence or
//! math state on their own; they consume this classification instead.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LIST_ITEM: Regex = Regex::new(r"^\s*(?:[-*+]|\d+\.)\s").expect("valid list regex");
    static ref HEADING: Regex = Regex::new(r"^#+\s").expect("valid heading regex");
    static ref BLOCKQUOTE: Regex = Regex::new(r"^>\s").expect("valid blockquote regex");
    static ref HORIZONTAL_RULE: Regex = Regex::new(r"^[-*_]{3,}$").expect("valid rule regex");
    static ref MATH_ENV_OPEN: Regex =
        Regex::new(r"^\\begin\{((?:equation|align|gather|multline|eqnarray)\*?)\}")
            .expect("valid math env regex");
}

const FENCE: &str = "```";
const BLOCK_MATH: &str = "$$";

/// Region a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Prose,
    /// Fenced code, including both fence lines
    Code,
    /// Display math, including the delimiter lines
    Math,
}

/// Structural category of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Fence,
    MathDelimiter,
    ListItem,
    Heading,
    Blockquote,
    HorizontalRule,
    TableRow,
    Text,
}

/// A classified line borrowed from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub region: Region,
    pub kind: LineKind,
}

impl Line<'_> {
    /// Plain prose that is neither blank, structural, nor a region boundary.
    pub fn is_prose_text(&self) -> bool {
        self.region == Region::Prose && self.kind == LineKind::Text
    }

    pub fn is_code(&self) -> bool {
        self.region == Region::Code
    }
}

/// How the display-math region currently open was entered
#[derive(Debug, Clone, PartialEq, Eq)]
enum MathOpener {
    Dollars,
    Bracket,
    Environment(String),
}

impl MathOpener {
    fn closes_on(&self, line: &str) -> bool {
        match self {
            MathOpener::Dollars => line.matches(BLOCK_MATH).count() % 2 == 1,
            MathOpener::Bracket => line.contains("\\]"),
            MathOpener::Environment(name) => line.contains(&format!("\\end{{{}}}", name)),
        }
    }

    /// Whether the opening line leaves the region open (`$$x$$` does not).
    fn stays_open(&self, trimmed: &str) -> bool {
        match self {
            MathOpener::Dollars => trimmed.matches(BLOCK_MATH).count() % 2 == 1,
            MathOpener::Bracket => !trimmed[2..].contains("\\]"),
            MathOpener::Environment(_) => !self.closes_on(trimmed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Prose,
    Code,
    Math(MathOpener),
}

/// Classify every line of `text` (split on `\n`).
pub fn classify(text: &str) -> Vec<Line<'_>> {
    let mut state = State::Prose;
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let trimmed = raw.trim();
        let (region, kind) = match &state {
            State::Code => {
                if trimmed.starts_with(FENCE) {
                    state = State::Prose;
                    (Region::Code, LineKind::Fence)
                } else {
                    (Region::Code, content_kind(trimmed))
                }
            }
            State::Math(opener) => {
                if opener.closes_on(raw) {
                    state = State::Prose;
                    (Region::Math, LineKind::MathDelimiter)
                } else {
                    (Region::Math, content_kind(trimmed))
                }
            }
            State::Prose => {
                if trimmed.starts_with(FENCE) {
                    state = State::Code;
                    (Region::Code, LineKind::Fence)
                } else if let Some(opener) = math_opener(trimmed) {
                    if opener.stays_open(trimmed) {
                        state = State::Math(opener);
                    }
                    (Region::Math, LineKind::MathDelimiter)
                } else {
                    (Region::Prose, prose_kind(raw, trimmed))
                }
            }
        };
        lines.push(Line {
            text: raw,
            region,
            kind,
        });
    }

    lines
}

fn math_opener(trimmed: &str) -> Option<MathOpener> {
    if trimmed.starts_with(BLOCK_MATH) {
        return Some(MathOpener::Dollars);
    }
    if trimmed.starts_with("\\[") {
        return Some(MathOpener::Bracket);
    }
    MATH_ENV_OPEN
        .captures(trimmed)
        .map(|caps| MathOpener::Environment(caps[1].to_string()))
}

fn content_kind(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

fn prose_kind(raw: &str, trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        LineKind::Blank
    } else if LIST_ITEM.is_match(raw) {
        LineKind::ListItem
    } else if HEADING.is_match(trimmed) {
        LineKind::Heading
    } else if BLOCKQUOTE.is_match(trimmed) {
        LineKind::Blockquote
    } else if HORIZONTAL_RULE.is_match(trimmed) {
        LineKind::HorizontalRule
    } else if trimmed.starts_with('|') {
        LineKind::TableRow
    } else {
        LineKind::Text
    }
}

/// Apply `f` to every maximal run of lines outside fenced code.
///
/// Code runs, fences included, are copied through unchanged.
pub fn map_outside_code<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    let lines = classify(text);
    if !lines.iter().any(Line::is_code) {
        return f(text);
    }

    let mut segments: Vec<String> = Vec::new();
    let mut start = 0;
    while start < lines.len() {
        let in_code = lines[start].is_code();
        let mut end = start;
        while end < lines.len() && lines[end].is_code() == in_code {
            end += 1;
        }
        let joined = lines[start..end]
            .iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n");
        segments.push(if in_code { joined } else { f(&joined) });
        start = end;
    }

    segments.join("\n")
}
