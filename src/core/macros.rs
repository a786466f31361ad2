//! Macro definition stripper
//!
//! KaTeX cannot evaluate `\newcommand`, `\renewcommand`, `\providecommand` or
//! `\def`, and a raw definition renders as garbage. Definitions are dropped
//! outright; uses of the defined macros are left for the renderer.

use super::lines::map_outside_code;

const DEFINITION_COMMANDS: &[(&str, bool)] = &[
    ("\\newcommand", false),
    ("\\renewcommand", false),
    ("\\providecommand", false),
    ("\\def", true),
];

/// Outcome of scanning a candidate definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// A full definition ending at this byte offset
    Complete(usize),
    /// The input ended inside the definition
    Incomplete,
    /// Not a definition after all
    NotDefinition,
}

/// Remove macro definitions outside fenced code.
pub fn remove_latex_macros(content: &str) -> String {
    map_outside_code(content, strip_definitions)
}

fn strip_definitions(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('\\') {
        let start = pos + offset;
        // A definition never spans a paragraph break.
        let paragraph_end = text[start..]
            .find("\n\n")
            .map_or(text.len(), |i| start + i);
        match scan_definition(&text[..paragraph_end], start) {
            Scan::Complete(end) => {
                out.push_str(&text[copied..start]);
                copied = end;
                pos = end;
            }
            // A definition still being streamed is hidden until it completes.
            Scan::Incomplete if paragraph_end == text.len() => {
                out.push_str(&text[copied..start]);
                return out;
            }
            Scan::Incomplete | Scan::NotDefinition => pos = start + 1,
        }
    }
    out.push_str(&text[copied..]);
    out
}

fn scan_definition(text: &str, start: usize) -> Scan {
    let tail = &text[start..];
    let Some(&(command, is_def)) = DEFINITION_COMMANDS.iter().find(|(cmd, _)| {
        tail.starts_with(cmd)
            && !tail[cmd.len()..]
                .bytes()
                .next()
                .is_some_and(|b| b.is_ascii_alphabetic())
    }) else {
        return Scan::NotDefinition;
    };

    let bytes = text.as_bytes();
    let mut pos = start + command.len();

    if is_def {
        pos = skip_whitespace(bytes, pos);
        match bytes.get(pos) {
            None => return Scan::Incomplete,
            Some(b'\\') => pos = skip_control_word(bytes, pos),
            Some(_) => return Scan::NotDefinition,
        }
        // Parameter text such as `#1#2`
        while pos < bytes.len() && (bytes[pos] == b'#' || bytes[pos].is_ascii_digit()) {
            pos += 1;
        }
    } else {
        if bytes.get(pos) == Some(&b'*') {
            pos += 1;
        }
        pos = skip_whitespace(bytes, pos);
        match bytes.get(pos) {
            None => return Scan::Incomplete,
            Some(b'{') => match group_end(bytes, pos) {
                Some(end) => pos = end,
                None => return Scan::Incomplete,
            },
            Some(b'\\') => pos = skip_control_word(bytes, pos),
            Some(_) => return Scan::NotDefinition,
        }
        // Argument count and optional default
        for _ in 0..2 {
            pos = skip_whitespace(bytes, pos);
            if bytes.get(pos) != Some(&b'[') {
                break;
            }
            match text[pos..].find(']') {
                Some(close) => pos += close + 1,
                None => return Scan::Incomplete,
            }
        }
    }

    pos = skip_whitespace(bytes, pos);
    match bytes.get(pos) {
        None => Scan::Incomplete,
        Some(b'{') => match group_end(bytes, pos) {
            Some(end) => Scan::Complete(end),
            None => Scan::Incomplete,
        },
        Some(_) => Scan::NotDefinition,
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Skip `\name` (or a single-character control symbol) starting at `pos`.
fn skip_control_word(bytes: &[u8], pos: usize) -> usize {
    let mut end = pos + 1;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    if end == pos + 1 && end < bytes.len() && bytes[end].is_ascii() {
        end += 1;
    }
    end
}

/// Byte offset just past the brace group opening at `open`, or `None` if the
/// group is still open at end of input.
fn group_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newcommand_removed() {
        let out = remove_latex_macros("\\newcommand{\\R}{\\mathbb{R}}\nLet $x \\in \\R$.");
        assert_eq!(out, "\nLet $x \\in \\R$.");
    }

    #[test]
    fn test_renewcommand_with_args() {
        let out = remove_latex_macros("a\\renewcommand{\\vec}[1]{\\mathbf{#1}}b");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_starred_and_bare_name() {
        let out = remove_latex_macros("\\newcommand*\\abs[1]{\\left|#1\\right|}x");
        assert_eq!(out, "x");
    }

    #[test]
    fn test_def_with_parameters() {
        let out = remove_latex_macros("\\def\\pair#1#2{(#1, #2)}done");
        assert_eq!(out, "done");
    }

    #[test]
    fn test_prose_mention_kept() {
        let input = "Use \\newcommand to define shortcuts.";
        assert_eq!(remove_latex_macros(input), input);
    }

    #[test]
    fn test_similar_command_kept() {
        let input = "\\definecolor{red}{rgb}{1,0,0}";
        assert_eq!(remove_latex_macros(input), input);
    }

    #[test]
    fn test_unfinished_definition_hidden() {
        let out = remove_latex_macros("intro\n\\newcommand{\\R}{\\mathbb{R");
        assert_eq!(out, "intro\n");
    }

    #[test]
    fn test_unclosed_definition_keeps_later_paragraphs() {
        let input = "Define \\newcommand{\\R}{\\mathbb{R}\n\nThe answer is 42.\n\nSee you.";
        assert_eq!(remove_latex_macros(input), input);
    }

    #[test]
    fn test_definition_inside_later_paragraph_still_removed() {
        let out = remove_latex_macros("\\newcommand{\\A}{\n\ntext \\def\\b{x} end");
        assert_eq!(out, "\\newcommand{\\A}{\n\ntext  end");
    }

    #[test]
    fn test_definition_in_code_kept() {
        let input = "```latex\n\\newcommand{\\R}{\\mathbb{R}}\n```";
        assert_eq!(remove_latex_macros(input), input);
    }
}
