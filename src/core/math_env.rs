//! Math environment conversion
//!
//! KaTeX (through remark-math) only understands dollar-delimited math. Display
//! environments become `$$` blocks; `align` keeps its alignment by being
//! rewritten to `aligned`, which KaTeX supports inside a block.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::lines::map_outside_code;

lazy_static! {
    static ref ALIGN_ENV: Regex = Regex::new(r"(?s)\\begin\{align\*?\}(.*?)\\end\{align\*?\}")
        .expect("valid align regex");
    static ref EQUATION_ENV: Regex =
        Regex::new(r"(?s)\\begin\{(equation|gather)\*?\}(.*?)\\end\{(?:equation|gather)\*?\}")
            .expect("valid equation regex");
    static ref SPLIT_ENV: Regex =
        Regex::new(r"(?s)\\begin\{split\}(.*?)\\end\{split\}").expect("valid split regex");
    static ref ESCAPED_PAREN_PAIR: Regex = Regex::new(r"(?s)\\{2,}\((.*?)\\{2,}\)")
        .expect("valid escaped paren regex");
    static ref ESCAPED_BRACKET_PAIR: Regex = Regex::new(r"(?s)\\{2,}\[(.*?)\\{2,}\]")
        .expect("valid escaped bracket regex");
    // The leading group stands in for a look-behind: a delimiter right after
    // another backslash is a `\\` line break, not an opener. It consumes the
    // byte before the opener, so adjacent pairs need another round.
    static ref INLINE_PAREN: Regex =
        Regex::new(r"(?s)(^|[^\\])\\\((.*?)\\\)").expect("valid inline math regex");
    static ref DISPLAY_BRACKET: Regex =
        Regex::new(r"(?s)(^|[^\\])\\\[(.*?)\\\]").expect("valid display math regex");
}

/// Rewrite LaTeX math environments and `\(…\)` / `\[…\]` into dollar form.
pub fn convert_math_environments(content: &str) -> String {
    map_outside_code(content, |text| {
        let mut result = ALIGN_ENV
            .replace_all(text, |caps: &Captures| {
                format!(
                    "\n$$\n\\begin{{aligned}}{}\\end{{aligned}}\n$$\n",
                    caps[1].trim()
                )
            })
            .into_owned();

        result = EQUATION_ENV
            .replace_all(&result, |caps: &Captures| {
                format!("\n$$\n{}\n$$\n", caps[2].trim())
            })
            .into_owned();

        result = SPLIT_ENV
            .replace_all(&result, |caps: &Captures| {
                format!("\\begin{{aligned}}{}\\end{{aligned}}", &caps[1])
            })
            .into_owned();

        // `cases` is supported natively and passes through.
        convert_delimiters(&result)
    })
}

/// Collapse doubly escaped delimiter pairs back to single escapes.
///
/// `\\(x\\)` is a common artifact of JSON or Markdown escaping upstream.
pub fn collapse_escaped_delimiters(text: &str) -> String {
    let result = ESCAPED_PAREN_PAIR.replace_all(text, |caps: &Captures| {
        format!("\\({}\\)", &caps[1])
    });
    ESCAPED_BRACKET_PAIR
        .replace_all(&result, |caps: &Captures| format!("\\[{}\\]", &caps[1]))
        .into_owned()
}

/// `\(…\)` → `$…$` and `\[…\]` → a `$$` block on its own lines.
pub fn convert_delimiters(text: &str) -> String {
    let collapsed = collapse_escaped_delimiters(text);
    let inline = replace_until_stable(&INLINE_PAREN, collapsed, inline_math);
    replace_until_stable(&DISPLAY_BRACKET, inline, display_math)
}

fn inline_math(caps: &Captures) -> String {
    format!("{}${}$", &caps[1], &caps[2])
}

fn display_math(caps: &Captures) -> String {
    format!("{}\n$$\n{}\n$$\n", &caps[1], &caps[2])
}

/// Every round removes at least one delimiter pair, so this terminates.
fn replace_until_stable(regex: &Regex, mut text: String, rep: fn(&Captures) -> String) -> String {
    loop {
        let next = regex.replace_all(&text, rep).into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}
