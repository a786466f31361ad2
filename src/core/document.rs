//! LaTeX document mode
//!
//! Models sometimes answer with a complete LaTeX source file. Detection looks
//! for document scaffolding; conversion strips it and maps sectioning, text
//! formatting and list environments onto their Markdown equivalents before
//! handing the math over to the environment converter.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::{Captures, Regex};

use super::lines::{classify, map_outside_code};
use super::math_env::convert_math_environments;

/// Markdown heading prefix for each sectioning command
static SECTION_LEVELS: phf::Map<&'static str, &'static str> = phf_map! {
    "section" => "##",
    "subsection" => "###",
    "subsubsection" => "####",
    "paragraph" => "#####",
};

lazy_static! {
    static ref DOCUMENT_CLASS: Regex = Regex::new(r"\\documentclass(?:\[[^\]]*\])?\{[^}]*\}")
        .expect("valid documentclass regex");
    static ref USE_PACKAGE: Regex =
        Regex::new(r"\\usepackage(?:\[[^\]]*\])?\{[^}]*\}").expect("valid usepackage regex");
    static ref DOCUMENT_ENV: Regex =
        Regex::new(r"\\(?:begin|end)\{document\}").expect("valid document env regex");
    static ref MAKE_TITLE: Regex = Regex::new(r"\\maketitle\b").expect("valid maketitle regex");
    static ref TITLE: Regex = Regex::new(r"\\title\{([^}]*)\}").expect("valid title regex");
    static ref BYLINE: Regex =
        Regex::new(r"\\(?:author|date)\{([^}]*)\}").expect("valid byline regex");
    static ref SECTION: Regex =
        Regex::new(r"\\(section|subsection|subsubsection|paragraph)\*?\{([^}]*)\}")
            .expect("valid section regex");
    /// Applied in order so that `\textbf` is consumed before `\text`
    static ref TEXT_FORMATS: Vec<(Regex, &'static str, &'static str)> = vec![
        (Regex::new(r"\\textbf\{([^}]*)\}").expect("valid textbf regex"), "**", "**"),
        (Regex::new(r"\\textit\{([^}]*)\}").expect("valid textit regex"), "*", "*"),
        (Regex::new(r"\\underline\{([^}]*)\}").expect("valid underline regex"), "<u>", "</u>"),
        (Regex::new(r"\\text\{([^}]*)\}").expect("valid text regex"), "", ""),
    ];
    static ref LIST_ENV: Regex =
        Regex::new(r"\\(?:begin|end)\{(?:enumerate|itemize)\}").expect("valid list env regex");
    static ref ITEM: Regex = Regex::new(r"\\item\b\s*").expect("valid item regex");
}

/// Whether the text (outside fenced code) looks like a full LaTeX document.
pub fn is_latex_document(content: &str) -> bool {
    classify(content)
        .iter()
        .filter(|line| !line.is_code())
        .any(|line| {
            line.text.contains("\\documentclass")
                || line.text.contains("\\begin{document}")
                || line.text.contains("\\usepackage")
        })
}

/// Convert a LaTeX document into Markdown + dollar-delimited math.
pub fn convert_latex_document(content: &str) -> String {
    let converted = map_outside_code(content, convert_scaffolding);
    convert_math_environments(&converted)
}

fn convert_scaffolding(text: &str) -> String {
    let mut result = DOCUMENT_CLASS.replace_all(text, "").into_owned();
    result = USE_PACKAGE.replace_all(&result, "").into_owned();
    result = DOCUMENT_ENV.replace_all(&result, "").into_owned();
    result = MAKE_TITLE.replace_all(&result, "").into_owned();
    result = TITLE
        .replace_all(&result, |caps: &Captures| format!("# {}", &caps[1]))
        .into_owned();
    result = BYLINE
        .replace_all(&result, |caps: &Captures| format!("*{}*", &caps[1]))
        .into_owned();

    result = SECTION
        .replace_all(&result, |caps: &Captures| {
            let prefix = SECTION_LEVELS.get(&caps[1]).copied().unwrap_or("##");
            format!("{} {}", prefix, &caps[2])
        })
        .into_owned();

    for (pattern, open, close) in TEXT_FORMATS.iter() {
        result = pattern
            .replace_all(&result, |caps: &Captures| format!("{}{}{}", open, &caps[1], close))
            .into_owned();
    }

    result = LIST_ENV.replace_all(&result, "").into_owned();
    ITEM.replace_all(&result, "- ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert!(is_latex_document("\\documentclass{article}"));
        assert!(is_latex_document("x\n\\begin{document}\ny"));
        assert!(is_latex_document("\\usepackage{amsmath}"));
        assert!(!is_latex_document("plain $x$ text"));
    }

    #[test]
    fn test_detection_ignores_code() {
        assert!(!is_latex_document("```latex\n\\documentclass{article}\n```"));
    }

    #[test]
    fn test_scaffolding_removed() {
        let input = "\\documentclass[12pt]{article}\n\\usepackage[utf8]{inputenc}\n\\begin{document}\n\\maketitle\nHi\n\\end{document}";
        let out = convert_latex_document(input);
        assert!(!out.contains("documentclass"));
        assert!(!out.contains("usepackage"));
        assert!(!out.contains("document}"));
        assert!(!out.contains("maketitle"));
        assert!(out.contains("Hi"));
    }

    #[test]
    fn test_title_block() {
        let out = convert_latex_document("\\title{Notes}\n\\author{Ada}\n\\date{Today}");
        assert_eq!(out, "# Notes\n*Ada*\n*Today*");
    }

    #[test]
    fn test_sections() {
        let out = convert_latex_document(
            "\\section{Intro}\n\\subsection*{Setup}\n\\subsubsection{Deep}\n\\paragraph{Note}",
        );
        assert_eq!(out, "## Intro\n### Setup\n#### Deep\n##### Note");
    }

    #[test]
    fn test_text_formatting() {
        let out = convert_latex_document(
            "\\textbf{bold} \\textit{it} \\underline{under} \\text{plain}",
        );
        assert_eq!(out, "**bold** *it* <u>under</u> plain");
    }

    #[test]
    fn test_lists() {
        let out = convert_latex_document("\\begin{itemize}\n\\item one\n\\item two\n\\end{itemize}");
        assert_eq!(out, "\n- one\n- two\n");
    }

    #[test]
    fn test_itemsep_is_not_an_item() {
        let out = convert_latex_document("\\itemsep");
        assert_eq!(out, "\\itemsep");
    }

    #[test]
    fn test_math_delegated() {
        let out = convert_latex_document("\\begin{equation}\nE = mc^2\n\\end{equation}");
        assert_eq!(out, "\n$$\nE = mc^2\n$$\n");
    }
}
