//! Property tests for the pipeline invariants

use katexify::{
    core::{filter_think_tags, is_balanced},
    process_markdown_content, process_with_options, RenderOptions, ResponseStream,
};
use proptest::prelude::*;

/// Fragments that exercise every stage when concatenated in random order
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("```".to_string()),
        Just("```rust\n".to_string()),
        Just("$$".to_string()),
        Just("$".to_string()),
        Just("\\$".to_string()),
        Just("\n".to_string()),
        Just("\n\n".to_string()),
        Just("    ".to_string()),
        Just("\\(".to_string()),
        Just("\\)".to_string()),
        Just("\\[".to_string()),
        Just("\\]".to_string()),
        Just("\\\\".to_string()),
        Just("\\alpha".to_string()),
        Just(" + \\beta = ".to_string()),
        Just("\\frac{a}{b}".to_string()),
        Just("\\begin{align}".to_string()),
        Just("\\end{align}".to_string()),
        Just("\\begin{equation*}".to_string()),
        Just("\\end{equation*}".to_string()),
        Just("\\newcommand{\\R}{\\mathbb{R}}".to_string()),
        Just("\\newcommand{\\Q}{".to_string()),
        Just("\\documentclass{article}".to_string()),
        Just("\\section{Intro}".to_string()),
        Just("\\item ".to_string()),
        Just("<think>".to_string()),
        Just("</think>".to_string()),
        Just("- ".to_string()),
        Just("# ".to_string()),
        Just("`".to_string()),
        Just("中文测试".to_string()),
        "[a-z ]{1,8}",
    ]
}

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
}

/// Self-contained paragraphs of a finished answer
fn complete_block() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}( [a-z]{1,8}){0,5}",
        Just("first line\nsecond line".to_string()),
        Just("where $x_i$ is small".to_string()),
        Just("so $ x^2 $ grows and $y $ shrinks".to_string()),
        Just("Area \\(\\pi r^2\\) here".to_string()),
        Just("\\[b^2\\]".to_string()),
        Just("$$\nE = mc^2\n$$".to_string()),
        Just("```rust\nlet x = 1;\n```".to_string()),
        Just("\\alpha + \\beta = \\gamma".to_string()),
        Just("The ratio \\frac{a}{b} and \\sqrt{2} appear here".to_string()),
        Just("The \\alpha value is \\mathrm{a $b$ c} more words here".to_string()),
        Just("# Title".to_string()),
        Just("- \\alpha + \\beta".to_string()),
        Just("这是一个 \\alpha 测试".to_string()),
        Just("\\begin{align}\nx &= 1 \\\\\ny &= 2\n\\end{align}".to_string()),
        Just("<think>plan</think>Answer here".to_string()),
        Just("\\newcommand{\\R}{\\mathbb{R}}".to_string()),
    ]
}

fn complete_message() -> impl Strategy<Value = String> {
    prop::collection::vec(complete_block(), 1..8).prop_map(|blocks| blocks.join("\n\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_is_always_balanced(input in message()) {
        let out = process_markdown_content(&input);
        prop_assert_eq!(out.matches("```").count() % 2, 0);
        prop_assert_eq!(out.matches("$$").count() % 2, 0);
    }

    #[test]
    fn arbitrary_text_is_balanced(input in any::<String>()) {
        prop_assert!(is_balanced(&process_markdown_content(&input)));
    }

    #[test]
    fn pipeline_is_a_fixed_point(input in complete_message()) {
        let once = process_markdown_content(&input);
        prop_assert_eq!(process_markdown_content(&once), once);
    }

    #[test]
    fn pipeline_is_deterministic(input in message()) {
        prop_assert_eq!(process_markdown_content(&input), process_markdown_content(&input));
    }

    #[test]
    fn every_prefix_is_balanced(input in message()) {
        let boundaries: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        for end in boundaries {
            prop_assert!(is_balanced(&process_markdown_content(&input[..end])));
        }
    }

    #[test]
    fn stream_raw_text_matches_input(input in message(), size in 1usize..7) {
        let mut stream = ResponseStream::new(RenderOptions::default());
        for chunk in input.as_bytes().chunks(size) {
            stream.push_bytes(chunk);
        }
        let rendered = stream.finish().to_string();
        prop_assert_eq!(stream.raw(), input.as_str());
        prop_assert_eq!(rendered, process_markdown_content(&input));
    }

    #[test]
    fn think_content_never_leaks(before in "[a-z ]{0,10}", hidden in "[A-Z]{1,10}", after in "[a-z ]{0,10}") {
        let closed = filter_think_tags(&format!("{before}<think>{hidden}</think>{after}"));
        prop_assert!(!closed.contains(&hidden));
        let open = filter_think_tags(&format!("{before}<think>{hidden}"));
        prop_assert_eq!(open, before);
    }

    #[test]
    fn minimal_options_stay_balanced(input in message()) {
        prop_assert!(is_balanced(&process_with_options(&input, &RenderOptions::minimal())));
    }
}
