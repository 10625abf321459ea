//! Property-based tests for pagesmith.
//!
//! These tests use proptest to generate random inputs and verify
//! that the block classifier, inline splitter and renderer hold their
//! invariants.

use proptest::prelude::*;

use pagesmith_core::{BlockKind, InlineKind, InlineSpan, PagesmithError};
use pagesmith_parser::{classify, split_by_delimiter, split_into_blocks, text_to_spans};
use pagesmith_render::{document_to_node, extract_title, markdown_to_html};

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n]*").unwrap()
}

/// Generate a line of text free of inline markers.
fn plain_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9][a-zA-Z0-9 ,.]{0,59}").unwrap()
}

/// Generate a heading.
fn heading() -> impl Strategy<Value = String> {
    (1..=6usize, plain_line()).prop_map(|(level, text)| format!("{} {}", "#".repeat(level), text))
}

/// Generate a list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec(plain_line(), 1..10).prop_map(|items| {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Generate a correctly numbered ordered list.
fn ordered_list() -> impl Strategy<Value = String> {
    prop::collection::vec(plain_line(), 1..15).prop_map(|items| {
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| format!("{}. {}", idx + 1, item))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

// =============================================================================
// Block Property Tests
// =============================================================================

proptest! {
    /// Blocks are never blank and keep their relative order.
    #[test]
    fn blocks_never_blank(input in markdown_string()) {
        let blocks = split_into_blocks(&input);
        let mut cursor = 0;
        for block in blocks {
            prop_assert!(!block.trim().is_empty());
            prop_assert_eq!(block, block.trim());
            let found = input[cursor..].find(block);
            prop_assert!(found.is_some());
            cursor += found.unwrap() + block.len();
        }
    }

    /// Classification never panics.
    #[test]
    fn classify_never_panics(input in markdown_string()) {
        for block in split_into_blocks(&input) {
            let _ = classify(block);
        }
    }

    #[test]
    fn headings_classify(h in heading()) {
        prop_assert_eq!(classify(h.trim()), BlockKind::Heading);
    }

    #[test]
    fn lists_classify(l in list()) {
        prop_assert_eq!(classify(&l), BlockKind::UnorderedList);
    }

    #[test]
    fn ordered_lists_classify(l in ordered_list()) {
        prop_assert_eq!(classify(&l), BlockKind::OrderedList);
    }

    /// Any non-list line in a list demotes the whole block.
    #[test]
    fn list_with_stray_line_is_paragraph(l in list(), stray in "[a-z]{1,10}") {
        let block = format!("{}\n{}", l, stray);
        prop_assert_eq!(classify(&block), BlockKind::Paragraph);
    }
}

// =============================================================================
// Inline Property Tests
// =============================================================================

proptest! {
    /// Plain text without markers comes back as a single plain span.
    #[test]
    fn plain_text_is_one_span(line in plain_line()) {
        let spans = text_to_spans(&line).unwrap();
        prop_assert_eq!(spans, vec![InlineSpan::plain(line.clone())]);
    }

    /// Splitting never loses text from balanced input.
    #[test]
    fn split_preserves_text(parts in prop::collection::vec("[a-z ]{1,8}", 1..8)) {
        let text = parts.join("`");
        let spans = split_by_delimiter(vec![InlineSpan::plain(text.clone())], "`", InlineKind::Code);
        if parts.len() % 2 == 0 {
            // odd number of delimiters
            let is_unbalanced = matches!(spans, Err(PagesmithError::UnbalancedDelimiter { .. }));
            prop_assert!(is_unbalanced);
        } else {
            let joined: String = spans.unwrap().into_iter().map(|s| s.text).collect();
            prop_assert_eq!(joined, text.replace('`', ""));
        }
    }

    /// Either an error or a span sequence; never a panic.
    #[test]
    fn text_to_spans_never_panics(input in markdown_string()) {
        let _ = text_to_spans(&input);
    }
}

// =============================================================================
// Render Property Tests
// =============================================================================

proptest! {
    /// Rendering is a pure function of the document.
    #[test]
    fn render_is_deterministic(input in markdown_string()) {
        let first = markdown_to_html(&input).ok();
        let second = markdown_to_html(&input).ok();
        prop_assert_eq!(first, second);
    }

    /// The root always wraps the output in a div.
    #[test]
    fn root_is_div(blocks in prop::collection::vec(plain_line(), 0..6)) {
        let doc = blocks.join("\n\n");
        let html = document_to_node(&doc).unwrap().render().unwrap();
        prop_assert!(html.starts_with("<div>"));
        prop_assert!(html.ends_with("</div>"));
    }

    /// A level-1 heading is always found as the title.
    #[test]
    fn title_is_extracted(title in "[a-zA-Z][a-zA-Z0-9 ]{0,30}", body in plain_line()) {
        let doc = format!("{}\n\n# {}", body, title);
        prop_assert_eq!(extract_title(&doc).unwrap(), title.trim().to_string());
    }
}
