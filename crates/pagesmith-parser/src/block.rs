//! Block splitting and classification.
//!
//! A document is cut into blocks on blank lines. Each block is then
//! classified once, by the first rule that matches:
//!
//! 1. heading (`# ` .. `###### `)
//! 2. fenced code (starts and ends with three backticks)
//! 3. quote (every line starts with `>`)
//! 4. unordered list (every line starts with `- `)
//! 5. ordered list (lines numbered `1. `, `2. `, ... with no gaps)
//! 6. paragraph
//!
//! A block that almost looks like a list falls all the way through to a
//! paragraph; there are no partial lists.

use log::trace;
use pagesmith_core::BlockKind;

/// Separator between blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Opening and closing fence of a code block.
pub const CODE_FENCE: &str = "```";

/// Heading prefixes, indexed by level - 1.
const HEADING_PREFIXES: [&str; 6] = ["# ", "## ", "### ", "#### ", "##### ", "###### "];

/// Split a document into trimmed, non-blank blocks, preserving order.
pub fn split_into_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Heading level of a block, if it starts with a heading prefix.
pub fn heading_level(block: &str) -> Option<u8> {
    HEADING_PREFIXES
        .iter()
        .position(|prefix| block.starts_with(prefix))
        .map(|idx| idx as u8 + 1)
}

/// Classify a single trimmed block.
pub fn classify(block: &str) -> BlockKind {
    let kind = if heading_level(block).is_some() {
        BlockKind::Heading
    } else if is_fenced_code(block) {
        BlockKind::Code
    } else if block.lines().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if block.lines().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };
    trace!("classified block as {}: {:?}", kind, block);
    kind
}

/// Split and classify in one pass.
pub fn classify_blocks(document: &str) -> Vec<(BlockKind, &str)> {
    split_into_blocks(document)
        .into_iter()
        .map(|block| (classify(block), block))
        .collect()
}

fn is_fenced_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

/// Every line `n` (1-based) must start with `"{n}. "`.
fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(idx, line)| line.starts_with(&format!("{}. ", idx + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_into_blocks() {
        let doc = "This is **bolded** paragraph\n\n\
                   This is another paragraph with _italic_ text\nThis is the same paragraph on a new line\n\n\
                   - This is a list\n- with items";
        assert_eq!(
            split_into_blocks(doc),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_split_drops_blank_blocks() {
        let doc = "\n\nfirst\n\n\n\n   \n\n  second  \n\n";
        assert_eq!(split_into_blocks(doc), vec!["first", "second"]);
    }

    #[test]
    fn test_split_empty_document() {
        assert!(split_into_blocks("").is_empty());
        assert!(split_into_blocks("\n\n \n\n").is_empty());
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level("# one"), Some(1));
        assert_eq!(heading_level("### three"), Some(3));
        assert_eq!(heading_level("###### six"), Some(6));
        assert_eq!(heading_level("####### seven"), None);
        assert_eq!(heading_level("#nospace"), None);
    }

    #[test]
    fn test_classify_heading() {
        assert_eq!(classify("# heading"), BlockKind::Heading);
        assert_eq!(classify("###### heading"), BlockKind::Heading);
        assert_eq!(classify("####### heading"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(classify("```\ncode\n```"), BlockKind::Code);
        assert_eq!(classify("```\nunterminated"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(classify("> quote\n> more quote"), BlockKind::Quote);
        assert_eq!(classify("> quote\nnot quote"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(classify("- list\n- items"), BlockKind::UnorderedList);
        assert_eq!(classify("- a\nb\n- c"), BlockKind::Paragraph);
        assert_eq!(classify("-missing space"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(classify("1. a\n2. b\n3. c"), BlockKind::OrderedList);
        assert_eq!(classify("1. a\n3. b\n2. c"), BlockKind::Paragraph);
        assert_eq!(classify("2. starts late"), BlockKind::Paragraph);
        assert_eq!(classify("1. a\n1. b"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_long_ordered_list() {
        let block = (1..=12)
            .map(|n| format!("{}. item {}", n, n))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(classify("just some text"), BlockKind::Paragraph);
    }

    #[test]
    fn test_heading_wins_over_other_rules() {
        assert_eq!(classify("# ```not code```"), BlockKind::Heading);
    }

    #[test]
    fn test_classify_blocks() {
        let classified = classify_blocks("# T\n\n- a\n- b\n\ntext");
        assert_eq!(
            classified,
            vec![
                (BlockKind::Heading, "# T"),
                (BlockKind::UnorderedList, "- a\n- b"),
                (BlockKind::Paragraph, "text"),
            ]
        );
    }
}
