//! Heading conversion.
//!
//! The leading run of `#` characters picks the tag (`h1` to `h6`); the rest
//! of the block is inline text.

use crate::text::text_to_leaf_nodes;
use pagesmith_core::{PagesmithError, Result};
use pagesmith_html::MarkupNode;

/// Deepest heading level HTML has.
const MAX_LEVEL: usize = 6;

pub fn heading_to_node(block: &str) -> Result<MarkupNode> {
    let level = block.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > MAX_LEVEL {
        return Err(PagesmithError::InvalidNode(format!(
            "heading level {} is out of range 1-{}",
            level, MAX_LEVEL
        )));
    }

    // '#' is one byte, so `level` is also a byte offset
    let text = block[level..].trim_start();
    Ok(MarkupNode::parent(
        format!("h{}", level),
        text_to_leaf_nodes(text)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels() {
        for level in 1..=6 {
            let block = format!("{} Heading", "#".repeat(level));
            let node = heading_to_node(&block).unwrap();
            assert_eq!(
                node.render().unwrap(),
                format!("<h{0}>Heading</h{0}>", level)
            );
        }
    }

    #[test]
    fn test_inline_in_heading() {
        let node = heading_to_node("## A `code` title").unwrap();
        assert_eq!(node.render().unwrap(), "<h2>A <code>code</code> title</h2>");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            heading_to_node("####### too deep"),
            Err(PagesmithError::InvalidNode(_))
        ));
        assert!(heading_to_node("no marker").is_err());
    }
}
