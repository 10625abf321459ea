//! Fenced code blocks.
//!
//! Code is never inline-split: markdown-looking characters inside the fence
//! stay literal.

use pagesmith_html::MarkupNode;
use pagesmith_parser::block::CODE_FENCE;

/// Convert a fenced block into `pre` wrapping a single `code` leaf.
///
/// Every fence is removed and leading whitespace stripped; whatever is left,
/// including any word that followed the opening fence, is the code text.
pub fn code_to_node(block: &str) -> MarkupNode {
    let content = block.replace(CODE_FENCE, "");
    MarkupNode::parent("pre", vec![MarkupNode::leaf("code", content.trim_start())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fence() {
        let node = code_to_node("```\ncode line\n```");
        assert_eq!(node.render().unwrap(), "<pre><code>code line\n</code></pre>");
    }

    #[test]
    fn test_markers_stay_literal() {
        let node = code_to_node("```\nlet x = **y** * `z`;\n```");
        assert_eq!(
            node.render().unwrap(),
            "<pre><code>let x = **y** * `z`;\n</code></pre>"
        );
    }

    #[test]
    fn test_info_word_stays_in_content() {
        let node = code_to_node("```rust\nfn main() {}\n```");
        assert!(node.children()[0].attributes().is_none());
        assert_eq!(
            node.render().unwrap(),
            "<pre><code>rust\nfn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_single_line_fence() {
        let node = code_to_node("```inline```");
        assert_eq!(node.render().unwrap(), "<pre><code>inline</code></pre>");
    }

    #[test]
    fn test_indentation_inside_is_kept() {
        let node = code_to_node("```\n    indented\n  less\n```");
        assert_eq!(
            node.render().unwrap(),
            "<pre><code>indented\n  less\n</code></pre>"
        );
    }
}
