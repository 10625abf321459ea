//! Pagesmith Render
//!
//! Assembles a [`MarkupNode`] tree from a markdown document. Each block is
//! classified by `pagesmith-parser`, converted to a structural node by the
//! converter for its kind, and all block nodes are collected under a single
//! `div` root.
//!
//! # Example
//!
//! ```
//! use pagesmith_render::{document_to_node, extract_title};
//!
//! let doc = "# Title\n\nBody";
//! let root = document_to_node(doc).unwrap();
//! assert_eq!(root.render().unwrap(), "<div><h1>Title</h1><p>Body</p></div>");
//! assert_eq!(extract_title(doc).unwrap(), "Title");
//! ```

pub mod code;
pub mod heading;
pub mod list;
pub mod text;

pub use code::code_to_node;
pub use heading::heading_to_node;
pub use list::{ordered_list_to_node, unordered_list_to_node};
pub use text::{paragraph_to_node, quote_to_node, span_to_leaf, text_to_leaf_nodes};

use log::debug;
use pagesmith_core::{BlockKind, PagesmithError, Result};
use pagesmith_html::MarkupNode;
use pagesmith_parser::{classify_blocks, split_into_blocks};

/// Tag of the root node wrapping a whole document.
pub const ROOT_TAG: &str = "div";

/// Convert one classified block into its structural node.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<MarkupNode> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

/// Convert a whole document into a `div` holding one node per block.
pub fn document_to_node(document: &str) -> Result<MarkupNode> {
    let blocks = classify_blocks(document);
    debug!("assembling {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(|(kind, block)| block_to_node(block, kind))
        .collect::<Result<Vec<_>>>()?;

    Ok(MarkupNode::parent(ROOT_TAG, children))
}

/// Convert and render a document in one step.
pub fn markdown_to_html(document: &str) -> Result<String> {
    document_to_node(document)?.render()
}

/// Text of the first level-1 heading, trimmed.
pub fn extract_title(document: &str) -> Result<String> {
    split_into_blocks(document)
        .into_iter()
        .find_map(|block| block.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(PagesmithError::NoTitle)
}
