//! List conversion.
//!
//! Every line of a list block is one item. Items are inline-processed
//! independently and wrapped in `li`.

use crate::text::text_to_leaf_nodes;
use pagesmith_core::Result;
use pagesmith_html::MarkupNode;
use regex::Regex;
use std::sync::LazyLock;

/// Marker of an unordered item.
const BULLET: &str = "- ";

/// `1. `, `12. `, ...
static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

pub fn unordered_list_to_node(block: &str) -> Result<MarkupNode> {
    list_to_node("ul", block, |line| line.strip_prefix(BULLET).unwrap_or(line))
}

pub fn ordered_list_to_node(block: &str) -> Result<MarkupNode> {
    list_to_node("ol", block, |line| match ORDERED_MARKER_RE.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    })
}

fn list_to_node<F>(tag: &str, block: &str, strip_marker: F) -> Result<MarkupNode>
where
    F: Fn(&str) -> &str,
{
    let items = block
        .lines()
        .map(|line| -> Result<MarkupNode> {
            Ok(MarkupNode::parent("li", text_to_leaf_nodes(strip_marker(line))?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MarkupNode::parent(tag, items))
}
