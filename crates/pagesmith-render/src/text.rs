//! Inline leaves, paragraphs and quotes.

use pagesmith_core::{InlineKind, InlineSpan, PagesmithError, Result};
use pagesmith_html::{Attributes, MarkupNode};
use pagesmith_parser::text_to_spans;

/// Map one span to its leaf node.
///
/// Links and images must carry a url.
pub fn span_to_leaf(span: InlineSpan) -> Result<MarkupNode> {
    let InlineSpan { text, kind, url } = span;
    let node = match kind {
        InlineKind::Plain => MarkupNode::text(text),
        InlineKind::Bold => MarkupNode::leaf("b", text),
        InlineKind::Italic => MarkupNode::leaf("i", text),
        InlineKind::Code => MarkupNode::leaf("code", text),
        InlineKind::Link => {
            let url = url.ok_or(PagesmithError::MissingUrl { kind })?;
            MarkupNode::leaf_with_attributes("a", text, Attributes::from_pairs([("href", url)]))
        }
        InlineKind::Image => {
            let url = url.ok_or(PagesmithError::MissingUrl { kind })?;
            MarkupNode::leaf_with_attributes(
                "img",
                "",
                Attributes::from_pairs([("src", url), ("alt", text)]),
            )
        }
    };
    Ok(node)
}

/// Collapse newlines, split into spans, and map each span to a leaf.
pub fn text_to_leaf_nodes(text: &str) -> Result<Vec<MarkupNode>> {
    let text = text.replace('\n', " ");
    text_to_spans(&text)?
        .into_iter()
        .map(span_to_leaf)
        .collect()
}

pub fn paragraph_to_node(block: &str) -> Result<MarkupNode> {
    Ok(MarkupNode::parent("p", text_to_leaf_nodes(block)?))
}

/// Strip `>` and the whitespace after it from every line.
pub fn quote_to_node(block: &str) -> Result<MarkupNode> {
    let text = block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(MarkupNode::parent("blockquote", text_to_leaf_nodes(&text)?))
}
