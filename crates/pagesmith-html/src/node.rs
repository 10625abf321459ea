//! Markup nodes.
//!
//! A [`MarkupNode`] is either a leaf (optional tag around a text value) or a
//! parent (tag around an ordered list of children).

use crate::attributes::Attributes;
use pagesmith_core::{PagesmithError, Result};

/// HTML elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Check whether `tag` is an HTML void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// A node in the generic markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// A node with no children.
    ///
    /// Without a tag, the value renders verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Option<Attributes>,
    },
    /// A tagged node wrapping its children.
    Parent {
        tag: String,
        children: Vec<MarkupNode>,
        attributes: Option<Attributes>,
    },
}

impl MarkupNode {
    /// Untagged text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        MarkupNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: None,
        }
    }

    /// Tagged leaf without attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        MarkupNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: None,
        }
    }

    /// Tagged leaf with attributes.
    pub fn leaf_with_attributes(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        MarkupNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Some(attributes),
        }
    }

    /// Parent without attributes.
    pub fn parent(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Parent {
            tag: tag.into(),
            children,
            attributes: None,
        }
    }

    /// Parent with attributes.
    pub fn parent_with_attributes(
        tag: impl Into<String>,
        children: Vec<MarkupNode>,
        attributes: Attributes,
    ) -> Self {
        MarkupNode::Parent {
            tag: tag.into(),
            children,
            attributes: Some(attributes),
        }
    }

    /// The node's tag, if it has one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Leaf { tag, .. } => tag.as_deref(),
            MarkupNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            MarkupNode::Leaf { attributes, .. } | MarkupNode::Parent { attributes, .. } => {
                attributes.as_ref()
            }
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Leaf { .. } => &[],
            MarkupNode::Parent { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MarkupNode::Leaf { .. })
    }

    /// Render the attribute mapping; an absent mapping renders as "".
    pub fn render_attributes(&self) -> Result<String> {
        match self.attributes() {
            Some(attrs) => attrs.render(),
            None => Ok(String::new()),
        }
    }

    /// Render this node and its subtree to HTML.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            MarkupNode::Leaf { tag: None, value, .. } => {
                out.push_str(value);
            }
            MarkupNode::Leaf {
                tag: Some(tag),
                value,
                ..
            } => {
                if tag.is_empty() {
                    return Err(PagesmithError::InvalidNode(
                        "leaf node tag must not be empty".to_string(),
                    ));
                }
                let attrs = self.render_attributes()?;
                if is_void_element(tag) {
                    if !value.is_empty() {
                        return Err(PagesmithError::InvalidNode(format!(
                            "void element <{}> cannot hold a value",
                            tag
                        )));
                    }
                    out.push_str(&format!("<{}{}>", tag, attrs));
                } else {
                    out.push_str(&format!("<{}{}>{}</{}>", tag, attrs, value, tag));
                }
            }
            MarkupNode::Parent { tag, children, .. } => {
                if tag.is_empty() {
                    return Err(PagesmithError::InvalidNode(
                        "parent node requires a tag".to_string(),
                    ));
                }
                out.push_str(&format!("<{}{}>", tag, self.render_attributes()?));
                for child in children {
                    child.render_into(out)?;
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
        Ok(())
    }
}
