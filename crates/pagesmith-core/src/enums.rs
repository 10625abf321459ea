//! Core enums for pagesmith parsing.
//!
//! These enums are the closed sets of kinds that the block classifier
//! and the inline splitter assign to pieces of a document.

use serde::{Deserialize, Serialize};

/// The kind of a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InlineKind {
    /// Unstyled text
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl InlineKind {
    /// Whether spans of this kind carry a url.
    pub fn has_url(&self) -> bool {
        matches!(self, InlineKind::Link | InlineKind::Image)
    }
}

impl std::fmt::Display for InlineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InlineKind::Plain => write!(f, "text"),
            InlineKind::Bold => write!(f, "bold"),
            InlineKind::Italic => write!(f, "italic"),
            InlineKind::Code => write!(f, "code"),
            InlineKind::Link => write!(f, "link"),
            InlineKind::Image => write!(f, "image"),
        }
    }
}

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Anything that matches no other rule
    Paragraph,
    /// `# ` through `###### `
    Heading,
    /// Fenced with triple backticks
    Code,
    /// Every line starts with `>`
    Quote,
    /// Every line starts with `- `
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps
    OrderedList,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::Heading => write!(f, "heading"),
            BlockKind::Code => write!(f, "code"),
            BlockKind::Quote => write!(f, "quote"),
            BlockKind::UnorderedList => write!(f, "unordered_list"),
            BlockKind::OrderedList => write!(f, "ordered_list"),
        }
    }
}
