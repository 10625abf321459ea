//! Core types for pagesmith

use crate::enums::InlineKind;
use serde::{Deserialize, Serialize};

/// A typed run of inline text, produced by the inline splitter.
///
/// `url` is set only for [`InlineKind::Link`] and [`InlineKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineSpan {
    /// The visible text (alt text for images)
    pub text: String,
    /// What kind of run this is
    pub kind: InlineKind,
    /// Target of a link or source of an image
    pub url: Option<String>,
}

impl InlineSpan {
    /// Create a span without a url.
    pub fn new(text: impl Into<String>, kind: InlineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineKind::Plain)
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: InlineKind::Link,
            url: Some(url.into()),
        }
    }

    /// Create an image span. `alt` becomes the span text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: InlineKind::Image,
            url: Some(url.into()),
        }
    }

    /// Check if this span is still open to further splitting.
    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::Plain
    }
}

impl std::fmt::Display for InlineSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => write!(f, "InlineSpan({}, {}, {})", self.text, self.kind, url),
            None => write!(f, "InlineSpan({}, {}, None)", self.text, self.kind),
        }
    }
}
