//! Error types for pagesmith

use crate::enums::InlineKind;
use thiserror::Error;

/// Main error type for pagesmith operations
#[derive(Error, Debug)]
pub enum PagesmithError {
    /// Image or link extraction was given an empty string
    #[error("Input text string cannot be empty")]
    EmptyInput,

    /// A bold, italic or code delimiter has no closing partner
    #[error("Text is missing a closing delimiter '{delimiter}'. Check your input string.")]
    UnbalancedDelimiter { delimiter: String },

    /// A link or image span reached leaf mapping without a url
    #[error("Inline span of kind '{kind}' requires a url")]
    MissingUrl { kind: InlineKind },

    /// Structural violation found while rendering a node
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Attribute mapping that cannot be rendered
    #[error("Invalid attributes: {0}")]
    InvalidAttributes(String),

    /// Document has no level-1 heading to use as a title
    #[error("No level 1 heading found in document")]
    NoTitle,

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Site generation error
    #[error("Site error: {0}")]
    Site(String),
}

/// Result type alias for pagesmith operations
pub type Result<T> = std::result::Result<T, PagesmithError>;
