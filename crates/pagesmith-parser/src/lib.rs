//! Pagesmith Parser
//!
//! Splits a markdown document into blocks, classifies each block, and
//! splits inline text into typed spans. Tree assembly lives in
//! `pagesmith-render`; this crate only produces flat values.
//!
//! # Example
//!
//! ```
//! use pagesmith_core::{BlockKind, InlineKind};
//! use pagesmith_parser::{classify, split_into_blocks, text_to_spans};
//!
//! let blocks = split_into_blocks("# Title\n\nSome **bold** text");
//! assert_eq!(classify(blocks[0]), BlockKind::Heading);
//! assert_eq!(classify(blocks[1]), BlockKind::Paragraph);
//!
//! let spans = text_to_spans(blocks[1]).unwrap();
//! assert_eq!(spans[1].kind, InlineKind::Bold);
//! ```

pub mod block;
pub mod inline;

pub use block::{classify, classify_blocks, heading_level, split_into_blocks};
pub use inline::{
    extract_images, extract_links, split_by_delimiter, split_images, split_links, text_to_spans,
};
