//! Pagesmith HTML
//!
//! A minimal generic markup tree for pagesmith. Nodes are built bottom-up
//! and never mutated once their parent exists; rendering walks the tree and
//! produces an HTML string.
//!
//! # Example
//!
//! ```
//! use pagesmith_html::{Attributes, MarkupNode};
//!
//! let link = MarkupNode::leaf_with_attributes(
//!     "a",
//!     "docs",
//!     Attributes::from_pairs([("href", "https://example.com")]),
//! );
//! let para = MarkupNode::parent("p", vec![MarkupNode::text("Read the "), link]);
//!
//! assert_eq!(
//!     para.render().unwrap(),
//!     r#"<p>Read the <a href="https://example.com">docs</a></p>"#
//! );
//! ```

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{MarkupNode, is_void_element};
