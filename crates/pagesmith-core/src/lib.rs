//! Pagesmith Core
//!
//! This crate provides core types and error definitions
//! for the pagesmith static-site generator.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`InlineKind`], [`BlockKind`] - Closed enumerations of inline and block kinds
//! - [`InlineSpan`] - A typed run of inline text before tree assembly
//! - [`PagesmithError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{BlockKind, InlineKind};
pub use error::{PagesmithError, Result};
pub use types::InlineSpan;
