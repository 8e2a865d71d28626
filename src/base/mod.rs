//! Foundation types for the scriptlet toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Engine offsets and spans (UTF-16 code units)
//! - [`Position`], [`Range`] - Protocol line/column coordinates
//! - [`LineIndex`] - Conversion between the two
//! - [`path_to_uri`], [`uri_to_path`] - File path ↔ `file://` URI
//!
//! This module has NO dependencies on other scriptlet modules.

mod span;
mod uri;

pub use span::{LineIndex, Position, Range, TextRange, TextSize, utf16_len};
pub use uri::{path_to_uri, uri_to_path};

// Re-export text-size types for convenience
pub use text_size;
