//! Concrete document types.

use std::ops::Range as ByteRange;

use crate::base::{LineIndex, Position, TextSize, utf16_len};

use super::{Attributes, Document};

/// A plain text document with its own line index.
#[derive(Clone, Debug)]
pub struct TextDocument {
    uri: String,
    text: String,
    version: Option<i32>,
    attributes: Attributes,
    line_index: LineIndex,
}

impl TextDocument {
    /// Create a versioned document.
    pub fn new(uri: impl Into<String>, text: impl Into<String>, version: i32) -> Self {
        Self::build(uri.into(), text.into(), Some(version))
    }

    /// Create an unversioned, read-only document (e.g. a sibling file on disk).
    pub fn read_only(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self::build(uri.into(), text.into(), None)
    }

    /// Attach structural attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    fn build(uri: String, text: String, version: Option<i32>) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            uri,
            text,
            version,
            attributes: Attributes::default(),
            line_index,
        }
    }

    /// The document's line index.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
}

impl Document for TextDocument {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn version(&self) -> Option<i32> {
        self.version
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn position_at(&self, offset: TextSize) -> Position {
        self.line_index.position_at(offset)
    }

    fn offset_at(&self, position: Position) -> TextSize {
        self.line_index.offset_at(position)
    }
}

/// A script region embedded in a larger parent text.
///
/// The fragment's text is the region alone, so offset 0 is the region's first
/// character. Positions are expressed in the *parent's* coordinates, which is
/// what an editor showing the composite document expects.
#[derive(Clone, Debug)]
pub struct Fragment {
    uri: String,
    text: String,
    version: Option<i32>,
    attributes: Attributes,
    parent_index: LineIndex,
    /// UTF-16 offset of the region start within the parent
    start: TextSize,
    /// UTF-16 length of the region
    len: TextSize,
}

impl Fragment {
    /// Carve a fragment out of `parent_text` at the given byte range.
    ///
    /// Returns `None` if the range is out of bounds or splits a character.
    pub fn new(
        uri: impl Into<String>,
        parent_text: &str,
        region: ByteRange<usize>,
        version: Option<i32>,
    ) -> Option<Self> {
        let text = parent_text.get(region.clone())?;
        let start = utf16_len(&parent_text[..region.start]);
        Some(Self {
            uri: uri.into(),
            text: text.to_owned(),
            version,
            attributes: Attributes::default(),
            parent_index: LineIndex::new(parent_text),
            start,
            len: utf16_len(text),
        })
    }

    /// Attach the attributes of the enclosing tag.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Position of the fragment's first character in the parent.
    pub fn start_position(&self) -> Position {
        self.parent_index.position_at(self.start)
    }
}

impl Document for Fragment {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn version(&self) -> Option<i32> {
        self.version
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn position_at(&self, offset: TextSize) -> Position {
        self.parent_index.position_at(self.start + offset.min(self.len))
    }

    fn offset_at(&self, position: Position) -> TextSize {
        let parent_offset = self.parent_index.offset_at(position);
        parent_offset.clamp(self.start, self.start + self.len) - self.start
    }
}
