//! Source text positions and ranges.
//!
//! Two coordinate spaces meet here:
//!
//! - **Engine offsets** ([`TextSize`], [`TextRange`]): linear positions in the
//!   analysis engine's virtual file, counted in UTF-16 code units.
//! - **Protocol positions** ([`Position`], [`Range`]): 0-indexed line and
//!   UTF-16 column pairs, as the editor protocol expects.
//!
//! [`LineIndex`] converts between the two.

use std::fmt;

// Re-export from text-size for compatibility
pub use text_size::TextRange;
pub use text_size::TextSize;

/// A line and column position in a document.
///
/// Both line and character are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-16 code units, not bytes or characters)
    pub character: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A half-open range between two positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width range at `position`.
    #[inline]
    pub const fn point(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Check whether the range is zero-width.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.start, self.end)
    }
}

/// Index for converting between engine offsets and line/column positions.
///
/// Offsets and columns are both measured in UTF-16 code units, so astral-plane
/// characters occupy two units. Recognised line breaks are `\n`, `\r\n` and a
/// lone `\r`.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// UTF-16 offset of the start of each line
    line_starts: Vec<TextSize>,
    /// Total length of the text in UTF-16 code units
    len: TextSize,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut offset: u32 = 0;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            offset += c.len_utf16() as u32;
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\r' | '\n' => line_starts.push(TextSize::from(offset)),
                _ => {}
            }
        }

        Self {
            line_starts,
            len: TextSize::from(offset),
        }
    }

    /// Convert an engine offset to a line/column position.
    ///
    /// Offsets past the end of the text clamp to the end.
    pub fn position_at(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);

        let line_start = self.line_starts[line];
        let character = offset - line_start;

        Position {
            line: line as u32,
            character: character.into(),
        }
    }

    /// Convert a line/column position to an engine offset.
    ///
    /// Lines past the end map to the end of the text; columns past the end of
    /// a line clamp to the start of the next one.
    pub fn offset_at(&self, position: Position) -> TextSize {
        let line = position.line as usize;
        let Some(&line_start) = self.line_starts.get(line) else {
            return self.len;
        };
        let next_line_start = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.len);

        (line_start + TextSize::from(position.character)).min(next_line_start)
    }

    /// Total length of the indexed text in UTF-16 code units.
    pub fn text_len(&self) -> TextSize {
        self.len
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Check if there are no lines (never true; an empty text has one line).
    pub fn is_empty(&self) -> bool {
        self.line_starts.is_empty()
    }
}

/// Number of UTF-16 code units in `text`.
pub fn utf16_len(text: &str) -> TextSize {
    TextSize::from(text.chars().map(|c| c.len_utf16() as u32).sum::<u32>())
}
