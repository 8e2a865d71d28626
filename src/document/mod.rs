//! Documents: the host's text buffers as seen by the adapter.
//!
//! The adapter never mutates a document; it reads text and uses the
//! document's coordinate system to translate engine offsets into protocol
//! positions. Documents are owned by a [`DocumentManager`]; the adapter only
//! creates read-only [`TextDocument`]s for sibling files it discovers in
//! engine results.

mod manager;
mod text;

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{Position, Range, TextRange, TextSize, uri_to_path};

pub use manager::{DocumentDescriptor, DocumentManager, InMemoryDocuments};
pub use text::{Fragment, TextDocument};

/// An editable text buffer with a stable URI and its own coordinate system.
pub trait Document: Send + Sync {
    /// Stable identifying URI.
    fn uri(&self) -> &str;

    /// Full text of the document.
    fn text(&self) -> &str;

    /// Version counter, `None` for unversioned (read-only) documents.
    fn version(&self) -> Option<i32>;

    /// Structural attributes, e.g. the `lang` of a script tag.
    fn attributes(&self) -> &Attributes;

    /// Convert an engine offset into a position in this document.
    fn position_at(&self, offset: TextSize) -> Position;

    /// Convert a position in this document into an engine offset.
    fn offset_at(&self, position: Position) -> TextSize;

    /// File path behind the URI, if it is a `file://` URI.
    fn file_path(&self) -> Option<String> {
        uri_to_path(self.uri())
    }

    /// Convert an engine span into a range in this document.
    fn range_of(&self, span: TextRange) -> Range {
        Range::new(self.position_at(span.start()), self.position_at(span.end()))
    }

    /// Declared script kind of the fragment.
    fn script_kind(&self) -> ScriptKind {
        ScriptKind::from_attributes(self.attributes())
    }
}

impl fmt::Debug for dyn Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("uri", &self.uri())
            .field("version", &self.version())
            .finish_non_exhaustive()
    }
}

/// Ordered attribute map of a fragment's enclosing tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<SmolStr, SmolStr>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Option<SmolStr> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(SmolStr::as_str)
    }

    /// Iterate over attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<SmolStr>, V: Into<SmolStr>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Script dialect of a fragment or file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    Js,
    Jsx,
    Ts,
    Tsx,
}

impl ScriptKind {
    /// Kind declared by a script tag's `lang` (or, failing that, `type`) attribute.
    ///
    /// Embedded fragments are analysed in their JSX-enabled flavour.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let declared = attributes.get("lang").or_else(|| attributes.get("type"));
        match declared {
            Some("ts" | "typescript" | "text/ts" | "text/typescript") => ScriptKind::Tsx,
            _ => ScriptKind::Jsx,
        }
    }

    /// Whether this is a strictly-typed dialect.
    pub const fn is_typed(self) -> bool {
        matches!(self, ScriptKind::Ts | ScriptKind::Tsx)
    }

    /// Source tag attached to diagnostics from a fragment of this kind.
    pub const fn diagnostic_source(self) -> &'static str {
        if self.is_typed() { "ts" } else { "js" }
    }
}
