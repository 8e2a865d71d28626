//! Editor-protocol result shapes.
//!
//! These are our own types rather than a protocol crate's, kept field-for-field
//! compatible with the Language Server Protocol so the server layer can
//! convert (or, with the `serde` feature, serialize) them directly.

use smol_str::SmolStr;

use crate::base::Range;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Severity of a protocol diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl DiagnosticSeverity {
    /// Convert to LSP severity number.
    pub fn to_lsp(self) -> u8 {
        match self {
            DiagnosticSeverity::Error => 1,
            DiagnosticSeverity::Warning => 2,
            DiagnosticSeverity::Information => 3,
            DiagnosticSeverity::Hint => 4,
        }
    }
}

/// A diagnostic code, numeric or symbolic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum NumberOrString {
    Number(i32),
    String(String),
}

impl NumberOrString {
    /// Numeric value, parsing string codes that hold an integer.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::String(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Option<DiagnosticSeverity>,
    pub code: Option<NumberOrString>,
    pub source: Option<SmolStr>,
    pub message: String,
}

/// Code block with a language tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarkedString {
    pub language: SmolStr,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hover {
    pub contents: MarkedString,
    pub range: Option<Range>,
}

/// Protocol symbol kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl SymbolKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Location {
    pub uri: String,
    pub range: Range,
}

/// A flat symbol with a back-reference to its container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct SymbolInformation {
    pub name: SmolStr,
    pub kind: SymbolKind,
    pub location: Location,
    pub container_name: Option<SmolStr>,
}

/// Protocol completion item kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionItemKind {
    Text,
    Method,
    Function,
    Constructor,
    Field,
    Variable,
    Class,
    Interface,
    Module,
    Property,
    Unit,
    Value,
    Enum,
    Keyword,
    Snippet,
    Color,
    File,
    Reference,
    Folder,
    EnumMember,
    Constant,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

impl CompletionItemKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct CompletionItem {
    pub label: SmolStr,
    pub kind: Option<CompletionItemKind>,
    pub sort_text: Option<SmolStr>,
    pub commit_characters: Option<Vec<char>>,
    pub preselect: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct CompletionList {
    pub is_incomplete: bool,
    pub items: Vec<CompletionItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct LocationLink {
    pub origin_selection_range: Option<Range>,
    pub target_uri: String,
    pub target_range: Range,
    pub target_selection_range: Range,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// Document identity in an edit; `version` is `None` for unversioned files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VersionedTextDocumentIdentifier {
    pub uri: String,
    pub version: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct TextDocumentEdit {
    pub text_document: VersionedTextDocumentIdentifier,
    pub edits: Vec<TextEdit>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct WorkspaceEdit {
    pub document_changes: Vec<TextDocumentEdit>,
}

/// A quick fix. `kind` carries the engine's fix name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CodeAction {
    pub title: String,
    pub edit: WorkspaceEdit,
    pub kind: SmolStr,
}

/// Diagnostics the client attached to a code-action request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeActionContext {
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(feature = "serde")]
macro_rules! serialize_as_lsp_number {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.to_lsp())
            }
        }
    )*};
}

#[cfg(feature = "serde")]
serialize_as_lsp_number!(DiagnosticSeverity, SymbolKind, CompletionItemKind);
