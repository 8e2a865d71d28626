//! Element and diagnostic kinds reported by the analysis engine.

use std::fmt;
use std::str::FromStr;

/// Kind of a declaration, completion entry or navigation node.
///
/// Parsing is lossless for known kinds; anything else becomes `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScriptElementKind {
    #[default]
    Unknown,
    Warning,
    Keyword,
    Script,
    Module,
    Class,
    LocalClass,
    Interface,
    Type,
    Enum,
    EnumMember,
    Variable,
    LocalVariable,
    Function,
    LocalFunction,
    MemberFunction,
    MemberGetAccessor,
    MemberSetAccessor,
    MemberVariable,
    Constructor,
    CallSignature,
    IndexSignature,
    ConstructSignature,
    Parameter,
    TypeParameter,
    PrimitiveType,
    Label,
    Alias,
    Const,
    Let,
    Directory,
    ExternalModuleName,
    JsxAttribute,
    String,
}

impl ScriptElementKind {
    /// The engine's wire spelling of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Warning => "warning",
            Self::Keyword => "keyword",
            Self::Script => "script",
            Self::Module => "module",
            Self::Class => "class",
            Self::LocalClass => "local class",
            Self::Interface => "interface",
            Self::Type => "type",
            Self::Enum => "enum",
            Self::EnumMember => "enum member",
            Self::Variable => "var",
            Self::LocalVariable => "local var",
            Self::Function => "function",
            Self::LocalFunction => "local function",
            Self::MemberFunction => "method",
            Self::MemberGetAccessor => "getter",
            Self::MemberSetAccessor => "setter",
            Self::MemberVariable => "property",
            Self::Constructor => "constructor",
            Self::CallSignature => "call",
            Self::IndexSignature => "index",
            Self::ConstructSignature => "construct",
            Self::Parameter => "parameter",
            Self::TypeParameter => "type parameter",
            Self::PrimitiveType => "primitive type",
            Self::Label => "label",
            Self::Alias => "alias",
            Self::Const => "const",
            Self::Let => "let",
            Self::Directory => "directory",
            Self::ExternalModuleName => "external module name",
            Self::JsxAttribute => "JSX attribute",
            Self::String => "string",
        }
    }

    const KNOWN: [ScriptElementKind; 33] = [
        Self::Warning,
        Self::Keyword,
        Self::Script,
        Self::Module,
        Self::Class,
        Self::LocalClass,
        Self::Interface,
        Self::Type,
        Self::Enum,
        Self::EnumMember,
        Self::Variable,
        Self::LocalVariable,
        Self::Function,
        Self::LocalFunction,
        Self::MemberFunction,
        Self::MemberGetAccessor,
        Self::MemberSetAccessor,
        Self::MemberVariable,
        Self::Constructor,
        Self::CallSignature,
        Self::IndexSignature,
        Self::ConstructSignature,
        Self::Parameter,
        Self::TypeParameter,
        Self::PrimitiveType,
        Self::Label,
        Self::Alias,
        Self::Const,
        Self::Let,
        Self::Directory,
        Self::ExternalModuleName,
        Self::JsxAttribute,
        Self::String,
    ];
}

impl FromStr for ScriptElementKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .unwrap_or(Self::Unknown))
    }
}

impl fmt::Display for ScriptElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of an engine diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}
