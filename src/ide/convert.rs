//! Translation between engine values and protocol values.

use crate::base::{Position, Range, TextRange, TextSize};
use crate::document::Document;
use crate::engine::{DiagnosticCategory, ScriptElementKind};
use crate::protocol::{CompletionItemKind, DiagnosticSeverity, SymbolKind};

/// Engine offset of a protocol position in `document`.
pub fn to_engine_offset(document: &dyn Document, position: Position) -> TextSize {
    document.offset_at(position)
}

/// Protocol range of an engine span in `document`.
///
/// The endpoints are `start` and `start + length`; a zero-length span becomes
/// a point range.
pub fn to_protocol_range(document: &dyn Document, span: TextRange) -> Range {
    document.range_of(span)
}

pub fn severity_for(category: DiagnosticCategory) -> DiagnosticSeverity {
    match category {
        DiagnosticCategory::Error => DiagnosticSeverity::Error,
        DiagnosticCategory::Warning => DiagnosticSeverity::Warning,
        DiagnosticCategory::Suggestion => DiagnosticSeverity::Hint,
        DiagnosticCategory::Message => DiagnosticSeverity::Information,
    }
}

pub fn symbol_kind_for(kind: ScriptElementKind) -> SymbolKind {
    use ScriptElementKind as K;
    match kind {
        K::Module => SymbolKind::Module,
        K::Class | K::LocalClass => SymbolKind::Class,
        K::Interface => SymbolKind::Interface,
        K::Enum => SymbolKind::Enum,
        K::EnumMember | K::Const => SymbolKind::Constant,
        K::Function | K::LocalFunction => SymbolKind::Function,
        K::MemberFunction | K::MemberGetAccessor | K::MemberSetAccessor => SymbolKind::Method,
        K::MemberVariable | K::JsxAttribute => SymbolKind::Property,
        K::Constructor => SymbolKind::Constructor,
        _ => SymbolKind::Variable,
    }
}

pub fn completion_item_kind_for(kind: ScriptElementKind) -> CompletionItemKind {
    use ScriptElementKind as K;
    match kind {
        K::PrimitiveType | K::Keyword => CompletionItemKind::Keyword,
        K::Const | K::String => CompletionItemKind::Constant,
        K::Let | K::Variable | K::LocalVariable | K::Alias => CompletionItemKind::Variable,
        K::MemberVariable | K::MemberGetAccessor | K::MemberSetAccessor => {
            CompletionItemKind::Field
        }
        K::Function => CompletionItemKind::Function,
        K::MemberFunction | K::ConstructSignature | K::CallSignature | K::IndexSignature => {
            CompletionItemKind::Method
        }
        K::Enum => CompletionItemKind::Enum,
        K::Module | K::ExternalModuleName => CompletionItemKind::Module,
        K::Class | K::Type => CompletionItemKind::Class,
        K::Interface => CompletionItemKind::Interface,
        K::Warning | K::Script => CompletionItemKind::File,
        K::Directory => CompletionItemKind::Folder,
        _ => CompletionItemKind::Property,
    }
}

/// Characters that accept a completion of this kind when typed.
pub fn commit_characters_for(kind: ScriptElementKind) -> Option<Vec<char>> {
    use ScriptElementKind as K;
    match kind {
        K::MemberGetAccessor
        | K::MemberSetAccessor
        | K::ConstructSignature
        | K::CallSignature
        | K::IndexSignature
        | K::Enum
        | K::Interface => Some(vec!['.']),
        K::Module
        | K::Alias
        | K::Const
        | K::Let
        | K::Variable
        | K::LocalVariable
        | K::MemberVariable
        | K::Class
        | K::Function
        | K::MemberFunction => Some(vec!['.', ',', '(']),
        _ => None,
    }
}
