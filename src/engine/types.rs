//! Engine-side data model.
//!
//! These mirror what the analysis engine reports for a virtual file. All
//! spans are [`TextRange`]s over the engine's linear buffer (UTF-16 units).

use smol_str::SmolStr;

use crate::base::TextRange;

use super::{DiagnosticCategory, ScriptElementKind};

/// Diagnostic message: either plain text or a chain of nested explanations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticMessage {
    Text(String),
    Chain(MessageChain),
}

/// A message with nested follow-up messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageChain {
    pub text: String,
    pub next: Vec<MessageChain>,
}

impl MessageChain {
    /// A chain link without follow-ups.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: Vec::new(),
        }
    }
}

impl DiagnosticMessage {
    /// Flatten into display text.
    ///
    /// Each nested level starts on a new line, indented two spaces deeper
    /// than its parent.
    pub fn flatten(&self, new_line: &str) -> String {
        match self {
            DiagnosticMessage::Text(text) => text.clone(),
            DiagnosticMessage::Chain(chain) => {
                let mut out = String::new();
                flatten_chain(chain, new_line, 0, &mut out);
                out
            }
        }
    }
}

fn flatten_chain(chain: &MessageChain, new_line: &str, indent: usize, out: &mut String) {
    if indent > 0 {
        out.push_str(new_line);
        out.push_str(&"  ".repeat(indent));
    }
    out.push_str(&chain.text);
    for next in &chain.next {
        flatten_chain(next, new_line, indent + 1, out);
    }
}

impl From<&str> for DiagnosticMessage {
    fn from(text: &str) -> Self {
        DiagnosticMessage::Text(text.to_owned())
    }
}

/// One engine finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineDiagnostic {
    /// `None` for file-level findings without a location
    pub span: Option<TextRange>,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message: DiagnosticMessage,
}

/// A fragment of rendered signature/documentation text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolDisplayPart {
    pub text: String,
    pub kind: SmolStr,
}

impl SymbolDisplayPart {
    pub fn new(text: impl Into<String>, kind: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }
}

/// Concatenate display parts into plain text.
pub fn display_parts_to_string(parts: &[SymbolDisplayPart]) -> String {
    parts.iter().map(|part| part.text.as_str()).collect()
}

/// Quick-info (hover) answer at an offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickInfo {
    pub kind: ScriptElementKind,
    pub kind_modifiers: SmolStr,
    pub span: TextRange,
    pub display_parts: Vec<SymbolDisplayPart>,
    pub documentation: Vec<SymbolDisplayPart>,
}

/// Hierarchical outline node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTree {
    pub text: SmolStr,
    pub kind: ScriptElementKind,
    pub kind_modifiers: SmolStr,
    /// Ordered, possibly non-contiguous spans covered by this node
    pub spans: Vec<TextRange>,
    pub child_items: Vec<NavigationTree>,
}

impl NavigationTree {
    /// A node with the given spans and no children.
    pub fn new(text: impl Into<SmolStr>, kind: ScriptElementKind, spans: Vec<TextRange>) -> Self {
        Self {
            text: text.into(),
            kind,
            kind_modifiers: SmolStr::default(),
            spans,
            child_items: Vec::new(),
        }
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: NavigationTree) -> Self {
        self.child_items.push(child);
        self
    }

    /// Overall extent: start of the first span to end of the last.
    ///
    /// `None` for nodes without spans.
    pub fn extent(&self) -> Option<TextRange> {
        let first = self.spans.first()?;
        let last = self.spans.last()?;
        Some(TextRange::new(first.start(), last.end().max(first.start())))
    }
}

/// Options for a completion query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionOptions {
    pub trigger_character: Option<char>,
    pub include_completions_for_module_exports: bool,
}

/// One completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionEntry {
    pub name: SmolStr,
    pub kind: ScriptElementKind,
    pub sort_text: SmolStr,
    pub is_recommended: bool,
}

/// Completion answer at an offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionInfo {
    pub is_member_completion: bool,
    pub entries: Vec<CompletionEntry>,
}

/// Where a symbol is defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionInfo {
    pub file_name: String,
    pub span: TextRange,
    pub kind: ScriptElementKind,
    pub name: SmolStr,
    pub container_name: SmolStr,
}

/// Definitions plus the span of the identifier they were requested for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionInfoAndBoundSpan {
    pub definitions: Vec<DefinitionInfo>,
    pub span: TextRange,
}

/// A single text replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextChange {
    pub span: TextRange,
    pub new_text: String,
}

/// Replacements within one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTextChanges {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

/// A quick fix proposed by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeFixAction {
    pub fix_name: SmolStr,
    pub description: String,
    pub changes: Vec<FileTextChanges>,
}

/// Formatting settings sent along with code-fix queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatCodeSettings {
    pub indent_size: u32,
    pub tab_size: u32,
    pub convert_tabs_to_spaces: bool,
    pub new_line_character: SmolStr,
}

impl Default for FormatCodeSettings {
    fn default() -> Self {
        Self {
            indent_size: 4,
            tab_size: 4,
            convert_tabs_to_spaces: true,
            new_line_character: SmolStr::new_inline("\n"),
        }
    }
}

/// User preferences sent along with code-fix queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPreferences {
    pub quote_preference: Option<SmolStr>,
    pub import_module_specifier_preference: Option<SmolStr>,
}
