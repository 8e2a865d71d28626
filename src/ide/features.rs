//! ScriptFeatures: the feature provider hosts call into.
//!
//! Each capability is a trait so a host can hold the provider behind whatever
//! subset of features it serves. Every request follows the same steps:
//!
//! 1. consult the [`FeatureGate`]; a disabled feature returns its empty value
//!    without touching the engine
//! 2. ask the [`EngineHost`] for the engine and virtual file of the document
//! 3. run the feature query against that [`Analysis`](crate::engine::Analysis),
//!    translating positions in the queried document's own coordinates
//!
//! ```ignore
//! let features = ScriptFeatures::new(settings, documents, host);
//! let hover = features.hover(&*document, Position::new(3, 8))?;
//! ```

use std::fmt;
use std::sync::Arc;

use crate::base::{Position, Range};
use crate::config::{Feature, FeatureConfig, FeatureGate};
use crate::document::{Document, DocumentManager};
use crate::engine::{Analysis, EngineHost, VirtualFiles};
use crate::error::Result;
use crate::protocol::{
    CodeAction, CodeActionContext, CompletionList, Diagnostic, Hover, LocationLink,
    SymbolInformation,
};

pub trait DiagnosticsProvider {
    fn diagnostics(&self, document: &dyn Document) -> Result<Vec<Diagnostic>>;
}

pub trait HoverProvider {
    fn hover(&self, document: &dyn Document, position: Position) -> Result<Option<Hover>>;
}

pub trait DocumentSymbolsProvider {
    fn document_symbols(&self, document: &dyn Document) -> Result<Vec<SymbolInformation>>;
}

pub trait CompletionsProvider {
    /// `trigger_character` is the character that caused the request, if any.
    fn completions(
        &self,
        document: &dyn Document,
        position: Position,
        trigger_character: Option<char>,
    ) -> Result<Option<CompletionList>>;
}

pub trait DefinitionsProvider {
    fn definitions(&self, document: &dyn Document, position: Position)
    -> Result<Vec<LocationLink>>;
}

pub trait CodeActionsProvider {
    fn code_actions(
        &self,
        document: &dyn Document,
        range: Range,
        context: &CodeActionContext,
    ) -> Result<Vec<CodeAction>>;
}

/// Script language features for fragments embedded in host documents.
pub struct ScriptFeatures {
    gate: FeatureGate,
    documents: Arc<dyn DocumentManager>,
    host: Arc<dyn EngineHost>,
}

impl ScriptFeatures {
    pub fn new(
        config: Arc<dyn FeatureConfig>,
        documents: Arc<dyn DocumentManager>,
        host: Arc<dyn EngineHost>,
    ) -> Self {
        Self {
            gate: FeatureGate::new(config),
            documents,
            host,
        }
    }

    /// The gate consulted before every request.
    pub fn gate(&self) -> &FeatureGate {
        &self.gate
    }

    fn analysis(&self, document: &dyn Document) -> Result<Analysis> {
        let factory = VirtualFiles::new(self.documents.as_ref());
        self.host.analysis_for(document, &factory)
    }
}

impl fmt::Debug for ScriptFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptFeatures")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl DiagnosticsProvider for ScriptFeatures {
    fn diagnostics(&self, document: &dyn Document) -> Result<Vec<Diagnostic>> {
        if !self.gate.enabled(Feature::Diagnostics) {
            return Ok(Vec::new());
        }
        tracing::debug!(uri = document.uri(), "diagnostics requested");
        super::diagnostics(&self.analysis(document)?, document)
    }
}

impl HoverProvider for ScriptFeatures {
    fn hover(&self, document: &dyn Document, position: Position) -> Result<Option<Hover>> {
        if !self.gate.enabled(Feature::Hover) {
            return Ok(None);
        }
        tracing::debug!(uri = document.uri(), %position, "hover requested");
        super::hover(&self.analysis(document)?, document, position)
    }
}

impl DocumentSymbolsProvider for ScriptFeatures {
    fn document_symbols(&self, document: &dyn Document) -> Result<Vec<SymbolInformation>> {
        if !self.gate.enabled(Feature::DocumentSymbols) {
            return Ok(Vec::new());
        }
        tracing::debug!(uri = document.uri(), "document symbols requested");
        super::document_symbols(&self.analysis(document)?, document)
    }
}

impl CompletionsProvider for ScriptFeatures {
    fn completions(
        &self,
        document: &dyn Document,
        position: Position,
        trigger_character: Option<char>,
    ) -> Result<Option<CompletionList>> {
        if !self.gate.enabled(Feature::Completions) {
            return Ok(None);
        }
        tracing::debug!(uri = document.uri(), %position, ?trigger_character, "completions requested");
        super::completions(
            &self.analysis(document)?,
            document,
            position,
            trigger_character,
        )
    }
}

impl DefinitionsProvider for ScriptFeatures {
    fn definitions(
        &self,
        document: &dyn Document,
        position: Position,
    ) -> Result<Vec<LocationLink>> {
        if !self.gate.enabled(Feature::Definitions) {
            return Ok(Vec::new());
        }
        tracing::debug!(uri = document.uri(), %position, "definitions requested");
        super::goto_definition(&self.analysis(document)?, document, position)
    }
}

impl CodeActionsProvider for ScriptFeatures {
    fn code_actions(
        &self,
        document: &dyn Document,
        range: Range,
        context: &CodeActionContext,
    ) -> Result<Vec<CodeAction>> {
        if !self.gate.enabled(Feature::CodeActions) {
            return Ok(Vec::new());
        }
        tracing::debug!(uri = document.uri(), start = %range.start, end = %range.end, "code actions requested");
        super::code_actions(&self.analysis(document)?, document, range, context)
    }
}
