//! The analysis engine boundary.
//!
//! The engine is an external oracle: it answers queries about a virtual file
//! identified by path, at offsets in that file's linear buffer. This module
//! defines the queries the adapter consumes ([`ScriptEngine`]), how the host
//! pairs a document with an engine ([`EngineHost`]), and how the adapter
//! registers virtual files with the document manager ([`VirtualFiles`]).

mod kinds;
mod types;

use std::fmt;
use std::sync::Arc;

use crate::base::{TextSize, path_to_uri};
use crate::document::{Document, DocumentDescriptor, DocumentManager};
use crate::error::{Error, Result};

pub use kinds::{DiagnosticCategory, ScriptElementKind};
pub use types::{
    CodeFixAction, CompletionEntry, CompletionInfo, CompletionOptions, DefinitionInfo,
    DefinitionInfoAndBoundSpan, DiagnosticMessage, EngineDiagnostic, FileTextChanges,
    FormatCodeSettings, MessageChain, NavigationTree, QuickInfo, SymbolDisplayPart, TextChange,
    UserPreferences, display_parts_to_string,
};

/// Queries answered by the analysis engine for a virtual file.
///
/// Queries block until the engine has a complete answer. An engine that has
/// nothing to say returns `Ok(None)` or an empty list; `Err` is reserved for
/// engine failures, which the adapter propagates untouched.
pub trait ScriptEngine: Send + Sync {
    fn syntactic_diagnostics(&self, path: &str) -> Result<Vec<EngineDiagnostic>>;

    fn suggestion_diagnostics(&self, path: &str) -> Result<Vec<EngineDiagnostic>>;

    fn semantic_diagnostics(&self, path: &str) -> Result<Vec<EngineDiagnostic>>;

    fn quick_info(&self, path: &str, offset: TextSize) -> Result<Option<QuickInfo>>;

    fn navigation_tree(&self, path: &str) -> Result<Option<NavigationTree>>;

    fn completions(
        &self,
        path: &str,
        offset: TextSize,
        options: &CompletionOptions,
    ) -> Result<Option<CompletionInfo>>;

    fn definition_and_bound_span(
        &self,
        path: &str,
        offset: TextSize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>>;

    fn code_fixes(
        &self,
        path: &str,
        start: TextSize,
        end: TextSize,
        error_codes: &[u32],
        format_options: &FormatCodeSettings,
        preferences: &UserPreferences,
    ) -> Result<Vec<CodeFixAction>>;

    /// Raw contents of a file, through the engine's view of the filesystem.
    fn read_file(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}

/// Creates engine-visible documents for virtual files.
pub trait DocumentFactory {
    fn create_document(&self, file_path: &str, content: &str) -> Result<Arc<dyn Document>>;
}

/// Registers virtual files with the document manager and locks them.
pub struct VirtualFiles<'a> {
    manager: &'a dyn DocumentManager,
}

impl<'a> VirtualFiles<'a> {
    pub fn new(manager: &'a dyn DocumentManager) -> Self {
        Self { manager }
    }
}

impl DocumentFactory for VirtualFiles<'_> {
    fn create_document(&self, file_path: &str, content: &str) -> Result<Arc<dyn Document>> {
        let uri = path_to_uri(file_path).ok_or_else(|| Error::InvalidPath(file_path.to_owned()))?;
        tracing::debug!(%uri, "registering virtual file");

        let document = self.manager.open_document(DocumentDescriptor {
            uri: uri.clone(),
            language_id: String::new(),
            text: content.to_owned(),
            version: 0,
        })?;
        self.manager.lock_document(&uri)?;
        Ok(document)
    }
}

/// Pairs host documents with an engine and the fragment it analyses.
///
/// Implementations own project/compiler state and are expected to register a
/// fragment's virtual file once, reusing it on later calls.
pub trait EngineHost: Send + Sync {
    fn analysis_for(&self, document: &dyn Document, factory: &dyn DocumentFactory)
    -> Result<Analysis>;
}

/// Engine handle for one document: the engine plus the virtual file it
/// analyses in place of the document.
///
/// Engine answers refer to the virtual file's path, but their offsets line up
/// with the queried document's script text. Ranges are always translated
/// against the queried document, never against `virtual_file`.
#[derive(Clone)]
pub struct Analysis {
    pub engine: Arc<dyn ScriptEngine>,
    pub virtual_file: Arc<dyn Document>,
}

impl Analysis {
    pub fn new(engine: Arc<dyn ScriptEngine>, virtual_file: Arc<dyn Document>) -> Self {
        Self {
            engine,
            virtual_file,
        }
    }

    /// Engine path of the virtual file. Falls back to the raw URI when it
    /// has no `file://` URI.
    pub fn path(&self) -> String {
        self.virtual_file
            .file_path()
            .unwrap_or_else(|| self.virtual_file.uri().to_owned())
    }
}

impl fmt::Debug for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analysis")
            .field("virtual_file", &self.virtual_file)
            .finish_non_exhaustive()
    }
}
