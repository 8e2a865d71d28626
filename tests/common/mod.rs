//! Shared fixtures for integration tests: a scripted engine and host.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use scriptlet::base::{TextRange, TextSize};
use scriptlet::config::Settings;
use scriptlet::document::{Document, InMemoryDocuments};
use scriptlet::engine::{
    Analysis, CodeFixAction, CompletionInfo, CompletionOptions, DefinitionInfoAndBoundSpan,
    DocumentFactory, EngineDiagnostic, EngineHost, FormatCodeSettings, NavigationTree, QuickInfo,
    ScriptEngine, UserPreferences,
};
use scriptlet::error::Result;
use scriptlet::ide::ScriptFeatures;

pub fn span(start: u32, len: u32) -> TextRange {
    TextRange::at(TextSize::from(start), TextSize::from(len))
}

/// A query the mock engine received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Diagnostics(&'static str),
    QuickInfo(TextSize),
    NavigationTree,
    Completions(TextSize, Option<char>),
    Definition(TextSize),
    CodeFixes(TextSize, TextSize, Vec<u32>),
    ReadFile(String),
}

/// Engine with canned answers that records every query.
#[derive(Default)]
pub struct MockEngine {
    pub syntactic: Vec<EngineDiagnostic>,
    pub suggestion: Vec<EngineDiagnostic>,
    pub semantic: Vec<EngineDiagnostic>,
    pub quick_info: Option<QuickInfo>,
    pub navigation_tree: Option<NavigationTree>,
    pub completions: Option<CompletionInfo>,
    pub definitions: Option<DefinitionInfoAndBoundSpan>,
    pub code_fixes: Vec<CodeFixAction>,
    /// Files visible to `read_file`; `None` defers to the filesystem
    pub files: Option<FxHashMap<String, String>>,
    pub calls: Mutex<Vec<Call>>,
}

impl MockEngine {
    pub fn with_files<'a>(mut self, files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.files = Some(
            files
                .into_iter()
                .map(|(path, text)| (path.to_owned(), text.to_owned()))
                .collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

impl ScriptEngine for MockEngine {
    fn syntactic_diagnostics(&self, _path: &str) -> Result<Vec<EngineDiagnostic>> {
        self.record(Call::Diagnostics("syntactic"));
        Ok(self.syntactic.clone())
    }

    fn suggestion_diagnostics(&self, _path: &str) -> Result<Vec<EngineDiagnostic>> {
        self.record(Call::Diagnostics("suggestion"));
        Ok(self.suggestion.clone())
    }

    fn semantic_diagnostics(&self, _path: &str) -> Result<Vec<EngineDiagnostic>> {
        self.record(Call::Diagnostics("semantic"));
        Ok(self.semantic.clone())
    }

    fn quick_info(&self, _path: &str, offset: TextSize) -> Result<Option<QuickInfo>> {
        self.record(Call::QuickInfo(offset));
        Ok(self.quick_info.clone())
    }

    fn navigation_tree(&self, _path: &str) -> Result<Option<NavigationTree>> {
        self.record(Call::NavigationTree);
        Ok(self.navigation_tree.clone())
    }

    fn completions(
        &self,
        _path: &str,
        offset: TextSize,
        options: &CompletionOptions,
    ) -> Result<Option<CompletionInfo>> {
        assert!(options.include_completions_for_module_exports);
        self.record(Call::Completions(offset, options.trigger_character));
        Ok(self.completions.clone())
    }

    fn definition_and_bound_span(
        &self,
        _path: &str,
        offset: TextSize,
    ) -> Result<Option<DefinitionInfoAndBoundSpan>> {
        self.record(Call::Definition(offset));
        Ok(self.definitions.clone())
    }

    fn code_fixes(
        &self,
        _path: &str,
        start: TextSize,
        end: TextSize,
        error_codes: &[u32],
        _format_options: &FormatCodeSettings,
        _preferences: &UserPreferences,
    ) -> Result<Vec<CodeFixAction>> {
        self.record(Call::CodeFixes(start, end, error_codes.to_vec()));
        Ok(self.code_fixes.clone())
    }

    fn read_file(&self, path: &str) -> Option<String> {
        self.record(Call::ReadFile(path.to_owned()));
        match &self.files {
            Some(files) => files.get(path).cloned(),
            None => std::fs::read_to_string(path).ok(),
        }
    }
}

/// How the mock host obtains the fragment for a document.
pub enum FragmentSource {
    /// Register `<document path>.ts` through the factory, once
    Virtual,
    /// Use this document as-is
    Fixed(Arc<dyn Document>),
}

pub struct MockHost {
    pub engine: Arc<MockEngine>,
    source: FragmentSource,
    registered: Mutex<Option<Arc<dyn Document>>>,
}

impl MockHost {
    pub fn new(engine: MockEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            source: FragmentSource::Virtual,
            registered: Mutex::new(None),
        }
    }

    pub fn with_fragment(engine: MockEngine, fragment: Arc<dyn Document>) -> Self {
        Self {
            engine: Arc::new(engine),
            source: FragmentSource::Fixed(fragment),
            registered: Mutex::new(None),
        }
    }
}

impl EngineHost for MockHost {
    fn analysis_for(&self, document: &dyn Document, factory: &dyn DocumentFactory) -> Result<Analysis> {
        let engine: Arc<dyn ScriptEngine> = self.engine.clone();
        let virtual_file = match &self.source {
            FragmentSource::Fixed(fragment) => fragment.clone(),
            FragmentSource::Virtual => {
                let mut registered = self.registered.lock();
                match registered.as_ref() {
                    Some(virtual_file) => virtual_file.clone(),
                    None => {
                        let path = document.file_path().unwrap_or_default();
                        let virtual_file =
                            factory.create_document(&format!("{path}.ts"), document.text())?;
                        *registered = Some(virtual_file.clone());
                        virtual_file
                    }
                }
            }
        };
        Ok(Analysis::new(engine, virtual_file))
    }
}

/// Wire a provider around `host` with the given settings.
pub fn features(host: Arc<MockHost>, settings: Settings) -> (ScriptFeatures, Arc<InMemoryDocuments>) {
    let documents = Arc::new(InMemoryDocuments::new());
    let features = ScriptFeatures::new(Arc::new(settings), documents.clone(), host);
    (features, documents)
}
