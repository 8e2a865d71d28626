//! Per-call cache of sibling documents.
//!
//! Definitions and code fixes can point into files the host has never
//! opened. Those files are materialized on demand as read-only documents, at
//! most once per path per call, so every range computed against one file
//! uses the same coordinate system.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::path_to_uri;
use crate::document::{Document, TextDocument};
use crate::engine::ScriptEngine;

/// Path-keyed document cache scoped to a single feature call.
///
/// The queried document is registered under the engine path of its virtual
/// file, so results pointing back into the fragment use its coordinates.
pub struct DocumentCache<'a> {
    engine: &'a dyn ScriptEngine,
    seed_path: String,
    seed: &'a dyn Document,
    documents: FxHashMap<String, Arc<dyn Document>>,
}

impl<'a> DocumentCache<'a> {
    /// Create a cache seeded with the document under analysis.
    pub fn new(engine: &'a dyn ScriptEngine, path: &str, document: &'a dyn Document) -> Self {
        Self {
            engine,
            seed_path: path.to_owned(),
            seed: document,
            documents: FxHashMap::default(),
        }
    }

    /// Document for `path`, reading it through the engine on first use.
    ///
    /// Unreadable files become empty documents. Returns `None` only when the
    /// path cannot be expressed as a URI.
    pub fn resolve(&mut self, path: &str) -> Option<&dyn Document> {
        if path == self.seed_path {
            return Some(self.seed);
        }
        if self.documents.contains_key(path) {
            return self.documents.get(path).map(|document| &**document);
        }

        let Some(uri) = path_to_uri(path) else {
            tracing::warn!(path, "cannot resolve file without a URI");
            return None;
        };
        let text = self.engine.read_file(path).unwrap_or_else(|| {
            tracing::warn!(path, "sibling file unreadable; using empty contents");
            String::new()
        });

        let document: Arc<dyn Document> = Arc::new(TextDocument::read_only(uri, text));
        Some(&**self.documents.entry(path.to_owned()).or_insert(document))
    }

    /// Number of documents known so far, including the seed.
    pub fn len(&self) -> usize {
        self.documents.len() + 1
    }

    /// Always false; the cache is seeded on construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}
