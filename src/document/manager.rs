//! Document manager boundary and an in-memory implementation.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;

use crate::error::Result;

use super::{Document, TextDocument};

/// Everything needed to open a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentDescriptor {
    pub uri: String,
    pub language_id: String,
    pub text: String,
    pub version: i32,
}

/// Owns document lifecycle on behalf of the host editor.
pub trait DocumentManager: Send + Sync {
    /// Open (or replace) a document and return the instance the manager holds.
    fn open_document(&self, descriptor: DocumentDescriptor) -> Result<Arc<dyn Document>>;

    /// Mark a document as externally managed so editor edits no longer apply.
    fn lock_document(&self, uri: &str) -> Result<()>;

    /// Look up an open document.
    fn get_document(&self, uri: &str) -> Option<Arc<dyn Document>>;
}

/// Thread-safe document registry.
///
/// Opening a locked URI returns the document already registered instead of
/// replacing it.
#[derive(Debug, Default)]
pub struct InMemoryDocuments {
    inner: RwLock<DocumentsInner>,
}

#[derive(Debug, Default)]
struct DocumentsInner {
    /// URI → document
    documents: IndexMap<String, Arc<dyn Document>>,
    /// URIs that have been locked
    locked: IndexSet<String>,
}

impl InMemoryDocuments {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a URI has been locked.
    pub fn is_locked(&self, uri: &str) -> bool {
        self.inner.read().locked.contains(uri)
    }

    /// Close a document, unlocking it.
    pub fn close_document(&self, uri: &str) -> Option<Arc<dyn Document>> {
        let mut inner = self.inner.write();
        inner.locked.swap_remove(uri);
        inner.documents.swap_remove(uri)
    }

    /// Get the number of open documents.
    pub fn len(&self) -> usize {
        self.inner.read().documents.len()
    }

    /// Check if no documents are open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentManager for InMemoryDocuments {
    fn open_document(&self, descriptor: DocumentDescriptor) -> Result<Arc<dyn Document>> {
        let mut inner = self.inner.write();

        if inner.locked.contains(&descriptor.uri)
            && let Some(existing) = inner.documents.get(&descriptor.uri)
        {
            return Ok(existing.clone());
        }

        let document: Arc<dyn Document> = Arc::new(TextDocument::new(
            descriptor.uri.clone(),
            descriptor.text,
            descriptor.version,
        ));
        inner.documents.insert(descriptor.uri, document.clone());
        Ok(document)
    }

    fn lock_document(&self, uri: &str) -> Result<()> {
        self.inner.write().locked.insert(uri.to_owned());
        Ok(())
    }

    fn get_document(&self, uri: &str) -> Option<Arc<dyn Document>> {
        self.inner.read().documents.get(uri).cloned()
    }
}
