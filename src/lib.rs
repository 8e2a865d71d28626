//! # scriptlet-base
//!
//! Language intelligence for script fragments embedded in composite
//! documents (component files with a `<script>` region and similar).
//!
//! An external analysis engine answers queries about each fragment as if it
//! were a standalone virtual file. This crate adapts those answers to the
//! editor protocol: it translates coordinates, gates features on
//! configuration, materializes sibling files referenced by results, and
//! flattens the engine's outline tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Feature functions + ScriptFeatures provider
//!   ↓
//! engine    → Engine boundary (ScriptEngine, EngineHost, VirtualFiles)
//! document  → Document trait, TextDocument, Fragment, DocumentManager
//! config    → FeatureGate and Settings
//! protocol  → Editor-protocol result shapes
//!   ↓
//! base      → Primitives (Position, Range, LineIndex, URIs)
//! error     → Crate error type
//! ```

/// Foundation types: offsets, positions, line index, URIs
pub mod base;

/// Feature configuration and gating
pub mod config;

/// Host documents and the document manager
pub mod document;

/// The analysis engine boundary and its data model
pub mod engine;

/// Crate error type
pub mod error;

/// IDE features: diagnostics, hover, symbols, completions, definitions, code actions
pub mod ide;

/// Editor-protocol result types
pub mod protocol;

// Re-export commonly needed items
pub use base::{LineIndex, Position, Range, TextRange, TextSize};
pub use config::{Feature, FeatureConfig, FeatureGate, Settings};
pub use document::{Document, DocumentManager, Fragment, InMemoryDocuments, TextDocument};
pub use engine::{Analysis, DocumentFactory, EngineHost, ScriptEngine, VirtualFiles};
pub use error::{Error, Result};
pub use ide::ScriptFeatures;
