//! IDE features for embedded script fragments.
//!
//! Each function takes an [`Analysis`](crate::engine::Analysis) (engine plus
//! virtual file) and the queried document, and returns protocol values.
//! Engine answers arrive in the script's linear offsets; everything leaving
//! this module is already in the coordinates of the document it points into.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP crate types**: Uses [`crate::protocol`], converted at the server boundary
//! 3. **Gated at the edge**: [`ScriptFeatures`] checks the configuration, the
//!    functions here never do
//!
//! ## Usage
//!
//! ```ignore
//! use scriptlet::ide::{HoverProvider, ScriptFeatures};
//!
//! let features = ScriptFeatures::new(settings, documents, host);
//! let hover = features.hover(&*document, Position::new(0, 4))?;
//! ```

mod code_actions;
mod completion;
mod convert;
mod diagnostics;
mod features;
mod goto;
mod hover;
mod siblings;
mod symbols;

pub use code_actions::code_actions;
pub use completion::{TRIGGER_CHARACTERS, completions, is_trigger_character};
pub use convert::{
    commit_characters_for, completion_item_kind_for, severity_for, symbol_kind_for,
    to_engine_offset, to_protocol_range,
};
pub use diagnostics::diagnostics;
pub use features::{
    CodeActionsProvider, CompletionsProvider, DefinitionsProvider, DiagnosticsProvider,
    DocumentSymbolsProvider, HoverProvider, ScriptFeatures,
};
pub use goto::goto_definition;
pub use hover::{HOVER_LANGUAGE, hover};
pub use siblings::DocumentCache;
pub use symbols::{TOP_LEVEL_CONTAINER, document_symbols, flatten_navigation_tree};
