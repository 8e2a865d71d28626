//! Document symbols, flattened from the engine's navigation tree.
//!
//! The engine reports an outline tree whose root is a synthetic node covering
//! the whole fragment. The protocol wants a flat list where each symbol names
//! its container. The root itself is dropped, and symbols directly under it
//! are attributed to [`TOP_LEVEL_CONTAINER`].

use smol_str::SmolStr;

use crate::document::Document;
use crate::engine::{Analysis, NavigationTree};
use crate::error::Result;
use crate::protocol::{Location, SymbolInformation};

use super::convert::{symbol_kind_for, to_protocol_range};

/// Container name for symbols declared at the top level of a fragment.
pub const TOP_LEVEL_CONTAINER: &str = "script";

/// Get all symbols in the fragment as a flat list.
pub fn document_symbols(
    analysis: &Analysis,
    document: &dyn Document,
) -> Result<Vec<SymbolInformation>> {
    let Some(tree) = analysis.engine.navigation_tree(&analysis.path())? else {
        return Ok(Vec::new());
    };
    if tree.spans.is_empty() {
        return Ok(Vec::new());
    }

    let symbols = flatten_navigation_tree(&tree, document);
    tracing::trace!(count = symbols.len(), "document symbols");
    Ok(symbols)
}

/// Flatten a navigation tree in pre-order.
///
/// The first emitted entry (the root) is dropped. Any remaining entry whose
/// container equals the root's name is re-labelled [`TOP_LEVEL_CONTAINER`].
/// The match is by name, so an inner declaration sharing the root's name
/// also has its children re-labelled.
pub fn flatten_navigation_tree(
    tree: &NavigationTree,
    document: &dyn Document,
) -> Vec<SymbolInformation> {
    let mut symbols = Vec::new();
    collect_symbols(tree, None, document, &mut symbols);

    if symbols.is_empty() {
        return symbols;
    }
    let root = symbols.remove(0);

    for symbol in &mut symbols {
        if symbol.container_name.as_ref() == Some(&root.name) {
            symbol.container_name = Some(SmolStr::new_static(TOP_LEVEL_CONTAINER));
        }
    }
    symbols
}

fn collect_symbols(
    node: &NavigationTree,
    container: Option<&SmolStr>,
    document: &dyn Document,
    out: &mut Vec<SymbolInformation>,
) {
    // Nodes without spans emit nothing but still name their children's container.
    if let Some(extent) = node.extent() {
        out.push(SymbolInformation {
            name: node.text.clone(),
            kind: symbol_kind_for(node.kind),
            location: Location {
                uri: document.uri().to_owned(),
                range: to_protocol_range(document, extent),
            },
            container_name: container.cloned(),
        });
    }

    for child in &node.child_items {
        collect_symbols(child, Some(&node.text), document, out);
    }
}
