//! Go-to-definition.

use crate::base::Position;
use crate::document::Document;
use crate::engine::Analysis;
use crate::error::Result;
use crate::protocol::LocationLink;

use super::convert::{to_engine_offset, to_protocol_range};
use super::siblings::DocumentCache;

/// Get definition links for the symbol at a position.
///
/// Each definition's range is computed against the document that holds it,
/// which may be a file the host has not opened. Definitions in files with no
/// URI are dropped.
pub fn goto_definition(
    analysis: &Analysis,
    document: &dyn Document,
    position: Position,
) -> Result<Vec<LocationLink>> {
    let path = analysis.path();
    let offset = to_engine_offset(document, position);

    let Some(info) = analysis.engine.definition_and_bound_span(&path, offset)? else {
        return Ok(Vec::new());
    };

    let origin = to_protocol_range(document, info.span);
    let mut documents = DocumentCache::new(analysis.engine.as_ref(), &path, document);

    let links: Vec<LocationLink> = info
        .definitions
        .iter()
        .filter_map(|def| {
            let target = documents.resolve(&def.file_name)?;
            let range = to_protocol_range(target, def.span);
            Some(LocationLink {
                origin_selection_range: Some(origin),
                target_uri: target.uri().to_owned(),
                target_range: range,
                target_selection_range: range,
            })
        })
        .collect();

    tracing::debug!(%path, count = links.len(), files = documents.len(), "definitions");
    Ok(links)
}
