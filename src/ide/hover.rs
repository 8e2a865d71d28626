//! Hover information.

use smol_str::SmolStr;

use crate::base::Position;
use crate::document::Document;
use crate::engine::{Analysis, display_parts_to_string};
use crate::error::Result;
use crate::protocol::{Hover, MarkedString};

use super::convert::{to_engine_offset, to_protocol_range};

/// Language tag of hover code blocks.
pub const HOVER_LANGUAGE: &str = "ts";

/// Get hover information at a position.
///
/// Returns `None` when the engine has nothing to say about the position.
pub fn hover(
    analysis: &Analysis,
    document: &dyn Document,
    position: Position,
) -> Result<Option<Hover>> {
    let offset = to_engine_offset(document, position);

    let Some(info) = analysis.engine.quick_info(&analysis.path(), offset)? else {
        return Ok(None);
    };

    Ok(Some(Hover {
        contents: MarkedString {
            language: SmolStr::new_static(HOVER_LANGUAGE),
            value: display_parts_to_string(&info.display_parts),
        },
        range: Some(to_protocol_range(document, info.span)),
    }))
}
