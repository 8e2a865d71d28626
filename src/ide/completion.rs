//! Completions.

use crate::base::Position;
use crate::document::Document;
use crate::engine::{Analysis, CompletionEntry, CompletionOptions};
use crate::error::Result;
use crate::protocol::{CompletionItem, CompletionList};

use super::convert::{commit_characters_for, completion_item_kind_for, to_engine_offset};

/// Characters the engine accepts as completion triggers.
pub const TRIGGER_CHARACTERS: [char; 8] = ['.', '"', '\'', '`', '/', '@', '<', '#'];

/// Whether `ch` is forwarded to the engine as a trigger character.
pub fn is_trigger_character(ch: char) -> bool {
    TRIGGER_CHARACTERS.contains(&ch)
}

/// Get completions at a position.
///
/// A trigger character outside [`TRIGGER_CHARACTERS`] is dropped and the
/// query proceeds as an explicit invocation.
pub fn completions(
    analysis: &Analysis,
    document: &dyn Document,
    position: Position,
    trigger_character: Option<char>,
) -> Result<Option<CompletionList>> {
    let offset = to_engine_offset(document, position);
    let options = CompletionOptions {
        trigger_character: trigger_character.filter(|ch| is_trigger_character(*ch)),
        include_completions_for_module_exports: true,
    };

    let Some(info) = analysis
        .engine
        .completions(&analysis.path(), offset, &options)?
    else {
        return Ok(None);
    };

    Ok(Some(CompletionList {
        is_incomplete: false,
        items: info.entries.iter().map(to_completion_item).collect(),
    }))
}

fn to_completion_item(entry: &CompletionEntry) -> CompletionItem {
    CompletionItem {
        label: entry.name.clone(),
        kind: Some(completion_item_kind_for(entry.kind)),
        sort_text: Some(entry.sort_text.clone()),
        commit_characters: commit_characters_for(entry.kind),
        preselect: entry.is_recommended,
    }
}
