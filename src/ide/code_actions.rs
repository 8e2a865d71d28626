//! Quick-fix code actions.

use indexmap::IndexMap;

use crate::base::Range;
use crate::document::Document;
use crate::engine::{Analysis, CodeFixAction, FormatCodeSettings, UserPreferences};
use crate::error::Result;
use crate::protocol::{
    CodeAction, CodeActionContext, TextDocumentEdit, TextEdit, VersionedTextDocumentIdentifier,
    WorkspaceEdit,
};

use super::convert::{to_engine_offset, to_protocol_range};
use super::siblings::DocumentCache;

/// Get quick fixes for the diagnostics attached to a range.
///
/// Only numeric diagnostic codes (or string codes holding an integer) are
/// forwarded to the engine.
pub fn code_actions(
    analysis: &Analysis,
    document: &dyn Document,
    range: Range,
    context: &CodeActionContext,
) -> Result<Vec<CodeAction>> {
    let path = analysis.path();
    let start = to_engine_offset(document, range.start);
    let end = to_engine_offset(document, range.end);

    let error_codes: Vec<u32> = context
        .diagnostics
        .iter()
        .filter_map(|diag| diag.code.as_ref()?.as_number())
        .filter_map(|code| u32::try_from(code).ok())
        .collect();

    let fixes = analysis.engine.code_fixes(
        &path,
        start,
        end,
        &error_codes,
        &FormatCodeSettings::default(),
        &UserPreferences::default(),
    )?;

    let mut documents = DocumentCache::new(analysis.engine.as_ref(), &path, document);
    let actions: Vec<CodeAction> = fixes
        .iter()
        .map(|fix| to_code_action(fix, &mut documents))
        .collect();

    tracing::debug!(%path, codes = ?error_codes, count = actions.len(), "code actions");
    Ok(actions)
}

fn to_code_action(fix: &CodeFixAction, documents: &mut DocumentCache<'_>) -> CodeAction {
    // Keyed by URI so repeated entries for one file merge into a single edit.
    let mut edits: IndexMap<String, Vec<TextEdit>> = IndexMap::new();

    for change in &fix.changes {
        let Some(target) = documents.resolve(&change.file_name) else {
            continue;
        };
        let file_edits = edits.entry(target.uri().to_owned()).or_default();
        file_edits.extend(change.text_changes.iter().map(|text_change| TextEdit {
            range: to_protocol_range(target, text_change.span),
            new_text: text_change.new_text.clone(),
        }));
    }

    CodeAction {
        title: fix.description.clone(),
        edit: WorkspaceEdit {
            document_changes: edits
                .into_iter()
                .map(|(uri, edits)| TextDocumentEdit {
                    text_document: VersionedTextDocumentIdentifier { uri, version: None },
                    edits,
                })
                .collect(),
        },
        kind: fix.fix_name.clone(),
    }
}
