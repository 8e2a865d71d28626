//! Features on a fragment whose engine view is a separately registered
//! virtual file. The virtual file is plain text with no attributes; the
//! language and every reported range come from the queried fragment.

mod common;

use std::sync::Arc;

use common::{Call, MockEngine, MockHost, features, span};
use scriptlet::base::{Position, Range, TextSize};
use scriptlet::config::Settings;
use scriptlet::document::{Document, DocumentManager, Fragment};
use scriptlet::engine::{
    CodeFixAction, DefinitionInfo, DefinitionInfoAndBoundSpan, DiagnosticCategory,
    EngineDiagnostic, FileTextChanges, QuickInfo, ScriptElementKind, SymbolDisplayPart, TextChange,
};
use scriptlet::ide::{
    CodeActionsProvider, CompletionsProvider, DefinitionsProvider, DiagnosticsProvider,
    HoverProvider,
};
use scriptlet::protocol::CodeActionContext;

const COMPONENT: &str = "<h1>{name}</h1>\n<script lang=\"ts\">\nexport let name;\nfunction greet() {}\n</script>\n";

fn fragment() -> Fragment {
    let start = COMPONENT.find("export").unwrap();
    let end = COMPONENT.find("</script>").unwrap();
    Fragment::new("file:///app/App.svelte", COMPONENT, start..end, Some(1))
        .unwrap()
        .with_attributes([("lang", "ts")].into_iter().collect())
}

#[test]
fn test_diagnostics_use_fragment_language_and_coordinates() {
    let engine = MockEngine {
        semantic: vec![EngineDiagnostic {
            span: Some(span(4, 1)),
            category: DiagnosticCategory::Error,
            code: 2304,
            message: "Cannot find name 'r'.".into(),
        }],
        ..Default::default()
    };
    let host = Arc::new(MockHost::new(engine));
    let (features, documents) = features(host, Settings::new());
    let fragment = fragment();

    let diags = features.diagnostics(&fragment).unwrap();

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].source.as_deref(), Some("ts"));
    assert_eq!(
        diags[0].range,
        Range::new(Position::new(2, 4), Position::new(2, 5))
    );

    let virtual_file = documents.get_document("file:///app/App.svelte.ts").unwrap();
    assert_eq!(virtual_file.text(), fragment.text());
    assert!(documents.is_locked("file:///app/App.svelte.ts"));
}

#[test]
fn test_hover_offsets_relative_to_script() {
    let engine = MockEngine {
        quick_info: Some(QuickInfo {
            kind: ScriptElementKind::Let,
            kind_modifiers: "export".into(),
            span: span(11, 4),
            display_parts: vec![SymbolDisplayPart::new("name", "localName")],
            documentation: Vec::new(),
        }),
        ..Default::default()
    };
    let host = Arc::new(MockHost::new(engine));
    let (features, _) = features(host.clone(), Settings::new());

    let hover = features
        .hover(&fragment(), Position::new(2, 13))
        .unwrap()
        .unwrap();

    assert_eq!(
        hover.range,
        Some(Range::new(Position::new(2, 11), Position::new(2, 15)))
    );
    assert_eq!(host.engine.calls(), vec![Call::QuickInfo(TextSize::from(13))]);
}

#[test]
fn test_completion_offset_relative_to_script() {
    let host = Arc::new(MockHost::new(MockEngine::default()));
    let (features, _) = features(host.clone(), Settings::new());

    let list = features
        .completions(&fragment(), Position::new(3, 9), Some('.'))
        .unwrap();

    assert!(list.is_none());
    assert_eq!(
        host.engine.calls(),
        vec![Call::Completions(TextSize::from(26), Some('.'))]
    );
}

#[test]
fn test_definition_back_into_virtual_file_targets_component() {
    let engine = MockEngine {
        definitions: Some(DefinitionInfoAndBoundSpan {
            definitions: vec![DefinitionInfo {
                file_name: "/app/App.svelte.ts".into(),
                span: span(26, 5),
                kind: ScriptElementKind::Function,
                name: "greet".into(),
                container_name: "".into(),
            }],
            span: span(26, 5),
        }),
        ..Default::default()
    }
    .with_files([]);
    let host = Arc::new(MockHost::new(engine));
    let (features, _) = features(host.clone(), Settings::new());

    let links = features.definitions(&fragment(), Position::new(3, 10)).unwrap();

    assert_eq!(links.len(), 1);
    let greet = Range::new(Position::new(3, 9), Position::new(3, 14));
    assert_eq!(links[0].target_uri, "file:///app/App.svelte");
    assert_eq!(links[0].origin_selection_range, Some(greet));
    assert_eq!(links[0].target_range, greet);
    assert!(
        !host.engine.calls().iter().any(|call| matches!(call, Call::ReadFile(_))),
        "the virtual file is never read back from disk"
    );
}

#[test]
fn test_code_action_edits_target_component() {
    let engine = MockEngine {
        code_fixes: vec![CodeFixAction {
            fix_name: "fixSpelling".into(),
            description: "Change 'export' to 'import'".into(),
            changes: vec![FileTextChanges {
                file_name: "/app/App.svelte.ts".into(),
                text_changes: vec![TextChange {
                    span: span(0, 6),
                    new_text: "import".into(),
                }],
            }],
        }],
        ..Default::default()
    };
    let host = Arc::new(MockHost::new(engine));
    let (features, _) = features(host.clone(), Settings::new());

    let range = Range::new(Position::new(2, 0), Position::new(2, 6));
    let actions = features
        .code_actions(&fragment(), range, &CodeActionContext::default())
        .unwrap();

    assert_eq!(
        host.engine.calls(),
        vec![Call::CodeFixes(TextSize::from(0), TextSize::from(6), vec![])]
    );
    let edit = &actions[0].edit.document_changes[0];
    assert_eq!(edit.text_document.uri, "file:///app/App.svelte");
    assert_eq!(edit.edits[0].range, range);
}
