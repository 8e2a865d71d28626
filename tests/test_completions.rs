mod common;

use std::sync::Arc;

use rstest::rstest;

use common::{Call, MockEngine, MockHost, features};
use scriptlet::base::{Position, TextSize};
use scriptlet::config::Settings;
use scriptlet::document::TextDocument;
use scriptlet::engine::{CompletionEntry, CompletionInfo, ScriptElementKind};
use scriptlet::ide::CompletionsProvider;
use scriptlet::protocol::CompletionItemKind;

fn entry(name: &str, kind: ScriptElementKind, sort_text: &str, is_recommended: bool) -> CompletionEntry {
    CompletionEntry {
        name: name.into(),
        kind,
        sort_text: sort_text.into(),
        is_recommended,
    }
}

fn engine_with_entries() -> MockEngine {
    MockEngine {
        completions: Some(CompletionInfo {
            is_member_completion: true,
            entries: vec![
                entry("length", ScriptElementKind::MemberVariable, "11", true),
                entry("at", ScriptElementKind::MemberFunction, "11", false),
                entry("async", ScriptElementKind::Keyword, "15", false),
            ],
        }),
        ..Default::default()
    }
}

#[test]
fn test_entries_become_items() {
    let host = Arc::new(MockHost::new(engine_with_entries()));
    let (features, _) = features(host.clone(), Settings::new());
    let doc = TextDocument::new("file:///app/App.svelte", "const s = 'x';\ns.", 1);

    let list = features
        .completions(&doc, Position::new(1, 2), Some('.'))
        .unwrap()
        .unwrap();

    assert!(!list.is_incomplete);
    assert_eq!(list.items.len(), 3);

    let length = &list.items[0];
    assert_eq!(length.label, "length");
    assert_eq!(length.kind, Some(CompletionItemKind::Field));
    assert_eq!(length.sort_text.as_deref(), Some("11"));
    assert_eq!(length.commit_characters, Some(vec!['.', ',', '(']));
    assert!(length.preselect);

    assert_eq!(list.items[1].kind, Some(CompletionItemKind::Method));
    assert_eq!(list.items[2].kind, Some(CompletionItemKind::Keyword));
    assert_eq!(list.items[2].commit_characters, None);

    assert_eq!(
        host.engine.calls(),
        vec![Call::Completions(TextSize::from(17), Some('.'))]
    );
}

#[rstest]
#[case(Some('.'), Some('.'))]
#[case(Some('<'), Some('<'))]
#[case(Some('@'), Some('@'))]
#[case(Some(';'), None)]
#[case(Some(' '), None)]
#[case(None, None)]
fn test_trigger_character_filtered(#[case] typed: Option<char>, #[case] forwarded: Option<char>) {
    let host = Arc::new(MockHost::new(engine_with_entries()));
    let (features, _) = features(host.clone(), Settings::new());
    let doc = TextDocument::new("file:///app/App.svelte", "x", 1);

    features.completions(&doc, Position::new(0, 1), typed).unwrap();

    assert_eq!(
        host.engine.calls(),
        vec![Call::Completions(TextSize::from(1), forwarded)]
    );
}

#[test]
fn test_no_completion_info() {
    let host = Arc::new(MockHost::new(MockEngine::default()));
    let (features, _) = features(host, Settings::new());
    let doc = TextDocument::new("file:///app/App.svelte", "", 1);

    assert!(features.completions(&doc, Position::new(0, 0), None).unwrap().is_none());
}

#[test]
fn test_empty_completion_info_is_empty_list() {
    let engine = MockEngine {
        completions: Some(CompletionInfo::default()),
        ..Default::default()
    };
    let host = Arc::new(MockHost::new(engine));
    let (features, _) = features(host, Settings::new());
    let doc = TextDocument::new("file:///app/App.svelte", "", 1);

    let list = features.completions(&doc, Position::new(0, 0), None).unwrap().unwrap();
    assert!(list.items.is_empty());
}
