mod common;

use common::{Call, MockEngine};
use scriptlet::document::{Document, TextDocument};
use scriptlet::ide::DocumentCache;

#[test]
fn test_seed_is_returned_without_reading() {
    let engine = MockEngine::default().with_files([]);
    let seed = TextDocument::new("file:///app/App.svelte", "let a;", 3);
    let mut cache = DocumentCache::new(&engine, "/app/App.svelte.ts", &seed);

    let resolved = cache.resolve("/app/App.svelte.ts").unwrap();

    assert_eq!(resolved.uri(), "file:///app/App.svelte");
    assert_eq!(resolved.version(), Some(3));
    assert!(engine.calls().is_empty());
}

#[test]
fn test_sibling_materialized_once() {
    let engine = MockEngine::default().with_files([("/app/util.ts", "export {};")]);
    let seed = TextDocument::new("file:///app/App.svelte", "", 1);
    let mut cache = DocumentCache::new(&engine, "/app/App.svelte.ts", &seed);

    let first = cache.resolve("/app/util.ts").unwrap();
    assert_eq!(first.uri(), "file:///app/util.ts");
    assert_eq!(first.text(), "export {};");
    assert_eq!(first.version(), None);

    let second = cache.resolve("/app/util.ts").unwrap();
    assert_eq!(second.text(), "export {};");

    assert_eq!(cache.len(), 2);
    assert_eq!(engine.calls(), vec![Call::ReadFile("/app/util.ts".into())]);
}

#[test]
fn test_unreadable_file_is_empty() {
    let engine = MockEngine::default().with_files([]);
    let seed = TextDocument::new("file:///a.svelte", "", 1);
    let mut cache = DocumentCache::new(&engine, "/a.svelte.ts", &seed);

    let doc = cache.resolve("/missing dir/b.ts").unwrap();

    assert_eq!(doc.uri(), "file:///missing%20dir/b.ts");
    assert_eq!(doc.text(), "");
}

#[test]
fn test_path_without_uri() {
    let engine = MockEngine::default().with_files([]);
    let seed = TextDocument::new("file:///a.svelte", "", 1);
    let mut cache = DocumentCache::new(&engine, "/a.svelte.ts", &seed);

    assert!(cache.resolve("lib.dom.d.ts").is_none());
    assert_eq!(cache.len(), 1);
    assert!(engine.calls().is_empty());
}
