//! End-to-end materialization scenarios against the in-memory backend.

use std::sync::Arc;

use serde_json::json;
use strew_engine::{store_node_to_directory, DirectoryMaterializer};
use strew_format::{BinaryHandler, JsonHandler, TextHandler};
use strew_fs::{DirectoryCreator, Entry, LeafWriter, MemoryFs, Op};
use strew_handler::{Handler, HandlerFilter, StoreError};
use strew_locator::Locator;
use strew_types::{Node, StoreOptions};

fn dest() -> Locator {
    Locator::parse("mem://t/out").unwrap()
}

fn text_handler(fs: &Arc<MemoryFs>) -> Arc<dyn Handler> {
    Arc::new(TextHandler::new(Arc::clone(fs) as Arc<dyn LeafWriter>))
}

// ---------------------------------------------------------------------------
// Single text property
// ---------------------------------------------------------------------------

#[tokio::test]
async fn one_string_property_one_directory_one_write() {
    let fs = Arc::new(MemoryFs::new());
    let handlers = vec![text_handler(&fs)];
    store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &Node::from(json!({"a": "b"})),
        &handlers,
        None,
    )
    .await
    .unwrap();

    let ops = fs.ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(
        &ops[0],
        Op::CreateDir { locator, recursive: true, .. } if locator == "mem://t/out"
    ));
    assert!(matches!(
        &ops[1],
        Op::WriteText { locator, content } if locator == "mem://t/out/a" && content == "b"
    ));
}

// ---------------------------------------------------------------------------
// Empty nested object, no handlers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nested_empty_object_creates_two_directories_and_no_files() {
    let fs = Arc::new(MemoryFs::new());
    store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &Node::from(json!({"a": {}})),
        &[],
        None,
    )
    .await
    .unwrap();

    let ops = fs.ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(&ops[0], Op::CreateDir { locator, .. } if locator == "mem://t/out"));
    assert!(matches!(&ops[1], Op::CreateDir { locator, .. } if locator == "mem://t/out/a"));
}

// ---------------------------------------------------------------------------
// Array at the root
// ---------------------------------------------------------------------------

#[tokio::test]
async fn array_root_is_rejected_before_any_io() {
    let fs = Arc::new(MemoryFs::new());
    let root = Node::from(json!([1, 2, 3]));

    let m = DirectoryMaterializer::new("dir", &[], Arc::clone(&fs) as _);
    assert!(!m.can_store("", &dest(), &root));

    let err = store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &root,
        &[],
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StoreError::TypeMismatch { .. }));
    assert!(fs.ops().is_empty());
}

// ---------------------------------------------------------------------------
// Mixed tree through a full handler stack
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mixed_tree_with_text_binary_and_json_fallback() {
    let fs = Arc::new(MemoryFs::new());
    let writer = Arc::clone(&fs) as Arc<dyn LeafWriter>;
    let handlers: Vec<Arc<dyn Handler>> = vec![
        Arc::new(TextHandler::new(Arc::clone(&writer))),
        Arc::new(BinaryHandler::new(Arc::clone(&writer))),
        // JSON accepts anything; narrow it away from objects so nested
        // objects still become directories.
        Arc::new(
            HandlerFilter::new(Arc::new(JsonHandler::new(writer)))
                .when(|_, _, value| !value.is_object()),
        ),
    ];

    let root = Node::Object(
        [
            ("readme".to_string(), Node::from("hello")),
            ("blob".to_string(), Node::from(vec![1u8, 2, 3])),
            ("count".to_string(), Node::from(7i64)),
            (
                "nested".to_string(),
                Node::Object(
                    [("inner".to_string(), Node::from("deep"))]
                        .into_iter()
                        .collect(),
                ),
            ),
        ]
        .into_iter()
        .collect(),
    );

    store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &root,
        &handlers,
        None,
    )
    .await
    .unwrap();

    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/readme").unwrap()),
        Some(Entry::Text("hello".to_string()))
    );
    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/blob").unwrap()),
        Some(Entry::Bytes(vec![1, 2, 3]))
    );
    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/count").unwrap()),
        Some(Entry::Text("7\n".to_string()))
    );
    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/nested").unwrap()),
        Some(Entry::Directory)
    );
    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/nested/inner").unwrap()),
        Some(Entry::Text("deep".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Glob-scoped handlers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn glob_scoped_handler_only_claims_matching_paths() {
    let fs = Arc::new(MemoryFs::new());
    let writer = Arc::clone(&fs) as Arc<dyn LeafWriter>;
    let handlers: Vec<Arc<dyn Handler>> = vec![Arc::new(
        HandlerFilter::new(Arc::new(TextHandler::new(writer))).for_path("/docs/*"),
    )];

    store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &Node::from(json!({
            "docs": {"guide": "text"},
            "other": "dropped"
        })),
        &handlers,
        None,
    )
    .await
    .unwrap();

    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/docs/guide").unwrap()),
        Some(Entry::Text("text".to_string()))
    );
    // "/other" missed the glob and no other handler claimed it.
    assert!(!fs.contains(&Locator::parse("mem://t/out/other").unwrap()));
}

// ---------------------------------------------------------------------------
// Strict mode end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn strict_mode_rejects_the_dropped_property() {
    let fs = Arc::new(MemoryFs::new());
    let err = store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &Node::from(json!({"orphan": 1})),
        &[],
        Some(StoreOptions::new().with_strict(true)),
    )
    .await
    .unwrap_err();
    match err {
        StoreError::NoHandlerMatched { path } => assert_eq!(path, "/orphan"),
        other => panic!("expected no-handler-matched, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Deep recursion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deeply_nested_objects_materialize_fully() {
    let fs = Arc::new(MemoryFs::new());
    let handlers = vec![text_handler(&fs)];
    store_node_to_directory(
        Arc::clone(&fs) as Arc<dyn DirectoryCreator>,
        &dest(),
        &Node::from(json!({"a": {"b": {"c": {"d": "leaf"}}}})),
        &handlers,
        None,
    )
    .await
    .unwrap();
    assert_eq!(
        fs.entry(&Locator::parse("mem://t/out/a/b/c/d").unwrap()),
        Some(Entry::Text("leaf".to_string()))
    );
}
