//! Integration tests for Pagewright
//!
//! These tests exercise the block pipeline end to end:
//! - stored records through the normalizer into an editor
//! - editor mutations back out to the persisted envelope shape
//! - rendering of normalized pages
//! - the file page store

use pagewright_blocks::{
    create_block, normalize, normalize_page, BlockContent, BlockEditor, BlockId, DragSubject,
    DropTarget, FilePageStore, MoveOutcome, PageRenderer, PageStore, RenderOptions, StoredPage,
};
use serde_json::{json, Value};

fn editor_with(types: &[&str]) -> BlockEditor {
    let mut editor = BlockEditor::new();
    for block_type in types {
        editor.insert_from_palette(block_type, None).unwrap();
    }
    editor
}

fn ids(editor: &BlockEditor) -> Vec<String> {
    editor.blocks().iter().map(|b| b.id.to_string()).collect()
}

// ============================================================================
// Editor round-trip and ordering
// ============================================================================

#[test]
fn test_stored_round_trip_keeps_blocks_and_order() {
    let editor = editor_with(&["hero", "faq", "metrics", "carousel", "media"]);

    let records: Vec<Value> = editor.to_records();
    let restored = BlockEditor::from_stored(&records);

    assert_eq!(restored.blocks(), editor.blocks());
}

#[test]
fn test_round_trip_through_json_text() {
    let editor = editor_with(&["priceTable", "contactForm", "comparison"]);

    let text = serde_json::to_string(&editor.to_records()).unwrap();
    let records: Vec<Value> = serde_json::from_str(&text).unwrap();

    assert_eq!(BlockEditor::from_stored(&records).blocks(), editor.blocks());
}

#[test]
fn test_insert_preserves_relative_order() {
    for index in 0..=4 {
        let mut editor = editor_with(&["hero", "faq", "metrics", "media"]);
        let before = ids(&editor);

        let new_id = editor.insert_from_palette("richText", Some(index)).unwrap();

        let after = ids(&editor);
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(editor.position(&new_id), Some(index));
        let rest: Vec<String> = after
            .into_iter()
            .filter(|id| id != new_id.as_str())
            .collect();
        assert_eq!(rest, before);
    }
}

#[test]
fn test_reorder_relocates_to_target_position() {
    let records = editor_with(&["hero", "faq", "metrics", "media", "richText"]).to_records();
    let original = ids(&BlockEditor::from_stored(&records));

    for a in 0..original.len() {
        for b in 0..original.len() {
            let mut editor = BlockEditor::from_stored(&records);
            let source = BlockId::from(original[a].as_str());
            let target = BlockId::from(original[b].as_str());

            let moved = editor.reorder(&source, &target).unwrap();

            let mut sorted_after = ids(&editor);
            sorted_after.sort();
            let mut sorted_before = original.clone();
            sorted_before.sort();
            assert_eq!(sorted_after, sorted_before);
            assert_eq!(editor.position(&source), Some(b));
            if a == b {
                assert!(!moved);
                assert_eq!(ids(&editor), original);
            }
        }
    }
}

#[test]
fn test_drag_from_palette_and_back_to_idle() {
    let mut editor = editor_with(&["hero", "faq"]);
    let faq = editor.blocks()[1].id.clone();

    editor
        .begin_move(DragSubject::Palette("testimonial".to_string()))
        .unwrap();
    assert!(editor.reorder(&faq, &faq).is_err());

    let outcome = editor.commit_move(DropTarget::Block(faq.clone())).unwrap();
    let MoveOutcome::Inserted(new_id) = outcome else {
        panic!("Expected insertion, got {outcome:?}");
    };
    assert_eq!(editor.position(&new_id), Some(1));
    assert_eq!(editor.position(&faq), Some(2));
    assert_eq!(editor.blocks()[1].type_name(), "testimonial");

    // Back to idle: ordinary edits work again
    assert!(editor.delete(&new_id).unwrap().is_some());
}

// ============================================================================
// Normalizer
// ============================================================================

#[test]
fn test_canonical_record_is_unchanged() {
    let record = json!({"id": "b", "type": "faq", "visible": true, "title": "Q&A", "items": []});
    assert_eq!(normalize(&record), Some(record.clone()));
}

#[test]
fn test_canonical_record_gets_visible_default() {
    let record = json!({"id": "b", "type": "richText", "content": "Hi"});
    assert_eq!(
        normalize(&record),
        Some(json!({"id": "b", "type": "richText", "content": "Hi", "visible": true}))
    );
}

#[test]
fn test_deepest_valid_content_wins() {
    let record = json!({
        "id": "x",
        "type": "hero",
        "order": 0,
        "data": {
            "headline": "",
            "data": {"headline": "Real Title", "type": "hero", "id": "y"}
        }
    });

    let normalized = normalize(&record).unwrap();
    assert_eq!(normalized["headline"], "Real Title");
    assert_eq!(normalized["id"], "y");
}

#[test]
fn test_shallow_fallback_without_content() {
    let record = json!({
        "id": "x",
        "type": "hero",
        "order": 0,
        "data": {"headline": "", "subcopy": ""}
    });

    assert_eq!(
        normalize(&record),
        Some(json!({"headline": "", "subcopy": "", "id": "x", "type": "hero", "visible": true}))
    );
}

#[test]
fn test_unrecoverable_record() {
    assert_eq!(normalize(&json!({"foo": "bar"})), None);
}

#[test]
fn test_deeply_wrapped_garbage_terminates() {
    let mut record = json!({"headline": ""});
    for _ in 0..64 {
        record = json!({"type": "hero", "order": 0, "data": record});
    }
    // No id anywhere and no content: the record is patched from the envelope
    // but still lacks an id
    assert_eq!(normalize(&record), None);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_end_to_end_render_order() {
    let records = vec![
        json!({"id": "1", "type": "hero", "order": 1, "data": {"headline": "Welcome"}}),
        json!({"id": "2", "type": "hero", "order": 0, "data": {"headline": "First"}}),
    ];

    let placed = normalize_page(&records);
    let headlines: Vec<&str> = placed
        .iter()
        .map(|p| match &p.block.content {
            BlockContent::Hero(hero) => hero.headline.as_str(),
            other => panic!("Expected hero, got {other:?}"),
        })
        .collect();
    assert_eq!(headlines, ["First", "Welcome"]);

    let html = PageRenderer::new().render_page(&placed).html();
    assert!(html.find("First").unwrap() < html.find("Welcome").unwrap());
}

#[test]
fn test_invisible_block_never_renders() {
    let records = vec![
        json!({"id": "a", "type": "richText", "visible": false, "content": "Draft copy"}),
        json!({"id": "b", "type": "richText", "content": "Published copy"}),
    ];

    let page = PageRenderer::new().render_records(&records);
    assert_eq!(page.blocks.len(), 1);
    assert_eq!(page.hidden, 1);
    assert!(!page.html().contains("Draft copy"));
}

#[test]
fn test_unknown_type_is_placeholder() {
    let records = vec![json!({"id": "u", "type": "unregisteredXyz"})];

    let page = PageRenderer::new().render_records(&records);
    assert_eq!(page.placeholder_count(), 1);
    assert!(page.html().contains("unregisteredXyz"));

    let quiet = PageRenderer::with_options(RenderOptions {
        show_placeholders: false,
        ..RenderOptions::default()
    })
    .render_records(&records);
    assert!(quiet.blocks.is_empty());
}

#[test]
fn test_every_palette_block_renders_its_placeholder_copy() {
    let block = create_block("hero");
    let page = PageRenderer::new().render_blocks(std::slice::from_ref(&block));
    assert!(page.html().contains("Your headline here"));
}

// ============================================================================
// Legacy pages survive unrelated edits
// ============================================================================

fn legacy_records() -> Vec<Value> {
    vec![
        json!({"id": "h", "type": "hero", "order": 0, "data": {
            "headline": "Launch",
            "badges": [{"label": "ISO 27001"}],
            "theme": "dark"
        }}),
        json!({"id": "n", "type": "hero", "order": 1, "data": {"data": {
            "headline": 42,
            "subcopy": "Numbers from an old import",
            "ctaLabel": "Go"
        }}}),
        json!({"id": "r", "type": "richText", "order": 2, "data": {"content": "Body", "align": "center"}}),
        json!({"id": "m", "type": "metrics", "order": 3, "data": {
            "items": [{"value": 7, "label": "Years", "trend": "up"}],
            "layout": {"columns": 3}
        }}),
    ]
}

fn saved_data<'a>(records: &'a [Value], id: &str) -> &'a Value {
    let record = records
        .iter()
        .find(|r| r["id"] == id)
        .unwrap_or_else(|| panic!("Block {id} missing from saved page"));
    &record["data"]
}

#[test]
fn test_drifted_blocks_survive_unrelated_edits() {
    let records = legacy_records();
    let mut editor = BlockEditor::from_stored(&records);
    assert_eq!(ids(&editor), ["h", "n", "r", "m"]);

    let before: Vec<Value> = editor.to_records();
    editor.insert_from_palette("faq", None).unwrap();
    let mut patch = serde_json::Map::new();
    patch.insert("content".to_string(), json!("Edited body"));
    editor.update(&BlockId::from("r"), patch).unwrap();

    let saved = editor.to_records();
    assert_eq!(saved.len(), 5);
    for id in ["h", "n", "m"] {
        assert_eq!(saved_data(&saved, id), saved_data(&before, id));
    }

    let hero = saved_data(&saved, "h");
    assert_eq!(hero["headline"], "Launch");
    assert_eq!(hero["badges"], json!([{"label": "ISO 27001"}]));
    assert_eq!(hero["theme"], "dark");

    let numeric = saved_data(&saved, "n");
    assert_eq!(numeric["headline"], 42);
    assert_eq!(numeric["ctaLabel"], "Go");

    let text = saved_data(&saved, "r");
    assert_eq!(text["content"], "Edited body");
    assert_eq!(text["align"], "center");

    let metrics = saved_data(&saved, "m");
    assert_eq!(metrics["items"][0]["trend"], "up");
    assert_eq!(metrics["layout"], json!({"columns": 3}));

    let page = PageRenderer::new().render_records(&saved);
    assert_eq!(page.skipped, 0);
    let html = page.html();
    assert!(html.contains("Launch"));
    assert!(html.contains("Numbers from an old import"));
}

#[test]
fn test_unmodelled_keys_round_trip() {
    let records = vec![json!({"id": "h", "type": "hero", "headline": "Hi", "theme": "dark", "ctaLabel": "Go"})];

    let editor = BlockEditor::from_stored(&records);
    let saved = editor.to_records();
    assert_eq!(saved[0]["data"]["theme"], "dark");
    assert_eq!(saved[0]["data"]["ctaLabel"], "Go");

    // Saved pages reload to the same records
    assert_eq!(BlockEditor::from_stored(&saved).to_records(), saved);
}

// ============================================================================
// Page store
// ============================================================================

#[tokio::test]
async fn test_migrate_legacy_page_through_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = FilePageStore::new(dir.path());

    let legacy = StoredPage::new("en", "landing").with_blocks(vec![
        json!({"id": "h", "type": "hero", "order": 2, "data": {"data": {"headline": "Hello"}}}),
        json!({"foo": "bar"}),
        json!({"id": "f", "type": "faq", "order": 1, "data": {"items": [{"question": "Why?", "answer": "Because."}]}}),
    ]);
    store.save(&legacy).await.unwrap();

    let mut page = store.load("en", "landing").await.unwrap();
    let editor = page.editor();
    assert_eq!(ids(&editor), ["f", "h"]);

    page.apply(&editor);
    store.save(&page).await.unwrap();

    let migrated = store.load("en", "landing").await.unwrap();
    assert_eq!(migrated.blocks.len(), 2);
    for (index, record) in migrated.blocks.iter().enumerate() {
        assert_eq!(record["order"], json!(index));
        assert!(record["data"]["type"].is_string());
    }

    // Migrated records come back unchanged
    let again = migrated.editor();
    assert_eq!(again.to_records(), migrated.blocks);
}
