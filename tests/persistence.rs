//! Persistence tests: storing and restoring panel state across workspaces

mod common;

use common::{floating_panel, id, workspace_800x600};
use floatdock::config::LayoutConfig;
use floatdock::geometry::{Point, Size};
use floatdock::panel::{storage_key, FileStore, PanelMode, PanelStore, SnapEdge};
use floatdock::workspace::Workspace;

fn file_workspace(dir: &std::path::Path) -> Workspace {
    let mut ws = Workspace::with_store(&LayoutConfig::default(), Box::new(FileStore::new(dir)));
    ws.set_bounds(Size::new(800.0, 600.0));
    ws
}

#[test]
fn test_minimize_persists_and_restores_in_new_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = file_workspace(dir.path());
    first.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0).with_persist_id("tools"));
    first.minimize(&id("tools"));

    let stored = std::fs::read_to_string(dir.path().join("floatdock-panel-tools.json")).unwrap();
    assert!(stored.contains("\"minimized\":true"), "{stored}");
    assert!(stored.contains("\"snapEdge\":\"left\""), "{stored}");
    assert!(stored.contains("\"preMinimizeGeometry\""), "{stored}");

    let mut second = file_workspace(dir.path());
    second.add_panel(floating_panel("Tools", 0.0, 0.0, 50.0, 50.0).with_persist_id("tools"));
    let (restored, events) = second.restore_position(&id("tools"));
    assert!(restored);
    assert!(events.last().unwrap().is_layout_change());

    let tools = second.panel(&id("tools")).unwrap();
    assert_eq!(tools.mode(), PanelMode::Minimized);
    assert_eq!(tools.snap_edge, SnapEdge::Left);
    assert_eq!(
        tools.pre_minimize_geometry().unwrap().position(),
        Point::new(100.0, 100.0)
    );

    second.restore_minimized(&id("tools"));
    let tools = second.panel(&id("tools")).unwrap();
    assert_eq!(tools.mode(), PanelMode::Floating);
    assert_eq!(tools.position(), Point::new(100.0, 100.0));
    assert_eq!(tools.size(), Size::new(120.0, 80.0));
}

#[test]
fn test_restore_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut ws = file_workspace(dir.path());
    ws.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0).with_persist_id("tools"));
    ws.toggle_collapse(&id("tools"));

    assert!(ws.restore_position(&id("tools")).0);
    let once = ws.snapshot();
    assert!(ws.restore_position(&id("tools")).0);
    assert_eq!(ws.snapshot(), once);
    assert!(once.get(&id("tools")).unwrap().collapsed);
}

#[test]
fn test_dismiss_persists_geometry() {
    let mut ws = workspace_800x600();
    ws.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0).with_persist_id("tools"));
    ws.dismiss(&id("tools"));

    let raw = ws.store().load(&storage_key("tools")).unwrap();
    assert!(raw.contains("\"x\":100"), "{raw}");
    assert!(raw.contains("\"minimized\":false"), "{raw}");
}

#[test]
fn test_restore_without_stored_state_fails() {
    let mut ws = workspace_800x600();
    ws.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0).with_persist_id("tools"));

    let before = ws.snapshot();
    let (restored, events) = ws.restore_position(&id("tools"));
    assert!(!restored);
    assert!(events.is_empty());
    assert_eq!(ws.snapshot(), before);
}

#[test]
fn test_restore_without_persist_id_fails() {
    let mut ws = workspace_800x600();
    ws.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0));
    ws.minimize(&id("tools"));
    assert!(!ws.restore_position(&id("tools")).0);
}

#[test]
fn test_corrupt_state_leaves_panel_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.save(&storage_key("tools"), "{not json").unwrap();
    store.save(&storage_key("layers"), r#"{"x": 5}"#).unwrap();

    let mut ws = file_workspace(dir.path());
    ws.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0).with_persist_id("tools"));
    ws.add_panel(floating_panel("Layers", 300.0, 100.0, 120.0, 80.0).with_persist_id("layers"));
    let before = ws.snapshot();

    assert!(!ws.restore_position(&id("tools")).0);
    assert!(!ws.restore_position(&id("layers")).0);
    assert_eq!(ws.snapshot(), before);
}

#[test]
fn test_persistence_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let panels = dir.path().join("panels");
    let config = LayoutConfig {
        persist: false,
        ..LayoutConfig::default()
    };
    let mut ws = Workspace::with_store(&config, Box::new(FileStore::new(&panels)));
    ws.add_panel(floating_panel("Tools", 100.0, 100.0, 120.0, 80.0).with_persist_id("tools"));
    ws.minimize(&id("tools"));

    assert!(!panels.exists());
}

#[test]
fn test_file_store_remove_missing_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    assert!(store.load("floatdock-panel-none").is_none());
    store.remove("floatdock-panel-none").unwrap();

    store.save("floatdock-panel-a", "{}").unwrap();
    assert_eq!(store.load("floatdock-panel-a").as_deref(), Some("{}"));
    store.remove("floatdock-panel-a").unwrap();
    assert!(store.load("floatdock-panel-a").is_none());
}
