//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use floatdock::events::{Event, PanelEvent, WorkspaceEvent};
use floatdock::geometry::{Point, Size};
use floatdock::panel::{DockSide, Panel, PanelId, PanelMode, PointerTarget};
use floatdock::workspace::Workspace;

/// A measured 800×600 workspace with default config (gravity zone 50)
pub fn workspace_800x600() -> Workspace {
    let mut ws = Workspace::default();
    ws.set_bounds(Size::new(800.0, 600.0));
    ws
}

/// Floating panel whose id is the lowercased title
pub fn floating_panel(title: &str, x: f32, y: f32, width: f32, height: f32) -> Panel {
    Panel::new(title).at(x, y).with_size(width, height)
}

pub fn docked_panel(title: &str, side: DockSide, width: f32, height: f32) -> Panel {
    Panel::new(title)
        .with_size(width, height)
        .with_mode(PanelMode::Docked(side))
}

pub fn id(s: &str) -> PanelId {
    PanelId::new(s)
}

/// Drag a panel by its header from `from` to `to` in one move
pub fn drag(ws: &mut Workspace, panel: &str, from: (f32, f32), to: (f32, f32)) -> Vec<Event> {
    let mut events = ws.pointer_down(&id(panel), PointerTarget::Header, Point::new(from.0, from.1));
    events.extend(ws.pointer_move(Point::new(to.0, to.1)));
    events.extend(ws.pointer_up(Point::new(to.0, to.1)));
    events
}

/// Dock preview sides in emission order
pub fn previews(events: &[Event]) -> Vec<Option<DockSide>> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Workspace(WorkspaceEvent::DockPreview { side, .. }) => Some(*side),
            _ => None,
        })
        .collect()
}

/// `(side, applied)` of every docked notification
pub fn docked(events: &[Event]) -> Vec<(DockSide, bool)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Workspace(WorkspaceEvent::Docked { side, applied, .. }) => {
                Some((*side, *applied))
            }
            _ => None,
        })
        .collect()
}

pub fn moved_positions(events: &[Event]) -> Vec<Point> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Panel(PanelEvent::Moved { x, y, .. }) => Some(Point::new(*x, *y)),
            _ => None,
        })
        .collect()
}

/// Sidebar order as plain strings
pub fn order(ws: &Workspace, side: DockSide) -> Vec<String> {
    ws.sidebar(side)
        .panel_ids()
        .map(|id| id.as_str().to_string())
        .collect()
}
