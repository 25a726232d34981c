//! Notifications emitted by the layout engine
//!
//! Events represent what changed during an update. Hosts observe them to
//! redraw, persist, or build recovery UI; the engine never reads them back.

use serde::Serialize;

use crate::geometry::{Point, Size};
use crate::panel::{DockSide, PanelId};
use crate::workspace::LayoutSnapshot;

/// Emitted by a panel as it is manipulated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    /// Position changed during a drag; raw cursor coordinates feed the
    /// sidebar drop-index calculation
    Moved {
        id: PanelId,
        x: f32,
        y: f32,
        cursor_x: f32,
        cursor_y: f32,
    },
    Resized {
        id: PanelId,
        width: f32,
        height: f32,
    },
    DragEnded {
        id: PanelId,
        x: f32,
        y: f32,
    },
    /// A dismiss was requested; `canceled` when a guard vetoed it
    Dismissed {
        id: PanelId,
        canceled: bool,
    },
    Minimized {
        id: PanelId,
    },
    Restored {
        id: PanelId,
    },
    CollapseToggled {
        id: PanelId,
        collapsed: bool,
    },
}

/// Emitted by the workspace coordinator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkspaceEvent {
    BoundsChanged {
        width: f32,
        height: f32,
    },
    /// Edge the dragged panel currently overlaps; `None` when it left all zones
    DockPreview {
        id: PanelId,
        side: Option<DockSide>,
    },
    /// `applied` is false when auto-dock is off and this is advisory only
    Docked {
        id: PanelId,
        side: DockSide,
        applied: bool,
    },
    Undocked {
        id: PanelId,
        x: f32,
        y: f32,
    },
    LayoutChanged(LayoutSnapshot),
}

/// Emitted by a sidebar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SidebarEvent {
    Resized { side: DockSide, size: f32 },
    CollapseToggled { side: DockSide, collapsed: bool },
}

/// Any notification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Event {
    Panel(PanelEvent),
    Workspace(WorkspaceEvent),
    Sidebar(SidebarEvent),
}

impl Event {
    pub fn moved(id: &PanelId, position: Point, cursor: Point) -> Self {
        Event::Panel(PanelEvent::Moved {
            id: id.clone(),
            x: position.x,
            y: position.y,
            cursor_x: cursor.x,
            cursor_y: cursor.y,
        })
    }

    pub fn resized(id: &PanelId, size: Size) -> Self {
        Event::Panel(PanelEvent::Resized {
            id: id.clone(),
            width: size.width,
            height: size.height,
        })
    }

    pub fn drag_ended(id: &PanelId, position: Point) -> Self {
        Event::Panel(PanelEvent::DragEnded {
            id: id.clone(),
            x: position.x,
            y: position.y,
        })
    }

    pub fn is_layout_change(&self) -> bool {
        matches!(self, Event::Workspace(WorkspaceEvent::LayoutChanged(_)))
    }
}

impl From<PanelEvent> for Event {
    fn from(event: PanelEvent) -> Self {
        Event::Panel(event)
    }
}

impl From<WorkspaceEvent> for Event {
    fn from(event: WorkspaceEvent) -> Self {
        Event::Workspace(event)
    }
}

impl From<SidebarEvent> for Event {
    fn from(event: SidebarEvent) -> Self {
        Event::Sidebar(event)
    }
}
