//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::Deserialize;

use crate::geometry::{Point, Size};
use crate::panel::{DockSide, PanelId, PointerTarget};

/// Pointer and control input aimed at one panel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelMsg {
    /// Pointer went down on part of a panel (may start a drag or resize)
    PointerDown {
        id: PanelId,
        target: PointerTarget,
        at: Point,
    },
    /// Collapse control clicked
    ToggleCollapse { id: PanelId },
    /// Dismiss control clicked (minimizes or hides depending on the panel)
    DismissControl { id: PanelId },
    /// Explicit hide, bypassing minimize-on-dismiss
    Dismiss { id: PanelId },
    /// Un-hide a dismissed panel
    Show { id: PanelId },
    Minimize { id: PanelId },
    /// Minimized tab clicked
    Restore { id: PanelId },
    /// Reapply persisted geometry/mode
    RestorePosition { id: PanelId },
    /// Host measured the panel's natural size
    Measured { id: PanelId, size: Size },
}

/// Workspace-wide input: globally captured pointer events and host actions
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkspaceMsg {
    /// Content surface resized
    Resize { width: f32, height: f32 },
    /// Pointer moved anywhere (routed to the captured gesture, if any)
    PointerMove { at: Point },
    /// Pointer released anywhere
    PointerUp { at: Point },
    /// Component teardown: release capture mid-gesture
    Teardown,
    Dock {
        id: PanelId,
        side: DockSide,
        #[serde(default)]
        index: Option<usize>,
    },
    Undock {
        id: PanelId,
        #[serde(default)]
        at: Option<Point>,
    },
    SetAutoDock { enabled: bool },
    SetGravityZone { zone: f32 },
}

/// Sidebar controls
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidebarMsg {
    Resize { side: DockSide, size: f32 },
    ToggleCollapse { side: DockSide },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    Panel(PanelMsg),
    Workspace(WorkspaceMsg),
    Sidebar(SidebarMsg),
}

impl Msg {
    /// Per-move messages that should not be logged at debug level
    pub fn is_noisy(&self) -> bool {
        matches!(self, Msg::Workspace(WorkspaceMsg::PointerMove { .. }))
    }
}
