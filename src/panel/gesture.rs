//! Drag and resize gesture sessions
//!
//! A session is created when a gesture starts and consumed when it ends.
//! Move handlers receive the session by reference instead of reading
//! "am I dragging" flags off the panel, so a panel never carries stale
//! gesture state after the pointer is released.

use serde::{Deserialize, Serialize};

use super::{DockSide, PanelId};
use crate::geometry::{Point, Size};

/// What part of a panel the pointer went down on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    /// Header strip (starts a drag)
    Header,
    /// A button embedded in the header (collapse, dismiss, ...)
    HeaderControl,
    /// Panel body
    Content,
    /// Bottom-right resize grip
    ResizeHandle,
}

/// In-progress header drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub panel_id: PanelId,
    /// Pointer position when the gesture started
    pub start_pointer: Point,
    /// Panel top-left when the gesture started
    pub origin: Point,
    /// Latest position (after clamping, for floating panels)
    pub current: Point,
    /// Size used for zone detection while dragging; for a docked panel this
    /// is the slot it is drawn in, not its floating size
    pub size: Size,
    /// Sidebar the panel was docked in when the drag began (undock drag)
    pub from_dock: Option<DockSide>,
}

impl DragSession {
    /// `origin + (pointer - start_pointer)`
    pub fn position_at(&self, pointer: Point) -> Point {
        self.origin.offset(pointer.delta_from(self.start_pointer))
    }
}

/// In-progress resize from the bottom-right handle
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub panel_id: PanelId,
    pub start_pointer: Point,
    pub start_size: Size,
}

impl ResizeSession {
    /// Unclamped candidate size for the given pointer
    pub fn candidate_at(&self, pointer: Point) -> Size {
        let delta = pointer.delta_from(self.start_pointer);
        Size::new(
            self.start_size.width + delta.x,
            self.start_size.height + delta.y,
        )
    }
}

/// The single gesture a workspace may be capturing
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl Gesture {
    pub fn panel_id(&self) -> &PanelId {
        match self {
            Gesture::Drag(s) => &s.panel_id,
            Gesture::Resize(s) => &s.panel_id,
        }
    }
}
