//! Panel system - movable, resizable, dockable panels
//!
//! A panel floats over the content surface, docks into a sidebar on one
//! of the workspace edges, or minimizes to an edge tab. Collapse (header
//! only) is an orthogonal flag.
//!
//! ## Architecture
//!
//! - `PanelMode`: exactly one of floating, docked(side), minimized
//! - `DockSide`: left, right, top or bottom edge
//! - `Panel`: geometry, flags and the local state machine
//! - `DragSession` / `ResizeSession`: gesture values created on pointer-down
//! - `PanelStore`: durable per-panel state keyed by `persist_id`
//!
//! ## Integration
//!
//! Panels never touch other panels or sidebars. The `Workspace` drives
//! them through these methods and turns the results into notifications.

mod dock;
mod gesture;
mod persist;
mod state;

pub use dock::{DockSide, PanelMode, SnapEdge};
pub use gesture::{DragSession, Gesture, PointerTarget, ResizeSession};
pub use persist::{storage_key, FileStore, MemoryStore, PanelStore, PersistedPanel};
pub use state::{Geometry, Panel, PanelId, SizeLimits};
