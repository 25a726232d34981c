//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each returns
//! the notifications the change produced, in emission order.

mod panel;
mod sidebar;
mod workspace;

use crate::events::Event;
use crate::messages::Msg;
use crate::workspace::Workspace;

#[cfg(debug_assertions)]
use crate::tracing::describe_layout_diff;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use panel::update_panel;
pub use sidebar::update_sidebar;
pub use workspace::update_workspace;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(workspace: &mut Workspace, msg: Msg) -> Vec<Event> {
    #[cfg(debug_assertions)]
    {
        update_traced(workspace, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(workspace, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(workspace: &mut Workspace, msg: Msg) -> Vec<Event> {
    match msg {
        Msg::Panel(m) => panel::update_panel(workspace, m),
        Msg::Workspace(m) => workspace::update_workspace(workspace, m),
        Msg::Sidebar(m) => sidebar::update_sidebar(workspace, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout snapshots and logs what changed.
/// Per-move messages skip the span and the message log.
#[cfg(debug_assertions)]
fn update_traced(workspace: &mut Workspace, msg: Msg) -> Vec<Event> {
    let is_noisy = msg.is_noisy();

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = workspace.snapshot();

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let events = update_inner(workspace, msg);

    if let Some(diff) = describe_layout_diff(&before, &workspace.snapshot()) {
        debug!(target: "layout", %diff, "state changed");
    }

    events
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::ToggleCollapse { id: PanelId("tools") }`
/// - `Workspace::Resize { width: 800.0, height: 600.0 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Workspace(m) => format!("Workspace::{:?}", m),
        Msg::Sidebar(m) => format!("Sidebar::{:?}", m),
    }
}
