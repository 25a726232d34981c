//! Workspace update handlers
//!
//! Handles bounds changes, globally captured pointer events and host
//! dock/undock actions.

use crate::events::Event;
use crate::geometry::Size;
use crate::messages::WorkspaceMsg;
use crate::workspace::Workspace;

/// Update function for workspace messages
pub fn update_workspace(workspace: &mut Workspace, msg: WorkspaceMsg) -> Vec<Event> {
    match msg {
        WorkspaceMsg::Resize { width, height } => workspace.set_bounds(Size::new(width, height)),

        WorkspaceMsg::PointerMove { at } => workspace.pointer_move(at),

        WorkspaceMsg::PointerUp { at } => workspace.pointer_up(at),

        WorkspaceMsg::Teardown => workspace.teardown(),

        WorkspaceMsg::Dock { id, side, index } => workspace.dock(&id, side, index),

        WorkspaceMsg::Undock { id, at } => workspace.undock(&id, at),

        WorkspaceMsg::SetAutoDock { enabled } => {
            workspace.set_auto_dock(enabled);
            Vec::new()
        }

        WorkspaceMsg::SetGravityZone { zone } => {
            workspace.set_gravity_zone(zone);
            Vec::new()
        }
    }
}
