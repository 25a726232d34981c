//! Panel update handlers
//!
//! Handles pointer-down and the panel's own header controls.

use crate::events::Event;
use crate::messages::PanelMsg;
use crate::workspace::Workspace;

/// Update function for panel messages
pub fn update_panel(workspace: &mut Workspace, msg: PanelMsg) -> Vec<Event> {
    match msg {
        PanelMsg::PointerDown { id, target, at } => workspace.pointer_down(&id, target, at),

        PanelMsg::ToggleCollapse { id } => workspace.toggle_collapse(&id),

        PanelMsg::DismissControl { id } => workspace.dismiss_control(&id),

        PanelMsg::Dismiss { id } => workspace.dismiss(&id),

        PanelMsg::Show { id } => workspace.show(&id),

        PanelMsg::Minimize { id } => workspace.minimize(&id),

        PanelMsg::Restore { id } => workspace.restore_minimized(&id),

        PanelMsg::RestorePosition { id } => {
            let (restored, events) = workspace.restore_position(&id);
            if !restored {
                tracing::debug!(%id, "nothing to restore");
            }
            events
        }

        PanelMsg::Measured { id, size } => workspace.set_measured_size(&id, size),
    }
}
