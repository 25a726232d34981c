//! Sidebar update handlers

use crate::events::Event;
use crate::messages::SidebarMsg;
use crate::workspace::Workspace;

/// Update function for sidebar messages
pub fn update_sidebar(workspace: &mut Workspace, msg: SidebarMsg) -> Vec<Event> {
    match msg {
        SidebarMsg::Resize { side, size } => workspace.resize_sidebar(side, size),
        SidebarMsg::ToggleCollapse { side } => workspace.toggle_sidebar_collapse(side),
    }
}
