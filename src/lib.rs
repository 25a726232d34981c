//! floatdock - floating and dockable panel layout engine
//!
//! This crate provides the panel state machine, the sidebar stack and the
//! workspace coordinator, driven Elm-style by messages and reporting every
//! change as notifications.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod events;
pub mod geometry;
pub mod messages;
pub mod panel;
pub mod script;
pub mod sidebar;
pub mod tracing;
pub mod update;
pub mod workspace;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use events::Event;
pub use messages::Msg;
pub use panel::{DockSide, Panel, PanelId, PanelMode};
pub use workspace::{LayoutSnapshot, Workspace};
