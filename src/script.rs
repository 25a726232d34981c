//! Replay scripts
//!
//! A script declares the content-surface size, the host's panels and a
//! sequence of messages. It is how the `floatdock` binary drives the
//! engine without a real pointer.
//!
//! ```yaml
//! bounds: { width: 800, height: 600 }
//! panels:
//!   - title: Tools
//!     x: 100
//!     y: 100
//!     width: 120
//!     height: 80
//! steps:
//!   - panel: { type: pointer_down, id: tools, target: header, at: { x: 110, y: 110 } }
//!   - workspace: { type: pointer_move, at: { x: 20, y: 310 } }
//!   - workspace: { type: pointer_up, at: { x: 20, y: 310 } }
//! ```

use serde::Deserialize;

use crate::events::Event;
use crate::geometry::Size;
use crate::messages::Msg;
use crate::panel::{DockSide, Panel, PanelMode, SizeLimits, SnapEdge};
use crate::update::update;
use crate::workspace::Workspace;

/// Declared initial mode of a scripted panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredMode {
    #[default]
    Floating,
    Docked,
    Minimized,
}

/// Host-side panel declaration
#[derive(Debug, Clone, Deserialize)]
pub struct PanelDecl {
    pub title: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    /// Natural size reported by the host
    #[serde(default)]
    pub measured: Option<Size>,
    #[serde(flatten)]
    pub limits: SizeLimits,
    #[serde(default)]
    pub mode: DeclaredMode,
    #[serde(default)]
    pub side: Option<DockSide>,
    #[serde(default)]
    pub snap_edge: SnapEdge,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub persist_id: Option<String>,
    #[serde(default)]
    pub minimize_on_dismiss: bool,
    #[serde(default = "default_true")]
    pub resizable: bool,
    #[serde(default = "default_true")]
    pub collapsible: bool,
}

fn default_true() -> bool {
    true
}

impl PanelDecl {
    /// Build the panel this declaration describes
    ///
    /// A docked declaration without a side docks left.
    pub fn into_panel(self) -> Panel {
        let mut panel = Panel::new(self.title)
            .at(self.x, self.y)
            .with_limits(self.limits)
            .with_snap_edge(self.snap_edge)
            .collapsed(self.collapsed)
            .minimize_on_dismiss(self.minimize_on_dismiss)
            .resizable(self.resizable)
            .collapsible(self.collapsible);

        if let Some(id) = self.id {
            panel = panel.with_id(id);
        }
        if let Some(width) = self.width {
            panel = panel.with_width(width);
        }
        if let Some(height) = self.height {
            panel = panel.with_height(height);
        }
        if let Some(measured) = self.measured {
            panel = panel.with_measured_size(measured.width, measured.height);
        }
        if let Some(persist_id) = self.persist_id {
            panel = panel.with_persist_id(persist_id);
        }

        let mode = match self.mode {
            DeclaredMode::Floating => PanelMode::Floating,
            DeclaredMode::Docked => PanelMode::Docked(self.side.unwrap_or(DockSide::Left)),
            DeclaredMode::Minimized => PanelMode::Minimized,
        };
        panel.with_mode(mode)
    }
}

/// A complete replay script
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub bounds: Size,
    #[serde(default)]
    pub panels: Vec<PanelDecl>,
    /// Messages use the `{ panel: {...} }` single-key map form
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Msg>,
}

impl Script {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Register the panels, apply the bounds and run every step
    ///
    /// Returns every event emitted, in order.
    pub fn run(self, workspace: &mut Workspace) -> Vec<Event> {
        let mut events = Vec::new();
        for decl in self.panels {
            events.extend(workspace.add_panel(decl.into_panel()));
        }
        events.extend(workspace.set_bounds(self.bounds));
        for msg in self.steps {
            events.extend(update(workspace, msg));
        }
        events
    }
}
