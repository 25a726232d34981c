//! Dock sides and panel modes
//!
//! This module defines the small enums that describe where a panel lives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Workspace edge a panel can dock to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl DockSide {
    /// Returns the axis panels stack along in this side's sidebar
    pub fn axis(&self) -> Axis {
        match self {
            DockSide::Left | DockSide::Right => Axis::Vertical,
            DockSide::Top | DockSide::Bottom => Axis::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DockSide::Left => "left",
            DockSide::Right => "right",
            DockSide::Top => "top",
            DockSide::Bottom => "bottom",
        }
    }

    /// All dock sides, in gravity-zone precedence order
    pub const ALL: [DockSide; 4] = [
        DockSide::Left,
        DockSide::Right,
        DockSide::Top,
        DockSide::Bottom,
    ];
}

impl fmt::Display for DockSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosmetic edge affinity of a panel
///
/// Independent of docking: a floating panel may carry a snap edge as a
/// visual hint. Serialized as `"left" | "right" | "top" | ""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SnapEdge {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "top")]
    Top,
}

impl SnapEdge {
    pub fn is_none(&self) -> bool {
        matches!(self, SnapEdge::None)
    }
}

/// Which of the three mutually exclusive modes a panel is in
///
/// Collapse is tracked separately on the panel since it applies to both
/// floating and docked panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "side", rename_all = "lowercase")]
pub enum PanelMode {
    #[default]
    Floating,
    Docked(DockSide),
    Minimized,
}

impl PanelMode {
    pub fn is_floating(&self) -> bool {
        matches!(self, PanelMode::Floating)
    }

    pub fn is_minimized(&self) -> bool {
        matches!(self, PanelMode::Minimized)
    }

    /// The dock side, if docked
    pub fn docked_side(&self) -> Option<DockSide> {
        match self {
            PanelMode::Docked(side) => Some(*side),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PanelMode::Floating => "floating",
            PanelMode::Docked(_) => "docked",
            PanelMode::Minimized => "minimized",
        }
    }
}
