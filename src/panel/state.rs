//! Panel state and its local state machine
//!
//! A panel only knows about itself: its geometry, its mode and the memory
//! it needs to undo a dock or a minimize. Anything involving other panels
//! or the workspace bounds is the workspace's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dock::{DockSide, PanelMode, SnapEdge};
use super::gesture::{DragSession, PointerTarget, ResizeSession};
use super::persist::PersistedPanel;
use crate::geometry::{Point, Size};

/// Stable panel identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a display title
    ///
    /// `"Layer Properties"` becomes `"layer-properties"`. Titles with no
    /// alphanumeric characters fall back to `"panel"`.
    pub fn from_title(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len());
        let mut pending_dash = false;
        for ch in title.chars() {
            if ch.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.extend(ch.to_lowercase());
            } else {
                pending_dash = true;
            }
        }
        if slug.is_empty() {
            slug.push_str("panel");
        }
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Position plus optional explicit size
///
/// `None` for width/height means "natural size" (whatever the host measured).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Min/max size constraints; `None` means unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

impl SizeLimits {
    /// Clamp each dimension independently. A missing max is unbounded.
    pub fn clamp(&self, candidate: Size) -> Size {
        Size::new(
            clamp_dimension(candidate.width, self.min_width, self.max_width),
            clamp_dimension(candidate.height, self.min_height, self.max_height),
        )
    }
}

fn clamp_dimension(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let mut v = value.max(min.unwrap_or(0.0));
    if let Some(max) = max {
        v = v.min(max);
    }
    v
}

/// A movable, resizable, dockable panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,

    mode: PanelMode,
    collapsed: bool,
    visible: bool,
    pub snap_edge: SnapEdge,

    geometry: Geometry,
    /// Natural size as measured by the host (used when width/height are unset)
    measured: Size,
    pub limits: SizeLimits,

    pub persist_id: Option<String>,
    pub resizable: bool,
    pub collapsible: bool,
    pub minimize_on_dismiss: bool,

    /// Geometry to restore when leaving `Minimized`
    pre_minimize: Option<Geometry>,
    /// Floating geometry held while docked
    pre_dock: Option<Geometry>,
}

impl Panel {
    /// Create a floating panel at the origin; the id is derived from the title
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: PanelId::from_title(&title),
            title,
            mode: PanelMode::Floating,
            collapsed: false,
            visible: true,
            snap_edge: SnapEdge::None,
            geometry: Geometry::default(),
            measured: Size::default(),
            limits: SizeLimits::default(),
            persist_id: None,
            resizable: true,
            collapsible: true,
            minimize_on_dismiss: false,
            pre_minimize: None,
            pre_dock: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = PanelId::new(id);
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self.sync_declared_shadow();
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    /// Explicit width; the height stays natural unless set too
    pub fn with_width(mut self, width: f32) -> Self {
        self.geometry.width = Some(width);
        self.sync_declared_shadow();
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.geometry.height = Some(height);
        self.sync_declared_shadow();
        self
    }

    pub fn with_measured_size(mut self, width: f32, height: f32) -> Self {
        self.measured = Size::new(width, height);
        self
    }

    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_persist_id(mut self, persist_id: impl Into<String>) -> Self {
        self.persist_id = Some(persist_id.into());
        self
    }

    pub fn with_snap_edge(mut self, edge: SnapEdge) -> Self {
        self.snap_edge = edge;
        self
    }

    pub fn minimize_on_dismiss(mut self, enabled: bool) -> Self {
        self.minimize_on_dismiss = enabled;
        self
    }

    pub fn resizable(mut self, enabled: bool) -> Self {
        self.resizable = enabled;
        self
    }

    pub fn collapsible(mut self, enabled: bool) -> Self {
        self.collapsible = enabled;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Declare the initial mode
    ///
    /// A panel declared docked keeps its declared geometry as the floating
    /// geometry it returns to when undocked. The geometry builders may be
    /// called before or after this one.
    pub fn with_mode(mut self, mode: PanelMode) -> Self {
        self.mode = mode;
        self.pre_dock = None;
        self.pre_minimize = None;
        if mode.is_minimized() && self.snap_edge.is_none() {
            self.snap_edge = SnapEdge::Left;
        }
        self.sync_declared_shadow();
        self
    }

    /// Builder-time only: mirror the declared geometry into the memory the
    /// declared mode restores from
    fn sync_declared_shadow(&mut self) {
        match self.mode {
            PanelMode::Docked(_) => self.pre_dock = Some(self.geometry),
            PanelMode::Minimized => self.pre_minimize = Some(self.geometry),
            PanelMode::Floating => {}
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn position(&self) -> Point {
        self.geometry.position()
    }

    pub fn pre_minimize_geometry(&self) -> Option<Geometry> {
        self.pre_minimize
    }

    pub fn pre_dock_geometry(&self) -> Option<Geometry> {
        self.pre_dock
    }

    /// Effective size: explicit size, falling back to the measured size
    pub fn size(&self) -> Size {
        Self::effective_size(&self.geometry, self.measured)
    }

    fn effective_size(geometry: &Geometry, measured: Size) -> Size {
        Size::new(
            geometry.width.unwrap_or(measured.width),
            geometry.height.unwrap_or(measured.height),
        )
    }

    /// Size the panel would float at (used while dragging a docked panel out)
    pub fn floating_size(&self) -> Size {
        match (self.mode, self.pre_dock) {
            (PanelMode::Docked(_), Some(geometry)) => Self::effective_size(&geometry, self.measured),
            _ => self.size(),
        }
    }

    /// Size along a sidebar's stacking axis; collapsed panels only show a header
    pub fn stack_extent(&self, side: DockSide, header_height: f32) -> f32 {
        match side.axis() {
            crate::geometry::Axis::Vertical if self.collapsed => header_height,
            axis => self.size().along(axis),
        }
    }

    // ========================================================================
    // Host-driven geometry
    // ========================================================================

    /// Record the natural size reported by the host
    pub fn set_measured_size(&mut self, size: Size) {
        self.measured = size;
    }

    pub fn set_position(&mut self, position: Point) {
        self.geometry.x = position.x;
        self.geometry.y = position.y;
    }

    pub fn set_size(&mut self, size: Size) {
        self.geometry.width = Some(size.width);
        self.geometry.height = Some(size.height);
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    /// Start a header drag
    ///
    /// Returns `None` (and changes nothing) unless the pointer went down on
    /// the header of a visible floating or docked panel. `origin` is where
    /// the panel is currently drawn; for docked panels that comes from the
    /// sidebar, not from the panel's own geometry.
    pub fn begin_drag(
        &self,
        target: PointerTarget,
        pointer: Point,
        origin: Point,
    ) -> Option<DragSession> {
        if target != PointerTarget::Header || !self.visible || self.mode.is_minimized() {
            return None;
        }
        Some(DragSession {
            panel_id: self.id.clone(),
            start_pointer: pointer,
            origin,
            current: origin,
            size: self.floating_size(),
            from_dock: self.mode.docked_side(),
        })
    }

    /// Start a resize from the bottom-right handle
    pub fn begin_resize(&self, target: PointerTarget, pointer: Point) -> Option<ResizeSession> {
        if target != PointerTarget::ResizeHandle
            || !self.resizable
            || !self.visible
            || self.mode.is_minimized()
        {
            return None;
        }
        Some(ResizeSession {
            panel_id: self.id.clone(),
            start_pointer: pointer,
            start_size: self.size(),
        })
    }

    /// Apply a resize step: candidate size from the pointer delta, clamped
    /// to the panel's limits, becomes the new explicit size
    pub fn resize_to(&mut self, session: &ResizeSession, pointer: Point) -> Size {
        let size = self.limits.clamp(session.candidate_at(pointer));
        self.set_size(size);
        size
    }

    // ========================================================================
    // Mode transitions
    // ========================================================================

    /// `floating|minimized -> docked(side)`, or move to another side when
    /// already docked. Returns false when nothing changed.
    pub fn dock(&mut self, side: DockSide) -> bool {
        match self.mode {
            PanelMode::Docked(current) if current == side => return false,
            PanelMode::Docked(_) => {}
            PanelMode::Floating => self.pre_dock = Some(self.geometry),
            PanelMode::Minimized => {
                if let Some(geometry) = self.pre_minimize.take() {
                    self.geometry = geometry;
                }
                self.pre_dock = Some(self.geometry);
            }
        }
        self.mode = PanelMode::Docked(side);
        true
    }

    /// `docked -> floating`
    ///
    /// Restores the geometry remembered at dock time, then moves to `at`
    /// when given (drag-end drop coordinates).
    pub fn undock(&mut self, at: Option<Point>) -> bool {
        if self.mode.docked_side().is_none() {
            return false;
        }
        if let Some(geometry) = self.pre_dock.take() {
            self.geometry = geometry;
        }
        if let Some(point) = at {
            self.set_position(point);
        }
        self.mode = PanelMode::Floating;
        true
    }

    /// `floating|docked -> minimized`
    ///
    /// Remembers the floating geometry for restore and defaults the snap
    /// edge to `left`.
    pub fn minimize(&mut self) -> bool {
        let remembered = match self.mode {
            PanelMode::Minimized => return false,
            PanelMode::Floating => self.geometry,
            PanelMode::Docked(_) => self.pre_dock.take().unwrap_or(self.geometry),
        };
        self.geometry = remembered;
        self.pre_minimize = Some(remembered);
        if self.snap_edge.is_none() {
            self.snap_edge = SnapEdge::Left;
        }
        self.mode = PanelMode::Minimized;
        true
    }

    /// `minimized -> floating`, restoring the pre-minimize geometry
    pub fn restore(&mut self) -> bool {
        if !self.mode.is_minimized() {
            return false;
        }
        if let Some(geometry) = self.pre_minimize.take() {
            self.geometry = geometry;
        }
        self.mode = PanelMode::Floating;
        true
    }

    /// Toggle the header-only sub-state. Ignored when minimized or not collapsible.
    pub fn toggle_collapsed(&mut self) -> Option<bool> {
        if !self.collapsible || self.mode.is_minimized() {
            return None;
        }
        self.collapsed = !self.collapsed;
        Some(self.collapsed)
    }

    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    // ========================================================================
    // Persistence boundary
    // ========================================================================

    /// Serializable view of this panel's own state
    pub fn persisted_state(&self) -> PersistedPanel {
        let geometry = match (self.mode, self.pre_dock) {
            (PanelMode::Docked(_), Some(g)) => g,
            _ => self.geometry,
        };
        PersistedPanel {
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
            collapsed: self.collapsed,
            snap_edge: self.snap_edge,
            minimized: self.mode.is_minimized(),
            pre_minimize_geometry: if self.mode.is_minimized() {
                self.pre_minimize
            } else {
                None
            },
        }
    }

    /// Apply previously persisted state
    ///
    /// A minimized record puts the panel back into `Minimized` with its
    /// stored pre-minimize geometry. A non-minimized record brings a
    /// minimized panel back to floating. Docked panels keep their side and
    /// take the stored geometry as the floating geometry for undock.
    pub fn apply_persisted(&mut self, state: &PersistedPanel) {
        let geometry = Geometry::new(state.x, state.y, state.width, state.height);
        self.collapsed = state.collapsed;
        self.snap_edge = state.snap_edge;

        if state.minimized {
            self.geometry = geometry;
            self.pre_dock = None;
            self.pre_minimize = Some(state.pre_minimize_geometry.unwrap_or(geometry));
            self.mode = PanelMode::Minimized;
            return;
        }

        match self.mode {
            PanelMode::Docked(_) => self.pre_dock = Some(geometry),
            PanelMode::Minimized => {
                self.pre_minimize = None;
                self.geometry = geometry;
                self.mode = PanelMode::Floating;
            }
            PanelMode::Floating => self.geometry = geometry,
        }
    }
}
