//! Workspace - bounds, gravity zones and dock coordination
//!
//! The workspace owns every panel and the four edge sidebars. It routes
//! globally captured pointer events to the active gesture, keeps floating
//! panels inside the content surface, detects edge proximity during drags
//! and (when auto-dock is on) moves panels in and out of sidebars.
//!
//! Panels and sidebars are only touched through their public methods; the
//! workspace never reaches into their private state. Every operation
//! returns the notifications it produced, ending with a fresh layout
//! snapshot whenever geometry or dock state changed.

use std::fmt;

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::events::{Event, PanelEvent, SidebarEvent, WorkspaceEvent};
use crate::geometry::{
    clamp_to_bounds, fits_within, gravity_edge, in_gravity_zone, Axis, Point, Size,
};
use crate::panel::{
    storage_key, DockSide, DragSession, Gesture, MemoryStore, Panel, PanelId, PanelMode,
    PanelStore, PersistedPanel, PointerTarget, ResizeSession, SnapEdge,
};
use crate::sidebar::{Sidebar, SidebarSet};

/// Guard consulted before a panel is dismissed; return `true` to veto
pub type DismissGuard = Box<dyn FnMut(&PanelId) -> bool>;

// ============================================================================
// Layout snapshot
// ============================================================================

/// Introspection record for one panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelState {
    pub id: PanelId,
    pub title: String,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<DockSide>,
    /// Present only for floating panels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    pub size: Size,
    pub collapsed: bool,
    pub visible: bool,
    pub snap_edge: SnapEdge,
}

/// Current state of every panel, in registration order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutSnapshot {
    pub panels: Vec<PanelState>,
}

impl LayoutSnapshot {
    pub fn get(&self, id: &PanelId) -> Option<&PanelState> {
        self.panels.iter().find(|p| &p.id == id)
    }
}

/// Clamp a floating panel into the bounds, skipping degenerate cases
fn clamp_floating(panel: &mut Panel, bounds: Size) {
    if !panel.mode().is_floating() || bounds.is_empty() {
        return;
    }
    let size = panel.size();
    if !fits_within(size, bounds) {
        return;
    }
    let clamped = clamp_to_bounds(panel.position(), size, bounds);
    if clamped != panel.position() {
        tracing::trace!(id = %panel.id, x = clamped.x, y = clamped.y, "clamped to bounds");
        panel.set_position(clamped);
    }
}

// ============================================================================
// Workspace
// ============================================================================

/// Coordinator for panels, sidebars and the content-surface bounds
pub struct Workspace {
    bounds: Size,
    gravity_zone: f32,
    auto_dock: bool,
    header_height: f32,
    persist: bool,

    /// Edge the dragged panel currently overlaps (during drags only)
    dock_preview: Option<DockSide>,

    panels: Vec<Panel>,
    sidebars: SidebarSet,

    /// The globally captured gesture, from pointer-down to pointer-up
    capture: Option<Gesture>,

    store: Box<dyn PanelStore>,
    dismiss_guards: Vec<DismissGuard>,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("bounds", &self.bounds)
            .field("gravity_zone", &self.gravity_zone)
            .field("auto_dock", &self.auto_dock)
            .field("dock_preview", &self.dock_preview)
            .field("panels", &self.panels)
            .field("sidebars", &self.sidebars)
            .field("capture", &self.capture)
            .field("dismiss_guards", &self.dismiss_guards.len())
            .finish()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl Workspace {
    /// Create an unmeasured workspace backed by an in-memory store
    pub fn new(config: &LayoutConfig) -> Self {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    pub fn with_store(config: &LayoutConfig, store: Box<dyn PanelStore>) -> Self {
        Self {
            bounds: Size::default(),
            gravity_zone: config.gravity_zone.max(0.0),
            auto_dock: config.auto_dock,
            header_height: config.header_height,
            persist: config.persist,
            dock_preview: None,
            panels: Vec::new(),
            sidebars: SidebarSet::new(
                config.side_sidebar_size,
                config.edge_sidebar_size,
                config.sidebar_gap,
            ),
            capture: None,
            store,
            dismiss_guards: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn gravity_zone(&self) -> f32 {
        self.gravity_zone
    }

    pub fn auto_dock(&self) -> bool {
        self.auto_dock
    }

    pub fn dock_preview(&self) -> Option<DockSide> {
        self.dock_preview
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn sidebar(&self, side: DockSide) -> &Sidebar {
        self.sidebars.get(side)
    }

    pub fn sidebars(&self) -> &SidebarSet {
        &self.sidebars
    }

    /// The gesture currently holding global pointer capture
    pub fn capture(&self) -> Option<&Gesture> {
        self.capture.as_ref()
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    pub fn store(&self) -> &dyn PanelStore {
        self.store.as_ref()
    }

    fn index_of(&self, id: &PanelId) -> Option<usize> {
        self.panels.iter().position(|p| &p.id == id)
    }

    /// Read-only view of every panel; no side effects
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            panels: self
                .panels
                .iter()
                .map(|panel| {
                    let mode = panel.mode();
                    PanelState {
                        id: panel.id.clone(),
                        title: panel.title.clone(),
                        mode: mode.name(),
                        side: mode.docked_side(),
                        position: mode.is_floating().then(|| panel.position()),
                        size: panel.size(),
                        collapsed: panel.is_collapsed(),
                        visible: panel.is_visible(),
                        snap_edge: panel.snap_edge,
                    }
                })
                .collect(),
        }
    }

    fn layout_changed(&self) -> Event {
        WorkspaceEvent::LayoutChanged(self.snapshot()).into()
    }

    // ========================================================================
    // Host lifecycle
    // ========================================================================

    /// Register a host-declared panel
    ///
    /// Docked panels are appended to their sidebar; floating panels are
    /// clamped to the current bounds. Duplicate ids are ignored.
    pub fn add_panel(&mut self, mut panel: Panel) -> Vec<Event> {
        if self.index_of(&panel.id).is_some() {
            tracing::warn!("Ignoring duplicate panel id {}", panel.id);
            return Vec::new();
        }

        match panel.mode() {
            PanelMode::Docked(side) => {
                let extent = panel.stack_extent(side, self.header_height);
                self.sidebars.get_mut(side).push(panel.id.clone(), extent);
            }
            PanelMode::Floating => clamp_floating(&mut panel, self.bounds),
            PanelMode::Minimized => {}
        }

        tracing::debug!(id = %panel.id, mode = panel.mode().name(), "panel added");
        self.panels.push(panel);
        vec![self.layout_changed()]
    }

    /// Remove a panel, releasing any capture it held
    pub fn remove_panel(&mut self, id: &PanelId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let mut events = self.release_capture_for(id);
        self.sidebars.remove_panel(id);
        self.panels.remove(index);
        tracing::debug!(%id, "panel removed");
        events.push(self.layout_changed());
        events
    }

    /// Register a dismiss guard
    pub fn add_dismiss_guard(&mut self, guard: impl FnMut(&PanelId) -> bool + 'static) {
        self.dismiss_guards.push(Box::new(guard));
    }

    // ========================================================================
    // Bounds and constraints
    // ========================================================================

    /// Content surface resized
    ///
    /// Floating panels are re-clamped; panels that would not fit at all are
    /// left where they are.
    pub fn set_bounds(&mut self, bounds: Size) -> Vec<Event> {
        if bounds == self.bounds {
            return Vec::new();
        }
        self.bounds = bounds;
        tracing::debug!(width = bounds.width, height = bounds.height, "bounds changed");

        let mut events = vec![Event::Workspace(WorkspaceEvent::BoundsChanged {
            width: bounds.width,
            height: bounds.height,
        })];

        let dragging = match &self.capture {
            Some(Gesture::Drag(session)) => Some(session.panel_id.clone()),
            _ => None,
        };
        for panel in self.panels.iter_mut() {
            if dragging.as_ref() != Some(&panel.id) {
                clamp_floating(panel, bounds);
            }
        }

        events.push(self.layout_changed());
        events
    }

    /// Edge a panel at `position` with `size` is near, if any
    pub fn gravity_zone_at(&self, position: Point, size: Size) -> Option<DockSide> {
        if self.bounds.is_empty() {
            return None;
        }
        gravity_edge(position, size, self.bounds, self.gravity_zone)
    }

    /// Zone under a dragged panel
    ///
    /// A panel dragged out of a sidebar keeps that sidebar while its slot
    /// rectangle is still inside the sidebar's own zone, even where another
    /// edge would win on precedence (the outer slots of a top or bottom
    /// sidebar also touch the left or right zone).
    fn drag_zone(&self, session: &DragSession, position: Point) -> Option<DockSide> {
        match session.from_dock {
            Some(side)
                if !self.bounds.is_empty()
                    && in_gravity_zone(side, position, session.size, self.bounds, self.gravity_zone) =>
            {
                Some(side)
            }
            _ => self.gravity_zone_at(position, session.size),
        }
    }

    pub fn set_gravity_zone(&mut self, zone: f32) {
        self.gravity_zone = zone.max(0.0);
    }

    pub fn set_auto_dock(&mut self, enabled: bool) {
        self.auto_dock = enabled;
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    /// Pointer went down on a panel
    ///
    /// Starts a drag (header) or resize (handle) and takes global capture.
    /// Anything else, including a second pointer-down while a gesture is
    /// live, is ignored.
    pub fn pointer_down(&mut self, id: &PanelId, target: PointerTarget, at: Point) -> Vec<Event> {
        if self.capture.is_some() {
            return Vec::new();
        }
        let Some(panel) = self.panel(id) else {
            return Vec::new();
        };

        let gesture = match target {
            PointerTarget::Header => {
                // A docked panel drags from the slot it is drawn in
                let slot = match panel.mode() {
                    PanelMode::Docked(side) => self.sidebars.get(side).panel_rect(id, self.bounds),
                    _ => None,
                };
                let origin = slot.map(|r| r.origin()).unwrap_or_else(|| panel.position());
                panel.begin_drag(target, at, origin).map(|mut session| {
                    if let Some(rect) = slot {
                        session.size = rect.size();
                    }
                    Gesture::Drag(session)
                })
            }
            PointerTarget::ResizeHandle => panel.begin_resize(target, at).map(Gesture::Resize),
            PointerTarget::HeaderControl | PointerTarget::Content => None,
        };

        if let Some(gesture) = gesture {
            tracing::debug!(%id, ?target, "gesture captured");
            self.capture = Some(gesture);
        }
        Vec::new()
    }

    /// Globally captured pointer move
    pub fn pointer_move(&mut self, at: Point) -> Vec<Event> {
        match self.capture.take() {
            Some(Gesture::Drag(mut session)) => {
                let events = self.drag_step(&mut session, at);
                self.capture = Some(Gesture::Drag(session));
                events
            }
            Some(Gesture::Resize(session)) => {
                let events = self.resize_step(&session, at);
                self.capture = Some(Gesture::Resize(session));
                events
            }
            None => Vec::new(),
        }
    }

    /// Globally captured pointer release; ends the gesture
    pub fn pointer_up(&mut self, at: Point) -> Vec<Event> {
        match self.capture.take() {
            Some(Gesture::Drag(mut session)) => {
                let mut events = self.drag_step(&mut session, at);
                events.retain(|e| !e.is_layout_change());
                events.extend(self.finish_drag(session, at));
                events
            }
            Some(Gesture::Resize(session)) => {
                tracing::debug!(id = %session.panel_id, "resize ended");
                self.resize_step(&session, at)
            }
            None => Vec::new(),
        }
    }

    /// Component teardown: release capture without completing the gesture
    pub fn teardown(&mut self) -> Vec<Event> {
        let Some(gesture) = self.capture.take() else {
            return Vec::new();
        };
        tracing::debug!(id = %gesture.panel_id(), "capture released on teardown");
        self.clear_drag_indicators(gesture.panel_id())
    }

    fn release_capture_for(&mut self, id: &PanelId) -> Vec<Event> {
        if self.capture.as_ref().map(Gesture::panel_id) == Some(id) {
            self.teardown()
        } else {
            Vec::new()
        }
    }

    fn clear_drag_indicators(&mut self, id: &PanelId) -> Vec<Event> {
        self.sidebars.clear_drop_indicators();
        match self.dock_preview.take() {
            Some(_) => vec![Event::Workspace(WorkspaceEvent::DockPreview {
                id: id.clone(),
                side: None,
            })],
            None => Vec::new(),
        }
    }

    fn drag_step(&mut self, session: &mut DragSession, at: Point) -> Vec<Event> {
        let Some(index) = self.index_of(&session.panel_id) else {
            return Vec::new();
        };
        let id = session.panel_id.clone();
        let mut position = session.position_at(at);
        let floating = self.panels[index].mode().is_floating();

        if floating {
            if !self.bounds.is_empty() && fits_within(session.size, self.bounds) {
                position = clamp_to_bounds(position, session.size, self.bounds);
            }
            self.panels[index].set_position(position);
        }
        session.current = position;

        let mut events = vec![Event::moved(&id, position, at)];
        tracing::trace!(%id, x = position.x, y = position.y, "drag move");

        let zone = self.drag_zone(session, position);
        if zone != self.dock_preview {
            self.dock_preview = zone;
            events.push(Event::Workspace(WorkspaceEvent::DockPreview {
                id: id.clone(),
                side: zone,
            }));
        }

        self.sidebars.clear_drop_indicators();
        if let Some(side) = zone {
            let sidebar = self.sidebars.get_mut(side);
            let drop_index = sidebar.calculate_drop_index(at.along(side.axis()));
            sidebar.show_drop_indicator(drop_index, Some(&id));
        }

        if floating {
            events.push(self.layout_changed());
        }
        events
    }

    fn finish_drag(&mut self, session: DragSession, at: Point) -> Vec<Event> {
        let id = session.panel_id.clone();
        let position = session.current;
        let mut events = vec![Event::drag_ended(&id, position)];
        events.extend(self.clear_drag_indicators(&id));

        let Some(index) = self.index_of(&id) else {
            return events;
        };
        let zone = self.drag_zone(&session, position);
        tracing::debug!(%id, ?zone, x = position.x, y = position.y, "drag ended");

        match (self.panels[index].mode(), zone) {
            (PanelMode::Floating, Some(side)) => {
                if self.auto_dock {
                    // Remember where the panel floated before this drag
                    self.panels[index].set_position(session.origin);
                    let drop_index = self
                        .sidebars
                        .get(side)
                        .calculate_drop_index(at.along(side.axis()));
                    self.place_in_sidebar(index, side, Some(drop_index));
                }
                events.push(Event::Workspace(WorkspaceEvent::Docked {
                    id: id.clone(),
                    side,
                    applied: self.auto_dock,
                }));
            }
            (PanelMode::Docked(current), Some(side)) => {
                if self.auto_dock {
                    let drop_index = self
                        .sidebars
                        .get(side)
                        .calculate_drop_index(at.along(side.axis()));
                    self.place_in_sidebar(index, side, Some(drop_index));
                }
                if side != current {
                    events.push(Event::Workspace(WorkspaceEvent::Docked {
                        id: id.clone(),
                        side,
                        applied: self.auto_dock,
                    }));
                }
            }
            (PanelMode::Docked(_), None) if self.auto_dock => {
                events.extend(self.undock_at(index, Some(position)));
            }
            _ => {}
        }

        events.push(self.layout_changed());
        events
    }

    fn resize_step(&mut self, session: &ResizeSession, at: Point) -> Vec<Event> {
        let Some(index) = self.index_of(&session.panel_id) else {
            return Vec::new();
        };
        let size = self.panels[index].resize_to(session, at);
        self.sync_extent(index);
        vec![Event::resized(&session.panel_id, size), self.layout_changed()]
    }

    // ========================================================================
    // Dock / undock
    // ========================================================================

    /// Put panel `index` into the `side` sidebar at `drop_index` (computed
    /// against the sidebar's current list), or at the end
    fn place_in_sidebar(&mut self, index: usize, side: DockSide, drop_index: Option<usize>) {
        let id = self.panels[index].id.clone();
        if let Some(current) = self.panels[index].mode().docked_side() {
            if current != side {
                self.sidebars.get_mut(current).remove(&id);
            }
        }
        self.panels[index].dock(side);
        let extent = self.panels[index].stack_extent(side, self.header_height);
        let sidebar = self.sidebars.get_mut(side);
        let slot = match drop_index {
            Some(i) => sidebar.insert_at(id.clone(), extent, i),
            None if sidebar.contains(&id) => sidebar.index_of(&id).unwrap_or_default(),
            None => sidebar.push(id.clone(), extent),
        };
        tracing::debug!(%id, %side, slot, "panel docked");
    }

    /// Dock a panel explicitly (host action)
    pub fn dock(&mut self, id: &PanelId, side: DockSide, drop_index: Option<usize>) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let mut events = self.release_capture_for(id);
        let was = self.panels[index].mode().docked_side();
        self.place_in_sidebar(index, side, drop_index);
        if was != Some(side) {
            events.push(Event::Workspace(WorkspaceEvent::Docked {
                id: id.clone(),
                side,
                applied: true,
            }));
        }
        events.push(self.layout_changed());
        events
    }

    /// Undock a panel explicitly; `at` overrides the remembered position
    pub fn undock(&mut self, id: &PanelId, at: Option<Point>) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        if self.panels[index].mode().docked_side().is_none() {
            return Vec::new();
        }
        let mut events = self.release_capture_for(id);
        events.extend(self.undock_at(index, at));
        events.push(self.layout_changed());
        events
    }

    fn undock_at(&mut self, index: usize, at: Option<Point>) -> Vec<Event> {
        let id = self.panels[index].id.clone();
        self.sidebars.remove_panel(&id);
        if !self.panels[index].undock(at) {
            return Vec::new();
        }
        clamp_floating(&mut self.panels[index], self.bounds);
        let position = self.panels[index].position();
        tracing::debug!(%id, x = position.x, y = position.y, "panel undocked");
        vec![Event::Workspace(WorkspaceEvent::Undocked {
            id,
            x: position.x,
            y: position.y,
        })]
    }

    /// Keep a docked panel's sidebar extent in step with its size/collapse
    fn sync_extent(&mut self, index: usize) {
        let panel = &self.panels[index];
        if let PanelMode::Docked(side) = panel.mode() {
            let extent = panel.stack_extent(side, self.header_height);
            let id = panel.id.clone();
            self.sidebars.get_mut(side).set_extent(&id, extent);
        }
    }

    // ========================================================================
    // Panel controls
    // ========================================================================

    /// Host measured a panel's natural size
    pub fn set_measured_size(&mut self, id: &PanelId, size: Size) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let before = self.panels[index].size();
        self.panels[index].set_measured_size(size);
        if self.panels[index].size() == before {
            return Vec::new();
        }
        self.sync_extent(index);
        vec![self.layout_changed()]
    }

    pub fn toggle_collapse(&mut self, id: &PanelId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let Some(collapsed) = self.panels[index].toggle_collapsed() else {
            return Vec::new();
        };
        self.sync_extent(index);
        self.persist_panel(index);
        vec![
            Event::Panel(PanelEvent::CollapseToggled {
                id: id.clone(),
                collapsed,
            }),
            self.layout_changed(),
        ]
    }

    /// The panel's own dismiss control
    ///
    /// Floating panels configured to minimize on dismiss are minimized;
    /// everything else goes through the cancelable dismiss.
    pub fn dismiss_control(&mut self, id: &PanelId) -> Vec<Event> {
        match self.panel(id) {
            Some(panel) if panel.minimize_on_dismiss && panel.mode().is_floating() => {
                self.minimize(id)
            }
            Some(_) => self.dismiss(id),
            None => Vec::new(),
        }
    }

    /// Hide a panel unless a dismiss guard vetoes it
    pub fn dismiss(&mut self, id: &PanelId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        if !self.panels[index].is_visible() {
            return Vec::new();
        }

        let mut canceled = false;
        for guard in self.dismiss_guards.iter_mut() {
            canceled |= guard(id);
        }
        let mut events = vec![Event::Panel(PanelEvent::Dismissed {
            id: id.clone(),
            canceled,
        })];
        if canceled {
            tracing::debug!(%id, "dismiss vetoed");
            return events;
        }

        events.extend(self.release_capture_for(id));
        self.panels[index].hide();
        self.persist_panel(index);
        tracing::debug!(%id, "panel dismissed");
        events.push(self.layout_changed());
        events
    }

    /// Un-hide a dismissed panel
    pub fn show(&mut self, id: &PanelId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        if !self.panels[index].show() {
            return Vec::new();
        }
        vec![self.layout_changed()]
    }

    /// `floating|docked -> minimized`
    pub fn minimize(&mut self, id: &PanelId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let mut events = self.release_capture_for(id);
        if !self.panels[index].minimize() {
            return events;
        }
        self.sidebars.remove_panel(id);
        self.persist_panel(index);
        tracing::debug!(%id, "panel minimized");
        events.push(Event::Panel(PanelEvent::Minimized { id: id.clone() }));
        events.push(self.layout_changed());
        events
    }

    /// `minimized -> floating` (minimized tab clicked)
    pub fn restore_minimized(&mut self, id: &PanelId) -> Vec<Event> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        if !self.panels[index].restore() {
            return Vec::new();
        }
        clamp_floating(&mut self.panels[index], self.bounds);
        self.persist_panel(index);
        tracing::debug!(%id, "panel restored");
        vec![
            Event::Panel(PanelEvent::Restored { id: id.clone() }),
            self.layout_changed(),
        ]
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    fn persist_panel(&mut self, index: usize) {
        if !self.persist {
            return;
        }
        let panel = &self.panels[index];
        let Some(persist_id) = panel.persist_id.as_deref() else {
            return;
        };
        let key = storage_key(persist_id);
        let json = match panel.persisted_state().to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize panel {}: {}", panel.id, e);
                return;
            }
        };
        if let Err(e) = self.store.save(&key, &json) {
            tracing::warn!("Failed to persist panel {} under {}: {}", panel.id, key, e);
        }
    }

    /// Reapply a panel's persisted state
    ///
    /// Returns false (leaving the panel untouched) when the panel has no
    /// persist id, nothing is stored, or the stored record is corrupt.
    pub fn restore_position(&mut self, id: &PanelId) -> (bool, Vec<Event>) {
        let Some(index) = self.index_of(id) else {
            return (false, Vec::new());
        };
        let Some(persist_id) = self.panels[index].persist_id.as_deref() else {
            return (false, Vec::new());
        };
        let key = storage_key(persist_id);
        let Some(raw) = self.store.load(&key) else {
            tracing::debug!(%id, "no persisted state");
            return (false, Vec::new());
        };
        let Some(state) = PersistedPanel::from_json(&raw) else {
            tracing::warn!("Corrupt persisted state for panel {} under {}", id, key);
            return (false, Vec::new());
        };

        let mut events = self.release_capture_for(id);
        if state.minimized {
            self.sidebars.remove_panel(id);
        }
        self.panels[index].apply_persisted(&state);
        clamp_floating(&mut self.panels[index], self.bounds);
        self.sync_extent(index);
        tracing::debug!(%id, minimized = state.minimized, "persisted state restored");
        events.push(self.layout_changed());
        (true, events)
    }

    // ========================================================================
    // Sidebars
    // ========================================================================

    pub fn resize_sidebar(&mut self, side: DockSide, size: f32) -> Vec<Event> {
        let cross = match side.axis() {
            Axis::Vertical => self.bounds.width,
            Axis::Horizontal => self.bounds.height,
        };
        match self.sidebars.get_mut(side).set_size(size, cross) {
            Some(size) => vec![
                Event::Sidebar(SidebarEvent::Resized { side, size }),
                self.layout_changed(),
            ],
            None => Vec::new(),
        }
    }

    pub fn toggle_sidebar_collapse(&mut self, side: DockSide) -> Vec<Event> {
        let collapsed = self.sidebars.get_mut(side).toggle_collapsed();
        vec![
            Event::Sidebar(SidebarEvent::CollapseToggled { side, collapsed }),
            self.layout_changed(),
        ]
    }
}
