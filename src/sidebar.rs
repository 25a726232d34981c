//! Sidebar - ordered stack of docked panels along one workspace edge
//!
//! Order is visual stack order (top-to-bottom for left/right, left-to-right
//! for top/bottom), not insertion order. It is recomputed from the pointer
//! position whenever a panel is dropped into the sidebar.

use crate::geometry::{Axis, Rect, Size, Span};
use crate::panel::{DockSide, PanelId};

/// Minimum sidebar size in pixels
pub const MIN_SIDEBAR_SIZE: f32 = 150.0;

/// Maximum sidebar size as a fraction of the workspace cross extent
pub const MAX_SIDEBAR_FRACTION: f32 = 0.5;

/// A docked panel and its extent along the stacking axis
#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
    pub id: PanelId,
    pub extent: f32,
}

/// State for one edge container
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub side: DockSide,

    /// Cross-axis size (width for left/right, height for top/bottom)
    size: f32,

    /// Spacing between stacked panels
    gap: f32,

    collapsed: bool,

    entries: Vec<StackEntry>,

    /// Insertion marker shown while a drag hovers the sidebar
    drop_indicator: Option<f32>,
}

impl Sidebar {
    pub fn new(side: DockSide, size: f32, gap: f32) -> Self {
        Self {
            side,
            size,
            gap,
            collapsed: false,
            entries: Vec::new(),
            drop_indicator: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.side.axis()
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Cross-axis space the sidebar currently takes from the workspace
    pub fn occupied(&self) -> f32 {
        if self.collapsed || self.entries.is_empty() {
            0.0
        } else {
            self.size
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    pub fn panel_ids(&self) -> impl Iterator<Item = &PanelId> {
        self.entries.iter().map(|e| &e.id)
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &PanelId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn drop_indicator(&self) -> Option<f32> {
        self.drop_indicator
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Lay entries out from 0 along the stacking axis, separated by `gap`
    pub fn spans(&self) -> Vec<Span> {
        let mut cursor = 0.0;
        self.entries
            .iter()
            .map(|entry| {
                let span = Span::new(cursor, cursor + entry.extent);
                cursor = span.end + self.gap;
                span
            })
            .collect()
    }

    /// On-screen rectangle of a docked panel
    pub fn panel_rect(&self, id: &PanelId, bounds: Size) -> Option<Rect> {
        let index = self.index_of(id)?;
        let span = self.spans()[index];
        let rect = match self.side {
            DockSide::Left => Rect::new(0.0, span.start, self.size, span.len()),
            DockSide::Right => Rect::new(bounds.width - self.size, span.start, self.size, span.len()),
            DockSide::Top => Rect::new(span.start, 0.0, span.len(), self.size),
            DockSide::Bottom => {
                Rect::new(span.start, bounds.height - self.size, span.len(), self.size)
            }
        };
        Some(rect)
    }

    // ========================================================================
    // Drop index and ordering
    // ========================================================================

    /// Where a panel dropped at `coord` (along the stacking axis) would land
    ///
    /// Index of the first panel whose midpoint is at or past the cursor;
    /// the panel count when there is none. Linear scan, sidebars are small.
    pub fn calculate_drop_index(&self, coord: f32) -> usize {
        self.spans()
            .iter()
            .position(|span| span.midpoint() >= coord)
            .unwrap_or(self.entries.len())
    }

    /// Place a panel at `index`, computed against the current list
    ///
    /// If the panel is already in this sidebar it is removed first, and an
    /// index past its old slot is shifted down by one to account for the
    /// removal. Returns the final index.
    pub fn insert_at(&mut self, id: PanelId, extent: f32, index: usize) -> usize {
        let mut index = index;
        if let Some(old) = self.index_of(&id) {
            self.entries.remove(old);
            if index > old {
                index -= 1;
            }
        }

        let entry = StackEntry { id, extent };
        if index >= self.entries.len() {
            self.entries.push(entry);
            self.entries.len() - 1
        } else {
            self.entries.insert(index, entry);
            index
        }
    }

    /// Append at the end of the stack
    pub fn push(&mut self, id: PanelId, extent: f32) -> usize {
        let end = self.entries.len();
        self.insert_at(id, extent, end)
    }

    /// Remove a panel, returning its old index
    pub fn remove(&mut self, id: &PanelId) -> Option<usize> {
        let index = self.index_of(id)?;
        self.entries.remove(index);
        Some(index)
    }

    /// Update a panel's stacking extent (after resize or collapse)
    pub fn set_extent(&mut self, id: &PanelId, extent: f32) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) if entry.extent != extent => {
                entry.extent = extent;
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Drop indicator
    // ========================================================================

    /// Show the insertion marker for `index`
    ///
    /// The marker sits halfway between the panel that would end up before
    /// the insertion point and the one after it. The dragged panel itself
    /// is skipped since it leaves its slot on drop.
    pub fn show_drop_indicator(&mut self, index: usize, dragged: Option<&PanelId>) -> f32 {
        let spans = self.spans();
        let is_dragged = |i: usize| dragged == Some(&self.entries[i].id);

        let before = (0..index.min(self.entries.len()))
            .rev()
            .find(|&i| !is_dragged(i))
            .map(|i| spans[i]);
        let after = (index..self.entries.len())
            .find(|&i| !is_dragged(i))
            .map(|i| spans[i]);

        let position = match (before, after) {
            (Some(b), Some(a)) => b.end + (a.start - b.end) / 2.0,
            (Some(b), None) => b.end,
            (None, Some(a)) => a.start,
            (None, None) => 0.0,
        };
        self.drop_indicator = Some(position);
        position
    }

    /// Returns true if an indicator was showing
    pub fn clear_drop_indicator(&mut self) -> bool {
        self.drop_indicator.take().is_some()
    }

    // ========================================================================
    // Sizing and collapse
    // ========================================================================

    /// Resize the sidebar on its cross axis
    ///
    /// Clamped to [`MIN_SIDEBAR_SIZE`] and to half of `workspace_extent`
    /// (when that is measured and large enough). Returns the new size if it
    /// changed.
    pub fn set_size(&mut self, size: f32, workspace_extent: f32) -> Option<f32> {
        let max = workspace_extent * MAX_SIDEBAR_FRACTION;
        let mut clamped = size.max(MIN_SIDEBAR_SIZE);
        if max >= MIN_SIDEBAR_SIZE {
            clamped = clamped.min(max);
        }
        if clamped == self.size {
            return None;
        }
        self.size = clamped;
        Some(clamped)
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }
}

/// The four edge sidebars of a workspace
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSet {
    pub left: Sidebar,
    pub right: Sidebar,
    pub top: Sidebar,
    pub bottom: Sidebar,
}

impl SidebarSet {
    pub fn new(side_size: f32, edge_size: f32, gap: f32) -> Self {
        Self {
            left: Sidebar::new(DockSide::Left, side_size, gap),
            right: Sidebar::new(DockSide::Right, side_size, gap),
            top: Sidebar::new(DockSide::Top, edge_size, gap),
            bottom: Sidebar::new(DockSide::Bottom, edge_size, gap),
        }
    }

    pub fn get(&self, side: DockSide) -> &Sidebar {
        match side {
            DockSide::Left => &self.left,
            DockSide::Right => &self.right,
            DockSide::Top => &self.top,
            DockSide::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, side: DockSide) -> &mut Sidebar {
        match side {
            DockSide::Left => &mut self.left,
            DockSide::Right => &mut self.right,
            DockSide::Top => &mut self.top,
            DockSide::Bottom => &mut self.bottom,
        }
    }

    /// Find which sidebar holds a panel
    pub fn find_panel(&self, id: &PanelId) -> Option<DockSide> {
        DockSide::ALL
            .into_iter()
            .find(|&side| self.get(side).contains(id))
    }

    /// Remove a panel from whichever sidebar holds it
    pub fn remove_panel(&mut self, id: &PanelId) -> Option<(DockSide, usize)> {
        let side = self.find_panel(id)?;
        self.get_mut(side).remove(id).map(|index| (side, index))
    }

    /// Clear every drop indicator, returning true if any was showing
    pub fn clear_drop_indicators(&mut self) -> bool {
        DockSide::ALL
            .into_iter()
            .fold(false, |cleared, side| {
                self.get_mut(side).clear_drop_indicator() || cleared
            })
    }
}
