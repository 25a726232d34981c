//! Geometry primitives and pure layout helpers
//!
//! Everything in this module is workspace-relative, origin at the top-left
//! of the content surface. All functions are pure (no I/O, no side effects)
//! so both the gesture handlers and the tests can call them directly.

use serde::{Deserialize, Serialize};

use crate::panel::DockSide;

// ============================================================================
// Primitives
// ============================================================================

/// A point in workspace coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`
    pub fn delta_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn offset(&self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }

    /// Coordinate along the given axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True until the surface has been measured
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Extent along the given axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Stacking axis of a sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Panels stack top-to-bottom (left/right sidebars)
    Vertical,
    /// Panels stack left-to-right (top/bottom sidebars)
    Horizontal,
}

/// A closed interval along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn midpoint(&self) -> f32 {
        self.start + (self.end - self.start) / 2.0
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }
}

// ============================================================================
// Constraint clamping
// ============================================================================

/// Keep a floating panel inside the workspace
///
/// `x' = clamp(x, 0, bounds.width - w)` and likewise for y. An axis on which
/// the panel does not fit (`bounds - size < 0`) is left untouched so that a
/// not-yet-measured surface never drives a panel to negative coordinates.
pub fn clamp_to_bounds(position: Point, size: Size, bounds: Size) -> Point {
    Point::new(
        clamp_axis(position.x, size.width, bounds.width),
        clamp_axis(position.y, size.height, bounds.height),
    )
}

#[inline]
fn clamp_axis(pos: f32, extent: f32, available: f32) -> f32 {
    let max = available - extent;
    if !max.is_finite() || max < 0.0 || !pos.is_finite() {
        return pos;
    }
    pos.clamp(0.0, max)
}

/// Whether the panel fits inside the bounds on both axes
pub fn fits_within(size: Size, bounds: Size) -> bool {
    size.width <= bounds.width && size.height <= bounds.height
}

// ============================================================================
// Gravity zones
// ============================================================================

/// Detect which workspace edge a panel at `position` with `size` is near
///
/// Checked in fixed order: left, right, top, bottom. The first match wins,
/// so a panel sitting in the top-left corner reports `Left`.
pub fn gravity_edge(position: Point, size: Size, bounds: Size, zone: f32) -> Option<DockSide> {
    DockSide::ALL
        .into_iter()
        .find(|&side| in_gravity_zone(side, position, size, bounds, zone))
}

/// Whether a panel at `position` with `size` lies in the gravity zone of `side`
pub fn in_gravity_zone(
    side: DockSide,
    position: Point,
    size: Size,
    bounds: Size,
    zone: f32,
) -> bool {
    match side {
        DockSide::Left => position.x <= zone,
        DockSide::Right => position.x + size.width >= bounds.width - zone,
        DockSide::Top => position.y <= zone,
        DockSide::Bottom => position.y + size.height >= bounds.height - zone,
    }
}
