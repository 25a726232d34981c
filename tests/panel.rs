//! Panel state machine tests
//!
//! Mode exclusivity across transition sequences and minimize/restore
//! round-trips for arbitrary geometry.

use floatdock::geometry::{Point, Size};
use floatdock::panel::{DockSide, Geometry, Panel, PanelMode, SizeLimits};

fn geometries() -> Vec<Geometry> {
    let mut out = Vec::new();
    for x in [-40.0, 0.0, 12.5, 300.0] {
        for y in [0.0, 75.0, 999.0] {
            for size in [None, Some((1.0, 1.0)), Some((240.0, 180.0))] {
                let (width, height) = match size {
                    Some((w, h)) => (Some(w), Some(h)),
                    None => (None, None),
                };
                out.push(Geometry::new(x, y, width, height));
            }
        }
    }
    out
}

fn panel_with(geometry: Geometry) -> Panel {
    let panel = Panel::new("Tools").at(geometry.x, geometry.y);
    match (geometry.width, geometry.height) {
        (Some(w), Some(h)) => panel.with_size(w, h),
        _ => panel,
    }
}

#[test]
fn test_minimize_restore_round_trip_for_any_geometry() {
    for geometry in geometries() {
        let mut panel = panel_with(geometry);
        assert!(panel.minimize());
        assert!(panel.restore());
        assert_eq!(panel.geometry(), geometry);
    }
}

#[test]
fn test_minimize_from_docked_restores_floating_geometry() {
    for geometry in geometries() {
        let mut panel = panel_with(geometry);
        panel.dock(DockSide::Bottom);
        panel.minimize();
        panel.restore();
        assert_eq!(panel.geometry(), geometry);
        assert_eq!(panel.mode(), PanelMode::Floating);
    }
}

#[test]
fn test_mode_is_always_exactly_one() {
    fn check(panel: &Panel) {
        let mode = panel.mode();
        let flags = [
            mode.is_floating(),
            mode.docked_side().is_some(),
            mode.is_minimized(),
        ];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{mode:?}");
    }

    let mut panel = Panel::new("Tools").at(10.0, 10.0).with_size(100.0, 100.0);
    check(&panel);

    panel.dock(DockSide::Left);
    check(&panel);
    panel.dock(DockSide::Top);
    check(&panel);
    panel.toggle_collapsed();
    check(&panel);
    panel.minimize();
    check(&panel);
    panel.dock(DockSide::Right);
    check(&panel);
    panel.undock(Some(Point::new(5.0, 5.0)));
    check(&panel);
    panel.hide();
    check(&panel);
    panel.minimize();
    panel.restore();
    check(&panel);
    assert_eq!(panel.mode(), PanelMode::Floating);
}

#[test]
fn test_dock_from_minimized_uses_pre_minimize_geometry() {
    let mut panel = Panel::new("Tools").at(40.0, 60.0).with_size(100.0, 80.0);
    panel.minimize();
    panel.dock(DockSide::Left);
    panel.undock(None);
    assert_eq!(panel.position(), Point::new(40.0, 60.0));
}

#[test]
fn test_limits_clamp_dimensions_independently() {
    let limits = SizeLimits {
        min_width: Some(50.0),
        max_width: Some(400.0),
        min_height: None,
        max_height: Some(300.0),
    };
    let size = limits.clamp(Size::new(10.0, 900.0));
    assert_eq!(size.width, 50.0);
    assert_eq!(size.height, 300.0);

    let size = limits.clamp(Size::new(1000.0, -20.0));
    assert_eq!(size.width, 400.0);
    assert_eq!(size.height, 0.0);
}
