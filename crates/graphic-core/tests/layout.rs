// File: crates/graphic-core/tests/layout.rs
// Purpose: Validate breakpoint, aspect selection, and chart geometry math.

use graphic_core::layout::{ChartGeometry, LayoutConfig};
use graphic_core::types::Margins;
use graphic_core::GraphicError;

#[test]
fn breakpoint_selects_aspect() {
    let at = LayoutConfig::resolve(600.0).unwrap();
    assert!(at.is_mobile);
    assert_eq!(at.aspect(), (4.0, 3.0));

    let above = LayoutConfig::resolve(600.5).unwrap();
    assert!(!above.is_mobile);
    assert_eq!(above.aspect(), (16.0, 9.0));

    let small = LayoutConfig::resolve(320.0).unwrap();
    assert!(small.is_mobile);
}

#[test]
fn geometry_matches_formula() {
    // 940px desktop: ceil(940 * 9/16) = 529
    let layout = LayoutConfig::resolve(940.0).unwrap();
    let geom = ChartGeometry::from_layout(&layout, Margins::default());
    assert_eq!(geom.chart_width, 885.0);
    assert_eq!(geom.chart_height, 489.0);
    assert_eq!(geom.outer_width(), 940.0);
    assert_eq!(geom.outer_height(), 529.0);

    // 375px mobile: ceil(375 * 3/4) = 282
    let layout = LayoutConfig::resolve(375.0).unwrap();
    let geom = ChartGeometry::from_layout(&layout, Margins::default());
    assert_eq!(geom.chart_width, 320.0);
    assert_eq!(geom.chart_height, 242.0);
    assert_eq!(geom.outer_height(), 282.0);
}

#[test]
fn geometry_formula_holds_across_widths() {
    for w in [601.0, 768.0, 940.0, 1280.0] {
        let geom =
            ChartGeometry::from_layout(&LayoutConfig::resolve(w).unwrap(), Margins::default());
        assert_eq!(geom.chart_width, w - 55.0);
        assert_eq!(geom.chart_height, (w * 9.0 / 16.0).ceil() - 40.0);
    }
    for w in [320.0, 414.0, 600.0] {
        let geom =
            ChartGeometry::from_layout(&LayoutConfig::resolve(w).unwrap(), Margins::default());
        assert_eq!(geom.chart_width, w - 55.0);
        assert_eq!(geom.chart_height, (w * 3.0 / 4.0).ceil() - 40.0);
    }
}

#[test]
fn rejects_degenerate_widths() {
    for w in [0.0, -120.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            LayoutConfig::resolve(w),
            Err(GraphicError::InvalidWidth { .. })
        ));
    }
}
