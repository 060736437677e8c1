// File: crates/graphic-core/tests/render.rs
// Purpose: End-to-end SVG output checks: bars, reference lines, labels, idempotence.

use graphic_core::data::{Dataset, Record};
use graphic_core::{Chart, GraphicError, RenderOptions, Theme};

fn dataset(rows: &[(&str, f64)]) -> Dataset {
    Dataset::try_new(
        rows.iter()
            .map(|(label, count)| Record {
                label: label.to_string(),
                count: *count,
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn mixed_sign_dataset_draws_zero_reference() {
    let chart = Chart::new(dataset(&[("-10", -30.0), ("0", 0.0), ("10", 45.0)]));
    let out = chart.render(940.0).unwrap();
    // domain (-50, 50): zero sits mid-range at 244.5 of the 489px plot
    assert!(out.svg.contains(r#"class="zero-line" x1="0" y1="244.5" x2="885" y2="244.5""#));
}

#[test]
fn nonnegative_dataset_omits_zero_reference() {
    let chart = Chart::new(dataset(&[("0", 5.0), ("10", 20.0)]));
    let out = chart.render(940.0).unwrap();
    assert!(!out.svg.contains("zero-line"));
}

#[test]
fn bars_anchor_at_the_zero_line() {
    let chart = Chart::new(dataset(&[("-10", -30.0), ("0", 0.0), ("10", 45.0)]));
    let out = chart.render(940.0).unwrap();
    // chart plot is 885x489 with domain (-50,50), so the zero line is 244.5
    // -30 hangs below the line
    assert!(out
        .svg
        .contains(r#"class="bar bar--10" x="14.75" y="244.5" width="265.5" height="146.7""#));
    // 45 rises above it
    assert!(out
        .svg
        .contains(r#"class="bar bar-10" x="604.75" y="24.45" width="265.5" height="220.05""#));
}

#[test]
fn rerender_is_idempotent() {
    let chart = Chart::new(dataset(&[("-10", -30.0), ("0", 0.0), ("10", 45.0)]));
    let a = chart.render(940.0).unwrap();
    let b = chart.render(940.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn x_labels_alternate_and_lead_in_is_present() {
    let chart = Chart::new(dataset(&[
        ("-15", 1.0),
        ("-10", 2.0),
        ("-5", 3.0),
        ("0", 4.0),
    ]));
    let out = chart.render(940.0).unwrap();
    assert!(out.svg.contains(">-10%</text>"));
    assert!(out.svg.contains(">0%</text>"));
    assert!(!out.svg.contains(">-15%</text>"));
    assert!(!out.svg.contains(">-5%</text>"));
    // the manual lead-in tick and the emphasized "0" category
    assert!(out.svg.contains(">-20%</text>"));
    assert!(out.svg.contains(r#"class="tick zero""#));
    assert!(out.svg.contains(r#"<line class="zero""#));
}

#[test]
fn theme_colors_reach_the_markup() {
    let options = RenderOptions {
        theme: Theme::dark(),
        ..RenderOptions::default()
    };
    let chart = Chart::with_options(dataset(&[("0", 5.0)]), options);
    let out = chart.render(940.0).unwrap();
    assert!(out.svg.contains("#121214"));
    assert!(out.svg.contains(r##"fill="#5a9bd1""##));
}

#[test]
fn rejects_bad_width() {
    let chart = Chart::new(dataset(&[("0", 1.0)]));
    assert!(matches!(
        chart.render(0.0),
        Err(GraphicError::InvalidWidth { .. })
    ));
}
