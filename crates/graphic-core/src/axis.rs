// File: crates/graphic-core/src/axis.rs
// Summary: Tick construction for the category and value axes.

use crate::scale::{BandScale, LinearScale};

/// Label of the manual lead-in tick drawn left of the first band.
pub const LEAD_IN_LABEL: &str = "-20%";

/// One rendered tick: pixel position along its axis and label text (may be
/// empty — the mark is still drawn).
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Category-axis ticks, one per band at its center. Labels alternate by
/// index parity — only odd indices carry text — regardless of tick values.
pub fn x_ticks(scale: &BandScale) -> Vec<Tick> {
    (0..scale.len())
        .filter_map(|i| {
            scale.band_at(i).map(|band| Tick {
                position: band.center(),
                label: x_tick_label(&scale.labels()[i], i),
            })
        })
        .collect()
}

/// Alternating label policy: `"{value}%"` at odd indices, empty otherwise.
pub fn x_tick_label(label: &str, index: usize) -> String {
    if index % 2 == 1 {
        format!("{label}%")
    } else {
        String::new()
    }
}

/// The fixed manual tick one band step left of the leftmost ordinary tick.
/// Independent of the data domain; fills a known gap in the automatic set.
pub fn lead_in_tick(scale: &BandScale) -> Option<Tick> {
    let first = scale.band_at(0)?;
    Some(Tick {
        position: first.center() - scale.step(),
        label: LEAD_IN_LABEL.to_string(),
    })
}

/// Value-axis ticks at nice positions; labels are the raw numeric values,
/// no suffix.
pub fn y_ticks(scale: &LinearScale, target: usize) -> Vec<Tick> {
    scale
        .ticks(target)
        .into_iter()
        .map(|v| Tick {
            position: scale.scale(v),
            label: format_value(v),
        })
        .collect()
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
