// File: crates/demo/src/main.rs
// Summary: Demo loads the distribution CSV and writes desktop/mobile SVG renders.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use graphic_core::{Chart, Dataset, FrameNotifier, ResizeCoordinator, DEFAULT_WIDTH};

/// Stand-in for the cross-frame channel: report each new height on stdout.
struct StdoutNotifier;

impl FrameNotifier for StdoutNotifier {
    fn frame_resized(&mut self, height: f64) {
        println!("frame height now {height}px");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Accept path from CLI or fall back to the sample dataset
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/pct_change_distribution.csv".to_string());
    let path = Path::new(&raw);

    let dataset =
        Dataset::from_csv_path(path).with_context(|| format!("loading {}", path.display()))?;
    println!("Loaded {} buckets from {}", dataset.len(), path.display());

    let mut coordinator = ResizeCoordinator::new(Chart::new(dataset), StdoutNotifier);

    // Initial render at the desktop default, then a viewport shrink
    let desktop = coordinator.start(DEFAULT_WIDTH)?;
    write_svg(&out_name("desktop"), &desktop.svg)?;

    if let Some(mobile) = coordinator.on_resize(375.0, Instant::now())? {
        write_svg(&out_name("mobile"), &mobile.svg)?;
    }

    Ok(())
}

/// Output file name like target/out/pct_change_<suffix>.svg
fn out_name(suffix: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("pct_change_{suffix}.svg"))
}

fn write_svg(path: &Path, markup: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, markup).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
