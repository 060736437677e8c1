// File: crates/graphic-core/src/runtime.rs
// Summary: Resize throttling and the render loop driving frame notifications.

use std::time::{Duration, Instant};

use crate::chart::{Chart, RenderedGraphic};
use crate::error::Result;

/// Leading-edge rate limiter: the first event in a window fires
/// immediately; events arriving inside the window are coalesced away, not
/// queued. Time is injected so hosts and tests control the clock.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(250);

    pub fn new(window: Duration) -> Self {
        Self { window, last_fired: None }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Admit an event at `now`, or coalesce it into the running window.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(prev) if now.duration_since(prev) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

/// Host seam for the cross-frame height notification. Invoked once per
/// completed render with the new document height; transport is the host's
/// concern.
pub trait FrameNotifier {
    fn frame_resized(&mut self, height: f64);
}

/// Notifier for hosts with no enclosing frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl FrameNotifier for NullNotifier {
    fn frame_resized(&mut self, _height: f64) {}
}

/// Owns the chart (with its write-once dataset), the throttle, and the
/// notifier. The host forwards viewport resize events here; everything runs
/// on the caller's single thread, so renders never overlap.
pub struct ResizeCoordinator<N: FrameNotifier> {
    chart: Chart,
    throttle: Throttle,
    notifier: N,
    renders: u64,
}

impl<N: FrameNotifier> ResizeCoordinator<N> {
    pub fn new(chart: Chart, notifier: N) -> Self {
        Self {
            chart,
            throttle: Throttle::default(),
            notifier,
            renders: 0,
        }
    }

    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Completed render count, for hosts that surface diagnostics.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Initial render once the data has loaded; not subject to the
    /// throttle.
    pub fn start(&mut self, width: f64) -> Result<RenderedGraphic> {
        self.render_now(width)
    }

    /// Throttled resize entry point. Returns `Ok(None)` when the event was
    /// coalesced.
    pub fn on_resize(&mut self, width: f64, now: Instant) -> Result<Option<RenderedGraphic>> {
        if !self.throttle.admit(now) {
            log::debug!("resize to {width}px coalesced");
            return Ok(None);
        }
        self.render_now(width).map(Some)
    }

    fn render_now(&mut self, width: f64) -> Result<RenderedGraphic> {
        let rendered = self.chart.render(width)?;
        self.renders += 1;
        self.notifier.frame_resized(rendered.height);
        log::info!(
            "render #{}: {}px wide -> {}px tall",
            self.renders,
            rendered.width,
            rendered.height
        );
        Ok(rendered)
    }
}
