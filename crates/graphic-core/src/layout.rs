// File: crates/graphic-core/src/layout.rs
// Summary: Responsive layout resolution: breakpoint, aspect ratio, chart geometry.

use crate::error::{GraphicError, Result};
use crate::types::{Margins, MOBILE_BREAKPOINT};

/// Viewport-derived layout mode. Recomputed from the live width on every
/// render, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub container_width: f64,
    pub is_mobile: bool,
}

impl LayoutConfig {
    /// Resolve the layout for the current container width.
    pub fn resolve(container_width: f64) -> Result<Self> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(GraphicError::InvalidWidth { width: container_width });
        }
        Ok(Self {
            container_width,
            is_mobile: container_width <= MOBILE_BREAKPOINT,
        })
    }

    /// Aspect ratio as (width, height): 4:3 on mobile, 16:9 otherwise.
    pub fn aspect(&self) -> (f64, f64) {
        if self.is_mobile {
            (4.0, 3.0)
        } else {
            (16.0, 9.0)
        }
    }
}

/// Pixel dimensions of the plot area. Pure function of the layout and the
/// fixed margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub chart_width: f64,
    pub chart_height: f64,
    pub margins: Margins,
}

impl ChartGeometry {
    pub fn from_layout(layout: &LayoutConfig, margins: Margins) -> Self {
        let (aspect_w, aspect_h) = layout.aspect();
        let chart_width = layout.container_width - margins.left - margins.right;
        let chart_height =
            (layout.container_width * aspect_h / aspect_w).ceil() - margins.top - margins.bottom;
        log::debug!(
            "layout: {}px container -> {}x{} plot (mobile={})",
            layout.container_width,
            chart_width,
            chart_height,
            layout.is_mobile
        );
        Self { chart_width, chart_height, margins }
    }

    /// Total document width including margins.
    pub fn outer_width(&self) -> f64 {
        self.chart_width + self.margins.hsum()
    }

    /// Total document height including margins; this is the value reported
    /// to the frame notifier after a render.
    pub fn outer_height(&self) -> f64 {
        self.chart_height + self.margins.vsum()
    }
}
