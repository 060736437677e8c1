// File: crates/graphic-core/src/chart.rs
// Summary: Bar-chart renderer producing a standalone SVG document per call.

use crate::axis;
use crate::data::Dataset;
use crate::error::Result;
use crate::layout::{ChartGeometry, LayoutConfig};
use crate::scale::{rounded_domain, BandScale, LinearScale};
use crate::svg::SvgWriter;
use crate::theme::Theme;
use crate::types::{Margins, TICKS_Y, TICK_SIZE};

/// Render-time options. Geometry is derived per call and never stored here.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub margins: Margins,
    /// Fraction of each band slot left empty around the bar.
    pub band_padding: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            margins: Margins::default(),
            band_padding: 0.1,
        }
    }
}

/// A completed render: the markup plus the dimensions the host needs to
/// size its frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedGraphic {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// The graphic: an immutable dataset plus render options. `render` is a
/// pure function of the container width — same dataset and width always
/// yield identical markup, and each call produces a complete fresh
/// document for the host to swap in.
pub struct Chart {
    dataset: Dataset,
    options: RenderOptions,
}

impl Chart {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, options: RenderOptions::default() }
    }

    pub fn with_options(dataset: Dataset, options: RenderOptions) -> Self {
        Self { dataset, options }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Derive layout and scales for `container_width`, then draw axes,
    /// gridlines, bars, and reference lines.
    pub fn render(&self, container_width: f64) -> Result<RenderedGraphic> {
        let layout = LayoutConfig::resolve(container_width)?;
        let geom = ChartGeometry::from_layout(&layout, self.options.margins);
        let theme = &self.options.theme;

        let x_scale = BandScale::new(
            self.dataset.labels(),
            geom.chart_width,
            self.options.band_padding,
        );
        let (data_min, data_max) = self.dataset.count_extent();
        let domain = rounded_domain(data_min, data_max);
        let y_scale = LinearScale::new(domain, (geom.chart_height, 0.0));
        log::debug!(
            "render: domain [{}, {}] over {} bands",
            domain.0,
            domain.1,
            x_scale.len()
        );

        let mut svg = SvgWriter::new(geom.outer_width(), geom.outer_height(), theme.background);
        svg.open_group_translated("graphic", geom.margins.left, geom.margins.top);

        self.draw_x_axis(&mut svg, &x_scale, &geom, theme);
        self.draw_y_axis(&mut svg, &y_scale, theme);
        self.draw_grid(&mut svg, &x_scale, &y_scale, &geom, theme);
        self.draw_bars(&mut svg, &x_scale, &y_scale, theme);

        // Explicit zero reference only when negative bars exist
        if domain.0 < 0.0 {
            let zero_px = y_scale.scale(0.0);
            svg.line(
                "zero-line",
                (0.0, zero_px),
                (geom.chart_width, zero_px),
                theme.zero_line,
                2.0,
            );
        }

        svg.close_group();
        Ok(RenderedGraphic {
            svg: svg.finish(),
            width: geom.outer_width(),
            height: geom.outer_height(),
        })
    }

    fn draw_x_axis(
        &self,
        svg: &mut SvgWriter,
        x_scale: &BandScale,
        geom: &ChartGeometry,
        theme: &Theme,
    ) {
        svg.open_group_translated("x axis", 0.0, geom.chart_height);
        svg.line(
            "domain",
            (0.0, 0.0),
            (geom.chart_width, 0.0),
            theme.axis_line,
            1.0,
        );

        for (i, tick) in axis::x_ticks(x_scale).iter().enumerate() {
            let class = if x_scale.labels()[i] == "0" { "tick zero" } else { "tick" };
            svg.open_group(class);
            svg.line("", (tick.position, 0.0), (tick.position, TICK_SIZE), theme.axis_line, 1.0);
            if !tick.label.is_empty() {
                svg.text(
                    "",
                    tick.position,
                    TICK_SIZE + 3.0,
                    "middle",
                    ".71em",
                    theme.axis_label,
                    &tick.label,
                );
            }
            svg.close_group();
        }

        // Manual lead-in tick outside the automatic set
        if let Some(tick) = axis::lead_in_tick(x_scale) {
            svg.open_group("tick lead-in");
            svg.line("", (tick.position, 0.0), (tick.position, TICK_SIZE), theme.axis_line, 1.0);
            svg.text(
                "",
                tick.position,
                TICK_SIZE + 3.0,
                "middle",
                ".71em",
                theme.axis_label,
                &tick.label,
            );
            svg.close_group();
        }
        svg.close_group();
    }

    fn draw_y_axis(&self, svg: &mut SvgWriter, y_scale: &LinearScale, theme: &Theme) {
        svg.open_group("y axis");
        for tick in axis::y_ticks(y_scale, TICKS_Y) {
            svg.open_group("tick");
            svg.line("", (-TICK_SIZE, tick.position), (0.0, tick.position), theme.axis_line, 1.0);
            svg.text(
                "",
                -(TICK_SIZE + 3.0),
                tick.position,
                "end",
                ".32em",
                theme.axis_label,
                &tick.label,
            );
            svg.close_group();
        }
        svg.close_group();
    }

    /// Horizontal gridlines at every value tick, labels suppressed, plus the
    /// bolder marker tying the "0" category to the value-zero gridline.
    fn draw_grid(
        &self,
        svg: &mut SvgWriter,
        x_scale: &BandScale,
        y_scale: &LinearScale,
        geom: &ChartGeometry,
        theme: &Theme,
    ) {
        svg.open_group("y grid");
        for tick in axis::y_ticks(y_scale, TICKS_Y) {
            svg.line(
                "",
                (0.0, tick.position),
                (geom.chart_width, tick.position),
                theme.grid,
                1.0,
            );
        }
        if let Some(band) = x_scale.band("0") {
            svg.line(
                "zero",
                (band.center(), -TICK_SIZE),
                (band.center(), geom.chart_height + TICK_SIZE),
                theme.axis_line,
                2.0,
            );
        }
        svg.close_group();
    }

    /// One rect per record, always anchored at the zero line: positive
    /// counts grow upward from it, negative counts downward.
    fn draw_bars(
        &self,
        svg: &mut SvgWriter,
        x_scale: &BandScale,
        y_scale: &LinearScale,
        theme: &Theme,
    ) {
        let zero_px = y_scale.scale(0.0);
        svg.open_group("bars");
        for record in self.dataset.records() {
            let Some(band) = x_scale.band(&record.label) else {
                continue;
            };
            let value_px = y_scale.scale(record.count);
            let (y, height) = if record.count < 0.0 {
                (zero_px, value_px - zero_px)
            } else {
                (value_px, zero_px - value_px)
            };
            svg.rect(
                &format!("bar bar-{}", record.label),
                band.x,
                y,
                band.width,
                height.max(0.0),
                theme.bar,
            );
        }
        svg.close_group();
    }
}
