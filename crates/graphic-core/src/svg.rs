// File: crates/graphic-core/src/svg.rs
// Summary: Minimal SVG markup writer over fmt::Write.

use std::fmt::Write;

/// Format a pixel measure: two decimals, trailing zeros trimmed.
pub(crate) fn px(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{class}""#)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates a standalone SVG document. Writing into a String cannot
/// fail, so helpers discard the fmt results.
pub struct SvgWriter {
    out: String,
    open_groups: usize,
}

impl SvgWriter {
    pub fn new(width: f64, height: f64, background: &str) -> Self {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" style="background-color:{}">"#,
            px(width),
            px(height),
            px(width),
            px(height),
            background
        );
        Self { out, open_groups: 0 }
    }

    pub fn open_group(&mut self, class: &str) {
        let _ = writeln!(self.out, r#"<g class="{class}">"#);
        self.open_groups += 1;
    }

    pub fn open_group_translated(&mut self, class: &str, dx: f64, dy: f64) {
        let _ = writeln!(
            self.out,
            r#"<g class="{class}" transform="translate({},{})">"#,
            px(dx),
            px(dy)
        );
        self.open_groups += 1;
    }

    pub fn close_group(&mut self) {
        if self.open_groups > 0 {
            self.out.push_str("</g>\n");
            self.open_groups -= 1;
        }
    }

    pub fn line(
        &mut self,
        class: &str,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        stroke_width: f64,
    ) {
        let _ = writeln!(
            self.out,
            r#"<line{} x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            class_attr(class),
            px(from.0),
            px(from.1),
            px(to.0),
            px(to.1),
            stroke,
            px(stroke_width)
        );
    }

    pub fn rect(&mut self, class: &str, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        let _ = writeln!(
            self.out,
            r#"<rect class="{class}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            px(x),
            px(y),
            px(width),
            px(height),
            fill
        );
    }

    pub fn text(
        &mut self,
        class: &str,
        x: f64,
        y: f64,
        anchor: &str,
        dy: &str,
        fill: &str,
        content: &str,
    ) {
        let _ = writeln!(
            self.out,
            r#"<text{} x="{}" y="{}" dy="{}" text-anchor="{}" fill="{}">{}</text>"#,
            class_attr(class),
            px(x),
            px(y),
            dy,
            anchor,
            fill,
            escape(content)
        );
    }

    /// Close any open groups and the document.
    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.close_group();
        }
        self.out.push_str("</svg>\n");
        self.out
    }
}
