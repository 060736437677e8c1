// File: crates/graphic-core/src/theme.rs
// Summary: Light/dark color palettes for the rendered graphic.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub bar: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub zero_line: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            bar: "#3d7fa6",
            grid: "#d8d8d8",
            axis_line: "#b0b0b0",
            axis_label: "#454545",
            zero_line: "#555555",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            bar: "#5a9bd1",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            zero_line: "#c8c8d2",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in [Theme::light(), Theme::dark()] {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
