// File: crates/graphic-core/src/lib.rs
// Summary: Core library entry point; exports the data, layout, scale, and rendering API.

pub mod chart;
pub mod data;
pub mod error;
pub mod axis;
pub mod layout;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod types;
pub mod runtime;

pub use chart::{Chart, RenderOptions, RenderedGraphic};
pub use data::{Dataset, Record};
pub use error::GraphicError;
pub use layout::{ChartGeometry, LayoutConfig};
pub use runtime::{FrameNotifier, NullNotifier, ResizeCoordinator, Throttle};
pub use scale::{Band, BandScale, LinearScale};
pub use theme::Theme;
pub use types::{Margins, DEFAULT_WIDTH, MOBILE_BREAKPOINT};
