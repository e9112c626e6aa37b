//! Browser-independent core of the AGP chart page.
//!
//! Everything the page glue decides lives here: how the embedded payload is
//! parsed, which page variant is active, which time range a pattern label
//! maps to, which shapes go to `Plotly.relayout`, how tall the chart is after
//! a resize and which URL the period/date dropdowns navigate to. The wasm
//! frontend only reads the DOM and forwards calls through [`PlotSurface`].

mod controller;
mod error;
mod navigation;
mod patterns;
mod payload;
mod shapes;
mod variant;

pub use controller::{Bootstrap, ChartPage, PlotSurface, error_html, NO_DATA_HTML};
pub use error::ChartError;
pub use navigation::{date_query, period_query};
pub use patterns::{PATTERN_RANGES, PatternRange, resolve_pattern};
pub use payload::ChartPayload;
pub use shapes::{AxisRef, HighlightShape, ShapeKind, ShapeLayer, ShapeLine, highlight_shapes};
pub use variant::{
    OverlayStyle, PageVariant, ResizePolicy, ThresholdLine, ThresholdLines, WrapStyle,
};

/// Element id of the JSON data island rendered by the server template.
pub const DATA_ISLAND_ID: &str = "plotly-data";

/// Class carried by every clickable pattern entry.
pub const PATTERN_ITEM_CLASS: &str = "pattern-item";

/// Class toggled on the currently selected pattern entry.
pub const ACTIVE_CLASS: &str = "active";
