use serde_json::{Value, json};

use crate::error::ChartError;
use crate::patterns::{PatternRange, resolve_pattern};
use crate::payload::ChartPayload;
use crate::shapes::{HighlightShape, highlight_shapes, threshold_shapes};
use crate::variant::PageVariant;

/// Placeholder shown when the page was rendered without chart data.
pub const NO_DATA_HTML: &str = r#"<div style="padding: 40px; text-align: center; color: #666;">No AGP graph data available for this period.</div>"#;

/// Inline error shown in place of the chart.
pub fn error_html(message: &str) -> String {
    format!(
        r#"<div class="error-text"><strong>Error rendering graph:</strong><br>{}</div>"#,
        escape_html(message)
    )
}

fn escape_html(text: &str) -> String {
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

/// The chart container as seen by the controller.
///
/// The wasm frontend implements this over `web-sys` and the Plotly bindings;
/// tests implement it with a recorder.
pub trait PlotSurface {
    /// `Plotly.newPlot(container, data, layout, config)`.
    fn new_plot(&mut self, data: &Value, layout: &Value, config: &Value) -> Result<(), ChartError>;

    /// `Plotly.relayout(container, update)`.
    fn relayout(&mut self, update: &Value) -> Result<(), ChartError>;

    /// Replaces the container's markup.
    fn replace_contents(&mut self, html: &str);

    /// Sets the container's CSS height in pixels.
    fn set_height(&mut self, height: u32);
}

/// Result of the page-ready pass.
#[derive(Debug)]
pub enum Bootstrap {
    Rendered,
    NoData,
    Failed(ChartError),
}

/// Chart state for one page: the rendered variant, the permanent threshold
/// lines and the currently highlighted range.
///
/// Every shape update sends the complete shape list, since `relayout`
/// replaces `layout.shapes` wholesale. Nothing is sent until a plot exists.
pub struct ChartPage<S> {
    variant: PageVariant,
    surface: S,
    thresholds: Vec<HighlightShape>,
    active: Option<&'static PatternRange>,
    rendered: bool,
}

impl<S: PlotSurface> ChartPage<S> {
    /// `css_lookup` reads a CSS custom property; it is only consulted for
    /// variants with threshold lines.
    pub fn new(
        variant: PageVariant,
        surface: S,
        css_lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let thresholds = variant
            .thresholds
            .as_ref()
            .map(|lines| threshold_shapes(lines, css_lookup))
            .unwrap_or_default();

        Self {
            variant,
            surface,
            thresholds,
            active: None,
            rendered: false,
        }
    }

    pub fn variant(&self) -> &PageVariant {
        &self.variant
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Renders the payload from the data island, or the placeholder when the
    /// page has none. Parse and render failures end up in the container.
    pub fn bootstrap(&mut self, data_island: Option<&str>) -> Bootstrap {
        let Some(text) = data_island else {
            tracing::warn!(
                container = self.variant.container_id,
                "No chart data on page"
            );
            self.surface.replace_contents(NO_DATA_HTML);
            return Bootstrap::NoData;
        };

        match self.render(text) {
            Ok(()) => {
                self.rendered = true;
                tracing::info!(variant = self.variant.name, "Chart rendered");
                Bootstrap::Rendered
            }
            Err(err) => {
                tracing::error!("Error rendering Plotly graph: {}", err);
                self.surface.replace_contents(&error_html(&err.to_string()));
                Bootstrap::Failed(err)
            }
        }
    }

    fn render(&mut self, text: &str) -> Result<(), ChartError> {
        let payload = ChartPayload::parse(text)?;
        let config = payload.render_config(self.variant.merge_config);
        let ChartPayload { data, layout, .. } = payload;

        self.surface.new_plot(
            &Value::Array(data),
            &Value::Object(layout),
            &Value::Object(config),
        )
    }

    /// Handles a click on a pattern item labelled `label`: highlights its
    /// range, or clears the highlight when no range matches.
    pub fn select_pattern(&mut self, label: &str) -> Option<&'static PatternRange> {
        let range = resolve_pattern(label);
        let result = match range {
            Some(range) => self.highlight(range),
            None => self.reset_highlight(),
        };
        if let Err(err) = result {
            tracing::error!("Failed to update highlight: {}", err);
        }
        range
    }

    pub fn highlight(&mut self, range: &'static PatternRange) -> Result<(), ChartError> {
        self.active = Some(range);
        self.push_shapes()
    }

    /// Back to the threshold-only (or empty) shape set.
    pub fn reset_highlight(&mut self) -> Result<(), ChartError> {
        self.active = None;
        self.push_shapes()
    }

    /// Complete shape set for the current state: thresholds first, then the
    /// highlight rectangles.
    pub fn shapes(&self) -> Vec<HighlightShape> {
        let mut shapes = self.thresholds.clone();
        if let Some(range) = self.active {
            shapes.extend(highlight_shapes(&self.variant, range));
        }
        shapes
    }

    fn push_shapes(&mut self) -> Result<(), ChartError> {
        if !self.rendered {
            tracing::debug!("No plot to update, keeping selection only");
            return Ok(());
        }
        let update = json!({ "shapes": self.shapes() });
        self.surface.relayout(&update)
    }

    /// Fits the chart to a container `width` pixels wide. Returns the new
    /// height, or `None` when the variant does not resize.
    pub fn resize(&mut self, width: f64) -> Option<u32> {
        let policy = self.variant.resize?;
        if !self.rendered {
            return None;
        }
        let height = policy.height_for(width);
        tracing::debug!(width, height, "Resizing chart");

        self.surface.set_height(height);
        let update = json!({
            "width": width.max(0.0).round(),
            "height": height,
            "shapes": self.shapes(),
        });
        if let Err(err) = self.surface.relayout(&update) {
            tracing::error!("Failed to resize chart: {}", err);
        }
        Some(height)
    }
}
