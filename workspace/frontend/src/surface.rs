use common::{ChartError, PlotSurface};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::plotly;

/// The chart container on the live page.
pub struct DomSurface {
    container: HtmlElement,
    id: String,
}

impl DomSurface {
    pub fn new(container: HtmlElement) -> Self {
        let id = container.id();
        Self { container, id }
    }

    pub fn width(&self) -> f64 {
        f64::from(self.container.client_width())
    }
}

/// Plotly expects plain objects, not the `Map`s serde-wasm-bindgen emits by
/// default.
fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn describe(err: JsValue) -> String {
    js_sys::Error::from(err.clone())
        .message()
        .as_string()
        .filter(|message| !message.is_empty())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

impl PlotSurface for DomSurface {
    fn new_plot(&mut self, data: &Value, layout: &Value, config: &Value) -> Result<(), ChartError> {
        let convert = |v: &Value| to_js(v).map_err(|e| ChartError::Render(e.to_string()));
        plotly::new_plot(&self.id, convert(data)?, convert(layout)?, convert(config)?)
            .map_err(|e| ChartError::Render(describe(e)))?;
        Ok(())
    }

    fn relayout(&mut self, update: &Value) -> Result<(), ChartError> {
        let update = to_js(update).map_err(|e| ChartError::Relayout(e.to_string()))?;
        plotly::relayout(&self.id, update).map_err(|e| ChartError::Relayout(describe(e)))?;
        Ok(())
    }

    fn replace_contents(&mut self, html: &str) {
        self.container.set_inner_html(html);
    }

    fn set_height(&mut self, height: u32) {
        if let Err(err) = self
            .container
            .style()
            .set_property("height", &format!("{height}px"))
        {
            log::warn!("Failed to set chart height: {:?}", err);
        }
    }
}
