use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    pub fn new_plot(
        div_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    pub fn relayout(div_id: &str, update: JsValue) -> Result<JsValue, JsValue>;
}
