//! Small `web-sys` helpers for the elements the server template provides.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlSelectElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn has_element(document: &Document, id: &str) -> bool {
    document.get_element_by_id(id).is_some()
}

/// Text of the JSON data island, if the page has one.
pub fn data_island_text(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .map(|node| node.text_content().unwrap_or_default())
}

/// Current value of a `<select>`, if present.
pub fn select_value(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Reads a CSS custom property declared on the root element.
pub fn css_variable(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    style.get_property_value(name).ok()
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
