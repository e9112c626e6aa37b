use std::cell::RefCell;
use std::rc::Rc;

use common::{
    ACTIVE_CLASS, Bootstrap, ChartPage, DATA_ISLAND_ID, PATTERN_ITEM_CLASS, PageVariant,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::settings;
use crate::surface::DomSurface;

type SharedPage = Rc<RefCell<ChartPage<DomSurface>>>;

/// Page-ready entry point: renders the chart and wires its controls.
pub fn init() -> Result<(), JsValue> {
    let document = dom::document()?;

    let Some(variant) = PageVariant::detect(|id| dom::has_element(&document, id)) else {
        log::debug!("No chart container on this page");
        return Ok(());
    };
    log::info!("Initializing {} chart", variant.name);

    let container = document
        .get_element_by_id(variant.container_id)
        .ok_or_else(|| JsValue::from_str("chart container disappeared"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("chart container is not an HTML element"))?;

    let mut page = ChartPage::new(variant, DomSurface::new(container), dom::css_variable);
    let data = dom::data_island_text(&document, DATA_ISLAND_ID);

    let rendered = match page.bootstrap(data.as_deref()) {
        Bootstrap::Rendered => true,
        Bootstrap::NoData => false,
        Bootstrap::Failed(err) => {
            log::debug!("Chart unavailable, wiring pattern items only: {}", err);
            false
        }
    };

    let page = Rc::new(RefCell::new(page));
    wire_pattern_items(&document, &page)?;
    if rendered && page.borrow().variant().resize.is_some() {
        wire_resize(&page)?;
    }
    Ok(())
}

fn wire_pattern_items(document: &Document, page: &SharedPage) -> Result<(), JsValue> {
    let selector = format!(".{PATTERN_ITEM_CLASS}");
    let items = dom::query_all(document, &selector)?;
    log::debug!("Wiring {} pattern items", items.len());

    for item in items {
        let page = page.clone();
        let selector = selector.clone();
        let clicked = item.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = on_pattern_click(&selector, &clicked, &page) {
                log::error!("Pattern click failed: {:?}", err);
            }
        });
        item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn on_pattern_click(selector: &str, clicked: &Element, page: &SharedPage) -> Result<(), JsValue> {
    let document = dom::document()?;
    for item in dom::query_all(&document, selector)? {
        item.class_list().remove_1(ACTIVE_CLASS)?;
    }
    clicked.class_list().add_1(ACTIVE_CLASS)?;

    let label = clicked.get_attribute("data-pattern").unwrap_or_default();
    match page.borrow_mut().select_pattern(&label) {
        Some(range) => log::debug!("Highlighting {} for '{}'", range.name, label),
        None => log::debug!("Cleared highlight for '{}'", label),
    }
    Ok(())
}

fn apply_size(page: &SharedPage) {
    let mut page = page.borrow_mut();
    let width = page.surface().width();
    if let Some(height) = page.resize(width) {
        log::trace!("Chart resized to {}x{}", width, height);
    }
}

fn wire_resize(page: &SharedPage) -> Result<(), JsValue> {
    apply_size(page);

    let debounce_ms = settings::get_settings().resize_debounce_ms;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let page = page.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let page = page.clone();
        // Replacing the handle drops, and so cancels, the previous timer.
        *pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || apply_size(&page)));
    });
    dom::window()?.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
