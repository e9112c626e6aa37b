use common::{date_query, period_query};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::dom;

const PERIOD_SELECT_ID: &str = "periodSelect";
const DATE_SELECT_ID: &str = "dateSelect";

fn navigate(query: &str) -> Result<(), JsValue> {
    log::debug!("Navigating to {}", query);
    dom::window()?.location().set_href(query)
}

fn selected_period() -> Result<String, JsValue> {
    let document = dom::document()?;
    dom::select_value(&document, PERIOD_SELECT_ID)
        .ok_or_else(|| JsValue::from_str("periodSelect not found"))
}

/// Reloads the page for the period picked in `periodSelect`.
#[wasm_bindgen(js_name = changePeriodDays)]
pub fn change_period_days() -> Result<(), JsValue> {
    let period = selected_period()?;
    navigate(&period_query(&period))
}

/// Reloads the page for the period and date picked in the dropdowns.
#[wasm_bindgen(js_name = changeDate)]
pub fn change_date() -> Result<(), JsValue> {
    let period = selected_period()?;
    let document = dom::document()?;
    let date = dom::select_value(&document, DATE_SELECT_ID);
    navigate(&date_query(&period, date.as_deref()))
}

fn install(name: &str, handler: fn() -> Result<(), JsValue>) -> Result<(), JsValue> {
    let label = name.to_string();
    let closure = Closure::<dyn Fn()>::new(move || {
        if let Err(err) = handler() {
            log::warn!("{} failed: {:?}", label, err);
        }
    });
    js_sys::Reflect::set(&JsValue::from(dom::window()?), &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Exposes the dropdown handlers on `window` for the template's inline
/// `onchange` attributes.
pub fn install_globals() -> Result<(), JsValue> {
    install("changePeriodDays", change_period_days)?;
    install("changeDate", change_date)
}
