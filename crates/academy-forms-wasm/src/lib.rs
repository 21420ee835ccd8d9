//! Academy Forms WASM
//!
//! Client-side blur validation for the index number and phone fields.
//! Loading the module binds every `input[name="index_number"]` and
//! `input[name="phone"]` on the page; a field that fails its format check
//! on blur gets the `is-invalid` class, and loses it once corrected.

use academy_forms_validation::{self as core, ValidatorConfig};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod dom;

/// Set panic hook and bind the default fields once the DOM is ready
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "autostart")]
    dom::on_dom_ready(&document()?, ValidatorConfig::default())?;

    Ok(())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Bind blur validation on the current document
///
/// Intended for builds without the `autostart` feature, or for inputs added
/// after load. Inputs bound by an earlier pass are skipped, so only the
/// first config to reach an input applies. Returns the number newly bound.
///
/// # Example (JavaScript)
/// ```javascript
/// const bound = bindFieldValidation({ markerClass: 'has-error' });
/// ```
#[wasm_bindgen(js_name = bindFieldValidation)]
pub fn bind_field_validation(config: JsValue) -> Result<u32, JsValue> {
    let config: ValidatorConfig = if config.is_undefined() || config.is_null() {
        ValidatorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };

    dom::bind_all(&document()?, &config)
}

/// Quick index number check
#[wasm_bindgen(js_name = validateIndexNumber)]
pub fn validate_index_number_js(value: &str) -> bool {
    core::is_valid_index_number(value)
}

/// Quick phone check
#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone_js(value: &str) -> bool {
    core::is_valid_phone(value)
}

/// `07XXXXXXXX` / `01XXXXXXXX` to `254` form
#[wasm_bindgen(js_name = normalizePhone)]
pub fn normalize_phone_js(value: &str) -> Option<String> {
    core::normalize_local_phone(value)
}
