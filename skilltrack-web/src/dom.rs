use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Location, Window};

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error outside of a browser context where `window` is unavailable.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("`window` unavailable"))
}

fn location() -> Result<Location, JsValue> {
    Ok(window()?.location())
}

/// Current `location.hash`, including its leading `#` when present.
///
/// # Errors
/// Returns an error if the browser location cannot be read.
pub fn location_hash() -> Result<String, JsValue> {
    location()?.hash()
}

/// Point the address bar at `#fragment` without adding a history entry.
///
/// # Errors
/// Returns an error if the browser refuses the navigation.
pub fn replace_hash(fragment: &str) -> Result<(), JsValue> {
    location()?.replace(&format!("#{fragment}"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
