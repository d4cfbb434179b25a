//! Default app configuration discovered from the runtime environment.

use std::env;

use serde_json::Value;

use crate::app::FirebaseOptions;

/// Returns the parsed `__FIREBASE_DEFAULTS__` object when available.
fn firebase_defaults() -> Option<Value> {
    defaults_from_env().or_else(defaults_from_global)
}

fn defaults_from_env() -> Option<Value> {
    let raw = env::var("__FIREBASE_DEFAULTS__").ok()?;
    serde_json::from_str::<Value>(&raw).ok()
}

#[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
fn defaults_from_global() -> Option<Value> {
    use wasm_bindgen::JsValue;

    let global = js_sys::global();
    let value = js_sys::Reflect::get(&global, &JsValue::from_str("__FIREBASE_DEFAULTS__")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let serialized = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    serde_json::from_str(&serialized).ok()
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm-web")))]
fn defaults_from_global() -> Option<Value> {
    None
}

fn options_from_value(value: Value) -> Option<FirebaseOptions> {
    if !value.is_object() {
        return None;
    }
    match serde_json::from_value::<FirebaseOptions>(value) {
        Ok(options) => Some(options),
        Err(err) => {
            log::warn!("ignoring malformed default Firebase config: {err}");
            None
        }
    }
}

/// Default options from `__FIREBASE_DEFAULTS__.config` or the `FIREBASE_CONFIG`
/// environment variable (a JSON object).
pub fn default_app_config() -> Option<FirebaseOptions> {
    if let Some(config) = firebase_defaults().and_then(|defaults| defaults.get("config").cloned()) {
        if let Some(options) = options_from_value(config) {
            return Some(options);
        }
    }

    let raw = env::var("FIREBASE_CONFIG").ok()?;
    let value = serde_json::from_str::<Value>(&raw).ok()?;
    options_from_value(value)
}
