use vitrine_core::SiteConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

const SITE_JSON: &str = include_str!("../site.json");

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Viewport size in CSS pixels and the device pixel ratio.
pub fn viewport(window: &Window) -> (f64, f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h, window.device_pixel_ratio())
}

/// Look up an element by id and cast it, logging when it is absent.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    match document.get_element_by_id(id) {
        Some(el) => match el.dyn_into::<T>() {
            Ok(t) => Some(t),
            Err(_) => {
                log(&format!("#{id} has an unexpected element type"));
                None
            }
        },
        None => {
            log(&format!("#{id} not found"));
            None
        }
    }
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

/// Embedded defaults, overlaid with `window.__SITE_CONFIG` when the host page
/// sets it (either a JSON string or a plain object).
pub fn load_site_config(window: &Window) -> SiteConfig {
    let base = match SiteConfig::from_json(SITE_JSON) {
        Ok(cfg) => cfg,
        Err(e) => {
            log(&format!("Embedded site.json rejected, using defaults: {e}"));
            SiteConfig::default()
        }
    };
    let Some(overrides) = host_overrides(window) else {
        return base;
    };
    match base.merged_with(&overrides) {
        Ok(cfg) => cfg,
        Err(e) => {
            log(&format!("Ignoring window.__SITE_CONFIG: {e}"));
            base
        }
    }
}

fn host_overrides(window: &Window) -> Option<String> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str("__SITE_CONFIG")).ok()?;
    if v.is_undefined() || v.is_null() {
        return None;
    }
    if let Some(s) = v.as_string() {
        return Some(s);
    }
    js_sys::JSON::stringify(&v).ok()?.as_string()
}
