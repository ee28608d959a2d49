use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod background;
mod canvas;
mod constants;
mod state;
mod upload;
mod utils;

use utils::{load_site_config, log};

fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let cfg = load_site_config(window);
    background::start_particles(window, document, cfg.particles)?;
    match upload::start_upload(window, document, cfg.upload)? {
        Some(widget) => log(&format!(
            "upload widget ready, sending to {}",
            widget.borrow().selector.config().whatsapp_number
        )),
        None => log("no upload area on this page"),
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    if document.ready_state() != "loading" {
        return init(&window, &document);
    }
    // Module loaded from <head>: wait for the body and widget markup.
    let doc = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = init(&window, &doc) {
            log(&format!("startup failed: {e:?}"));
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}
