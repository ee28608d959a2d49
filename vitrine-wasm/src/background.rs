use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::{ParticleConfig, ParticleField};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::constants::{BODY_PARTICLES_CLASS, PARTICLES_CANVAS_ID};
use crate::state::Background;
use crate::utils::{log, viewport};

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    let cv = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    cv.set_id(PARTICLES_CANVAS_ID);
    body.prepend_with_node_1(&cv)?;
    body.class_list().add_1(BODY_PARTICLES_CLASS)?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

/// Match the canvas backing store to the field's buffer and its CSS box to
/// the viewport.
fn sync_canvas_size(canvas: &HtmlCanvasElement, buffer: (u32, u32), css: (f64, f64)) {
    if canvas.width() != buffer.0 {
        canvas.set_width(buffer.0);
    }
    if canvas.height() != buffer.1 {
        canvas.set_height(buffer.1);
    }
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", css.0));
    let _ = style.set_property("height", &format!("{}px", css.1));
}

fn attach_resize(state: Rc<RefCell<Background>>) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let mut s = state.borrow_mut();
        let (w, h, _) = viewport(&s.window);
        let buffer = s.field.resize(w, h);
        sync_canvas_size(&s.canvas, buffer, (w, h));
    }));
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();
    Ok(())
}

fn start_animation(state: Rc<RefCell<Background>>) {
    type RafClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let window = state.borrow().window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let window = {
            let mut guard = state.borrow_mut();
            let s = &mut *guard;
            let mut surface = CanvasSurface { ctx: &s.ctx };
            s.field.step(&mut surface);
            s.window.clone()
        };
        if let Some(cb) = f.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Insert the background canvas and run the particle loop for the life of
/// the page.
pub fn start_particles(
    window: &Window,
    document: &Document,
    cfg: ParticleConfig,
) -> Result<(), JsValue> {
    let (canvas, ctx) = init_canvas(document)?;
    let (w, h, dpr) = viewport(window);
    let mut random = || js_sys::Math::random();
    let field = ParticleField::new(w, h, dpr, cfg, &mut random);
    let (bw, bh) = field.size();
    sync_canvas_size(&canvas, (bw as u32, bh as u32), (w, h));
    log(&format!(
        "particles: {} on a {}x{} buffer at dpr {}",
        field.particles().len(),
        bw,
        bh,
        field.dpr()
    ));

    let state = Rc::new(RefCell::new(Background {
        window: window.clone(),
        canvas,
        ctx,
        field,
    }));
    attach_resize(state.clone())?;
    start_animation(state);
    Ok(())
}
