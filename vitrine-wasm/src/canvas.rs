use std::f64::consts::TAU;

use vitrine_core::{RadialGlow, Surface};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// Non-deprecated helpers to set canvas styles via property assignment.
fn set_style(ctx: &CanvasRenderingContext2d, prop: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str(prop), value);
}

pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    set_style(ctx, "fillStyle", &JsValue::from_str(color));
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    set_style(ctx, "strokeStyle", &JsValue::from_str(color));
}

/// Draws the particle field into a 2D canvas context.
pub struct CanvasSurface<'a> {
    pub ctx: &'a CanvasRenderingContext2d,
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_glow(&mut self, glow: &RadialGlow, width: f64, height: f64) {
        let grad = match self
            .ctx
            .create_radial_gradient(glow.cx, glow.cy, 0.0, glow.cx, glow.cy, glow.radius)
        {
            Ok(g) => g,
            Err(_) => return,
        };
        let _ = grad.add_color_stop(0.0, glow.inner);
        let _ = grad.add_color_stop(1.0, glow.outer);
        set_style(self.ctx, "fillStyle", grad.as_ref());
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, r, 0.0, TAU);
        set_fill_style(self.ctx, color);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
        set_stroke_style(self.ctx, color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}
