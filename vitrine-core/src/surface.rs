/// Two-stop radial gradient painted behind the particles.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGlow {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub inner: &'static str,
    pub outer: &'static str,
}

/// The subset of a 2D drawing context the particle field needs.
///
/// Colors are CSS color strings. Coordinates are backing-buffer pixels.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_glow(&mut self, glow: &RadialGlow, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: &str);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

/// Draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Glow(RadialGlow),
    Circle { x: f64, y: f64, r: f64, color: String },
    Line { from: (f64, f64), to: (f64, f64), width: f64, color: String },
}

/// Surface that keeps every call in order instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count()
    }

    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_glow(&mut self, glow: &RadialGlow, _width: f64, _height: f64) {
        self.ops.push(DrawOp::Glow(glow.clone()));
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: &str) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            r,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color: color.to_string(),
        });
    }
}
