//! Drifting particle background.
//!
//! The field owns its particles for the lifetime of the page. Resizing the
//! viewport only changes the backing-buffer bounds; particles left outside a
//! shrunk buffer keep bouncing until they drift back in.

use crate::config::ParticleConfig;
use crate::random::RandomSource;
use crate::surface::{RadialGlow, Surface};

const GLOW_INNER: &str = "rgba(34,211,238,0.10)";
const GLOW_OUTER: &str = "rgba(124,58,237,0.04)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
    pub hue: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, cfg: &ParticleConfig, rng: &mut impl RandomSource) -> Self {
        let speed = cfg.min_speed + rng.next_f64() * cfg.speed_range;
        Particle {
            x: rng.next_f64() * width,
            y: rng.next_f64() * height,
            vx: (rng.next_f64() - 0.5) * speed,
            vy: (rng.next_f64() - 0.5) * speed,
            r: cfg.min_radius + rng.next_f64() * cfg.radius_range,
            hue: cfg.hue_base + rng.next_f64() * cfg.hue_range,
        }
    }

    /// Move by one frame of velocity, flipping each axis that left `[0, bound]`.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    pub fn color(&self) -> String {
        format!("hsla({}, 90%, 60%, 0.8)", self.hue)
    }
}

/// Line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub a: usize,
    pub b: usize,
    /// `1 - distance / threshold`, in `(0, 1]`.
    pub strength: f64,
}

/// Number of particles for a viewport of `css_w` x `css_h` CSS pixels.
pub fn particle_count(css_w: f64, css_h: f64, cfg: &ParticleConfig) -> usize {
    let area = css_w * css_h;
    if !area.is_finite() || area <= 0.0 {
        return 0;
    }
    let by_area = (area / cfg.area_per_particle).floor() as usize;
    by_area.min(cfg.max_count)
}

/// Backing-buffer size for a viewport. `dpr` below 1 is treated as 1.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = effective_dpr(dpr);
    (
        (css_w.max(0.0) * dpr).floor() as u32,
        (css_h.max(0.0) * dpr).floor() as u32,
    )
}

fn effective_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() { dpr.max(1.0) } else { 1.0 }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    dpr: f64,
    cfg: ParticleConfig,
}

impl ParticleField {
    pub fn new(
        css_w: f64,
        css_h: f64,
        dpr: f64,
        cfg: ParticleConfig,
        rng: &mut impl RandomSource,
    ) -> Self {
        let dpr = effective_dpr(dpr);
        let (w, h) = backing_size(css_w, css_h, dpr);
        let (width, height) = (w as f64, h as f64);
        let count = particle_count(css_w, css_h, &cfg);
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, &cfg, rng))
            .collect();
        ParticleField {
            particles,
            width,
            height,
            dpr,
            cfg,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_particles(
        particles: Vec<Particle>,
        width: f64,
        height: f64,
        dpr: f64,
        cfg: ParticleConfig,
    ) -> Self {
        ParticleField {
            particles,
            width,
            height,
            dpr: effective_dpr(dpr),
            cfg,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Adopt a new viewport size. The pixel ratio fixed at construction is
    /// kept, and particle count and positions are untouched.
    pub fn resize(&mut self, css_w: f64, css_h: f64) -> (u32, u32) {
        let (w, h) = backing_size(css_w, css_h, self.dpr);
        self.width = w as f64;
        self.height = h as f64;
        (w, h)
    }

    pub fn link_threshold(&self) -> f64 {
        self.cfg.link_distance * self.dpr
    }

    pub fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// Every unordered pair closer than the link threshold.
    pub fn connectors(&self) -> impl Iterator<Item = Connector> + '_ {
        let threshold = self.link_threshold();
        let limit = threshold * threshold;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len()).filter_map(move |j| {
                let dx = ps[i].x - ps[j].x;
                let dy = ps[i].y - ps[j].y;
                let dist2 = dx * dx + dy * dy;
                (dist2 < limit).then(|| Connector {
                    a: i,
                    b: j,
                    strength: 1.0 - dist2.sqrt() / threshold,
                })
            })
        })
    }

    pub fn connector_alpha(&self, c: &Connector) -> f64 {
        c.strength * self.cfg.link_alpha
    }

    pub fn glow(&self) -> RadialGlow {
        RadialGlow {
            cx: self.width * 0.7,
            cy: self.height * 0.2,
            radius: self.width.max(self.height) * 0.8,
            inner: GLOW_INNER,
            outer: GLOW_OUTER,
        }
    }

    /// Paint the current state without moving anything.
    pub fn render(&self, surface: &mut impl Surface) {
        let (w, h) = (self.width, self.height);
        surface.clear(w, h);
        surface.fill_glow(&self.glow(), w, h);
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.r * self.dpr, &p.color());
        }
        for c in self.connectors() {
            let (a, b) = (&self.particles[c.a], &self.particles[c.b]);
            let color = format!("rgba(124,58,237,{})", self.connector_alpha(&c));
            surface.stroke_line((a.x, a.y), (b.x, b.y), self.dpr * c.strength, &color);
        }
    }

    /// One animation frame: move, then draw.
    pub fn step(&mut self, surface: &mut impl Surface) {
        self.advance();
        self.render(surface);
    }
}
