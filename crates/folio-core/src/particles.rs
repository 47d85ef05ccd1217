use crate::config::FieldConfig;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Move by one velocity step and reflect the velocity on any axis that
    /// left `[0, bounds]`. The position itself is never clamped, so a particle
    /// may sit up to one step outside the bounds for a frame.
    #[inline]
    pub fn advance(&mut self, bounds: Vec2) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Opacity of the link between `from` and `to`, or `None` when they are at
/// least `threshold` apart. Falls linearly from 1 at distance 0 to 0 at the
/// threshold.
#[inline]
pub fn link_opacity(from: Vec2, to: Vec2, threshold: f32) -> Option<f32> {
    let dist = from.distance(to);
    (dist < threshold).then(|| 1.0 - dist / threshold)
}

/// Drifting dots on a viewport-sized surface, linked to the pointer when close.
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Vec2,
}

impl ParticleField {
    /// Seed `config.count` particles uniformly inside `bounds`.
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, bounds: Vec2, rng: &mut R) -> Self {
        let span = (config.radius_max - config.radius_min).max(0.0);
        let particles = (0..config.count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                velocity: Vec2::new(
                    symmetric(rng, config.max_speed),
                    symmetric(rng, config.max_speed),
                ),
                radius: config.radius_min + rng.gen::<f32>() * span,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] seeded {} particles in {:.0}x{:.0}",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Self {
            config,
            particles,
            bounds,
            pointer: Vec2::ZERO,
        }
    }

    /// Build a field from explicit particles, mostly useful for tests and
    /// deterministic scenes.
    pub fn from_particles(config: FieldConfig, bounds: Vec2, particles: Vec<Particle>) -> Self {
        Self {
            config,
            particles,
            bounds,
            pointer: Vec2::ZERO,
        }
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Replace the collision bounds. Existing particles are left where they
    /// are, even when the new bounds no longer contain them.
    pub fn on_resize(&mut self, bounds: Vec2) {
        if bounds != self.bounds {
            log::debug!("[field] bounds {:.0}x{:.0}", bounds.x, bounds.y);
        }
        self.bounds = bounds;
    }

    /// Advance every particle one step and redraw the whole frame.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.bounds);
        let threshold = self.config.proximity_threshold;
        for p in &mut self.particles {
            p.advance(self.bounds);
            if let Some(opacity) = link_opacity(p.position, self.pointer, threshold) {
                surface.stroke_line(p.position, self.pointer, opacity);
            }
            surface.fill_circle(p.position, p.radius);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

// Uniform in [-max, max); max may be zero.
#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    (rng.gen::<f32>() * 2.0 - 1.0) * max
}
