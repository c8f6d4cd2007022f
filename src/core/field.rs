use super::config::FieldConfig;
use glam::DVec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Rest position drawn at creation; nothing pulls particles back to it.
    pub base: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

impl Particle {
    /// Drift by one frame, bouncing off the `[0, width] x [0, height]` box.
    ///
    /// Each axis is handled on its own and the position is not clamped, so a
    /// particle may sit just outside the box for a frame before coming back.
    #[inline]
    pub fn advance(&mut self, width: f64, height: f64) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Nudge towards `target`; the pull fades linearly to zero at `radius`.
    #[inline]
    pub fn attract(&mut self, target: DVec2, radius: f64, strength: f64) {
        let delta = target - self.position;
        let dist = delta.length();
        if dist < radius {
            let force = (1.0 - dist / radius) * strength;
            self.position += delta * force;
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: &FieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(config.node_count),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate(config);
        field
    }

    /// Replace the whole population for a new surface size.
    pub fn resize(&mut self, config: &FieldConfig, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate(config);
    }

    fn populate(&mut self, config: &FieldConfig) {
        let (w, h) = (self.width.max(0.0), self.height.max(0.0));
        let rng = &mut self.rng;
        // gen_range panics on an empty range; scaled unit samples handle 0x0
        let mut unit = move || rng.gen::<f64>();
        self.particles.clear();
        for _ in 0..config.node_count {
            let position = DVec2::new(unit() * w, unit() * h);
            let base = DVec2::new(unit() * w, unit() * h);
            let velocity = DVec2::new(
                (unit() - 0.5) * 2.0 * config.drift_speed,
                (unit() - 0.5) * 2.0 * config.drift_speed,
            );
            let radius = config.radius_min + unit() * (config.radius_max - config.radius_min);
            self.particles.push(Particle {
                position,
                base,
                velocity,
                radius,
            });
        }
    }

    /// Advance every particle one frame and apply the pointer pull.
    pub fn step(&mut self, config: &FieldConfig, pointer: DVec2) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
            p.attract(pointer, config.attraction_radius, config.attraction_strength);
        }
    }

    /// Every unordered pair closer than `max_distance`, with that distance.
    pub fn connections(&self, max_distance: f64) -> Vec<(usize, usize, f64)> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dist = a.position.distance(b.position);
                if dist < max_distance {
                    out.push((i, j, dist));
                }
            }
        }
        out
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
