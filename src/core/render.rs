use super::config::FieldConfig;
use super::field::ParticleField;
use crate::constants::{FIELD_RGB, NODE_ALPHA};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[inline]
    pub const fn new(rgb: [u8; 3], a: f64) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(147, 197, 253, 0.5)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const NODE_COLOR: Rgba = Rgba::new(FIELD_RGB, NODE_ALPHA);

/// Write-only 2D drawing target.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);
    /// Fill the `width x height` area with a radial gradient from `inner` at
    /// `center` to `outer` at `radius`.
    fn fill_radial_glow(
        &mut self,
        center: DVec2,
        radius: f64,
        inner: Rgba,
        outer: Rgba,
        width: f64,
        height: f64,
    );
}

/// Line opacity for two particles `dist` apart: linear from `max_opacity`
/// at 0 down to 0 at `max_distance`. `None` means no line.
#[inline]
pub fn connection_opacity(dist: f64, max_distance: f64, max_opacity: f64) -> Option<f64> {
    (dist < max_distance).then(|| (1.0 - dist / max_distance) * max_opacity)
}

/// Draw particles, their connections and the pointer glow. Does not clear.
pub fn draw_field<S: Surface + ?Sized>(
    surface: &mut S,
    field: &ParticleField,
    pointer: DVec2,
    config: &FieldConfig,
) {
    for p in field.particles() {
        surface.fill_circle(p.position, p.radius, NODE_COLOR);
    }

    // O(n^2) over a small fixed population
    let particles = field.particles();
    for (i, j, dist) in field.connections(config.connection_distance) {
        if let Some(opacity) =
            connection_opacity(dist, config.connection_distance, config.line_opacity_max)
        {
            surface.stroke_line(
                particles[i].position,
                particles[j].position,
                config.line_width,
                NODE_COLOR.with_alpha(opacity),
            );
        }
    }

    let (w, h) = field.size();
    surface.fill_radial_glow(
        pointer,
        config.glow_radius,
        NODE_COLOR.with_alpha(config.glow_alpha),
        NODE_COLOR.with_alpha(0.0),
        w,
        h,
    );
}
