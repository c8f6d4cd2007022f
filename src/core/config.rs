use crate::constants::{
    ATTRACTION_RADIUS, ATTRACTION_STRENGTH, CONNECTION_DISTANCE, DRIFT_SPEED_MAX, GLOW_ALPHA,
    GLOW_RADIUS, LINE_OPACITY_MAX, LINE_WIDTH, NODE_COUNT, NODE_RADIUS_MAX, NODE_RADIUS_MIN,
    POINTER_BLEND,
};
use crate::error::SiteError;

/// Parameters injected into a hero field animator.
///
/// Distances are in CSS pixels, speeds in pixels per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub node_count: usize,
    pub drift_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub pointer_blend: f64,
    pub attraction_radius: f64,
    pub attraction_strength: f64,
    pub connection_distance: f64,
    pub line_opacity_max: f64,
    pub line_width: f64,
    pub glow_radius: f64,
    pub glow_alpha: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            drift_speed: DRIFT_SPEED_MAX,
            radius_min: NODE_RADIUS_MIN,
            radius_max: NODE_RADIUS_MAX,
            pointer_blend: POINTER_BLEND,
            attraction_radius: ATTRACTION_RADIUS,
            attraction_strength: ATTRACTION_STRENGTH,
            connection_distance: CONNECTION_DISTANCE,
            line_opacity_max: LINE_OPACITY_MAX,
            line_width: LINE_WIDTH,
            glow_radius: GLOW_RADIUS,
            glow_alpha: GLOW_ALPHA,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), SiteError> {
        if !(self.drift_speed >= 0.0) {
            return Err(SiteError::InvalidConfig("drift_speed must be >= 0"));
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max) {
            return Err(SiteError::InvalidConfig(
                "node radius range must be positive and ordered",
            ));
        }
        // 0 would freeze the pointer, > 1 would overshoot the target
        if !(self.pointer_blend > 0.0 && self.pointer_blend <= 1.0) {
            return Err(SiteError::InvalidConfig("pointer_blend must be in (0, 1]"));
        }
        if !(self.attraction_radius > 0.0) {
            return Err(SiteError::InvalidConfig("attraction_radius must be > 0"));
        }
        if !(self.connection_distance > 0.0) {
            return Err(SiteError::InvalidConfig("connection_distance must be > 0"));
        }
        if !(self.glow_radius > 0.0) {
            return Err(SiteError::InvalidConfig("glow_radius must be > 0"));
        }
        Ok(())
    }
}
