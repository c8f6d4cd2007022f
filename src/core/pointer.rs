use glam::DVec2;

#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Pointer position relative to the field container, smoothed per frame.
///
/// `target` is the latest raw position; `current` chases it by a fixed
/// fraction of the remaining distance on every `smooth` call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: DVec2,
    pub target: DVec2,
}

impl PointerState {
    #[inline]
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    #[inline]
    pub fn smooth(&mut self, blend: f64) {
        self.current.x = lerp(self.current.x, self.target.x, blend);
        self.current.y = lerp(self.current.y, self.target.y, blend);
    }
}
