use crate::constants::HEADER_SCROLL_THRESHOLD;

#[inline]
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Selector for an in-page link target; `None` for a bare `#` or a
/// non-fragment href.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Scroll offset that puts a target just below the fixed header.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

#[inline]
pub fn closes_menu(key: &str) -> bool {
    key == "Escape"
}
