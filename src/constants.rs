/// Tuning constants for the hero field and the page behaviors.
///
/// These keep magic numbers out of the code; `FieldConfig::default()` is
/// built from the hero field block.
// Hero field: population
pub const NODE_COUNT: usize = 35;

// Hero field: motion (px per frame)
pub const DRIFT_SPEED_MAX: f64 = 0.15; // each velocity axis lies in [-max, max)
pub const NODE_RADIUS_MIN: f64 = 1.0;
pub const NODE_RADIUS_MAX: f64 = 3.0;

// Hero field: pointer interaction
pub const POINTER_BLEND: f64 = 0.08; // fraction of remaining distance covered per frame
pub const ATTRACTION_RADIUS: f64 = 250.0;
pub const ATTRACTION_STRENGTH: f64 = 0.015;

// Hero field: connections
pub const CONNECTION_DISTANCE: f64 = 150.0;
pub const LINE_OPACITY_MAX: f64 = 0.15;
pub const LINE_WIDTH: f64 = 0.5;

// Hero field: glow
pub const GLOW_RADIUS: f64 = 120.0;
pub const GLOW_ALPHA: f64 = 0.08;

// Hero field: palette (light blue)
pub const FIELD_RGB: [u8; 3] = [147, 197, 253];
pub const NODE_ALPHA: f64 = 0.5;

// Hero field: markup
pub const FIELD_CANVAS_ID: &str = "heroCyberGrid";
pub const HERO_SELECTOR: &str = ".hero";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Slideshow
pub const SLIDE_SELECTOR: &str = ".hero-slideshow .slide";
pub const SLIDE_DOT_SELECTOR: &str = ".slide-dot";
pub const AUTOPLAY_DELAY_MS: i32 = 5000;

// Language switcher
pub const LANGUAGE_STORAGE_KEY: &str = "tcg-language";
pub const LANGUAGE_BUTTON_SELECTOR: &str = ".lang-btn";
pub const TRANSLATABLE_SELECTOR: &str = "[data-en], [data-az], [data-ru]";

// Navigation
pub const HEADER_ID: &str = "header";
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;
pub const DEFAULT_HEADER_HEIGHT: f64 = 64.0;
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Mobile menu
pub const MENU_ID: &str = "mobileMenu";
pub const MENU_OVERLAY_ID: &str = "mobileOverlay";
pub const MENU_OPEN_ID: &str = "hamburger";
pub const MENU_CLOSE_ID: &str = "mobileClose";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Shared CSS state classes
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
