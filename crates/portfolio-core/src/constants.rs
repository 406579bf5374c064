// Shared tuning constants for scroll orchestration and section animation.
// Durations are in seconds (tween engine units) unless suffixed `_MS`.

// Navigation
pub const NAV_HEIGHT_PX: f64 = 80.0; // band [0, NAV_HEIGHT_PX] the nav bar covers
pub const SETTLE_DELAY_MS: f64 = 500.0; // menu close clears the viewport before scroll-to

// Menu reveal timeline
pub const MENU_OVERLAY_DURATION: f64 = 0.8;
pub const MENU_LINK_DURATION: f64 = 0.8;
pub const MENU_LINK_STAGGER: f64 = 0.1;
pub const MENU_OVERLAY_CLIP_OPEN: &str = "polygon(0 0, 100% 0, 100% 100%, 0 100%)";

// Marquee
pub const MARQUEE_PERIOD: f64 = 20.0; // one loop of the track
pub const MARQUEE_SHIFT_PERCENT: f64 = -25.0; // one copy of the 4x duplicated content
pub const MARQUEE_COPIES: usize = 4;
pub const MARQUEE_RATE_RAMP: f64 = 0.5; // direction flips ease over this long

// Accordion
pub const ACCORDION_OPEN_DURATION: f64 = 0.5;
pub const ACCORDION_CLOSE_DURATION: f64 = 0.4;
pub const ACCORDION_ICON_DURATION: f64 = 0.4;
pub const ACCORDION_ICON_OPEN_DEG: f64 = 45.0; // "+" turns into "x"

// Magnetic menu button
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_DURATION: f64 = 0.3;

// Layout
pub const DESKTOP_MIN_WIDTH_PX: f64 = 769.0; // pinned horizontal gallery only at or above
pub const GALLERY_PIN_DISTANCE: &str = "+=3000";

// Smooth scroll engine
pub const LENIS_DURATION: f64 = 1.2;
pub const LENIS_MOUSE_MULTIPLIER: f64 = 1.0;
pub const LENIS_TOUCH_MULTIPLIER: f64 = 2.0;

// Booking form backend
pub const FORM_ID: &str = "xlgroykg";
pub const FORM_ENDPOINT_BASE: &str = "https://formspree.io/f/";
