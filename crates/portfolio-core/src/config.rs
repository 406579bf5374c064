use crate::constants::*;

/// Tunable parameters for the site controller.
///
/// `Default` yields the production values from `constants.rs`; tests build
/// their own to exercise boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub nav_height: f64,
    pub settle_delay_ms: f64,
    pub marquee_period: f64,
    pub marquee_shift_percent: f64,
    pub marquee_rate_ramp: f64,
    pub accordion_open_duration: f64,
    pub accordion_close_duration: f64,
    pub magnetic_strength: f32,
    pub desktop_min_width: f64,
    pub form_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_height: NAV_HEIGHT_PX,
            settle_delay_ms: SETTLE_DELAY_MS,
            marquee_period: MARQUEE_PERIOD,
            marquee_shift_percent: MARQUEE_SHIFT_PERCENT,
            marquee_rate_ramp: MARQUEE_RATE_RAMP,
            accordion_open_duration: ACCORDION_OPEN_DURATION,
            accordion_close_duration: ACCORDION_CLOSE_DURATION,
            magnetic_strength: MAGNETIC_STRENGTH,
            desktop_min_width: DESKTOP_MIN_WIDTH_PX,
            form_id: FORM_ID.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn form_endpoint(&self) -> String {
        format!("{}{}", FORM_ENDPOINT_BASE, self.form_id)
    }

    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width >= self.desktop_min_width
    }
}

/// Options handed to the smooth-scroll engine at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScrollOptions {
    pub duration: f64,
    pub mouse_multiplier: f64,
    pub touch_multiplier: f64,
    pub smooth_touch: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: LENIS_DURATION,
            mouse_multiplier: LENIS_MOUSE_MULTIPLIER,
            touch_multiplier: LENIS_TOUCH_MULTIPLIER,
            smooth_touch: false,
        }
    }
}

/// Exponential ease-out used by the smooth-scroll engine, clamped to 1.
#[inline]
pub fn smooth_scroll_ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}
