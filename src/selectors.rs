// DOM hooks shared by the markup, the view and the tween bindings.
// Kept free of web-sys so host tests can include it directly.

use portfolio_core::{ServiceId, Target};
use std::borrow::Cow;

// Navigation
pub const NAV: &str = "nav";
pub const MENU_BUTTON: &str = ".menu-btn";
pub const HAMBURGER: &str = ".hamburger";
pub const MENU_LINK: &str = ".menu-link";
pub const MENU_LINKS_CONTAINER: &str = ".menu-links";
pub const SMOOTH_SCROLL_LINK: &str = ".smooth-scroll-link";
pub const FOOTER_NAV_CONTAINER: &str = ".footer-nav-links";
pub const BACK_TO_TOP: &str = ".back-to-top";

// Content containers filled at mount
pub const MARQUEE_TRACK: &str = ".marquee-track";
pub const PROJECTS_CONTAINER: &str = ".horizontal-wrapper";
pub const SERVICES_CONTAINER: &str = ".services-list";
pub const SERVICE_ITEM: &str = ".service-item";
pub const PROJECT_CARD: &str = ".project-card";
pub const REVEAL_TEXT: &str = ".reveal-text";

// Booking
pub const BOOK_BUTTONS: &str = ".book-btn, .hero-book-btn";
pub const MODAL_OVERLAY: &str = ".contact-modal-overlay";
pub const MODAL: &str = ".contact-modal";
pub const MODAL_CLOSE: &str = ".modal-close";
pub const CONTACT_FORM: &str = ".contact-form";
pub const FORM_SUCCESS: &str = ".form-success";
pub const SUBMIT_BUTTON: &str = ".submit-btn";
pub const NEWSLETTER_FORM: &str = ".newsletter-form";

// State classes
pub const NAV_DARK_CLASS: &str = "nav-dark";
pub const MENU_OPEN_CLASS: &str = "menu-open";
pub const SERVICE_OPEN_CLASS: &str = "open";
pub const HIDDEN_CLASS: &str = "hidden";

pub const SERVICE_ID_ATTR: &str = "data-service-id";
pub const FORM_ERROR_FIELD_ATTR: &str = "data-field";

pub fn service_details_id(id: ServiceId) -> String {
    format!("service-details-{}", id.0)
}

pub fn service_icon_id(id: ServiceId) -> String {
    format!("service-icon-{}", id.0)
}

pub fn parse_service_id(attr: &str) -> Option<ServiceId> {
    attr.trim().parse::<u32>().ok().map(ServiceId)
}

/// CSS selector matching a tween target. `Nth` targets select the whole
/// group; the caller picks the index.
pub fn selector_for(target: &Target) -> Cow<'static, str> {
    match target {
        Target::Selector(sel) | Target::Nth(sel, _) => Cow::Borrowed(sel),
        Target::ServiceDetails(id) => Cow::Owned(format!("#{}", service_details_id(*id))),
        Target::ServiceIcon(id) => Cow::Owned(format!("#{}", service_icon_id(*id))),
        Target::MenuButton => Cow::Borrowed(MENU_BUTTON),
    }
}

/// Label on the text menu button.
pub fn menu_button_label(is_open: bool) -> &'static str {
    if is_open {
        "Close"
    } else {
        "Menu"
    }
}
