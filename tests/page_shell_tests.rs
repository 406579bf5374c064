// Host-side checks that the static page carries every hook the wasm front
// end looks up at startup.

#![allow(dead_code)]
mod selectors {
    include!("../src/selectors.rs");
}

use portfolio_core::SectionId;
use selectors::*;

const PAGE: &str = include_str!("../index.html");

/// True when some element's class list contains `class`.
fn has_class(class: &str) -> bool {
    PAGE.match_indices("class=\"").any(|(i, m)| {
        let rest = &PAGE[i + m.len()..];
        let list = &rest[..rest.find('"').unwrap_or(0)];
        list.split_whitespace().any(|c| c == class)
    })
}

fn has_hook(selector: &str) -> bool {
    selector.split(',').map(str::trim).all(|sel| {
        let first = sel.split_whitespace().next().unwrap_or(sel);
        match first.strip_prefix('.') {
            Some(class) => has_class(class),
            None => PAGE.contains(&format!("<{}", first)),
        }
    })
}

#[test]
fn required_startup_elements_exist() {
    assert!(has_hook(NAV));
    assert!(has_hook(MENU_BUTTON));
}

#[test]
fn every_section_has_its_id() {
    for id in SectionId::ALL {
        assert!(
            PAGE.contains(&format!("id=\"{}\"", id.dom_id())),
            "#{} missing",
            id.dom_id()
        );
    }
    assert!(PAGE.contains("<footer id=\"contact\">"));
}

#[test]
fn content_containers_and_controls_exist() {
    for sel in [
        HAMBURGER,
        MENU_LINKS_CONTAINER,
        FOOTER_NAV_CONTAINER,
        BACK_TO_TOP,
        MARQUEE_TRACK,
        PROJECTS_CONTAINER,
        SERVICES_CONTAINER,
        BOOK_BUTTONS,
        MODAL_OVERLAY,
        MODAL,
        MODAL_CLOSE,
        CONTACT_FORM,
        FORM_SUCCESS,
        SUBMIT_BUTTON,
        NEWSLETTER_FORM,
    ] {
        assert!(has_hook(sel), "{} missing", sel);
    }
}

#[test]
fn animated_elements_exist() {
    for class in [
        "loader",
        "loader-bar",
        "hero-img",
        "hero-line",
        "menu-overlay",
        "reveal-text",
        "reveal-image-wrapper",
        "footer-top",
        "footer-cta",
        "footer-grid",
        "footer-col",
    ] {
        assert!(has_class(class), ".{} missing", class);
    }
}

#[test]
fn contact_fields_and_error_slots_exist() {
    for field in ["name", "email", "event-type", "message"] {
        assert!(PAGE.contains(&format!("id=\"{}\"", field)), "#{} missing", field);
        assert!(
            PAGE.contains(&format!("{}=\"{}\"", FORM_ERROR_FIELD_ATTR, field)),
            "error slot for {} missing",
            field
        );
    }
    assert!(PAGE.contains(&format!("{}=\"\"", FORM_ERROR_FIELD_ATTR)));
}

#[test]
fn engines_load_before_the_wasm_module() {
    let wasm = PAGE.find("portfolio_web.js").expect("wasm module script");
    for lib in ["gsap.min.js", "ScrollTrigger.min.js", "lenis.min.js"] {
        let at = PAGE.find(lib).unwrap_or_else(|| panic!("{} missing", lib));
        assert!(at < wasm, "{} loads after the wasm module", lib);
    }
}
