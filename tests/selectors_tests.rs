// Host-side tests for the DOM hooks. The main crate is wasm-only, so the
// pure module is included directly.

#![allow(dead_code)]
mod selectors {
    include!("../src/selectors.rs");
}

use portfolio_core::{ServiceId, Target};
use selectors::*;

#[test]
fn service_ids_round_trip_through_the_data_attribute() {
    let attr = ServiceId(3).0.to_string();
    assert_eq!(parse_service_id(&attr), Some(ServiceId(3)));
    assert_eq!(parse_service_id(" 5 "), Some(ServiceId(5)));
    assert_eq!(parse_service_id("five"), None);
    assert_eq!(parse_service_id(""), None);
}

#[test]
fn per_service_targets_select_by_id() {
    assert_eq!(selector_for(&Target::ServiceDetails(ServiceId(2))), "#service-details-2");
    assert_eq!(selector_for(&Target::ServiceIcon(ServiceId(4))), "#service-icon-4");
    assert_eq!(selector_for(&Target::MenuButton), MENU_BUTTON);
}

#[test]
fn group_targets_select_the_whole_group() {
    assert_eq!(selector_for(&Target::Selector(".hero-img")), ".hero-img");
    assert_eq!(selector_for(&Target::Nth(REVEAL_TEXT, 2)), REVEAL_TEXT);
}

#[test]
fn menu_label_follows_menu_state() {
    assert_eq!(menu_button_label(false), "Menu");
    assert_eq!(menu_button_label(true), "Close");
}
