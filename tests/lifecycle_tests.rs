// Host-side tests for page lifecycle decisions.

mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::PageExit;

#[test]
fn cached_page_keeps_the_site_alive() {
    let exit = PageExit::from_persisted(true);
    assert_eq!(exit, PageExit::Cached);
    assert!(!exit.tears_down());
}

#[test]
fn unloaded_page_tears_down() {
    let exit = PageExit::from_persisted(false);
    assert_eq!(exit, PageExit::Unloaded);
    assert!(exit.tears_down());
}
