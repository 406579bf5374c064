#![cfg(target_arch = "wasm32")]
use crate::gsap::GsapEngine;
use crate::lenis::LenisScroll;
use portfolio_core::content;
use portfolio_core::{
    PageLayout, SectionTable, ServiceId, SiteConfig, SiteController, SmoothScrollOptions,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod bindings;
mod dom;
mod events;
mod form;
mod frame;
mod gsap;
mod lenis;
mod lifecycle;
mod listeners;
mod markup;
mod selectors;
mod view;

pub type Site = SiteController<LenisScroll, GsapEngine>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    // startup problems are reported once; the page stays static
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn render_content(document: &web::Document) {
    let projects: String = content::projects()
        .iter()
        .map(markup::project_card_html)
        .collect();
    let services: String = content::services()
        .iter()
        .map(markup::service_item_html)
        .collect();
    dom::fill(document, selectors::MARQUEE_TRACK, &markup::marquee_html());
    dom::fill(document, selectors::PROJECTS_CONTAINER, &projects);
    dom::fill(document, selectors::SERVICES_CONTAINER, &services);
    dom::fill(document, selectors::MENU_LINKS_CONTAINER, &markup::menu_links_html());
    dom::fill(document, selectors::FOOTER_NAV_CONTAINER, &markup::footer_links_html());
}

fn measure_layout(window: &web::Window, document: &web::Document) -> PageLayout {
    PageLayout {
        viewport_width: window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        reveal_text_count: dom::query_all(document, selectors::REVEAL_TEXT).len(),
        project_card_count: dom::query_all(document, selectors::PROJECT_CARD).len(),
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    render_content(&document);

    let nav = dom::require(&document, selectors::NAV)?;
    let menu_button = dom::require(&document, selectors::MENU_BUTTON)?;

    let services = content::services();
    let service_ids: Vec<ServiceId> = services.iter().map(|s| s.id).collect();
    let sections = SectionTable::build(|id| document.get_element_by_id(id.dom_id()));
    let scroll = LenisScroll::new(&SmoothScrollOptions::default())?;
    let tweens = GsapEngine::new(&document, &service_ids);

    let mut site = Site::new(SiteConfig::default(), scroll, tweens, sections, services);
    site.mount(&measure_layout(&window, &document))?;

    let w = events::Wiring {
        document: document.clone(),
        site: Rc::new(RefCell::new(site)),
        view: Rc::new(RefCell::new(view::View::new(
            &document,
            nav,
            menu_button.clone(),
        ))),
        listeners: Rc::new(RefCell::new(listeners::ListenerSet::new())),
    };
    events::wire_navigation(&w, &window, &menu_button);
    events::wire_booking(&w);
    log::info!("[init] {} listeners attached", w.listeners.borrow().len());

    // set the nav mode before the first scroll event arrives
    events::sync_scroll(&w);
    w.render_form();

    let frame = frame::start_loop(w.site.clone());
    events::wire_teardown(&w, &window, frame);
    Ok(())
}
