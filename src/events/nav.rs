use super::Wiring;
use crate::dom;
use crate::frame;
use crate::selectors;
use glam::Vec2;
use portfolio_core::{SectionId, ServiceId};
use wasm_bindgen::JsCast;
use web_sys as web;

fn section_of(link: &web::Element) -> Option<SectionId> {
    link.get_attribute("href")
        .and_then(|href| SectionId::from_href(&href))
}

fn service_of(item: &web::Element) -> Option<ServiceId> {
    item.get_attribute(selectors::SERVICE_ID_ATTR)
        .and_then(|a| selectors::parse_service_id(&a))
}

/// Feed the current scroll offset and dark-section bounds to the controller.
pub fn sync_scroll(w: &Wiring) {
    let offset = web::window()
        .and_then(|win| win.page_y_offset().ok())
        .unwrap_or(0.0);
    w.update(|site| {
        let tracked: Vec<_> = site
            .sections()
            .dark_sections()
            .into_iter()
            .map(|(_, el)| dom::bounds(el))
            .collect();
        site.on_scroll(offset, tracked);
    });
}

pub fn wire_navigation(w: &Wiring, window: &web::Window, menu_button: &web::Element) {
    let scroll_w = w.clone();
    w.listen(window.as_ref(), "scroll", move |_| sync_scroll(&scroll_w));

    for sel in [selectors::MENU_BUTTON, selectors::HAMBURGER] {
        w.on_click_all(sel, |w, _, _| {
            w.update(|site| {
                site.toggle_menu();
            })
        });
    }

    w.on_click_all(selectors::MENU_LINK, |w, link, ev| {
        ev.prevent_default();
        match section_of(link) {
            Some(id) => {
                let now = frame::now_ms();
                w.update(|site| site.navigate_to(id, now))
            }
            None => log::debug!("[nav] menu link without section target"),
        }
    });

    w.on_click_all(selectors::SMOOTH_SCROLL_LINK, |w, link, ev| {
        ev.prevent_default();
        if let Some(id) = section_of(link) {
            w.update(|site| site.jump_to(id));
        }
    });

    w.on_click_all(selectors::BACK_TO_TOP, |w, _, ev| {
        ev.prevent_default();
        w.update(|site| site.scroll_to_top());
    });

    w.on_click_all(selectors::SERVICE_ITEM, |w, item, _| {
        if let Some(id) = service_of(item) {
            w.update(|site| {
                site.select_service(id);
            });
        }
    });

    let pull_w = w.clone();
    let button = menu_button.clone();
    w.listen(menu_button.as_ref(), "mousemove", move |ev| {
        let Some(m) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = Vec2::new(m.client_x() as f32, m.client_y() as f32);
        let rect = dom::button_rect(&button);
        pull_w.site.borrow_mut().magnetic_pull(pointer, &rect);
    });

    let release_w = w.clone();
    w.listen(menu_button.as_ref(), "mouseleave", move |_| {
        release_w.site.borrow_mut().magnetic_release();
    });
}
