use crate::selectors::HIDDEN_CLASS;
use portfolio_core::{Bounds, ButtonRect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Element matching `selector`, or a startup error naming it.
pub fn require(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    query(document, selector).ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}

#[inline]
pub fn bounds(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(rect.top(), rect.bottom())
}

#[inline]
pub fn button_rect(el: &web::Element) -> ButtonRect {
    let rect = el.get_bounding_client_rect();
    ButtonRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "");
}

pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = el.set_attribute("style", "display:none");
}

/// Fill the element matching `selector` with generated markup.
pub fn fill(document: &web::Document, selector: &str, html: &str) -> bool {
    match query(document, selector) {
        Some(el) => {
            el.set_inner_html(html);
            true
        }
        None => {
            log::warn!("[dom] {} missing; content not rendered", selector);
            false
        }
    }
}
