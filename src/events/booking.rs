use super::Wiring;
use crate::dom;
use crate::form;
use crate::selectors;
use portfolio_core::form::interpret_reply;
use wasm_bindgen_futures::spawn_local;

fn submit_contact(w: &Wiring) {
    let request = form::read_request(&w.document);
    let (begun, endpoint) = {
        let mut site = w.site.borrow_mut();
        let begun = site.form_mut().begin(&request);
        (begun, site.config().form_endpoint())
    };
    w.render_form();
    let body = match begun {
        Ok(body) => body,
        Err(e) => {
            log::debug!("[form] not sent: {}", e);
            return;
        }
    };

    let w = w.clone();
    spawn_local(async move {
        let result = match form::post_json(&endpoint, &body).await {
            Ok((status, text)) => interpret_reply(status, &text),
            Err(e) => Err(e),
        };
        let state = w.site.borrow_mut().form_mut().finish(result).clone();
        log::info!("[form] {:?}", state);
        w.render_form();
    });
}

pub fn wire_booking(w: &Wiring) {
    w.on_click_all(selectors::BOOK_BUTTONS, |w, _, ev| {
        ev.prevent_default();
        w.update(|site| site.open_contact());
    });

    w.on_click_all(selectors::MODAL_CLOSE, |w, _, _| {
        w.update(|site| site.close_contact());
    });

    // clicks on the backdrop close; clicks inside the dialog stay inside
    w.on_click_all(selectors::MODAL_OVERLAY, |w, _, _| {
        w.update(|site| site.close_contact());
    });
    w.on_click_all(selectors::MODAL, |_, _, ev| ev.stop_propagation());

    if let Some(form_el) = dom::query(&w.document, selectors::CONTACT_FORM) {
        let submit_w = w.clone();
        w.listen(form_el.as_ref(), "submit", move |ev| {
            ev.prevent_default();
            submit_contact(&submit_w);
        });
    }

    if let Some(newsletter) = dom::query(&w.document, selectors::NEWSLETTER_FORM) {
        w.listen(newsletter.as_ref(), "submit", |ev| ev.prevent_default());
    }
}
