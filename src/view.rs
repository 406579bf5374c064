use crate::dom;
use crate::selectors::{self, FORM_ERROR_FIELD_ATTR};
use portfolio_core::{ContactForm, FieldErrors, FormSubmissionState, ServiceId, ViewState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements styled from controller state, resolved once after the markup is
/// rendered.
pub struct View {
    nav: web::Element,
    menu_button: web::Element,
    services: Vec<(ServiceId, web::Element)>,
    modal_overlay: Option<web::Element>,
    contact_form: Option<web::Element>,
    form_success: Option<web::Element>,
    submit_button: Option<web::HtmlButtonElement>,
    error_slots: Vec<web::Element>,
    last: Option<ViewState>,
}

impl View {
    pub fn new(document: &web::Document, nav: web::Element, menu_button: web::Element) -> Self {
        let services = dom::query_all(document, selectors::SERVICE_ITEM)
            .into_iter()
            .filter_map(|el| {
                let id = el
                    .get_attribute(selectors::SERVICE_ID_ATTR)
                    .and_then(|a| selectors::parse_service_id(&a))?;
                Some((id, el))
            })
            .collect();
        let error_slots = dom::query_all(
            document,
            &format!("{} [{}]", selectors::CONTACT_FORM, FORM_ERROR_FIELD_ATTR),
        );
        Self {
            nav,
            menu_button,
            services,
            modal_overlay: dom::query(document, selectors::MODAL_OVERLAY),
            contact_form: dom::query(document, selectors::CONTACT_FORM),
            form_success: dom::query(document, selectors::FORM_SUCCESS),
            submit_button: dom::query(document, selectors::SUBMIT_BUTTON)
                .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok()),
            error_slots,
            last: None,
        }
    }

    pub fn render(&mut self, state: ViewState) {
        if self.last == Some(state) {
            return;
        }
        dom::set_class(&self.nav, selectors::NAV_DARK_CLASS, state.nav_dark);
        dom::set_class(&self.nav, selectors::MENU_OPEN_CLASS, state.is_menu_open);
        self.menu_button
            .set_text_content(Some(selectors::menu_button_label(state.is_menu_open)));
        for (id, el) in &self.services {
            dom::set_class(
                el,
                selectors::SERVICE_OPEN_CLASS,
                state.open_service_id == Some(*id),
            );
        }
        if let Some(overlay) = &self.modal_overlay {
            if state.is_contact_open {
                dom::show(overlay);
            } else {
                dom::hide(overlay);
            }
        }
        self.last = Some(state);
    }

    pub fn render_form(&self, form: &ContactForm) {
        if let Some(btn) = &self.submit_button {
            btn.set_text_content(Some(form.submit_label()));
            btn.set_disabled(form.is_submitting());
        }
        let no_errors = FieldErrors::default();
        let errors = match form.state() {
            FormSubmissionState::Failed(errors) => errors,
            _ => &no_errors,
        };
        for slot in &self.error_slots {
            let field = slot.get_attribute(FORM_ERROR_FIELD_ATTR).unwrap_or_default();
            let text = errors.display(&field, &label_for(&field));
            slot.set_text_content(text.as_deref());
        }
        if *form.state() == FormSubmissionState::Succeeded {
            if let Some(f) = &self.contact_form {
                dom::hide(f);
            }
            if let Some(s) = &self.form_success {
                dom::show(s);
            }
        }
    }
}

fn label_for(field: &str) -> String {
    match field {
        "name" => "Name".into(),
        "email" => "Email".into(),
        "event-type" => "Event type".into(),
        "message" => "Message".into(),
        _ => String::new(),
    }
}
