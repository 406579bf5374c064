use portfolio_core::{ContactRequest, EventType, FormError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Snapshot the booking form fields.
pub fn read_request(document: &web::Document) -> ContactRequest {
    ContactRequest {
        name: field_value(document, "name"),
        email: field_value(document, "email"),
        event_type: EventType::from_form_value(&field_value(document, "event-type")),
        message: field_value(document, "message"),
    }
}

fn js_err(e: wasm_bindgen::JsValue) -> FormError {
    FormError::Transport(format!("{:?}", e))
}

/// POST a JSON body and return the status and raw reply text.
pub async fn post_json(endpoint: &str, body: &str) -> Result<(u16, String), FormError> {
    let window = web::window().ok_or_else(|| FormError::Transport("no window".into()))?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&wasm_bindgen::JsValue::from_str(body));
    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let reply = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web::Response = reply.dyn_into().map_err(js_err)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok((status, text.as_string().unwrap_or_default()))
}
