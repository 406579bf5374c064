use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Every DOM listener the site installs, kept so teardown can detach them
/// instead of leaking the closures.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.entries.push(Listener {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => log::error!("[listeners] {} listener failed: {:?}", event, e),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn remove_all(&mut self) -> usize {
        let n = self.entries.len();
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
        n
    }
}
