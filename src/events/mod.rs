mod booking;
mod nav;

pub use booking::wire_booking;
pub use nav::{sync_scroll, wire_navigation};

use crate::frame::FrameLoop;
use crate::lifecycle::PageExit;
use crate::listeners::ListenerSet;
use crate::view::View;
use crate::Site;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles every DOM listener closes over.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub site: Rc<RefCell<Site>>,
    pub view: Rc<RefCell<View>>,
    pub listeners: Rc<RefCell<ListenerSet>>,
}

impl Wiring {
    /// Run `f` against the controller, then restyle the page from the
    /// resulting state.
    pub fn update(&self, f: impl FnOnce(&mut Site)) {
        let state = {
            let mut site = self.site.borrow_mut();
            f(&mut site);
            site.view()
        };
        self.view.borrow_mut().render(state);
    }

    pub fn render_form(&self) {
        let site = self.site.borrow();
        self.view.borrow().render_form(site.form());
    }

    fn listen(
        &self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        self.listeners.borrow_mut().add(target, event, handler);
    }

    /// Click handler on every element matching `selector`.
    fn on_click_all<F>(&self, selector: &str, handler: F)
    where
        F: Fn(&Wiring, &web::Element, &web::Event) + Clone + 'static,
    {
        for el in crate::dom::query_all(&self.document, selector) {
            let w = self.clone();
            let h = handler.clone();
            let target = el.clone();
            self.listen(el.as_ref(), "click", move |ev| h(&w, &target, &ev));
        }
    }
}

/// Tear everything down when the page is unloaded. A page frozen into the
/// back/forward cache is left intact. This listener is not part of the
/// `ListenerSet` it clears.
pub fn wire_teardown(w: &Wiring, window: &web::Window, frame: FrameLoop) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if !PageExit::from_persisted(persisted).tears_down() {
            log::debug!("[teardown] page cached; keeping site alive");
            return;
        }
        let removed = w.listeners.borrow_mut().remove_all();
        frame.stop();
        w.site.borrow_mut().teardown();
        log::info!("[teardown] removed {} listeners", removed);
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
