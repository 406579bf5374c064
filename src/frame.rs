use crate::Site;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame loop pumping the controller once per frame.
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &TickSlot, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

/// Current time on the clock requestAnimationFrame timestamps use.
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn start_loop(site: Rc<RefCell<Site>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        raf_clone.set(None);
        site.borrow_mut().tick(ts);
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick, &raf_id);
    FrameLoop { tick, raf_id }
}

impl FrameLoop {
    /// Cancel the pending frame and drop the callback, breaking its self
    /// reference.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
