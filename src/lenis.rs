use crate::bindings::{set_js, Lenis};
use js_sys::Object;
use portfolio_core::{smooth_scroll_ease, ScrollTarget, SmoothScroll, SmoothScrollOptions};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// `SmoothScroll` backed by a Lenis instance owned by the controller.
pub struct LenisScroll {
    lenis: Lenis,
    // referenced by the Lenis options object; must outlive the instance
    _easing: Closure<dyn Fn(f64) -> f64>,
    destroyed: bool,
}

impl LenisScroll {
    pub fn new(opts: &SmoothScrollOptions) -> anyhow::Result<Self> {
        let easing = Closure::wrap(Box::new(smooth_scroll_ease) as Box<dyn Fn(f64) -> f64>);
        let o = Object::new();
        set_js(&o, "duration", JsValue::from_f64(opts.duration));
        set_js(&o, "easing", easing.as_ref().clone());
        set_js(&o, "direction", JsValue::from_str("vertical"));
        set_js(&o, "gestureDirection", JsValue::from_str("vertical"));
        set_js(&o, "smooth", JsValue::TRUE);
        set_js(&o, "mouseMultiplier", JsValue::from_f64(opts.mouse_multiplier));
        set_js(&o, "smoothTouch", JsValue::from_bool(opts.smooth_touch));
        set_js(&o, "touchMultiplier", JsValue::from_f64(opts.touch_multiplier));
        let lenis = Lenis::new(&o).map_err(|e| anyhow::anyhow!("Lenis init: {:?}", e))?;
        Ok(Self {
            lenis,
            _easing: easing,
            destroyed: false,
        })
    }
}

impl SmoothScroll for LenisScroll {
    type Element = web::Element;

    fn advance(&mut self, time_ms: f64) {
        if !self.destroyed {
            self.lenis.raf(time_ms);
        }
    }

    fn stop(&mut self) {
        self.lenis.stop();
    }

    fn start(&mut self) {
        self.lenis.start();
    }

    fn scroll_to(&mut self, target: ScrollTarget<&web::Element>) {
        if self.destroyed {
            return;
        }
        match target {
            ScrollTarget::Element(el) => self.lenis.scroll_to(el.as_ref()),
            ScrollTarget::Offset(y) => self.lenis.scroll_to(&JsValue::from_f64(y)),
        }
    }

    fn offset(&self) -> f64 {
        self.lenis.scroll()
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            self.lenis.destroy();
            self.destroyed = true;
        }
    }
}
