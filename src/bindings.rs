//! Imports for the page-global smooth-scroll (`Lenis`) and tween
//! (`gsap`, `ScrollTrigger`) libraries, loaded by script tags before the
//! wasm module.

use js_sys::Object;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Lenis;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(options: &Object) -> Result<Lenis, JsValue>;

    #[wasm_bindgen(method)]
    pub fn raf(this: &Lenis, time_ms: f64);

    #[wasm_bindgen(method)]
    pub fn stop(this: &Lenis);

    #[wasm_bindgen(method)]
    pub fn start(this: &Lenis);

    #[wasm_bindgen(method, js_name = scrollTo)]
    pub fn scroll_to(this: &Lenis, target: &JsValue);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Lenis);

    #[wasm_bindgen(method, getter)]
    pub fn scroll(this: &Lenis) -> f64;
}

#[wasm_bindgen]
extern "C" {
    /// Any gsap animation: tween or timeline.
    pub type Tween;

    #[wasm_bindgen(method)]
    pub fn play(this: &Tween);

    #[wasm_bindgen(method)]
    pub fn reverse(this: &Tween);

    #[wasm_bindgen(method)]
    pub fn kill(this: &Tween);

    #[wasm_bindgen(method, getter, js_name = scrollTrigger)]
    pub fn scroll_trigger(this: &Tween) -> JsValue;

    #[wasm_bindgen(extends = Tween)]
    pub type Timeline;

    #[wasm_bindgen(method, js_name = to)]
    pub fn tl_to(this: &Timeline, targets: &JsValue, vars: &Object, position: &JsValue)
        -> Timeline;

    #[wasm_bindgen(method, js_name = from)]
    pub fn tl_from(
        this: &Timeline,
        targets: &JsValue,
        vars: &Object,
        position: &JsValue,
    ) -> Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    pub fn gsap_to(targets: &JsValue, vars: &Object) -> Tween;

    #[wasm_bindgen(js_namespace = gsap, js_name = fromTo)]
    pub fn gsap_from_to(targets: &JsValue, from: &Object, to: &Object) -> Tween;

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    pub fn gsap_timeline(vars: &Object) -> Timeline;

    #[wasm_bindgen(js_namespace = ["gsap", "ticker"], js_name = lagSmoothing)]
    pub fn lag_smoothing(threshold: f64);

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = update)]
    pub fn scroll_trigger_update();
}

/// gsap and Lenis take plain option objects.
pub fn set_js(obj: &Object, key: &str, value: JsValue) {
    let _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), &value);
}
