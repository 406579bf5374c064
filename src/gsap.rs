use crate::bindings::{self, set_js, Tween};
use crate::dom;
use crate::selectors;
use fnv::FnvHashMap;
use js_sys::Object;
use portfolio_core::{
    PropValue, Props, Scrub, ServiceId, StepKind, Target, TimelineStep, TweenEngine, TweenHandle,
    TweenOptions, ViewportTrigger,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `TweenEngine` over the page-global gsap + ScrollTrigger.
///
/// Per-element targets (service panels, icons, the menu button) are resolved
/// once at construction; class-level targets are queried when the tween is
/// built. A target that resolves to nothing yields `None`.
pub struct GsapEngine {
    document: web::Document,
    elements: FnvHashMap<Target, web::Element>,
    live: FnvHashMap<u32, Tween>,
    next_id: u32,
}

impl GsapEngine {
    pub fn new(document: &web::Document, services: &[ServiceId]) -> Self {
        bindings::lag_smoothing(0.0);
        let mut targets = vec![Target::MenuButton];
        for &id in services {
            targets.push(Target::ServiceDetails(id));
            targets.push(Target::ServiceIcon(id));
        }
        let elements = targets
            .into_iter()
            .filter_map(|t| {
                let el = dom::query(document, &selectors::selector_for(&t))?;
                Some((t, el))
            })
            .collect();
        Self {
            document: document.clone(),
            elements,
            live: FnvHashMap::default(),
            next_id: 0,
        }
    }

    fn resolve(&self, target: &Target) -> Option<JsValue> {
        match target {
            Target::Selector(sel) => {
                let nodes = self.document.query_selector_all(sel).ok()?;
                (nodes.length() > 0).then(|| nodes.into())
            }
            Target::Nth(sel, i) => {
                let nodes = self.document.query_selector_all(sel).ok()?;
                nodes.item(*i as u32).map(JsValue::from)
            }
            other => self.elements.get(other).map(|el| el.clone().into()),
        }
    }

    fn register(&mut self, tween: Tween) -> TweenHandle {
        self.next_id += 1;
        self.live.insert(self.next_id, tween);
        TweenHandle(self.next_id)
    }

    fn vars(&self, goal: &Props, opts: Option<&TweenOptions>) -> Object {
        let o = Object::new();
        for p in goal {
            set_js(&o, p.name, prop_value(&p.value));
        }
        if let Some(opts) = opts {
            if let Some(d) = opts.duration {
                set_js(&o, "duration", JsValue::from_f64(d));
            }
            if let Some(ease) = opts.ease {
                set_js(&o, "ease", JsValue::from_str(ease.name()));
            }
            if let Some(s) = opts.stagger {
                set_js(&o, "stagger", JsValue::from_f64(s));
            }
            if let Some(repeat) = opts.repeat {
                let n = repeat.map(f64::from).unwrap_or(-1.0);
                set_js(&o, "repeat", JsValue::from_f64(n));
            }
            if let Some(immediate) = opts.immediate_render {
                set_js(&o, "immediateRender", JsValue::from_bool(immediate));
            }
            if let Some(trigger) = &opts.trigger {
                if let Some(st) = self.scroll_trigger(trigger) {
                    set_js(&o, "scrollTrigger", st.into());
                }
            }
        }
        o
    }

    fn scroll_trigger(&self, t: &ViewportTrigger) -> Option<Object> {
        let trigger = self.resolve(&t.trigger)?;
        let o = Object::new();
        set_js(&o, "trigger", trigger);
        if let Some(start) = t.start {
            set_js(&o, "start", JsValue::from_str(start));
        }
        if let Some(end) = t.end {
            set_js(&o, "end", JsValue::from_str(end));
        }
        match t.scrub {
            Scrub::Off => {}
            Scrub::Locked => set_js(&o, "scrub", JsValue::TRUE),
            Scrub::Smoothed(s) => set_js(&o, "scrub", JsValue::from_f64(s)),
        }
        if t.pin {
            set_js(&o, "pin", JsValue::TRUE);
        }
        if let Some(actions) = t.toggle_actions {
            set_js(&o, "toggleActions", JsValue::from_str(actions));
        }
        Some(o)
    }
}

fn prop_value(v: &PropValue) -> JsValue {
    match v {
        PropValue::Num(n) => JsValue::from_f64(*n),
        PropValue::Text(s) => JsValue::from_str(s),
        PropValue::Auto => JsValue::from_str("auto"),
    }
}

impl TweenEngine for GsapEngine {
    fn animate(&mut self, target: &Target, goal: &Props, opts: &TweenOptions) -> Option<TweenHandle> {
        let el = self.resolve(target)?;
        let tween = bindings::gsap_to(&el, &self.vars(goal, Some(opts)));
        Some(self.register(tween))
    }

    fn animate_from_to(
        &mut self,
        target: &Target,
        from: &Props,
        goal: &Props,
        opts: &TweenOptions,
    ) -> Option<TweenHandle> {
        let el = self.resolve(target)?;
        let tween = bindings::gsap_from_to(&el, &self.vars(from, None), &self.vars(goal, Some(opts)));
        Some(self.register(tween))
    }

    fn timeline(&mut self, steps: &[TimelineStep], paused: bool) -> Option<TweenHandle> {
        // a timeline whose leading target is absent would animate nothing useful
        self.resolve(&steps.first()?.target)?;
        let tl_vars = Object::new();
        set_js(&tl_vars, "paused", JsValue::from_bool(paused));
        let tl = bindings::gsap_timeline(&tl_vars);
        for step in steps {
            let Some(el) = self.resolve(&step.target) else {
                log::debug!("[gsap] timeline step {:?} skipped", step.target);
                continue;
            };
            let position = step.position.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED);
            match &step.kind {
                StepKind::To(goal) => {
                    tl.tl_to(&el, &self.vars(goal, Some(&step.options)), &position);
                }
                StepKind::From(from) => {
                    tl.tl_from(&el, &self.vars(from, Some(&step.options)), &position);
                }
            }
        }
        Some(self.register(tl.into()))
    }

    fn play(&mut self, handle: TweenHandle) {
        if let Some(t) = self.live.get(&handle.0) {
            t.play();
        }
    }

    fn reverse(&mut self, handle: TweenHandle) {
        if let Some(t) = self.live.get(&handle.0) {
            t.reverse();
        }
    }

    fn ramp_time_scale(&mut self, handle: TweenHandle, rate: f64, duration: f64) {
        if let Some(t) = self.live.get(&handle.0) {
            let vars = Object::new();
            set_js(&vars, "timeScale", JsValue::from_f64(rate));
            set_js(&vars, "duration", JsValue::from_f64(duration));
            bindings::gsap_to(t.as_ref(), &vars);
        }
    }

    fn sync_scroll(&mut self, _offset: f64) {
        bindings::scroll_trigger_update();
    }

    fn cancel(&mut self, handle: TweenHandle) {
        if let Some(t) = self.live.remove(&handle.0) {
            let st = t.scroll_trigger();
            if !st.is_undefined() && !st.is_null() {
                st.unchecked_into::<Tween>().kill();
            }
            t.kill();
        }
    }
}

