//! Capabilities the controller drives but does not implement.
//!
//! The browser front end binds these to the smooth-scroll and tween
//! libraries; tests bind them to recording fakes. Every tween operation
//! returns `Option<TweenHandle>`: `None` means the target was not mounted and
//! the request was dropped, which callers treat as a silent no-op.

use crate::content::ServiceId;
use smallvec::SmallVec;

/// Where a programmatic scroll should land.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget<E> {
    Element(E),
    Offset(f64),
}

/// Eased scroll position driven by wheel/touch input and scroll-to requests.
pub trait SmoothScroll {
    /// Handle to a section element the engine can scroll to.
    type Element: Clone;

    /// Advance the engine to the given frame time (milliseconds).
    fn advance(&mut self, time_ms: f64);
    /// Suspend input handling; the position stays where it is.
    fn stop(&mut self);
    /// Resume input handling.
    fn start(&mut self);
    fn scroll_to(&mut self, target: ScrollTarget<&Self::Element>);
    /// Current eased scroll offset.
    fn offset(&self) -> f64;
    /// Release listeners owned by the engine. Called once at teardown.
    fn destroy(&mut self);
}

/// Opaque id for a tween, timeline or trigger issued by a `TweenEngine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenHandle(pub u32);

/// What a tween animates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Every element matching a CSS selector.
    Selector(&'static str),
    /// The n-th element matching a selector.
    Nth(&'static str, usize),
    ServiceDetails(ServiceId),
    ServiceIcon(ServiceId),
    MenuButton,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Num(f64),
    Text(&'static str),
    /// The element's natural content size (e.g. `height: auto`).
    Auto,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prop {
    pub name: &'static str,
    pub value: PropValue,
}

pub type Props = SmallVec<[Prop; 4]>;

/// Build a `Props` list from `(name, value)` pairs.
pub fn props<const N: usize>(pairs: [(&'static str, PropValue); N]) -> Props {
    pairs
        .into_iter()
        .map(|(name, value)| Prop { name, value })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power4Out,
    Power4InOut,
}

impl Ease {
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
            Ease::Power3Out => "power3.out",
            Ease::Power4Out => "power4.out",
            Ease::Power4InOut => "power4.inOut",
        }
    }
}

/// How a viewport trigger maps scroll progress onto its tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    /// Play once when the start line is crossed.
    Off,
    /// Progress tracks scroll position exactly.
    Locked,
    /// Progress catches up with scroll over this many seconds.
    Smoothed(f64),
}

/// Gate a tween on a viewport intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportTrigger {
    pub trigger: Target,
    pub start: Option<&'static str>,
    pub end: Option<&'static str>,
    pub scrub: Scrub,
    pub pin: bool,
    pub toggle_actions: Option<&'static str>,
}

impl ViewportTrigger {
    pub fn on(trigger: Target) -> Self {
        Self {
            trigger,
            start: None,
            end: None,
            scrub: Scrub::Off,
            pin: false,
            toggle_actions: None,
        }
    }

    pub fn start(mut self, start: &'static str) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: &'static str) -> Self {
        self.end = Some(end);
        self
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn toggle_actions(mut self, actions: &'static str) -> Self {
        self.toggle_actions = Some(actions);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TweenOptions {
    /// `None` lets a scrubbed trigger own the timing.
    pub duration: Option<f64>,
    pub ease: Option<Ease>,
    pub stagger: Option<f64>,
    /// `Some(None)` repeats forever.
    pub repeat: Option<Option<u32>>,
    pub immediate_render: Option<bool>,
    pub trigger: Option<ViewportTrigger>,
}

impl TweenOptions {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ease: None,
            stagger: None,
            repeat: None,
            immediate_render: None,
            trigger: None,
        }
    }

    /// Options for a tween whose progress is driven entirely by a trigger.
    pub fn scrubbed(trigger: ViewportTrigger) -> Self {
        Self {
            duration: None,
            ease: Some(Ease::Linear),
            stagger: None,
            repeat: None,
            immediate_render: None,
            trigger: Some(trigger),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Some(None);
        self
    }

    pub fn immediate_render(mut self, immediate: bool) -> Self {
        self.immediate_render = Some(immediate);
        self
    }

    pub fn trigger(mut self, trigger: ViewportTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepKind {
    To(Props),
    From(Props),
}

/// One entry of a prebuilt timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStep {
    pub target: Target,
    pub kind: StepKind,
    pub options: TweenOptions,
    /// Relative placement such as `"-=0.4"`; `None` appends.
    pub position: Option<&'static str>,
}

/// Interpolates visual properties over time, optionally scoped to viewport
/// triggers.
pub trait TweenEngine {
    fn animate(&mut self, target: &Target, goal: &Props, opts: &TweenOptions)
        -> Option<TweenHandle>;
    fn animate_from_to(
        &mut self,
        target: &Target,
        from: &Props,
        goal: &Props,
        opts: &TweenOptions,
    ) -> Option<TweenHandle>;
    /// Build a timeline; a paused timeline waits for `play`.
    fn timeline(&mut self, steps: &[TimelineStep], paused: bool) -> Option<TweenHandle>;
    fn play(&mut self, handle: TweenHandle);
    fn reverse(&mut self, handle: TweenHandle);
    /// Ease the playback rate of a running tween to `rate` over `duration`.
    fn ramp_time_scale(&mut self, handle: TweenHandle, rate: f64, duration: f64);
    /// Re-evaluate viewport triggers against a new scroll offset.
    fn sync_scroll(&mut self, offset: f64);
    /// Kill the tween and any trigger attached to it.
    fn cancel(&mut self, handle: TweenHandle);
}
