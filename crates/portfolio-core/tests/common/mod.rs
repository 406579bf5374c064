// Recording fakes of the scroll and tween capabilities.

#![allow(dead_code)]

use portfolio_core::*;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollCall {
    Advance(f64),
    Stop,
    Start,
    ScrollTo(ScrollTarget<&'static str>),
    Destroy,
}

#[derive(Debug, Default)]
pub struct RecordingScroll {
    pub calls: Vec<ScrollCall>,
    pub stopped: bool,
    pub destroyed: bool,
    pub offset: f64,
}

impl RecordingScroll {
    pub fn scroll_tos(&self) -> Vec<ScrollTarget<&'static str>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ScrollCall::ScrollTo(t) => Some(*t),
                _ => None,
            })
            .collect()
    }
}

impl SmoothScroll for RecordingScroll {
    type Element = &'static str;

    fn advance(&mut self, time_ms: f64) {
        self.calls.push(ScrollCall::Advance(time_ms));
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.calls.push(ScrollCall::Stop);
    }

    fn start(&mut self) {
        self.stopped = false;
        self.calls.push(ScrollCall::Start);
    }

    fn scroll_to(&mut self, target: ScrollTarget<&Self::Element>) {
        let owned = match target {
            ScrollTarget::Element(el) => ScrollTarget::Element(*el),
            ScrollTarget::Offset(o) => ScrollTarget::Offset(o),
        };
        self.calls.push(ScrollCall::ScrollTo(owned));
    }

    fn offset(&self) -> f64 {
        self.offset
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.calls.push(ScrollCall::Destroy);
    }
}

/// Where a timeline is headed after its last play/reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Start,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TweenCall {
    Animate(TweenHandle, Target, Props, TweenOptions),
    FromTo(TweenHandle, Target, Props, Props, TweenOptions),
    Timeline(TweenHandle, usize, bool),
    Play(TweenHandle),
    Reverse(TweenHandle),
    Ramp(TweenHandle, f64, f64),
    Sync(f64),
    Cancel(TweenHandle),
}

#[derive(Debug, Default)]
pub struct RecordingTweens {
    next: u32,
    pub calls: Vec<TweenCall>,
    pub missing: HashSet<Target>,
    pub live: HashSet<TweenHandle>,
    pub headings: HashMap<TweenHandle, Heading>,
    pub rates: HashMap<TweenHandle, f64>,
}

impl RecordingTweens {
    pub fn without(targets: &[Target]) -> Self {
        Self {
            missing: targets.iter().cloned().collect(),
            ..Self::default()
        }
    }

    fn issue(&mut self, target: &Target) -> Option<TweenHandle> {
        if self.missing.contains(target) {
            return None;
        }
        self.next += 1;
        let h = TweenHandle(self.next);
        self.live.insert(h);
        Some(h)
    }

    pub fn animations_of(&self, target: &Target) -> Vec<(Props, TweenOptions)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TweenCall::Animate(_, t, p, o) if t == target => Some((p.clone(), o.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn cancelled(&self) -> Vec<TweenHandle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TweenCall::Cancel(h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl TweenEngine for RecordingTweens {
    fn animate(&mut self, target: &Target, goal: &Props, opts: &TweenOptions) -> Option<TweenHandle> {
        let h = self.issue(target)?;
        self.rates.insert(h, 1.0);
        self.calls
            .push(TweenCall::Animate(h, target.clone(), goal.clone(), opts.clone()));
        Some(h)
    }

    fn animate_from_to(
        &mut self,
        target: &Target,
        from: &Props,
        goal: &Props,
        opts: &TweenOptions,
    ) -> Option<TweenHandle> {
        let h = self.issue(target)?;
        self.calls.push(TweenCall::FromTo(
            h,
            target.clone(),
            from.clone(),
            goal.clone(),
            opts.clone(),
        ));
        Some(h)
    }

    fn timeline(&mut self, steps: &[TimelineStep], paused: bool) -> Option<TweenHandle> {
        let first = steps.first()?;
        let h = self.issue(&first.target)?;
        self.headings
            .insert(h, if paused { Heading::Start } else { Heading::End });
        self.calls.push(TweenCall::Timeline(h, steps.len(), paused));
        Some(h)
    }

    fn play(&mut self, handle: TweenHandle) {
        self.headings.insert(handle, Heading::End);
        self.calls.push(TweenCall::Play(handle));
    }

    fn reverse(&mut self, handle: TweenHandle) {
        self.headings.insert(handle, Heading::Start);
        self.calls.push(TweenCall::Reverse(handle));
    }

    fn ramp_time_scale(&mut self, handle: TweenHandle, rate: f64, duration: f64) {
        self.rates.insert(handle, rate);
        self.calls.push(TweenCall::Ramp(handle, rate, duration));
    }

    fn sync_scroll(&mut self, offset: f64) {
        self.calls.push(TweenCall::Sync(offset));
    }

    fn cancel(&mut self, handle: TweenHandle) {
        self.live.remove(&handle);
        self.calls.push(TweenCall::Cancel(handle));
    }
}

pub type TestController = SiteController<RecordingScroll, RecordingTweens>;

pub fn all_sections() -> SectionTable<&'static str> {
    SectionTable::build(|id| Some(id.dom_id()))
}

pub fn desktop_layout() -> PageLayout {
    PageLayout {
        viewport_width: 1440.0,
        reveal_text_count: 3,
        project_card_count: 4,
    }
}

pub fn mobile_layout() -> PageLayout {
    PageLayout {
        viewport_width: 390.0,
        ..desktop_layout()
    }
}

pub fn controller_with(tweens: RecordingTweens, sections: SectionTable<&'static str>) -> TestController {
    SiteController::new(
        SiteConfig::default(),
        RecordingScroll::default(),
        tweens,
        sections,
        portfolio_core::content::services(),
    )
}

pub fn mounted() -> TestController {
    let mut c = controller_with(RecordingTweens::default(), all_sections());
    c.mount(&desktop_layout()).expect("mount");
    c
}

/// Bounds of a section well below the nav band.
pub fn below() -> Bounds {
    Bounds::new(900.0, 2400.0)
}
