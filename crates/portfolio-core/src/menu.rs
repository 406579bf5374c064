use crate::constants::*;
use crate::engine::{
    props, Ease, PropValue, SmoothScroll, StepKind, Target, TimelineStep, TweenEngine,
    TweenHandle, TweenOptions,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Full-screen menu: a reversible reveal timeline plus scroll suspension.
///
/// While `Open` the smooth-scroll engine is stopped; while `Closed` it runs.
/// Toggling mid-animation is allowed and simply re-aims the timeline.
#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
    timeline: Option<TweenHandle>,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay wipe followed by the staggered link rise.
    pub fn reveal_steps() -> Vec<TimelineStep> {
        vec![
            TimelineStep {
                target: Target::Selector(".menu-overlay"),
                kind: StepKind::To(props([
                    ("visibility", PropValue::Text("visible")),
                    ("clipPath", PropValue::Text(MENU_OVERLAY_CLIP_OPEN)),
                ])),
                options: TweenOptions::new(MENU_OVERLAY_DURATION).ease(Ease::Power4InOut),
                position: None,
            },
            TimelineStep {
                target: Target::Selector(".menu-link span"),
                kind: StepKind::To(props([("y", PropValue::Num(0.0))])),
                options: TweenOptions::new(MENU_LINK_DURATION)
                    .stagger(MENU_LINK_STAGGER)
                    .ease(Ease::Power3Out),
                position: Some("-=0.4"),
            },
        ]
    }

    pub fn attach(&mut self, timeline: Option<TweenHandle>) {
        self.timeline = timeline;
    }

    pub fn timeline(&self) -> Option<TweenHandle> {
        self.timeline
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle<S, T>(&mut self, scroll: &mut S, tweens: &mut T) -> MenuState
    where
        S: SmoothScroll + ?Sized,
        T: TweenEngine + ?Sized,
    {
        self.state = match self.state {
            MenuState::Closed => {
                if let Some(tl) = self.timeline {
                    tweens.play(tl);
                }
                scroll.stop();
                MenuState::Open
            }
            MenuState::Open => {
                if let Some(tl) = self.timeline {
                    tweens.reverse(tl);
                }
                scroll.start();
                MenuState::Closed
            }
        };
        log::debug!("[menu] {:?}", self.state);
        self.state
    }
}
