use crate::config::SiteConfig;
use crate::engine::{props, Ease, PropValue, Target, TweenEngine, TweenHandle, TweenOptions};
use crate::scroll::ScrollDirection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarqueeDirection {
    #[default]
    Forward,
    Reverse,
}

impl MarqueeDirection {
    pub fn rate(self) -> f64 {
        match self {
            MarqueeDirection::Forward => 1.0,
            MarqueeDirection::Reverse => -1.0,
        }
    }
}

impl From<ScrollDirection> for MarqueeDirection {
    fn from(d: ScrollDirection) -> Self {
        match d {
            ScrollDirection::Down => MarqueeDirection::Forward,
            ScrollDirection::Up => MarqueeDirection::Reverse,
        }
    }
}

/// Infinite horizontal loop whose playback direction follows scrolling.
#[derive(Debug, Default)]
pub struct MarqueeController {
    tween: Option<TweenHandle>,
    direction: MarqueeDirection,
}

impl MarqueeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the loop: shift the duplicated track by one copy per period.
    pub fn start<T: TweenEngine + ?Sized>(
        &mut self,
        tweens: &mut T,
        cfg: &SiteConfig,
    ) -> Option<TweenHandle> {
        let goal = props([("xPercent", PropValue::Num(cfg.marquee_shift_percent))]);
        let opts = TweenOptions::new(cfg.marquee_period)
            .ease(Ease::Linear)
            .repeat_forever();
        self.tween = tweens.animate(&Target::Selector(".marquee-track"), &goal, &opts);
        self.tween
    }

    pub fn tween(&self) -> Option<TweenHandle> {
        self.tween
    }

    pub fn direction(&self) -> MarqueeDirection {
        self.direction
    }

    /// Ease the loop's rate toward the scroll direction. Issued on every
    /// strict offset change, matching the scroll signal cadence.
    pub fn follow<T: TweenEngine + ?Sized>(
        &mut self,
        tweens: &mut T,
        scroll: ScrollDirection,
        ramp: f64,
    ) {
        self.direction = scroll.into();
        if let Some(tween) = self.tween {
            tweens.ramp_time_scale(tween, self.direction.rate(), ramp);
        }
    }
}
