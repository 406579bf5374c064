//! Intro loader, parallax, reveal-on-scroll and the pinned gallery.

use crate::config::SiteConfig;
use crate::constants::GALLERY_PIN_DISTANCE;
use crate::engine::{
    props, Ease, PropValue, Scrub, StepKind, Target, TimelineStep, TweenEngine, TweenOptions,
    ViewportTrigger,
};
use crate::registry::{AnimationKey, AnimationRegistry};

/// Element counts and viewport size measured once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    pub viewport_width: f64,
    pub reveal_text_count: usize,
    pub project_card_count: usize,
}

pub fn intro_steps() -> Vec<TimelineStep> {
    vec![
        TimelineStep {
            target: Target::Selector(".loader-bar"),
            kind: StepKind::To(props([("width", PropValue::Text("100%"))])),
            options: TweenOptions::new(1.5).ease(Ease::Power2InOut),
            position: None,
        },
        TimelineStep {
            target: Target::Selector(".loader"),
            kind: StepKind::To(props([("yPercent", PropValue::Num(-100.0))])),
            options: TweenOptions::new(0.8).ease(Ease::Power4InOut),
            position: None,
        },
        TimelineStep {
            target: Target::Selector(".hero-img"),
            kind: StepKind::From(props([
                ("scale", PropValue::Num(1.2)),
                ("opacity", PropValue::Num(0.0)),
            ])),
            options: TweenOptions::new(1.5).ease(Ease::Power2Out),
            position: Some("-=0.4"),
        },
        TimelineStep {
            target: Target::Selector(".hero-line span"),
            kind: StepKind::To(props([("y", PropValue::Num(0.0))])),
            options: TweenOptions::new(1.0).stagger(0.1).ease(Ease::Power4Out),
            position: Some("-=1"),
        },
    ]
}

/// Horizontal travel of the card strip: every card but the first slides out.
pub fn gallery_shift_percent(cards: usize) -> f64 {
    -100.0 * cards.saturating_sub(1) as f64
}

/// Register every scroll-driven decoration. Returns how many were installed.
pub fn install<T: TweenEngine + ?Sized>(
    tweens: &mut T,
    registry: &mut AnimationRegistry,
    layout: &PageLayout,
    cfg: &SiteConfig,
) -> usize {
    let before = registry.len();

    let intro = tweens.timeline(&intro_steps(), false);
    registry.track(tweens, AnimationKey::fixed("intro-timeline"), intro);

    let parallax = tweens.animate(
        &Target::Selector(".hero-img"),
        &props([("yPercent", PropValue::Num(30.0))]),
        &TweenOptions::scrubbed(
            ViewportTrigger::on(Target::Selector(".hero"))
                .start("top top")
                .end("bottom top")
                .scrub(Scrub::Locked),
        ),
    );
    registry.track(tweens, AnimationKey::fixed("hero-parallax"), parallax);

    for i in 0..layout.reveal_text_count {
        let target = Target::Nth(".reveal-text", i);
        let handle = tweens.animate_from_to(
            &target,
            &props([("opacity", PropValue::Num(0.0)), ("y", PropValue::Num(50.0))]),
            &props([("opacity", PropValue::Num(1.0)), ("y", PropValue::Num(0.0))]),
            &TweenOptions::new(1.0)
                .ease(Ease::Power3Out)
                .trigger(ViewportTrigger::on(target.clone()).start("top 85%")),
        );
        registry.track(tweens, AnimationKey::indexed("reveal-text", i), handle);
    }

    let image = tweens.animate_from_to(
        &Target::Selector(".reveal-image-wrapper img"),
        &props([("scale", PropValue::Num(1.4))]),
        &props([("scale", PropValue::Num(1.0))]),
        &TweenOptions::scrubbed(
            ViewportTrigger::on(Target::Selector(".reveal-image-wrapper"))
                .start("top bottom")
                .end("bottom top")
                .scrub(Scrub::Locked),
        ),
    );
    registry.track(tweens, AnimationKey::fixed("about-image"), image);

    if cfg.is_desktop(layout.viewport_width) && layout.project_card_count > 0 {
        let gallery = tweens.animate(
            &Target::Selector(".project-card"),
            &props([(
                "xPercent",
                PropValue::Num(gallery_shift_percent(layout.project_card_count)),
            )]),
            &TweenOptions::scrubbed(
                ViewportTrigger::on(Target::Selector(".work"))
                    .end(GALLERY_PIN_DISTANCE)
                    .scrub(Scrub::Smoothed(1.0))
                    .pinned(),
            ),
        );
        registry.track(tweens, AnimationKey::fixed("gallery-pin"), gallery);
    } else {
        log::debug!(
            "[reveal] gallery pin skipped at width {}",
            layout.viewport_width
        );
    }

    let cta = tweens.animate_from_to(
        &Target::Selector(".footer-cta span"),
        &props([("y", PropValue::Num(100.0)), ("opacity", PropValue::Num(0.0))]),
        &props([("y", PropValue::Num(0.0)), ("opacity", PropValue::Num(1.0))]),
        &TweenOptions::new(1.0)
            .stagger(0.1)
            .immediate_render(false)
            .trigger(
                ViewportTrigger::on(Target::Selector(".footer-top"))
                    .start("top 85%")
                    .toggle_actions("play none none none"),
            ),
    );
    registry.track(tweens, AnimationKey::fixed("footer-cta"), cta);

    let cols = tweens.animate_from_to(
        &Target::Selector(".footer-col"),
        &props([("y", PropValue::Num(50.0)), ("opacity", PropValue::Num(0.0))]),
        &props([("y", PropValue::Num(0.0)), ("opacity", PropValue::Num(1.0))]),
        &TweenOptions::new(1.0)
            .stagger(0.1)
            .immediate_render(false)
            .trigger(ViewportTrigger::on(Target::Selector(".footer-grid")).start("top 90%")),
    );
    registry.track(tweens, AnimationKey::fixed("footer-cols"), cols);

    registry.len() - before
}
