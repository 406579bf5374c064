use crate::config::SiteConfig;
use crate::constants::{ACCORDION_ICON_DURATION, ACCORDION_ICON_OPEN_DEG};
use crate::content::{Service, ServiceId};
use crate::engine::{props, Ease, PropValue, Target, TweenEngine, TweenOptions};
use crate::registry::{AnimationKey, AnimationRegistry};

/// Single-open services list.
#[derive(Debug)]
pub struct Accordion {
    services: Vec<Service>,
    open_id: Option<ServiceId>,
}

impl Accordion {
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services,
            open_id: None,
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn open_id(&self) -> Option<ServiceId> {
        self.open_id
    }

    pub fn is_open(&self, id: ServiceId) -> bool {
        self.open_id == Some(id)
    }

    /// Toggle `id`, collapsing whichever other panel is open first. All
    /// tweens are fire-and-forget and run concurrently.
    pub fn select<T: TweenEngine + ?Sized>(
        &mut self,
        id: ServiceId,
        tweens: &mut T,
        registry: &mut AnimationRegistry,
        cfg: &SiteConfig,
    ) -> Option<ServiceId> {
        if !self.services.iter().any(|s| s.id == id) {
            log::debug!("[accordion] unknown service {:?}", id);
            return self.open_id;
        }

        if let Some(other) = self.open_id.filter(|&open| open != id) {
            collapse(other, tweens, registry, cfg);
        }

        if self.open_id == Some(id) {
            collapse(id, tweens, registry, cfg);
            self.open_id = None;
        } else {
            expand(id, tweens, registry, cfg);
            self.open_id = Some(id);
        }
        self.open_id
    }
}

fn panel_key(id: ServiceId) -> AnimationKey {
    AnimationKey::indexed("accordion-panel", id.0)
}

fn icon_key(id: ServiceId) -> AnimationKey {
    AnimationKey::indexed("accordion-icon", id.0)
}

fn expand<T: TweenEngine + ?Sized>(
    id: ServiceId,
    tweens: &mut T,
    registry: &mut AnimationRegistry,
    cfg: &SiteConfig,
) {
    let panel = tweens.animate(
        &Target::ServiceDetails(id),
        &props([("height", PropValue::Auto), ("opacity", PropValue::Num(1.0))]),
        &TweenOptions::new(cfg.accordion_open_duration).ease(Ease::Power2Out),
    );
    registry.track(tweens, panel_key(id), panel);
    let icon = tweens.animate(
        &Target::ServiceIcon(id),
        &props([("rotation", PropValue::Num(ACCORDION_ICON_OPEN_DEG))]),
        &TweenOptions::new(ACCORDION_ICON_DURATION),
    );
    registry.track(tweens, icon_key(id), icon);
}

fn collapse<T: TweenEngine + ?Sized>(
    id: ServiceId,
    tweens: &mut T,
    registry: &mut AnimationRegistry,
    cfg: &SiteConfig,
) {
    let panel = tweens.animate(
        &Target::ServiceDetails(id),
        &props([("height", PropValue::Num(0.0)), ("opacity", PropValue::Num(0.0))]),
        &TweenOptions::new(cfg.accordion_close_duration).ease(Ease::Power2Out),
    );
    registry.track(tweens, panel_key(id), panel);
    let icon = tweens.animate(
        &Target::ServiceIcon(id),
        &props([("rotation", PropValue::Num(0.0))]),
        &TweenOptions::new(ACCORDION_ICON_DURATION),
    );
    registry.track(tweens, icon_key(id), icon);
}
