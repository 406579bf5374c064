//! The page-level orchestrator. One instance owns both engines and every
//! sub-controller; the view layer reads `ViewState` and forwards input.

use crate::accordion::Accordion;
use crate::config::SiteConfig;
use crate::content::{Service, ServiceId};
use crate::engine::{
    props, PropValue, ScrollTarget, SmoothScroll, Target, TweenEngine, TweenOptions,
};
use crate::constants::MAGNETIC_DURATION;
use crate::form::ContactForm;
use crate::frame::{DeferredQueue, FramePump};
use crate::magnetic::{magnetic_offset, ButtonRect};
use crate::marquee::MarqueeController;
use crate::menu::MenuController;
use crate::registry::{AnimationKey, AnimationRegistry};
use crate::reveal::{self, PageLayout};
use crate::scroll::{nav_is_dark, Bounds, ScrollState};
use crate::sections::{SectionId, SectionTable};
use glam::Vec2;
use thiserror::Error;

const MENU_TIMELINE: AnimationKey = AnimationKey::fixed("menu-timeline");
const MARQUEE_LOOP: AnimationKey = AnimationKey::fixed("marquee-loop");
const MAGNETIC_BUTTON: AnimationKey = AnimationKey::fixed("magnetic-button");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactModalState {
    #[default]
    Closed,
    Open,
}

/// Everything the view needs to style the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub nav_dark: bool,
    pub is_menu_open: bool,
    pub open_service_id: Option<ServiceId>,
    pub is_contact_open: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("controller is already mounted")]
    AlreadyMounted,
    #[error("controller was torn down")]
    TornDown,
}

pub struct SiteController<S: SmoothScroll, T: TweenEngine> {
    cfg: SiteConfig,
    scroll: S,
    tweens: T,
    sections: SectionTable<S::Element>,
    registry: AnimationRegistry,
    pump: FramePump,
    pending_scrolls: DeferredQueue<SectionId>,
    scroll_state: ScrollState,
    nav_dark: bool,
    menu: MenuController,
    marquee: MarqueeController,
    accordion: Accordion,
    contact: ContactModalState,
    form: ContactForm,
    mounted: bool,
    torn_down: bool,
}

impl<S: SmoothScroll, T: TweenEngine> SiteController<S, T> {
    pub fn new(
        cfg: SiteConfig,
        scroll: S,
        tweens: T,
        sections: SectionTable<S::Element>,
        services: Vec<Service>,
    ) -> Self {
        Self {
            cfg,
            scroll,
            tweens,
            sections,
            registry: AnimationRegistry::new(),
            pump: FramePump::new(),
            pending_scrolls: DeferredQueue::default(),
            scroll_state: ScrollState::default(),
            nav_dark: false,
            menu: MenuController::new(),
            marquee: MarqueeController::new(),
            accordion: Accordion::new(services),
            contact: ContactModalState::Closed,
            form: ContactForm::new(),
            mounted: false,
            torn_down: false,
        }
    }

    /// Build the timelines and triggers and start the frame pump. Returns the
    /// number of animations registered.
    pub fn mount(&mut self, layout: &PageLayout) -> Result<usize, MountError> {
        if self.torn_down {
            return Err(MountError::TornDown);
        }
        if self.mounted {
            return Err(MountError::AlreadyMounted);
        }

        let menu_tl = self.tweens.timeline(&MenuController::reveal_steps(), true);
        if menu_tl.is_none() {
            log::warn!("[mount] menu overlay missing; menu opens without animation");
        }
        let menu_tl = self.registry.track(&mut self.tweens, MENU_TIMELINE, menu_tl);
        self.menu.attach(menu_tl);

        let marquee = self.marquee.start(&mut self.tweens, &self.cfg);
        self.registry.track(&mut self.tweens, MARQUEE_LOOP, marquee);

        reveal::install(&mut self.tweens, &mut self.registry, layout, &self.cfg);

        self.pump.start();
        self.mounted = true;
        log::info!("[mount] {} animations registered", self.registry.len());
        Ok(self.registry.len())
    }

    /// Handle a native scroll signal: direction tracking, marquee rate and
    /// nav mode. `tracked` are the current bounds of the dark sections.
    pub fn on_scroll<I>(&mut self, offset: f64, tracked: I) -> bool
    where
        I: IntoIterator<Item = Bounds>,
    {
        if let Some(direction) = self.scroll_state.observe(offset) {
            self.marquee
                .follow(&mut self.tweens, direction, self.cfg.marquee_rate_ramp);
        }
        let dark = nav_is_dark(tracked, self.cfg.nav_height);
        if dark != self.nav_dark {
            log::debug!("[nav] dark={}", dark);
        }
        self.nav_dark = dark;
        dark
    }

    /// One display frame. Returns how many deferred scrolls fired.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        if self.pump.pump(now_ms, &mut self.scroll, &mut self.tweens).is_none() {
            return 0;
        }
        let due = self.pending_scrolls.take_due(now_ms);
        for id in &due {
            if let Some(el) = self.sections.get(*id) {
                self.scroll.scroll_to(ScrollTarget::Element(el));
            }
        }
        due.len()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle(&mut self.scroll, &mut self.tweens);
        self.menu.is_open()
    }

    /// Menu link: close the menu if open, then scroll to the section once the
    /// settle delay has passed since `now_ms`, the click time on the frame
    /// clock. Unmounted sections are ignored.
    pub fn navigate_to(&mut self, id: SectionId, now_ms: f64) {
        if self.menu.is_open() {
            self.toggle_menu();
        }
        if self.sections.get(id).is_none() {
            log::debug!("[nav] #{} not mounted; ignoring", id.dom_id());
            return;
        }
        let due = now_ms + self.cfg.settle_delay_ms;
        self.pending_scrolls.schedule(due, id);
    }

    /// Footer link: scroll straight to the section.
    pub fn jump_to(&mut self, id: SectionId) {
        match self.sections.get(id) {
            Some(el) => self.scroll.scroll_to(ScrollTarget::Element(el)),
            None => log::debug!("[nav] #{} not mounted; ignoring", id.dom_id()),
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(ScrollTarget::Offset(0.0));
    }

    pub fn select_service(&mut self, id: ServiceId) -> Option<ServiceId> {
        self.accordion
            .select(id, &mut self.tweens, &mut self.registry, &self.cfg)
    }

    /// Pull the menu button toward the pointer while hovering it.
    pub fn magnetic_pull(&mut self, pointer: Vec2, button: &ButtonRect) {
        let offset = magnetic_offset(pointer, button, self.cfg.magnetic_strength);
        self.move_menu_button(offset);
    }

    pub fn magnetic_release(&mut self) {
        self.move_menu_button(Vec2::ZERO);
    }

    fn move_menu_button(&mut self, offset: Vec2) {
        let handle = self.tweens.animate(
            &Target::MenuButton,
            &props([
                ("x", PropValue::Num(offset.x as f64)),
                ("y", PropValue::Num(offset.y as f64)),
            ]),
            &TweenOptions::new(MAGNETIC_DURATION),
        );
        self.registry
            .track(&mut self.tweens, MAGNETIC_BUTTON, handle);
    }

    pub fn open_contact(&mut self) {
        self.contact = ContactModalState::Open;
    }

    pub fn close_contact(&mut self) {
        self.contact = ContactModalState::Closed;
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            nav_dark: self.nav_dark,
            is_menu_open: self.menu.is_open(),
            open_service_id: self.accordion.open_id(),
            is_contact_open: self.contact == ContactModalState::Open,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.cfg
    }

    pub fn sections(&self) -> &SectionTable<S::Element> {
        &self.sections
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll_state
    }

    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    pub fn scroll_engine(&self) -> &S {
        &self.scroll
    }

    pub fn tween_engine(&self) -> &T {
        &self.tweens
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Cancel every animation and trigger, drop pending scrolls, stop the
    /// pump and release the smooth-scroll engine. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let cancelled = self.registry.cancel_all(&mut self.tweens);
        let dropped = self.pending_scrolls.clear();
        self.pump.stop();
        self.scroll.destroy();
        self.mounted = false;
        self.torn_down = true;
        log::info!(
            "[teardown] cancelled {} animations, dropped {} pending scrolls",
            cancelled,
            dropped
        );
    }
}
