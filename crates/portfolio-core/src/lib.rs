//! Platform-free logic for the portfolio page: scroll orchestration, menu,
//! marquee, accordion, reveal plan and booking form.
//!
//! Nothing here touches the DOM. The web front end implements the
//! [`SmoothScroll`] and [`TweenEngine`] capabilities and forwards input to a
//! [`SiteController`].

pub mod accordion;
pub mod config;
pub mod constants;
pub mod content;
pub mod controller;
pub mod engine;
pub mod form;
pub mod frame;
pub mod magnetic;
pub mod marquee;
pub mod menu;
pub mod registry;
pub mod reveal;
pub mod scroll;
pub mod sections;

pub use accordion::Accordion;
pub use config::{smooth_scroll_ease, SiteConfig, SmoothScrollOptions};
pub use content::{Project, ProjectKind, Service, ServiceId};
pub use controller::{ContactModalState, MountError, SiteController, ViewState};
pub use engine::{
    Ease, Prop, PropValue, Props, ScrollTarget, Scrub, SmoothScroll, StepKind, Target,
    TimelineStep, TweenEngine, TweenHandle, TweenOptions, ViewportTrigger,
};
pub use form::{
    ContactForm, ContactRequest, EventType, FieldErrors, FormError, FormSubmissionState,
    SubmissionOutcome,
};
pub use magnetic::ButtonRect;
pub use marquee::MarqueeDirection;
pub use menu::MenuState;
pub use registry::{AnimationKey, AnimationRegistry};
pub use reveal::PageLayout;
pub use scroll::{Bounds, ScrollDirection, ScrollState};
pub use sections::{SectionId, SectionTable};
