//! Page sections and the id -> element lookup built once at mount.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Work,
    About,
    Services,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Work,
        SectionId::About,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    /// Parse an in-page anchor such as `#work`.
    pub fn from_href(href: &str) -> Option<SectionId> {
        let id = href.strip_prefix('#')?;
        SectionId::ALL.into_iter().find(|s| s.dom_id() == id)
    }

    /// Sections the nav bar turns dark over (the gallery and the footer).
    pub fn is_dark(self) -> bool {
        matches!(self, SectionId::Work | SectionId::Contact)
    }
}

/// Section elements resolved once; unresolved sections stay `None`.
#[derive(Clone, Debug)]
pub struct SectionTable<E> {
    slots: [Option<E>; 5],
}

impl<E> SectionTable<E> {
    pub fn build(mut resolve: impl FnMut(SectionId) -> Option<E>) -> Self {
        let slots = SectionId::ALL.map(|id| {
            let el = resolve(id);
            if el.is_none() {
                log::warn!("[sections] #{} not mounted", id.dom_id());
            }
            el
        });
        Self { slots }
    }

    pub fn empty() -> Self {
        Self {
            slots: [None, None, None, None, None],
        }
    }

    #[inline]
    pub fn get(&self, id: SectionId) -> Option<&E> {
        self.slots[id as usize].as_ref()
    }

    /// Mounted sections the nav bar should be dark over.
    pub fn dark_sections(&self) -> SmallVec<[(SectionId, &E); 2]> {
        SectionId::ALL
            .into_iter()
            .filter(|id| id.is_dark())
            .filter_map(|id| self.get(id).map(|e| (id, e)))
            .collect()
    }
}
