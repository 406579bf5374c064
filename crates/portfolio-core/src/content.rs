//! Static page content. Copy and image paths are opaque payloads for the view.

use crate::sections::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: ServiceId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectKind {
    Mix,
    Event,
    Gallery,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub num: &'static str,
    pub kind: ProjectKind,
    pub youtube_id: Option<&'static str>,
}

impl Project {
    pub fn video_url(&self) -> Option<String> {
        self.youtube_id.map(|id| format!("https://youtu.be/{}", id))
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Afrobeat Beach Mix",
            subtitle: "Toronto, Canada",
            image: "/10.jpg",
            num: "01",
            kind: ProjectKind::Mix,
            youtube_id: Some("4dDCG5MPgQg"),
        },
        Project {
            id: 2,
            title: "Lagos Live Set",
            subtitle: "Afrobeat & Amapiano",
            image: "/5.jpg",
            num: "02",
            kind: ProjectKind::Event,
            youtube_id: Some("JU9wq_zFIAk"),
        },
        Project {
            id: 3,
            title: "Melbourne Sessions",
            subtitle: "3RRR Radio Show",
            image: "/8EDITEDD.jpg",
            num: "03",
            kind: ProjectKind::Event,
            youtube_id: None,
        },
        Project {
            id: 4,
            title: "Festival Vibes",
            subtitle: "Summer 2024",
            image: "/15a.jpg",
            num: "04",
            kind: ProjectKind::Gallery,
            youtube_id: None,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: ServiceId(1),
            title: "Private Events",
            description: "From intimate gatherings to grand celebrations, I bring the perfect soundtrack to your special moments. Birthday parties, anniversaries, house parties: every event gets a custom-curated experience that keeps your guests dancing all night long.",
        },
        Service {
            id: ServiceId(2),
            title: "Club & Festival Sets",
            description: "High-energy performances that command the dance floor. With a signature blend of Afrobeats, Amapiano, R&B, and Dancehall, I create unforgettable nights that leave crowds wanting more. Ready to take your venue to the next level.",
        },
        Service {
            id: ServiceId(3),
            title: "Weddings",
            description: "Your love story deserves the perfect musical backdrop. From the ceremony to the last dance, I craft seamless transitions and read the room to ensure every moment is magical. Specializing in multicultural celebrations that honor diverse traditions.",
        },
        Service {
            id: ServiceId(4),
            title: "Corporate Events",
            description: "Professional entertainment that elevates your brand. Product launches, company parties, networking events: I deliver sophisticated sets that match your corporate vision while keeping the energy exactly where you need it.",
        },
        Service {
            id: ServiceId(5),
            title: "Radio & Podcast",
            description: "Experienced radio host and podcast co-host. Former DJ at 3RRR Radio Melbourne and co-host of Yarns x Vibes podcast. Available for guest appearances, mix features, and collaborative content that amplifies diverse voices and sounds.",
        },
    ]
}

pub const MARQUEE_GENRES: [&str; 6] = [
    "Afrobeats",
    "Amapiano",
    "R&B",
    "Dancehall",
    "Highlife",
    "Fuji",
];

/// Genre labels as laid out on the marquee track: the list repeated `copies`
/// times so a shift of one copy is seamless.
pub fn marquee_track(copies: usize) -> Vec<&'static str> {
    MARQUEE_GENRES
        .iter()
        .copied()
        .cycle()
        .take(MARQUEE_GENRES.len() * copies)
        .collect()
}

/// Menu overlay links, in display order.
pub const MENU_LINKS: [(&str, SectionId); 4] = [
    ("Home", SectionId::Hero),
    ("Mixes", SectionId::Work),
    ("About", SectionId::About),
    ("Book", SectionId::Contact),
];

/// Footer "Navigate" column links, in display order.
pub const FOOTER_LINKS: [(&str, SectionId); 4] = [
    ("Home", SectionId::Hero),
    ("About", SectionId::About),
    ("Mixes", SectionId::Work),
    ("Services", SectionId::Services),
];
