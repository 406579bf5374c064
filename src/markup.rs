// HTML for the content-driven parts of the page, rendered once at mount.
// Pure string building; host tests include this file directly.

use portfolio_core::content::{marquee_track, FOOTER_LINKS, MENU_LINKS};
use portfolio_core::constants::MARQUEE_COPIES;
use portfolio_core::{Project, SectionId, Service, ServiceId};

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn marquee_html() -> String {
    marquee_track(MARQUEE_COPIES)
        .iter()
        .map(|g| format!("<span>{}</span>", escape_html(g)))
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

pub fn project_card_html(p: &Project) -> String {
    let img = format!(
        "<img src=\"{}\" alt=\"{}\" />",
        escape_html(p.image),
        escape_html(p.title)
    );
    let media = match p.video_url() {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            url, img
        ),
        None => img,
    };
    format!(
        "<div class=\"project-card\">{}<div class=\"project-info\"><div><span>{}</span><span class=\"project-subtitle\">{}</span></div><span class=\"project-num\">{}</span></div></div>",
        media,
        escape_html(p.title),
        escape_html(p.subtitle),
        escape_html(p.num)
    )
}

pub fn service_item_html(s: &Service) -> String {
    let ServiceId(id) = s.id;
    format!(
        "<div class=\"service-item\" data-service-id=\"{id}\"><div class=\"service-header\"><h3>{}</h3><div id=\"service-icon-{id}\" class=\"service-icon\">+</div></div><div id=\"service-details-{id}\" class=\"service-details\"><div class=\"service-text-wrapper\"><p>{}</p></div></div></div>",
        escape_html(s.title),
        escape_html(s.description),
    )
}

fn section_link_html(label: &str, section: SectionId, class: &str) -> String {
    format!(
        "<a href=\"#{}\" class=\"{}\"><span>{}</span></a>",
        section.dom_id(),
        class,
        escape_html(label)
    )
}

pub fn menu_links_html() -> String {
    MENU_LINKS
        .iter()
        .map(|(label, id)| section_link_html(label, *id, "menu-link"))
        .collect()
}

pub fn footer_links_html() -> String {
    FOOTER_LINKS
        .iter()
        .map(|(label, id)| section_link_html(label, *id, "smooth-scroll-link"))
        .collect()
}
