// Host-side tests for the generated page markup.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use markup::*;
use portfolio_core::content::{projects, services, MARQUEE_GENRES};
use portfolio_core::constants::MARQUEE_COPIES;
use pretty_assertions::assert_eq;

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"R&B <live> "set" 'mix'"#),
        "R&amp;B &lt;live&gt; &quot;set&quot; &#39;mix&#39;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn marquee_repeats_every_genre() {
    let html = marquee_html();
    assert_eq!(html.matches("<span>").count(), MARQUEE_GENRES.len() * MARQUEE_COPIES);
    assert!(html.contains("<span>R&amp;B</span>"));
}

#[test]
fn project_cards_link_only_when_a_video_exists() {
    let all = projects();
    let with_video = project_card_html(&all[0]);
    assert!(with_video.contains("href=\"https://youtu.be/4dDCG5MPgQg\""));
    assert!(with_video.contains("class=\"project-card\""));
    assert!(with_video.contains("<span class=\"project-num\">01</span>"));

    let without = project_card_html(&all[2]);
    assert!(!without.contains("<a "));
    assert!(without.contains("src=\"/8EDITEDD.jpg\""));
}

#[test]
fn service_items_carry_accordion_hooks() {
    let s = &services()[1];
    let html = service_item_html(s);
    assert!(html.contains("data-service-id=\"2\""));
    assert!(html.contains("id=\"service-icon-2\""));
    assert!(html.contains("id=\"service-details-2\""));
    assert!(html.contains("Club &amp; Festival Sets"));
}

#[test]
fn menu_and_footer_links_point_at_sections() {
    let menu = menu_links_html();
    assert_eq!(menu.matches("class=\"menu-link\"").count(), 4);
    assert!(menu.contains("href=\"#work\""));
    assert!(menu.contains("href=\"#contact\""));

    let footer = footer_links_html();
    assert_eq!(footer.matches("class=\"smooth-scroll-link\"").count(), 4);
    assert!(footer.contains("href=\"#services\""));
    assert!(!footer.contains("href=\"#contact\""));
}
