//! DOM overlays: the intro question, the dead card, the glow banner, and
//! the scrub HUD. All lookups are by element id; a missing element is a
//! no-op so the scene keeps running against a stripped-down page.

use web_sys as web;

fn show_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

fn hide_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn show_intro(document: &web::Document) {
    show_by_id(document, "intro-overlay");
}

#[inline]
pub fn hide_intro(document: &web::Document) {
    hide_by_id(document, "intro-overlay");
}

#[inline]
pub fn show_dead(document: &web::Document) {
    show_by_id(document, "dead-overlay");
}

#[inline]
pub fn show_glow_banner(document: &web::Document) {
    show_by_id(document, "glow-banner");
}

/// Refresh the HUD counter line.
pub fn set_scrub_count(document: &web::Document, count: u32, target: u32) {
    if let Some(el) = document.get_element_by_id("scrub-count") {
        el.set_text_content(Some(&format!("Scrubs: {count} / {target}")));
    }
}
