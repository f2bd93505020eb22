// src/core/html.rs
//
// Small helpers over `scraper`: class-list selectors and text content.

use scraper::{ElementRef, Selector};

use crate::error::ExtractError;

/// CSS for a class lookup.
///
/// A single class is membership: `"flight-no"` → `".flight-no"`, and with a
/// tag, `span` + `"time"` → `"span.time"`. Several classes must equal the
/// whole attribute value: `"info-row col-12"` → `[class="info-row col-12"]`,
/// so `info-row col-12 d-none` or `col-12 info-row` do not match.
pub fn class_css(tag: Option<&str>, classes: &str) -> String {
    let tag = tag.unwrap_or("");
    let classes = classes.trim();
    if classes.contains(char::is_whitespace) {
        format!("{tag}[class=\"{}\"]", classes.replace('"', "\\\""))
    } else {
        format!("{tag}.{classes}")
    }
}

pub fn class_selector(tag: Option<&str>, classes: &str) -> Result<Selector, ExtractError> {
    let css = class_css(tag, classes);
    Selector::parse(&css).map_err(|e| ExtractError::Selector {
        selector: css.clone(),
        reason: e.to_string(),
    })
}

/// All descendant text, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First matching descendant's text, ends trimmed.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(|hit| text_of(hit).trim().to_string())
}
