//! Ordered rule tables for the title and image lookups.
//!
//! Each table is evaluated top to bottom and the first rule producing a value
//! wins. Rules can be applied on their own, which keeps the priority order
//! testable one entry at a time.

use super::element_text;
use crate::vocabulary::{COCKTAIL_NAMES, IMAGE_SRC_KEYWORDS};
use log::debug;
use scraper::{Html, Selector};
use std::ops::RangeInclusive;

const TITLE_LENGTH: RangeInclusive<usize> = 4..=99;
const COCKTAIL_TITLE_LENGTH: RangeInclusive<usize> = 5..=50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    /// Text of the first element matching the selector, if its length fits.
    Selector(&'static str),
    /// First heading or emphasis naming a known cocktail.
    CocktailName,
}

pub const TITLE_RULES: &[TitleRule] = &[
    TitleRule::Selector("h1"),
    TitleRule::Selector("h1.entry-title"),
    TitleRule::Selector("h1.post-title"),
    TitleRule::Selector(".entry-title"),
    TitleRule::Selector(".post-title"),
    TitleRule::Selector("h2"),
    TitleRule::Selector("h3"),
    TitleRule::CocktailName,
];

impl TitleRule {
    pub fn apply(&self, document: &Html) -> Option<String> {
        match self {
            TitleRule::Selector(css) => {
                let selector = Selector::parse(css).ok()?;
                let text = element_text(document.select(&selector).next()?);
                TITLE_LENGTH
                    .contains(&text.chars().count())
                    .then_some(text)
            }
            TitleRule::CocktailName => {
                let selector = Selector::parse("h1, h2, h3, h4, strong, b").ok()?;
                document.select(&selector).map(element_text).find(|text| {
                    let lower = text.to_lowercase();
                    COCKTAIL_NAMES.iter().any(|name| lower.contains(name))
                        && COCKTAIL_TITLE_LENGTH.contains(&text.chars().count())
                })
            }
        }
    }
}

/// Resolves the page title from [`TITLE_RULES`].
pub fn resolve_title(document: &Html) -> Option<String> {
    TITLE_RULES.iter().find_map(|rule| {
        let title = rule.apply(document)?;
        debug!("Found title using {:?}", rule);
        Some(title)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRule {
    /// `src` of the first image matching the selector.
    Selector(&'static str),
    /// First image whose `src` mentions a drink keyword or the title.
    SrcKeyword,
}

pub const IMAGE_RULES: &[ImageRule] = &[
    ImageRule::Selector("img.wp-post-image"),
    ImageRule::Selector("img[src*=\"drink\"]"),
    ImageRule::Selector("img[src*=\"cocktail\"]"),
    ImageRule::SrcKeyword,
];

impl ImageRule {
    pub fn apply(&self, document: &Html, title: &str) -> Option<String> {
        match self {
            ImageRule::Selector(css) => {
                let selector = Selector::parse(css).ok()?;
                let src = document.select(&selector).next()?.value().attr("src")?;
                (!src.is_empty()).then(|| src.to_string())
            }
            ImageRule::SrcKeyword => {
                let selector = Selector::parse("img[src]").ok()?;
                let title = title.to_lowercase();
                document
                    .select(&selector)
                    .filter_map(|img| img.value().attr("src"))
                    .find(|src| {
                        let src = src.to_lowercase();
                        IMAGE_SRC_KEYWORDS.iter().any(|k| src.contains(k))
                            || (!title.is_empty() && src.contains(&title))
                    })
                    .map(str::to_string)
            }
        }
    }
}

/// Resolves the image `src` from [`IMAGE_RULES`].
pub fn resolve_image_src(document: &Html, title: &str) -> Option<String> {
    IMAGE_RULES.iter().find_map(|rule| {
        let src = rule.apply(document, title)?;
        debug!("Found image {} using {:?}", src, rule);
        Some(src)
    })
}

/// Makes protocol-relative and root-relative references absolute.
pub fn resolve_image_url(src: &str, origin: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{}{src}", origin.trim_end_matches('/'))
    } else {
        src.to_string()
    }
}
