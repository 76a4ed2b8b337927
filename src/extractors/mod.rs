use crate::error::ImportError;
use crate::model::RecipeRecord;
use scraper::{ElementRef, Html};

mod drink_page;
pub mod rules;

pub use drink_page::DrinkPageExtractor;

pub struct ParsingContext {
    /// Page URL, only used to resolve relative image links. May be empty.
    pub url: String,
    /// Site origin used when `url` is empty or unparsable.
    pub base_url: String,
    pub document: Html,
    pub id: u32,
}

/// A record plus the absolute image URL still to be downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDrink {
    pub record: RecipeRecord,
    pub image_url: Option<String>,
}

pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Result<ExtractedDrink, ImportError>;
}

/// Trimmed text fragments of an element joined by single spaces.
pub fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Elements whose text is never rendered.
const HIDDEN_TEXT_PARENTS: &[&str] = &["script", "style", "template"];

/// Concatenated page text, leaving out scripts, styles and templates.
pub fn visible_text(document: &Html) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let parent = node.parent()?;
            let hidden = parent
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_PARENTS.contains(&el.name()));
            (!hidden).then_some(&**text)
        })
        .collect()
}

/// First element named `name` after `anchor` in document order.
///
/// Unlike a sibling lookup this also crosses into following subtrees, so a
/// list wrapped in a container after its heading is still found.
pub fn find_next_element<'a>(
    document: &'a Html,
    anchor: ElementRef<'a>,
    name: &str,
) -> Option<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != anchor.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}
