use super::rules::{resolve_image_src, resolve_image_url, resolve_title};
use super::{
    element_text, find_next_element, visible_text, ExtractedDrink, Extractor, ParsingContext,
};
use crate::error::ImportError;
use crate::model::RecipeRecord;
use crate::vocabulary::{
    first_match, title_case, ALCOHOLIC, ATTRIBUTES, INGREDIENTS_LABEL, NON_ALCOHOLIC, ORIGINS,
    PREPARATION_LABEL, SECTION_HEADING, VESSELS,
};
use log::debug;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

/// Extracts drink recipes from loosely structured blog pages.
///
/// Only the title is mandatory. Every other field is best effort and stays
/// empty when the page does not provide it.
pub struct DrinkPageExtractor;

impl DrinkPageExtractor {
    fn section_heading<'a>(&self, document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
        let selector = Selector::parse(SECTION_HEADING).ok()?;
        document
            .select(&selector)
            .find(|heading| element_text(*heading) == label)
    }

    /// The list of type `list_tag` following the heading labelled `label`.
    fn section_list<'a>(
        &self,
        document: &'a Html,
        label: &str,
        list_tag: &str,
    ) -> Option<ElementRef<'a>> {
        let heading = self.section_heading(document, label)?;
        find_next_element(document, heading, list_tag)
    }

    fn list_items(&self, list: ElementRef) -> Vec<String> {
        let Ok(selector) = Selector::parse("li") else {
            return Vec::new();
        };
        list.select(&selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Paragraphs and quotes between the ingredient list and the next section.
    fn tips(&self, ingredients: ElementRef) -> Vec<String> {
        let mut tips = Vec::new();

        for sibling in ingredients.next_siblings().filter_map(ElementRef::wrap) {
            match sibling.value().name() {
                name if name == SECTION_HEADING => break,
                "p" => {
                    let text = element_text(sibling);
                    if text.chars().count() > 20 {
                        tips.push(text);
                    }
                }
                "blockquote" => {
                    let text = element_text(sibling);
                    if !text.is_empty() {
                        tips.push(text);
                    }
                }
                _ => {}
            }
        }

        tips
    }

    /// Origin used to resolve root-relative links.
    fn origin(&self, context: &ParsingContext) -> String {
        Url::parse(&context.url)
            .ok()
            .filter(|url| url.has_host())
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_else(|| context.base_url.clone())
    }
}

/// Category from the lower-cased page text.
///
/// "não alcoólico" also contains "alcoólico", so the negated form is checked
/// second and overrides.
pub fn category(page_text: &str) -> String {
    if !page_text.contains(&ALCOHOLIC.to_lowercase()) {
        return String::new();
    }
    if page_text.contains(&NON_ALCOHOLIC.to_lowercase()) {
        NON_ALCOHOLIC.to_string()
    } else {
        ALCOHOLIC.to_string()
    }
}

/// Every attribute term found anywhere in the lower-cased page text.
pub fn attributes(page_text: &str) -> Vec<String> {
    ATTRIBUTES
        .iter()
        .filter(|term| page_text.contains(*term))
        .map(|term| title_case(term))
        .collect()
}

impl Extractor for DrinkPageExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<ExtractedDrink, ImportError> {
        debug!("Attempting to extract drink recipe");
        let document = &context.document;

        let Some(title) = resolve_title(document) else {
            debug!("No title rule matched");
            return Err(ImportError::TitleNotFound);
        };

        let page_text = visible_text(document).to_lowercase();

        let mut record = RecipeRecord {
            id: context.id,
            category: category(&page_text),
            attributes: attributes(&page_text),
            vessel: first_match(&page_text, VESSELS).unwrap_or_default(),
            origin: first_match(&page_text, ORIGINS).unwrap_or_default(),
            ..Default::default()
        };

        if let Some(list) = self.section_list(document, INGREDIENTS_LABEL, "ul") {
            record.ingredients = self.list_items(list);
            record.tips = self.tips(list);
        }

        if let Some(list) = self.section_list(document, PREPARATION_LABEL, "ol") {
            record.steps = self.list_items(list);
        }

        let image_url = resolve_image_src(document, &title)
            .map(|src| resolve_image_url(&src, &self.origin(context)));

        debug!("Recipe title: {}", title);
        debug!("Ingredients count: {}", record.ingredients.len());
        debug!("Steps count: {}", record.steps.len());

        record.title = title;
        Ok(ExtractedDrink { record, image_url })
    }
}
