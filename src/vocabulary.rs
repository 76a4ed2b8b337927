//! Fixed keyword tables used by the normalizer and the field extractor.
//!
//! All scans are plain substring searches over lower-cased text, evaluated in
//! table order.

/// Heading text anchoring the ingredient list.
pub const INGREDIENTS_LABEL: &str = "Ingredientes";

/// Heading text anchoring the preparation steps.
pub const PREPARATION_LABEL: &str = "Preparo";

/// Heading tag used for section labels.
pub const SECTION_HEADING: &str = "h3";

pub const ALCOHOLIC: &str = "Alcoólico";
pub const NON_ALCOHOLIC: &str = "Não Alcoólico";

/// Drink characteristics, reported title-cased.
pub const ATTRIBUTES: &[&str] = &[
    "clássico",
    "forte",
    "seco",
    "doce",
    "amargo",
    "refrescante",
    "cremoso",
    "frutado",
    "tropical",
    "gelado",
];

/// Serving vessels, most specific first.
pub const VESSELS: &[&str] = &[
    "taça de coquetel",
    "taça martini",
    "taça",
    "copo",
    "mixing glass",
    "rocks glass",
    "highball",
    "old fashioned",
];

pub const ORIGINS: &[&str] = &[
    "estados unidos",
    "brasil",
    "cuba",
    "inglaterra",
    "frança",
    "itália",
    "méxico",
    "argentina",
    "peru",
    "jamaica",
];

/// Drink names that identify a heading as the recipe title.
pub const COCKTAIL_NAMES: &[&str] = &[
    "martini",
    "caipirinha",
    "mojito",
    "piña",
    "manhattan",
    "cosmopolitan",
];

/// Measures and garnish words marking a plain-text line as an ingredient.
pub const UNIT_KEYWORDS: &[&str] = &["dose", "gota", "cubo", "azeitona", "casca", "ml", "cl"];

/// Imperative verbs opening a plain-text preparation step.
pub const STEP_VERBS: &[&str] = &[
    "Coloque",
    "Pingue",
    "Em seguida",
    "Coe",
    "Passe",
    "Espete",
    "Misture",
    "Adicione",
];

/// Plain-text lines tagged as attribute spans when matched exactly.
pub const INLINE_ATTRIBUTES: &[&str] = &["Alcoólico", "Clássico", "Forte", "Seco"];

/// Plain-text lines containing this are tagged as vessel spans.
pub const INLINE_VESSEL: &str = "Taça";

/// Plain-text lines containing this are tagged as origin spans.
pub const INLINE_ORIGIN: &str = "Estados Unidos";

/// Field labels that never form a title line.
pub const TITLE_STOPLIST: &[&str] = &["Tipo", "Características", "Copo", "Origem"];

/// Image `src` fragments accepted by the fallback image rule, besides the title.
pub const IMAGE_SRC_KEYWORDS: &[&str] = &["drink", "cocktail", "receita"];

/// Lower-cased body fragments that mark a crawled page as a recipe.
pub const RECIPE_PAGE_MARKERS: &[&str] = &["ingredientes", "preparo", "modo de fazer"];

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word is a run of alphabetic characters, so `"old fashioned"` becomes
/// `"Old Fashioned"` and `"taça de coquetel"` becomes `"Taça De Coquetel"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Returns the first vocabulary term found in `haystack`, title-cased.
pub fn first_match(haystack: &str, terms: &[&str]) -> Option<String> {
    terms
        .iter()
        .find(|term| haystack.contains(*term))
        .map(|term| title_case(term))
}
