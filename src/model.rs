use serde::{Deserialize, Serialize};

/// One normalized drink recipe.
///
/// `title` is always non-empty for records stored in a [`crate::RecipeBook`];
/// every other field may be empty when the page did not provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: u32,
    pub title: String,
    /// `"Alcoólico"`, `"Não Alcoólico"` or empty when undetermined.
    pub category: String,
    pub attributes: Vec<String>,
    pub vessel: String,
    pub origin: String,
    pub ingredients: Vec<String>,
    pub tips: Vec<String>,
    pub steps: Vec<String>,
    /// File name inside the image directory, never a path or URL.
    pub image_ref: String,
}
