use crate::normalizer;
use std::borrow::Cow;

/// Content dialect of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// HTML markup (default)
    #[default]
    Markup,
    /// Line-oriented plain text, normalized to markup before extraction
    PlainText,
}

/// A document handed to [`crate::RecipeBook::add_recipe`]
#[derive(Debug, Clone)]
pub struct RecipeInput {
    content: String,
    dialect: Dialect,
    id: Option<u32>,
    source_url: Option<String>,
}

impl RecipeInput {
    /// Input from HTML markup
    ///
    /// # Example
    /// ```
    /// use drink_import::RecipeInput;
    ///
    /// let input = RecipeInput::markup("<h1>Negroni</h1>")
    ///     .source_url("https://drinksimples.com.br/?p=315");
    /// ```
    pub fn markup(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            dialect: Dialect::Markup,
            id: None,
            source_url: None,
        }
    }

    /// Input from the plain-text dialect
    ///
    /// # Example
    /// ```
    /// use drink_import::RecipeInput;
    ///
    /// let input = RecipeInput::plain_text("Margarita\nIngredientes\n50 ml tequila");
    /// ```
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            dialect: Dialect::PlainText,
            ..Self::markup(content)
        }
    }

    /// Explicit record id instead of the collection position; `0` counts as unset
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Page URL, only used to resolve relative image links
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn explicit_id(&self) -> Option<u32> {
        self.id
    }

    pub fn url(&self) -> &str {
        self.source_url.as_deref().unwrap_or_default()
    }

    /// The document as markup, normalizing plain text when needed
    pub fn to_markup(&self) -> Cow<'_, str> {
        match self.dialect {
            Dialect::Markup => Cow::Borrowed(&self.content),
            Dialect::PlainText => Cow::Owned(normalizer::to_markup(&self.content)),
        }
    }
}
