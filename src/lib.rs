//! Best-effort extraction of drink recipes from loosely structured pages.
//!
//! A document (HTML, or the line-oriented plain-text dialect) is parsed into a
//! [`RecipeRecord`] and appended to a [`RecipeBook`], which downloads the
//! recipe image through an [`ImageFetcher`] and serializes the collected
//! records to JSON.
//!
//! # Example
//! ```no_run
//! use drink_import::{RecipeBook, RecipeInput};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut book = RecipeBook::new("https://drinksimples.com.br");
//! let text = "Margarita\nIngredientes\n50 ml tequila\nPreparo\nColoque o gelo no copo";
//! let record = book.add_recipe(RecipeInput::plain_text(text)).await?;
//! assert_eq!(record.title, "Margarita");
//! println!("{}", book.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod input;
pub mod model;
pub mod normalizer;
pub mod recipe_book;
pub mod vocabulary;

pub use config::ScraperConfig;
pub use error::ImportError;
pub use extractors::{DrinkPageExtractor, ExtractedDrink, Extractor, ParsingContext};
pub use fetchers::{HttpImageFetcher, ImageFetcher, ImageRequest, PageFetcher};
pub use input::{Dialect, RecipeInput};
pub use model::RecipeRecord;
pub use recipe_book::RecipeBook;
