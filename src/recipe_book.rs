use crate::error::ImportError;
use crate::extractors::{DrinkPageExtractor, ExtractedDrink, Extractor, ParsingContext};
use crate::fetchers::{ImageFetcher, ImageRequest};
use crate::input::RecipeInput;
use crate::model::RecipeRecord;
use chrono::Local;
use log::{info, warn};
use scraper::Html;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The records collected during one run, in insertion order.
///
/// Records are appended once and never modified afterwards.
pub struct RecipeBook {
    records: Vec<RecipeRecord>,
    base_url: String,
    image_fetcher: Option<Box<dyn ImageFetcher>>,
}

impl RecipeBook {
    /// Creates an empty book; `base_url` resolves root-relative image links
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            base_url: base_url.into(),
            image_fetcher: None,
        }
    }

    /// Downloads record images with `fetcher`. Without one, `image_ref` stays empty.
    pub fn with_image_fetcher(mut self, fetcher: impl ImageFetcher + 'static) -> Self {
        self.image_fetcher = Some(Box::new(fetcher));
        self
    }

    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extracts a record without storing it or fetching its image.
    ///
    /// The id is the explicit one, or the position the record would take
    /// when none (or `0`) was given.
    pub fn extract(&self, input: &RecipeInput) -> Result<ExtractedDrink, ImportError> {
        let context = ParsingContext {
            url: input.url().to_string(),
            base_url: self.base_url.clone(),
            document: Html::parse_document(&input.to_markup()),
            id: input
                .explicit_id()
                .filter(|id| *id > 0)
                .unwrap_or(self.next_id()),
        };

        DrinkPageExtractor.parse(&context)
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.records.len() + 1).unwrap_or(u32::MAX)
    }

    /// Extracts a record, downloads its image and appends it.
    ///
    /// Fails only when no title can be found. Image failures are logged and
    /// leave `image_ref` empty.
    pub async fn add_recipe(&mut self, input: RecipeInput) -> Result<&RecipeRecord, ImportError> {
        let ExtractedDrink {
            mut record,
            image_url,
        } = match self.extract(&input) {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!("Skipping document: {}", e);
                return Err(e);
            }
        };

        if let (Some(url), Some(fetcher)) = (image_url, &self.image_fetcher) {
            let request = ImageRequest {
                url,
                title: record.title.clone(),
                ordinal: self.records.len() + 1,
            };
            match fetcher.fetch(&request).await {
                Ok(filename) => record.image_ref = filename,
                Err(e) => warn!("Failed to download image {}: {}", request.url, e),
            }
        }

        info!(
            "{}: {} ingredients, {} steps",
            record.title,
            record.ingredients.len(),
            record.steps.len()
        );

        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Pretty-printed JSON array of all records, non-ASCII kept as is.
    pub fn to_json(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Writes all records to `path`.
    pub async fn save(&self, path: &Path) -> Result<(), ImportError> {
        if self.records.is_empty() {
            return Err(ImportError::NothingToSave);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, self.to_json()?).await?;
        info!("Saved {} recipes to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Writes all records to a timestamped file inside `data_dir`.
    pub async fn save_consolidated(&self, data_dir: &Path) -> Result<PathBuf, ImportError> {
        let filename = format!("drinks_{}.json", Local::now().format("%Y%m%d_%H%M%S"));
        let path = data_dir.join(filename);
        self.save(&path).await?;
        Ok(path)
    }

    /// Reads records previously written by [`RecipeBook::save`].
    pub async fn read_records(path: &Path) -> Result<Vec<RecipeRecord>, ImportError> {
        let json = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&json)?)
    }
}
