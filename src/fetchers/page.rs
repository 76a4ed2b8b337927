use crate::error::ImportError;
use crate::vocabulary::RECIPE_PAGE_MARKERS;
use reqwest::Client;
use std::time::Duration;

/// Downloads recipe pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(10));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Whether a downloaded page looks like a recipe worth extracting.
pub fn is_recipe_page(body: &str) -> bool {
    let body = body.to_lowercase();
    RECIPE_PAGE_MARKERS
        .iter()
        .any(|marker| body.contains(marker))
}
