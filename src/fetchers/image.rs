use crate::error::ImportError;
use async_trait::async_trait;
use chrono::Local;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// An image to download for a freshly extracted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Absolute image URL
    pub url: String,
    /// Recipe title, used to name the file
    pub title: String,
    /// Position the record will take in the collection (1-based)
    pub ordinal: usize,
}

/// Retrieves an image and stores it, returning the stored file name.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, request: &ImageRequest) -> Result<String, ImportError>;
}

/// Downloads images over HTTP into a local directory.
pub struct HttpImageFetcher {
    client: Client,
    image_dir: PathBuf,
}

impl HttpImageFetcher {
    pub fn new(
        image_dir: impl Into<PathBuf>,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ImportError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent.parse()?);
        headers.insert(ACCEPT, HeaderValue::from_static("image/*,*/*;q=0.8"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("pt-BR,pt;q=0.9,en;q=0.8"),
        );

        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(10)))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            image_dir: image_dir.into(),
        })
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// First file name for `base` that does not exist yet.
    async fn free_file_name(&self, base: &str, extension: &str) -> String {
        let candidate = format!("{base}{extension}");
        if !exists(&self.image_dir.join(&candidate)).await {
            return candidate;
        }

        let stamped = format!("{base}_{}", Local::now().format("%H%M%S"));
        let candidate = format!("{stamped}{extension}");
        if !exists(&self.image_dir.join(&candidate)).await {
            return candidate;
        }

        // Same second twice: fall back to a counter
        let mut counter = 1;
        loop {
            let candidate = format!("{stamped}_{counter}{extension}");
            if !exists(&self.image_dir.join(&candidate)).await {
                return candidate;
            }
            counter += 1;
        }
    }
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, request: &ImageRequest) -> Result<String, ImportError> {
        debug!("Downloading image: {}", request.url);

        let response = self.client.get(&request.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = response.bytes().await?;

        let extension = image_extension(&content_type, &request.url);
        let base = image_base_name(&request.title, request.ordinal);

        fs::create_dir_all(&self.image_dir).await?;
        let filename = self.free_file_name(&base, extension).await;
        fs::write(self.image_dir.join(&filename), &bytes).await?;

        info!("Image saved: {}", filename);
        Ok(filename)
    }
}

/// File extension from the response content type, then from the URL.
pub fn image_extension(content_type: &str, url: &str) -> &'static str {
    let content_type = content_type.to_lowercase();
    if content_type.contains("jpeg") || content_type.contains("jpg") {
        return ".jpg";
    }
    if content_type.contains("png") {
        return ".png";
    }
    if content_type.contains("webp") {
        return ".webp";
    }

    let url = url.to_lowercase();
    [".jpg", ".png", ".webp"]
        .into_iter()
        .find(|ext| url.contains(ext))
        .unwrap_or(".jpg")
}

/// Filesystem-safe, lower-cased base name derived from a recipe title.
///
/// Characters other than letters, digits, `_`, `-` and whitespace are
/// dropped, then every run of `-`/whitespace becomes a single `_`. Titles
/// that sanitize to nothing fall back to `drink_<ordinal>`.
pub fn image_base_name(title: &str, ordinal: usize) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();

    let mut name = String::with_capacity(kept.len());
    let mut in_run = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !in_run {
                name.push('_');
            }
            in_run = true;
        } else {
            name.extend(c.to_lowercase());
            in_run = false;
        }
    }

    if name.is_empty() {
        format!("drink_{ordinal}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extension_from_content_type() {
        assert_eq!(image_extension("image/jpeg", "https://x/a.png"), ".jpg");
        assert_eq!(image_extension("image/PNG", "https://x/a"), ".png");
        assert_eq!(image_extension("image/webp; q=1", "https://x/a"), ".webp");
    }

    #[test]
    fn test_image_extension_from_url() {
        assert_eq!(
            image_extension("application/octet-stream", "https://x/A.WEBP"),
            ".webp"
        );
        assert_eq!(image_extension("", "https://x/a.png?w=300"), ".png");
        assert_eq!(image_extension("", "https://x/a.gif"), ".jpg");
    }

    #[test]
    fn test_image_base_name() {
        assert_eq!(image_base_name("Piña Colada", 1), "piña_colada");
        assert_eq!(image_base_name("  Gin - Tônica!  ", 1), "gin_tônica");
        assert_eq!(image_base_name("Sex on the Beach (2)", 1), "sex_on_the_beach_2");
        assert_eq!(image_base_name("-Mojito-", 1), "_mojito_");
    }

    #[test]
    fn test_image_base_name_placeholder() {
        assert_eq!(image_base_name("?!", 4), "drink_4");
        assert_eq!(image_base_name("", 1), "drink_1");
    }
}
