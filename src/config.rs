use crate::error::ImportError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Scraper configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Site origin, used to build post URLs and resolve root-relative links
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path appended to `base_url` before the post id (e.g. "/?p=")
    #[serde(default = "default_url_pattern")]
    pub url_pattern: String,
    /// First post id visited by the `range` command
    #[serde(default = "default_range_start")]
    pub range_start: u32,
    /// Last post id (inclusive) visited by the `range` command
    #[serde(default = "default_range_end")]
    pub range_end: u32,
    /// Directory receiving downloaded images
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// Directory receiving the consolidated JSON file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Pause between page requests in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            url_pattern: default_url_pattern(),
            range_start: default_range_start(),
            range_end: default_range_end(),
            image_dir: default_image_dir(),
            data_dir: default_data_dir(),
            request_delay_ms: default_request_delay_ms(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://drinksimples.com.br".to_string()
}

fn default_url_pattern() -> String {
    "/?p=".to_string()
}

fn default_range_start() -> u32 {
    1
}

fn default_range_end() -> u32 {
    1000
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_request_delay_ms() -> u64 {
    500
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with DRINK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DRINK__IMAGE_DIR
    pub fn load() -> Result<Self, ImportError> {
        Ok(load_config()?)
    }

    /// URL of a post given its numeric id.
    pub fn post_url(&self, id: u32) -> String {
        format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            self.url_pattern,
            id
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// Load configuration from `config.toml` (optional) and `DRINK__*` variables
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: DRINK__IMAGE_DIR
        .add_source(
            Environment::with_prefix("DRINK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
