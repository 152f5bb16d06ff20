use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

pub const DEFAULT_PRODUCTS_URL: &str = "http://makeup-api.herokuapp.com/api/v1/products.json";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/1024/1024505.png";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub products_url: String,
    pub items_per_page: usize,
    pub placeholder_image: String,
    pub currency: String,
    pub verify_images: bool,
    pub image_timeout_seconds: u64,
    pub html_output: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            items_per_page: 10,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            currency: "R$".to_string(),
            verify_images: false,
            image_timeout_seconds: 5,
            html_output: None,
        }
    }
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(e.into()),
    };
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    if config.items_per_page == 0 {
        return Err(ConfigError::Invalid("items_per_page must be positive".into()));
    }
    Ok(config)
}
