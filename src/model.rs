// Core structs: Product, error types
use crate::utils::null_as_empty;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One item of the remote products endpoint. Fields the viewer does not use are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_type: String,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub image_link: Option<String>,
}

impl Product {
    /// Price exactly as the API sent it: strings unquoted, numbers as written, `null` otherwise.
    pub fn price_text(&self) -> String {
        match &self.price {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid product list: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not an input")]
    NotAnInput(String),
    #[error("element #{0} is not a container")]
    NotAContainer(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}
