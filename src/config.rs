//! Support for library configuration options

use std::error::Error;

use once_cell::sync::Lazy;
use url::Url;

/// The environment variable that may hold the base URL of the remote store
pub const API_URL_VAR: &str = "WEEKLY_TODOS_API_URL";

/// The base URL that is used when none is configured
pub static DEFAULT_API_URL: Lazy<Url> = Lazy::new(|| Url::parse("http://localhost:5000").unwrap(/* this is a valid URL */));

/// Where the remote store lives
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    api_url: Url,
}

impl Config {
    /// Create a config pointing at a given base URL
    pub fn new<S: AsRef<str>>(api_url: S) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let api_url = Url::parse(api_url.as_ref())?;
        if api_url.cannot_be_a_base() {
            return Err(format!("{} cannot be used as a base URL", api_url).into());
        }
        Ok(Self { api_url })
    }

    /// Read the base URL from the `WEEKLY_TODOS_API_URL` environment variable, or fall back to [`DEFAULT_API_URL`]
    pub fn from_env() -> Result<Self, Box<dyn Error + Send + Sync>> {
        Self::from_value(std::env::var(API_URL_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        match value {
            Some(url) if url.trim().is_empty() == false => Self::new(url.trim()),
            _ => {
                log::debug!("{} is not set, using {}", API_URL_VAR, *DEFAULT_API_URL);
                Ok(Self::default())
            },
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.clone() }
    }
}
