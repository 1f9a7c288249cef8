use std::path::PathBuf;

use crate::errors::GeneratorError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_OUTPUT_FILE: &str = "Dayflow-HRMS-API.postman_collection.json";

pub const BASE_URL_ENV: &str = "DAYFLOW_BASE_URL";
pub const OUTPUT_ENV: &str = "DAYFLOW_POSTMAN_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Value of the `baseUrl` collection variable.
    pub base_url: String,
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, GeneratorError> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let output = std::env::var(OUTPUT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE));

        Self::new(base_url, output)
    }

    pub fn new(base_url: impl Into<String>, output: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            output: output.into(),
        })
    }

    /// Apply command-line overrides on top of the environment-derived values.
    pub fn with_overrides(
        self,
        base_url: Option<String>,
        output: Option<PathBuf>,
    ) -> Result<Self, GeneratorError> {
        Self::new(
            base_url.unwrap_or(self.base_url),
            output.unwrap_or(self.output),
        )
    }
}

fn validate_base_url(value: &str) -> Result<(), GeneratorError> {
    if value.trim().is_empty() {
        return Err(GeneratorError::configuration(format!("{BASE_URL_ENV} must not be empty")));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(GeneratorError::configuration(format!(
            "base url must start with http:// or https://, got {value}"
        )));
    }
    Ok(())
}
