use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "llmprobe.toml";
pub const ENV_PREFIX: &str = "LLMPROBE_";

const ENDPOINT_PLACEHOLDER: &str = "https://llm.example.com";
const API_KEY_PLACEHOLDER: &str = "sk-REPLACE-ME";

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    Endpoint,
    ApiKey,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub endpoint: String,
    pub api_key: String,
    pub fast_model: String,
    pub analysis_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT_PLACEHOLDER.to_string(),
            api_key: API_KEY_PLACEHOLDER.to_string(),
            fast_model: "gpt-4.1-mini".to_string(),
            analysis_model: "gpt-4.1".to_string(),
        }
    }
}

impl Settings {
    /// Loads `llmprobe.toml` merged with `LLMPROBE_*` environment variables.
    /// A starter config is written on first run so there is something to edit.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(CONFIG_FILE).exists() {
            Settings::default().save().unwrap_or_default();
        }

        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        Ok(settings)
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let toml_string =
            toml::to_string_pretty(self).expect("Failed to serialize settings to TOML");
        fs::write(CONFIG_FILE, toml_string)
    }

    /// Refuses to run with the placeholder endpoint or credential, so an
    /// unconfigured install never sends a request anywhere.
    pub fn is_valid(&self) -> Result<(), ValidationError> {
        if self.endpoint == ENDPOINT_PLACEHOLDER || self.endpoint.is_empty() {
            return Err(ValidationError::Endpoint);
        }
        if self.api_key == API_KEY_PLACEHOLDER || self.api_key.is_empty() {
            return Err(ValidationError::ApiKey);
        }
        Ok(())
    }
}
