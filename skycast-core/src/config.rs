use std::env;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Runtime configuration.
///
/// The credential is resolved once at startup and handed to whoever needs it;
/// nothing else reads the process environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// OpenWeatherMap API key, if one is configured.
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is merged in first, if present;
    /// variables already set in the environment win. An empty value counts as
    /// not configured.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());

        Self { api_key }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the API key, if present.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
