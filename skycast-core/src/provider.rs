use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, LookupError, WeatherReading};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of current-weather readings.
///
/// `Ok(None)` means the provider answered successfully but declined to return
/// a reading (see [`openweather`] for when that happens); callers leave
/// whatever they are currently displaying untouched.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<Option<WeatherReading>, LookupError>;
}

/// Construct the provider from config.
///
/// Exactly one provider exists today; the trait is the seam that lets tests
/// substitute a stub transport.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, LookupError> {
    let api_key = config.api_key().ok_or(LookupError::MissingCredential)?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
