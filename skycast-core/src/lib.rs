//! Core library for the `skycast` weather viewer.
//!
//! This crate defines:
//! - Credential handling (`WEATHER_API_KEY`, optionally from a `.env` file)
//! - The lookup error taxonomy and its user-facing messages
//! - Abstraction over the weather provider, with the OpenWeatherMap client
//! - Shared domain models (current reading, condition icons)
//!
//! It is used by `skycast-tui`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::LookupError;
pub use icon::ConditionIcon;
pub use model::WeatherReading;
pub use provider::{OpenWeatherProvider, WeatherProvider, provider_from_config};
