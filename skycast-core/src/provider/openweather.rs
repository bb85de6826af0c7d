use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;
use crate::model::{WeatherReading, kelvin_to_celsius};

use super::WeatherProvider;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap current-weather client.
///
/// One outbound request per lookup, no retries, the client library's default
/// timeout and redirect policy.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<Option<WeatherReading>, LookupError> {
        tracing::debug!("requesting current weather for city={city}");

        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!("current weather request failed with status {status}");
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = res.text().await?;
        reading_from_body(&body)
    }
}

/// Parse a 2xx response body into a reading.
///
/// The provider reports some failures in-band through the `cod` field even on
/// a successful HTTP status; anything other than a literal `200` there yields
/// no reading at all rather than an error.
fn reading_from_body(body: &str) -> Result<Option<WeatherReading>, LookupError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|_| LookupError::Parse)?;

    if parsed.cod.as_i64() != Some(200) {
        tracing::debug!("provider returned in-band cod={}, dropping response", parsed.cod);
        return Ok(None);
    }

    let condition = parsed.weather.first().ok_or(LookupError::Parse)?;

    Ok(Some(WeatherReading {
        temperature_c: kelvin_to_celsius(parsed.main.temp),
        condition_id: condition.id,
        description: condition.description.clone(),
    }))
}

#[derive(Debug, Deserialize)]
struct OwMain {
    /// Kelvin; the request does not ask for a unit system.
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    cod: Value,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_SKY_BODY: &str = r#"{
        "cod": 200,
        "main": { "temp": 295.15 },
        "weather": [ { "id": 800, "description": "clear sky" } ]
    }"#;

    #[test]
    fn reading_from_success_body() {
        let reading = reading_from_body(CLEAR_SKY_BODY).unwrap().unwrap();

        assert_eq!(reading.condition_id, 800);
        assert_eq!(reading.description, "clear sky");
        assert_eq!(reading.temperature_label(), "22.0°C");
        assert_eq!(reading.description_label(), "Clear Sky");
    }

    #[test]
    fn in_band_cod_mismatch_yields_no_reading() {
        // Known gap: a 2xx body whose cod is not 200 is dropped silently.
        let body = r#"{
            "cod": 404,
            "main": { "temp": 280.0 },
            "weather": [ { "id": 500, "description": "light rain" } ]
        }"#;
        assert_eq!(reading_from_body(body).unwrap(), None);

        // A string "200" is not a literal 200 either.
        let body = r#"{
            "cod": "200",
            "main": { "temp": 280.0 },
            "weather": [ { "id": 500, "description": "light rain" } ]
        }"#;
        assert_eq!(reading_from_body(body).unwrap(), None);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(reading_from_body("not json"), Err(LookupError::Parse)));
        assert!(matches!(reading_from_body(r#"{"cod": 200}"#), Err(LookupError::Parse)));
    }

    #[test]
    fn empty_weather_array_is_a_parse_error() {
        let body = r#"{ "cod": 200, "main": { "temp": 280.0 }, "weather": [] }"#;

        assert!(matches!(reading_from_body(body), Err(LookupError::Parse)));
    }
}
