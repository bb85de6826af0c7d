/// A single current-weather reading, as displayed to the user.
///
/// Derived from one provider response and discarded on the next trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    /// Provider condition code (thunderstorm, rain, clear, ...). Determines
    /// exactly one icon bucket.
    pub condition_id: i64,
    pub description: String,
}

impl WeatherReading {
    /// Temperature formatted for display, one decimal place.
    pub fn temperature_label(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }

    /// Description with each word's first letter capitalized.
    pub fn description_label(&self) -> String {
        title_case(&self.description)
    }
}

/// The provider reports Kelvin when no unit system is requested.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Capitalize the first letter of every whitespace-separated word and lower
/// the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
