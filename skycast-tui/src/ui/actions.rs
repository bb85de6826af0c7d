use skycast_core::{LookupError, WeatherReading};

/// User interactions and lookup outcomes, in semantic form.
#[derive(Debug)]
pub enum Action {
    Quit,
    /// Typed a character into the city field.
    Input(char),
    /// Backspace in the city field.
    DeleteChar,
    /// Trigger a lookup for the current input.
    Submit,
    /// A lookup finished; `Ok(None)` means the provider had nothing to show.
    LookupDidFinish(Result<Option<WeatherReading>, LookupError>),
}

/// Side effects the dispatch asks the main loop to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current weather for this city.
    FetchWeather { city: String },
    Quit,
}
