use skycast_core::WeatherReading;

/// What the output half of the screen currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing looked up yet.
    #[default]
    Idle,
    /// Last lookup succeeded.
    Reading(WeatherReading),
    /// Last lookup failed; the message replaces the temperature region and
    /// the icon and description regions go blank.
    Error(String),
}

/// Application state.
#[derive(Debug, Clone)]
pub struct App {
    /// City name typed so far.
    pub city_input: String,
    pub view: ViewState,
    /// Whether an API key was configured at startup.
    pub has_credential: bool,
}

impl App {
    pub fn new(has_credential: bool) -> Self {
        Self {
            city_input: String::new(),
            view: ViewState::Idle,
            has_credential,
        }
    }
}
