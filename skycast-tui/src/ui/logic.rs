//! Action dispatch (Update).

use skycast_core::LookupError;

use super::actions::{Action, Effect};
use super::state::{App, ViewState};

impl App {
    /// Apply one action. Returns a side effect for the main loop to run.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => Some(Effect::Quit),

            Action::Input(c) => {
                self.city_input.push(c);
                None
            }

            Action::DeleteChar => {
                self.city_input.pop();
                None
            }

            Action::Submit => {
                if !self.has_credential {
                    // No network call happens without a credential.
                    self.view = ViewState::Error(LookupError::MissingCredential.to_string());
                    return None;
                }

                // The input goes out as typed, empty included; validation is
                // the provider's job.
                Some(Effect::FetchWeather {
                    city: self.city_input.clone(),
                })
            }

            Action::LookupDidFinish(Ok(Some(reading))) => {
                self.view = ViewState::Reading(reading);
                None
            }

            // The provider answered but had nothing to show; keep whatever is
            // on screen.
            Action::LookupDidFinish(Ok(None)) => None,

            Action::LookupDidFinish(Err(err)) => {
                self.view = ViewState::Error(err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::WeatherReading;

    fn typed(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    fn clear_sky() -> WeatherReading {
        WeatherReading {
            temperature_c: 22.0,
            condition_id: 800,
            description: "clear sky".into(),
        }
    }

    #[test]
    fn typing_edits_the_city_field() {
        let mut app = App::new(true);

        typed(&mut app, "Lviv");
        assert_eq!(app.city_input, "Lviv");

        app.dispatch(Action::DeleteChar);
        assert_eq!(app.city_input, "Lvi");
    }

    #[test]
    fn submit_without_credential_shows_error_and_no_effect() {
        let mut app = App::new(false);
        typed(&mut app, "London");

        let effect = app.dispatch(Action::Submit);

        assert_eq!(effect, None);
        assert_eq!(
            app.view,
            ViewState::Error(
                "Error: API key not found. Please set WEATHER_API_KEY in .env file.".into()
            )
        );
    }

    #[test]
    fn submit_with_credential_requests_a_fetch() {
        let mut app = App::new(true);
        typed(&mut app, "London");

        let effect = app.dispatch(Action::Submit);

        assert_eq!(effect, Some(Effect::FetchWeather { city: "London".into() }));
        assert_eq!(app.view, ViewState::Idle);
    }

    #[test]
    fn empty_input_is_submitted_as_is() {
        let mut app = App::new(true);

        let effect = app.dispatch(Action::Submit);

        assert_eq!(effect, Some(Effect::FetchWeather { city: String::new() }));
    }

    #[test]
    fn finished_lookup_shows_the_reading() {
        let mut app = App::new(true);

        app.dispatch(Action::LookupDidFinish(Ok(Some(clear_sky()))));

        assert_eq!(app.view, ViewState::Reading(clear_sky()));
    }

    #[test]
    fn failed_lookup_shows_the_mapped_message() {
        let mut app = App::new(true);

        app.dispatch(Action::LookupDidFinish(Err(LookupError::HttpStatus(404))));

        assert_eq!(app.view, ViewState::Error("Error: City not found.".into()));
    }

    #[test]
    fn empty_outcome_keeps_the_current_view() {
        let mut app = App::new(true);
        app.dispatch(Action::LookupDidFinish(Ok(Some(clear_sky()))));

        let effect = app.dispatch(Action::LookupDidFinish(Ok(None)));

        assert_eq!(effect, None);
        assert_eq!(app.view, ViewState::Reading(clear_sky()));
    }

    #[test]
    fn new_outcome_overwrites_the_previous_one() {
        let mut app = App::new(true);

        app.dispatch(Action::LookupDidFinish(Err(LookupError::HttpStatus(404))));
        assert!(matches!(app.view, ViewState::Error(_)));

        app.dispatch(Action::LookupDidFinish(Ok(Some(clear_sky()))));
        assert_eq!(app.view, ViewState::Reading(clear_sky()));
    }

    #[test]
    fn quit_reaches_the_main_loop_as_an_effect() {
        let mut app = App::new(true);

        assert_eq!(app.dispatch(Action::Quit), Some(Effect::Quit));
    }
}
