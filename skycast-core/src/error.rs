use thiserror::Error;

/// Why a weather lookup produced no reading.
///
/// Each variant renders as the exact message shown to the user in the
/// temperature region.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Error: API key not found. Please set WEATHER_API_KEY in .env file.")]
    MissingCredential,

    #[error(
        "Error: Unable to connect to the weather service. Please check your internet connection."
    )]
    ConnectionFailed,

    #[error("Error: The request timed out. Please try again later.")]
    TimedOut,

    #[error("Error: Too many redirects. Please check the URL.")]
    TooManyRedirects,

    /// Provider answered with a non-2xx status.
    #[error("{}", status_message(*.0))]
    HttpStatus(u16),

    #[error("Error: Unable to parse weather data.")]
    Parse,

    #[error("Error: Unable to retrieve weather data.")]
    Other,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            LookupError::ConnectionFailed
        } else if err.is_timeout() {
            LookupError::TimedOut
        } else if err.is_redirect() {
            LookupError::TooManyRedirects
        } else if err.is_decode() {
            LookupError::Parse
        } else {
            LookupError::Other
        }
    }
}

/// Human message for a non-2xx HTTP status.
pub fn status_message(code: u16) -> String {
    match code {
        400 => "Error: Bad request. Please check the city name.".to_string(),
        401 => "Error: Unauthorized. Please check your API key.".to_string(),
        403 => "Error: Forbidden. You don't have permission to access this resource.".to_string(),
        404 => "Error: City not found.".to_string(),
        500 => "Error: Internal server error. Please try again later.".to_string(),
        502 => "Error: Bad gateway. Please try again later.".to_string(),
        503 => "Error: Service unavailable. Please try again later.".to_string(),
        504 => "Error: Gateway timeout. Please try again later.".to_string(),
        other => format!("Error: An unexpected error occurred. Status code: {other}"),
    }
}
