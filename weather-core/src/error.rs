use thiserror::Error;

/// Message shown when a failure carries no text of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Failures of a single city search.
///
/// Every variant is recoverable: the caller turns it into an error view and
/// the user may search again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The geocoding service returned no candidates for the query.
    #[error("City not found!")]
    NotFound,

    /// The forecast response had no `current_weather` section.
    #[error("Weather data not available")]
    DataUnavailable,

    /// Transport failure, non-success status or a body that does not match
    /// the expected schema.
    #[error("{0}")]
    Network(String),

    /// The observation time could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl WeatherError {
    /// Text shown in the error view, falling back to [`GENERIC_FAILURE`].
    pub fn display_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            msg
        }
    }
}
