use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::WeatherError,
    model::{CurrentConditions, Location},
};

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

/// Resolves a free-text place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Returns the first candidate. No candidates is [`WeatherError::NotFound`].
    async fn resolve(&self, query: &str) -> Result<Location, WeatherError>;
}

/// Fetches current conditions for coordinates.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// A response without current conditions is [`WeatherError::DataUnavailable`].
    async fn fetch_current_weather(
        &self,
        location: &Location,
    ) -> Result<CurrentConditions, WeatherError>;
}
