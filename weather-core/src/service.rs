use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    config::Config,
    error::WeatherError,
    model::{CurrentConditions, Location, WeatherViewModel},
    provider::{ForecastSource, Geocoder, OpenMeteoClient},
};

/// Resolve-then-fetch pipeline behind a single search.
#[derive(Debug, Clone)]
pub struct WeatherService {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastSource>,
}

impl WeatherService {
    pub fn new(geocoder: Arc<dyn Geocoder>, forecast: Arc<dyn ForecastSource>) -> Self {
        Self { geocoder, forecast }
    }

    /// Open-Meteo for both steps, using the configured endpoints.
    pub fn from_config(config: &Config) -> Self {
        let client = Arc::new(OpenMeteoClient::from_config(config));
        Self::new(client.clone(), client)
    }

    pub async fn resolve(&self, query: &str) -> Result<Location, WeatherError> {
        self.geocoder.resolve(query).await
    }

    pub async fn fetch_current_weather(
        &self,
        location: &Location,
    ) -> Result<CurrentConditions, WeatherError> {
        self.forecast.fetch_current_weather(location).await
    }

    /// Run both network steps in order and assemble the result card.
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: &str) -> Result<WeatherViewModel, WeatherError> {
        let location = self.resolve(query).await?;
        let conditions = self.fetch_current_weather(&location).await?;

        info!(
            city = %location.name,
            code = conditions.weather_code,
            "Current weather received"
        );

        Ok(WeatherViewModel::assemble(location, conditions))
    }
}
