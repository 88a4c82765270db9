use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::WeatherError,
    model::{CurrentConditions, Location},
};

use super::{ForecastSource, Geocoder};

/// Client for the Open-Meteo geocoding and forecast endpoints.
///
/// Every call goes to the network: nothing is cached, retried or timed out.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    geocoding_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.geocoding_url.clone(), config.forecast_url.clone())
    }

    async fn get_body(
        &self,
        service: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, WeatherError> {
        let res = self.http.get(url).query(query).send().await.map_err(|e| {
            WeatherError::Network(format!("Failed to send request to {service} service: {e}"))
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::Network(format!("Failed to read {service} response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(WeatherError::Network(format!(
                "{service} request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    name: String,
    country: String,
}

/// Candidates stay untyped until chosen: only the first one has to match
/// [`GeoResult`].
#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
}

fn first_candidate(body: &str) -> Result<GeoResult, WeatherError> {
    let parsed: GeoResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::Network(format!("Failed to parse geocoding JSON: {e}")))?;

    let first = parsed
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or(WeatherError::NotFound)?;

    serde_json::from_value(first)
        .map_err(|e| WeatherError::Network(format!("Failed to parse geocoding result: {e}")))
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherPayload {
    temperature: f64,
    windspeed: f64,
    weathercode: i64,
    time: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeatherPayload>,
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<Location, WeatherError> {
        let name = query.trim();
        if name.is_empty() {
            return Err(WeatherError::NotFound);
        }

        debug!(url = %self.geocoding_url, "Resolving city");
        let body = self
            .get_body("Geocoding", &self.geocoding_url, &[("name", name.to_string())])
            .await?;

        let first = first_candidate(&body)?;
        debug!(name = %first.name, country = %first.country, "Resolved city");

        Ok(Location {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name,
            country: first.country,
        })
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    #[instrument(skip(self, location), fields(lat = %location.latitude, lon = %location.longitude))]
    async fn fetch_current_weather(
        &self,
        location: &Location,
    ) -> Result<CurrentConditions, WeatherError> {
        debug!(url = %self.forecast_url, "Fetching current weather");

        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ];
        let body = self.get_body("Forecast", &self.forecast_url, &query).await?;

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            WeatherError::Network(format!("Failed to parse forecast JSON: {e}"))
        })?;

        let current = parsed.current_weather.ok_or(WeatherError::DataUnavailable)?;

        Ok(CurrentConditions {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            weather_code: current.weathercode,
            observed_at: current.time,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_response_without_results_parses() {
        let parsed: GeoResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.5}"#).expect("should parse");
        assert!(parsed.results.is_none());
    }

    #[test]
    fn geocoding_result_ignores_extra_fields() {
        let first = first_candidate(
            r#"{"results":[{"id":1,"name":"Paris","latitude":48.85,"longitude":2.35,
                "country":"France","country_code":"FR","timezone":"Europe/Paris"}]}"#,
        )
        .expect("should parse");

        assert_eq!(first.name, "Paris");
        assert_eq!(first.country, "France");
    }

    #[test]
    fn later_candidates_are_not_validated() {
        let first = first_candidate(
            r#"{"results":[
                {"name":"Paris","latitude":48.85,"longitude":2.35,"country":"France"},
                {"name":"Paris","latitude":10.0,"longitude":10.0}]}"#,
        )
        .expect("only the first candidate must be complete");

        assert_eq!(first.country, "France");
    }

    #[test]
    fn incomplete_first_candidate_is_network_error() {
        let err = first_candidate(r#"{"results":[{"name":"Paris","latitude":48.85}]}"#)
            .unwrap_err();
        assert!(matches!(err, WeatherError::Network(_)), "{err:?}");
    }

    #[test]
    fn empty_results_is_not_found() {
        let err = first_candidate(r#"{"results":[]}"#).unwrap_err();
        assert_eq!(err, WeatherError::NotFound);
    }

    #[test]
    fn forecast_without_current_weather_parses_as_none() {
        let parsed: ForecastResponse =
            serde_json::from_str(r#"{"latitude":1.0,"longitude":2.0}"#).expect("should parse");
        assert!(parsed.current_weather.is_none());
    }

    #[test]
    fn forecast_with_wrong_types_is_rejected() {
        let res: Result<ForecastResponse, _> = serde_json::from_str(
            r#"{"current_weather":{"temperature":"warm","windspeed":1.0,"weathercode":0,"time":"x"}}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(500);
        let out = truncate_body(&long);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let out = truncate_body(&long);
        assert_eq!(out.chars().count(), 203);
    }

    #[tokio::test]
    async fn blank_query_is_not_found_without_network() {
        let client =
            OpenMeteoClient::new("http://127.0.0.1:9/search", "http://127.0.0.1:9/forecast");

        for query in ["", "   ", "\t\n"] {
            assert_eq!(client.resolve(query).await.unwrap_err(), WeatherError::NotFound);
        }
    }
}
