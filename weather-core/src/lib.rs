//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - City resolution and current-conditions fetching over HTTP
//! - Classification of weather codes into icon and background choices
//! - Observation time formatting
//! - The search view-state controller
//! - Configuration handling
//!
//! It is used by `weather-cli`, but can also be reused by other front-ends.

pub mod classify;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod service;

pub use classify::{Gradient, Icon, WeatherCategory, classify, gradient_for, icon_for};
pub use config::Config;
pub use controller::{Controller, SearchTicket, ViewStatus};
pub use error::WeatherError;
pub use format::{format_in, format_local};
pub use model::{CurrentConditions, Location, WeatherViewModel};
pub use provider::{ForecastSource, Geocoder, OpenMeteoClient};
pub use service::WeatherService;
