//! Mapping of WMO weather codes to display categories.
//!
//! Icon and background both derive from [`classify`], so the two can never
//! disagree about the current condition.

use serde::Serialize;
use std::fmt;

/// Coarse condition bucket used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "clear",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Fog => "fog",
            WeatherCategory::Rain => "rain",
            WeatherCategory::Snow => "snow",
            WeatherCategory::Thunderstorm => "thunderstorm",
        }
    }

    pub const fn all() -> &'static [WeatherCategory] {
        &[
            WeatherCategory::Clear,
            WeatherCategory::Cloudy,
            WeatherCategory::Fog,
            WeatherCategory::Rain,
            WeatherCategory::Snow,
            WeatherCategory::Thunderstorm,
        ]
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a WMO weather code. Unlisted codes fall back to `Clear`.
pub const fn classify(code: i64) -> WeatherCategory {
    match code {
        0 => WeatherCategory::Clear,
        1..=3 => WeatherCategory::Cloudy,
        45 | 48 => WeatherCategory::Fog,
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => WeatherCategory::Rain,
        71 | 73 | 75 | 77 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Thunderstorm,
        _ => WeatherCategory::Clear,
    }
}

/// Icon shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub category: WeatherCategory,
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
    /// Rain and thunderstorm icons pulse.
    pub pulse: bool,
}

impl Icon {
    pub const fn for_category(category: WeatherCategory) -> Self {
        let (name, glyph, color, pulse) = match category {
            WeatherCategory::Clear => ("day-sunny", "☀️", "yellow-400", false),
            WeatherCategory::Cloudy => ("cloudy", "☁️", "gray-400", false),
            WeatherCategory::Fog => ("fog", "🌫️", "gray-500", false),
            WeatherCategory::Rain => ("rain", "🌧️", "blue-400", true),
            WeatherCategory::Snow => ("snow", "❄️", "white", false),
            WeatherCategory::Thunderstorm => ("thunderstorm", "⛈️", "purple-700", true),
        };

        Icon { category, name, glyph, color, pulse }
    }
}

/// Background gradient, expressed as three color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub via: &'static str,
    pub to: &'static str,
}

impl Gradient {
    /// Background used while no result is displayed.
    pub const IDLE: Gradient = Gradient { from: "blue-400", via: "blue-200", to: "indigo-200" };

    pub const fn for_category(category: WeatherCategory) -> Self {
        let (from, via, to) = match category {
            WeatherCategory::Clear => ("yellow-400", "yellow-200", "orange-300"),
            WeatherCategory::Cloudy => ("gray-400", "gray-300", "blue-300"),
            WeatherCategory::Fog => ("gray-500", "gray-400", "gray-600"),
            WeatherCategory::Rain => ("blue-500", "blue-400", "gray-500"),
            WeatherCategory::Snow => ("white", "gray-200", "gray-300"),
            WeatherCategory::Thunderstorm => ("purple-700", "blue-800", "gray-900"),
        };

        Gradient { from, via, to }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from-{} via-{} to-{}", self.from, self.via, self.to)
    }
}

pub fn icon_for(code: i64) -> Icon {
    Icon::for_category(classify(code))
}

pub fn gradient_for(code: i64) -> Gradient {
    Gradient::for_category(classify(code))
}
