use serde::Serialize;
use tracing::warn;

use crate::{
    classify::{Gradient, Icon, WeatherCategory, classify},
    format::format_local,
};

/// First geocoding candidate for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Current conditions reported by the forecast service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i64,
    /// `YYYY-MM-DDTHH:MM`, location-local, no zone suffix.
    pub observed_at: String,
}

/// Everything the result card shows. Replaced wholesale on each search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherViewModel {
    pub location: Location,
    pub conditions: CurrentConditions,
    pub category: WeatherCategory,
    pub icon: Icon,
    pub gradient: Gradient,
    pub observed_at_display: String,
}

impl WeatherViewModel {
    pub fn assemble(location: Location, conditions: CurrentConditions) -> Self {
        let observed_at_display = format_local(&conditions.observed_at).unwrap_or_else(|err| {
            warn!(error = %err, "Showing raw observation time");
            conditions.observed_at.clone()
        });

        Self::with_display_time(location, conditions, observed_at_display)
    }

    /// Build with an already rendered observation time.
    pub fn with_display_time(
        location: Location,
        conditions: CurrentConditions,
        observed_at_display: String,
    ) -> Self {
        let category = classify(conditions.weather_code);

        Self {
            location,
            conditions,
            category,
            icon: Icon::for_category(category),
            gradient: Gradient::for_category(category),
            observed_at_display,
        }
    }

    pub fn city(&self) -> &str {
        &self.location.name
    }

    pub fn country(&self) -> &str {
        &self.location.country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Location {
        Location {
            latitude: 48.85,
            longitude: 2.35,
            name: "Paris".into(),
            country: "France".into(),
        }
    }

    fn conditions(code: i64, time: &str) -> CurrentConditions {
        CurrentConditions {
            temperature_c: 18.2,
            wind_speed_kmh: 9.4,
            weather_code: code,
            observed_at: time.into(),
        }
    }

    #[test]
    fn derived_fields_follow_weather_code() {
        let vm = WeatherViewModel::assemble(paris(), conditions(3, "2024-05-01T14:30"));

        assert_eq!(vm.city(), "Paris");
        assert_eq!(vm.country(), "France");
        assert_eq!(vm.category, WeatherCategory::Cloudy);
        assert_eq!(vm.icon.category, WeatherCategory::Cloudy);
        assert_eq!(vm.gradient, Gradient::for_category(WeatherCategory::Cloudy));
        assert_eq!(
            vm.observed_at_display,
            format_local("2024-05-01T14:30").expect("should format")
        );
    }

    #[test]
    fn unparseable_time_is_shown_raw() {
        let vm = WeatherViewModel::assemble(paris(), conditions(0, "not-a-time"));
        assert_eq!(vm.observed_at_display, "not-a-time");
        assert_eq!(vm.category, WeatherCategory::Clear);
    }

    #[test]
    fn serializes_to_json() {
        let vm = WeatherViewModel::with_display_time(
            paris(),
            conditions(95, "2024-05-01T14:30"),
            "shown".into(),
        );

        let json = serde_json::to_value(&vm).expect("should serialize");
        assert_eq!(json["location"]["name"], "Paris");
        assert_eq!(json["category"], "thunderstorm");
        assert_eq!(json["icon"]["pulse"], true);
        assert_eq!(json["observed_at_display"], "shown");
    }
}
