//! Plain-text rendering of the search view.

use weather_core::{Gradient, ViewStatus, WeatherViewModel};

pub fn status(status: &ViewStatus) -> String {
    match status {
        ViewStatus::Idle => {
            format!("🌤️  Weather Now  [{}]\nEnter a city name to search.", Gradient::IDLE)
        }
        ViewStatus::Loading => "Loading...".to_string(),
        ViewStatus::Error(msg) => format!("✖ {msg}"),
        ViewStatus::Ready(vm) => card(vm),
    }
}

fn card(vm: &WeatherViewModel) -> String {
    let icon = &vm.icon;
    let pulse = if icon.pulse { " (pulsing)" } else { "" };

    let lines = [
        format!("{}, {}", vm.city(), vm.country()),
        format!("{}  {} [{}]{}", icon.glyph, icon.name, icon.color, pulse),
        format!("{}°C", vm.conditions.temperature_c),
        format!("💨 {} km/h", vm.conditions.wind_speed_kmh),
        format!("⏱ {}", vm.observed_at_display),
        format!("background: {}", vm.gradient),
    ];

    lines.join("\n")
}
