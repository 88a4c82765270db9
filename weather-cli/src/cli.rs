use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use tracing::info;
use weather_core::{Config, Controller, ViewStatus, WeatherService};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Override the geocoding endpoint for this run.
    #[arg(long, global = true)]
    pub geocoding_url: Option<String>,

    /// Override the forecast endpoint for this run.
    #[arg(long, global = true)]
    pub forecast_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the geocoding and forecast endpoints.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,

        /// Print the result as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// Search repeatedly from a prompt.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => {
                let config = load_config(self.geocoding_url, self.forecast_url)?;
                show(&WeatherService::from_config(&config), &city, json).await
            }
            Command::Interactive => {
                let config = load_config(self.geocoding_url, self.forecast_url)?;
                interactive(&WeatherService::from_config(&config)).await
            }
        }
    }
}

fn load_config(geocoding_url: Option<String>, forecast_url: Option<String>) -> Result<Config> {
    Config::load()?.with_overrides(geocoding_url, forecast_url)
}

async fn show(service: &WeatherService, city: &str, json: bool) -> Result<()> {
    let mut controller = Controller::new();

    match controller.search(service, city).await {
        ViewStatus::Ready(vm) if json => {
            println!("{}", serde_json::to_string_pretty(vm)?);
            Ok(())
        }
        ViewStatus::Error(msg) => Err(anyhow!("{msg}")),
        ViewStatus::Idle => Err(anyhow!("Please enter a city name.")),
        status => {
            println!("{}", render::status(status));
            Ok(())
        }
    }
}

async fn interactive(service: &WeatherService) -> Result<()> {
    let mut controller = Controller::new();
    println!("{}", render::status(controller.status()));

    loop {
        let query = match Text::new("City:").with_help_message("Esc or `quit` to leave").prompt() {
            Ok(query) => query,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        if matches!(query.trim(), "quit" | "exit") {
            break;
        }

        let Some(ticket) = controller.submit(&query) else {
            continue;
        };
        println!("{}", render::status(controller.status()));

        let outcome = service.lookup(query.trim()).await;
        controller.complete(ticket, outcome);
        println!("{}", render::status(controller.status()));
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    config.geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&config.geocoding_url)
        .prompt()
        .context("Failed to read geocoding endpoint")?;

    config.forecast_url = Text::new("Forecast endpoint:")
        .with_default(&config.forecast_url)
        .prompt()
        .context("Failed to read forecast endpoint")?;

    config.validate()?;
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "Configuration saved");
    println!("Saved configuration to {}", path.display());

    Ok(())
}
