//! Weathercast CLI
//!
//! Searches a city and prints its current weather and daily forecast.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::ports::WeatherPort;
use application::services::{SearchController, SearchService, SearchSession, SearchState};
use clap::{Parser, Subcommand};
use domain::{CityName, DateZone, DayGrouping};
use infrastructure::{AppConfig, LogFormat, OpenWeatherAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Weathercast CLI
#[derive(Parser)]
#[command(name = "weathercast")]
#[command(author, version, about = "Current weather and 5-day forecast from OpenWeatherMap", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./weathercast.toml if present)
    #[arg(short, long, env = "WEATHERCAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the weather for a city
    ///
    /// Example: weathercast search Rio de Janeiro --grouping calendar
    Search {
        /// City name (multiple words are joined with spaces)
        city: Vec<String>,

        /// Day grouping: stride or calendar (overrides configuration)
        #[arg(short, long)]
        grouping: Option<DayGrouping>,

        /// Date calendar: local, utc, provider or an IANA name (overrides configuration)
        #[arg(short, long)]
        timezone: Option<DateZone>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Join positional words into the search query
fn query_from_words(words: &[String]) -> String {
    words.join(" ")
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(verbose));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(cli.verbose, config.logging.format);
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Search {
            city,
            grouping,
            timezone,
            json,
        } => {
            if let Some(grouping) = grouping {
                config.forecast.grouping = grouping;
            }
            if let Some(timezone) = timezone {
                config.forecast.timezone = timezone;
            }

            let query = query_from_words(&city);
            let state = if CityName::new(&query).is_err() {
                // Rejected by the session before any provider is needed
                let mut session = SearchSession::new();
                let _ = session.begin(&query);
                session.state().clone()
            } else {
                let adapter: Arc<dyn WeatherPort> = Arc::new(
                    OpenWeatherAdapter::new(config.openweather.clone()).context(
                        "Set WEATHERCAST_OPENWEATHER__API_KEY or openweather.api_key in weathercast.toml",
                    )?,
                );
                let service = SearchService::new(adapter).with_aggregator(config.aggregator());
                let controller = SearchController::new(service);

                if !json {
                    eprintln!("Searching {}...", query.trim());
                }
                controller.submit(&query).await
            };

            if json {
                let outcome = render::JsonOutcome::from_state(&state);
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if let SearchState::Success(report) = &state {
                let unit = render::temperature_unit(&config.openweather.units);
                print!("{}", render::render_report(report, unit));
            } else if let Some(message) = state.message() {
                eprintln!("{message}");
            }

            Ok(if matches!(state, SearchState::Success(_)) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn query_joins_words() {
        let words = vec!["Rio".to_string(), "de".to_string(), "Janeiro".to_string()];
        assert_eq!(query_from_words(&words), "Rio de Janeiro");
    }

    #[test]
    fn query_from_no_words_is_empty() {
        assert_eq!(query_from_words(&[]), "");
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "weathercast",
            "-vv",
            "search",
            "New",
            "York",
            "--grouping",
            "calendar",
            "--timezone",
            "America/New_York",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Search {
            city,
            grouping,
            timezone,
            json,
        } = cli.command;
        assert_eq!(query_from_words(&city), "New York");
        assert_eq!(grouping, Some(DayGrouping::CalendarDay));
        assert_eq!(timezone.map(|z| z.to_string()).as_deref(), Some("America/New_York"));
        assert!(json);
    }

    #[test]
    fn cli_rejects_unknown_grouping() {
        let result = Cli::try_parse_from(["weathercast", "search", "Oslo", "--grouping", "weekly"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
