#![allow(clippy::missing_errors_doc)]

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};

use crate::{
    data::openweather::{ClientConfig, OPENWEATHER_API_URL},
    domain::{
        nearby::DEFAULT_NEARBY_OFFSETS,
        weather::{Location, Units},
    },
};

pub const DEFAULT_CITY: &str = "Kiev";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
    Standard,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
            UnitsArg::Standard => Units::Standard,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-dash",
    version,
    about = "Current weather, 5-day forecast and nearby cities from OpenWeatherMap"
)]
pub struct Cli {
    /// City to search for (default: the saved search with --saved, else Kiev)
    pub city: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Search for the last saved city
    #[arg(long, conflicts_with_all = ["city", "lat", "lon"])]
    pub saved: bool,

    /// Forget the saved city and exit
    #[arg(long)]
    pub forget: bool,

    /// Do not remember this search
    #[arg(long)]
    pub no_save: bool,

    /// Measurement units
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Language of weather descriptions
    #[arg(long, default_value = "ru")]
    pub lang: String,

    /// OpenWeatherMap API key
    #[arg(long, env = "OWM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "OWM_API_URL", default_value = OPENWEATHER_API_URL)]
    pub api_url: String,

    /// Forecast day to expand (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub day: u8,

    /// Positions in the radius search shown as nearby cities
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_NEARBY_OFFSETS)]
    pub nearby_offsets: Vec<usize>,

    /// Print icon URLs
    #[arg(long)]
    pub icons: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.explicit_location().map(|_| ())
    }

    /// Location given explicitly on the command line, if any.
    pub fn explicit_location(&self) -> anyhow::Result<Option<Location>> {
        Location::from_parts(self.city.as_deref(), self.lat, self.lon)
            .context("invalid location arguments")
    }

    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .context("an API key is required (--api-key or OWM_API_KEY)")?;
        let mut config = ClientConfig::new(api_key).with_base_url(self.api_url.clone());
        config.units = self.units.into();
        config.lang = self.lang.clone();
        Ok(config)
    }

    /// Zero-based index of the day to expand.
    #[must_use]
    pub fn day_index(&self) -> usize {
        usize::from(self.day.saturating_sub(1))
    }

    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "weather_dash=warn",
            1 => "weather_dash=info",
            _ => "weather_dash=debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let cli = Cli::parse_from(["weather-dash", "--api-key", "k"]);
        assert_eq!(cli.units, UnitsArg::Metric);
        assert_eq!(cli.lang, "ru");
        assert_eq!(cli.day_index(), 0);
        assert_eq!(cli.nearby_offsets, vec![19, 24, 35, 38]);
        assert_eq!(cli.explicit_location().unwrap(), None);
    }

    #[test]
    fn rejects_lat_without_lon() {
        let cli = Cli::parse_from(["weather-dash", "--lat", "50.45"]);
        let err = cli.validate().expect_err("expected partial coordinates");
        assert!(format!("{err:#}").contains("latitude and longitude"));
    }

    #[test]
    fn accepts_negative_coordinates() {
        let cli = Cli::parse_from(["weather-dash", "--lat", "-33.87", "--lon", "151.21"]);
        assert_eq!(
            cli.explicit_location().unwrap(),
            Some(Location::from_coords(-33.87, 151.21))
        );
    }

    #[test]
    fn saved_conflicts_with_city() {
        let err = Cli::try_parse_from(["weather-dash", "--saved", "Lviv"])
            .expect_err("expected conflict");
        assert!(err.to_string().contains("--saved"));
    }

    #[test]
    fn parses_custom_nearby_offsets() {
        let cli = Cli::parse_from(["weather-dash", "--nearby-offsets", "1,2,3"]);
        assert_eq!(cli.nearby_offsets, vec![1, 2, 3]);
    }

    #[test]
    fn day_is_bounded() {
        assert!(Cli::try_parse_from(["weather-dash", "--day", "6"]).is_err());
        let cli = Cli::parse_from(["weather-dash", "--day", "3"]);
        assert_eq!(cli.day_index(), 2);
    }

    #[test]
    fn client_config_requires_a_key() {
        let mut cli = Cli::parse_from(["weather-dash", "--units", "imperial", "--api-key", "abc"]);
        let config = cli.client_config().unwrap();
        assert_eq!(config.units, Units::Imperial);
        assert_eq!(config.api_key, "abc");

        cli.api_key = Some("  ".to_string());
        assert!(cli.client_config().is_err());
    }
}
