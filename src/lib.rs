pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use app::{preferences::PreferenceStore, state::AppState};
use cli::{Cli, DEFAULT_CITY};
use data::openweather::WeatherClient;
use domain::weather::Location;
use ui::text::TextRenderer;

pub async fn run(cli: Cli) -> Result<ExitCode> {
    cli.validate()?;
    let store = PreferenceStore::from_env();

    if cli.forget {
        if let Some(store) = &store {
            store.clear()?;
        }
        println!("Данные не сохранены");
        return Ok(ExitCode::SUCCESS);
    }

    let location = resolve_location(&cli, store.as_ref())?;
    let client = WeatherClient::new(cli.client_config()?).context("building HTTP client failed")?;

    if let (Location::Place(name), Some(store)) = (&location, &store)
        && !cli.no_save
        && let Err(err) = store.set(name)
    {
        tracing::warn!(error = %err, "could not remember search");
    }

    let mut app = AppState::new(cli.units.into(), cli.nearby_offsets.clone());
    app.search(&client, &location).await;
    if !app.select_day(cli.day_index()) {
        tracing::debug!(day = cli.day, "requested forecast day unavailable, showing the first");
    }

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock()).with_icons(cli.icons);
    app.present(&mut renderer)?;

    Ok(if app.has_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Command-line location first, then the saved search when asked for,
/// then the default city.
pub fn resolve_location(cli: &Cli, store: Option<&PreferenceStore>) -> Result<Location> {
    if let Some(location) = cli.explicit_location()? {
        return Ok(location);
    }
    if cli.saved {
        let saved = store
            .and_then(PreferenceStore::get)
            .context("Данные не сохранены")?;
        return Location::place(saved.name).context("saved search is empty");
    }
    Ok(Location::place(DEFAULT_CITY)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn default_city_when_nothing_given() {
        let cli = Cli::parse_from(["weather-dash"]);
        assert_eq!(
            resolve_location(&cli, None).unwrap(),
            Location::Place("Kiev".to_string())
        );
    }

    #[test]
    fn saved_search_is_used_on_request() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = PreferenceStore::at(dir.path().join("last_search.json"));
        store.set("Харьков").expect("save");

        let cli = Cli::parse_from(["weather-dash", "--saved"]);
        assert_eq!(
            resolve_location(&cli, Some(&store)).unwrap(),
            Location::Place("Харьков".to_string())
        );
    }

    #[test]
    fn saved_flag_without_saved_search_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = PreferenceStore::at(dir.path().join("last_search.json"));
        let cli = Cli::parse_from(["weather-dash", "--saved"]);
        assert!(resolve_location(&cli, Some(&store)).is_err());
    }

    #[test]
    fn explicit_coordinates_win() {
        let cli = Cli::parse_from(["weather-dash", "--lat", "50.45", "--lon", "30.52"]);
        assert_eq!(
            resolve_location(&cli, None).unwrap(),
            Location::from_coords(50.45, 30.52)
        );
    }
}
