use std::io;

use crate::{
    app::view::ViewBuilder,
    data::openweather::{FetchError, WeatherClient},
    domain::{
        forecast::{DAY_CARD_LIMIT, ForecastDays},
        nearby::{DEFAULT_NEARBY_OFFSETS, pick_nearby},
        weather::{CurrentConditions, Location, NearbyCity, Units},
    },
    ui::ViewRenderer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    NotFound { query: String },
    GenericFailure,
}

impl SearchFailure {
    fn classify(location: &Location, err: &FetchError) -> Self {
        if err.is_not_found() {
            SearchFailure::NotFound {
                query: location.display_name(),
            }
        } else {
            SearchFailure::GenericFailure
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Ready,
    Error,
}

/// Everything the dashboard knows about the latest search. Each search
/// replaces all of it.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub failure: Option<SearchFailure>,
    pub current: Option<CurrentConditions>,
    pub forecast: Option<ForecastDays>,
    pub nearby: Option<Vec<NearbyCity>>,
    pub selected_day: usize,
    units: Units,
    nearby_offsets: Vec<usize>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Units::Metric, DEFAULT_NEARBY_OFFSETS.to_vec())
    }
}

impl AppState {
    #[must_use]
    pub fn new(units: Units, nearby_offsets: Vec<usize>) -> Self {
        Self {
            mode: AppMode::Idle,
            failure: None,
            current: None,
            forecast: None,
            nearby: None,
            selected_day: 0,
            units,
            nearby_offsets,
        }
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.mode == AppMode::Error
    }

    /// Fetches current conditions for `location`; only when that succeeds
    /// are the forecast and nearby lists requested, concurrently, for the
    /// coordinates the API resolved.
    pub async fn search(&mut self, client: &WeatherClient, location: &Location) {
        self.reset();
        tracing::info!(location = %location.display_name(), "searching");

        let current = match client.fetch_current(location).await {
            Ok(current) => current,
            Err(err) => {
                tracing::warn!(error = %err, "current conditions fetch failed");
                self.failure = Some(SearchFailure::classify(location, &err));
                self.mode = AppMode::Error;
                return;
            }
        };

        let coordinates = current.coordinates();
        let (forecast, nearby) = futures::join!(
            client.fetch_forecast(&coordinates),
            client.fetch_nearby(&coordinates)
        );

        self.forecast = match forecast {
            Ok(samples) => {
                let days = ForecastDays::group(samples);
                if days.skipped() > 0 {
                    tracing::warn!(skipped = days.skipped(), "dropped forecast samples with bad timestamps");
                }
                tracing::info!(days = days.len(), "forecast grouped");
                Some(days)
            }
            Err(err) => {
                tracing::warn!(error = %err, "forecast fetch failed");
                None
            }
        };
        self.nearby = match nearby {
            Ok(cities) => Some(pick_nearby(&cities, &self.nearby_offsets)),
            Err(err) => {
                tracing::warn!(error = %err, "nearby fetch failed");
                None
            }
        };
        self.current = Some(current);
        self.mode = AppMode::Ready;
    }

    /// Switches the day detail to the day card at `index`. Returns `false`
    /// and keeps the current selection when no such card exists.
    pub fn select_day(&mut self, index: usize) -> bool {
        let available = self
            .forecast
            .as_ref()
            .map_or(0, |days| days.take_days(DAY_CARD_LIMIT).len());
        if index < available {
            self.selected_day = index;
            true
        } else {
            false
        }
    }

    pub fn present<R: ViewRenderer + ?Sized>(&self, renderer: &mut R) -> io::Result<()> {
        match self.mode {
            AppMode::Idle => Ok(()),
            AppMode::Error => match &self.failure {
                Some(failure) => renderer.render_error(failure),
                None => renderer.render_error(&SearchFailure::GenericFailure),
            },
            AppMode::Ready => self.present_ready(renderer),
        }
    }

    fn present_ready<R: ViewRenderer + ?Sized>(&self, renderer: &mut R) -> io::Result<()> {
        let Some(current) = &self.current else {
            return Ok(());
        };
        let builder = ViewBuilder::new(self.units, current.offset());
        renderer.render_current(&builder.current(current))?;

        if let Some(days) = &self.forecast {
            renderer.render_hourly(&builder.hour_cards(days.samples()))?;
            renderer.render_forecast_days(&builder.day_cards(days), self.selected_day)?;
            if let Some(day) = days.take_days(DAY_CARD_LIMIT).get(self.selected_day) {
                renderer.render_day_detail(&builder.day_detail(day))?;
            }
        }

        if let Some(cities) = &self.nearby {
            let cards: Vec<_> = cities.iter().map(|city| builder.nearby_card(city)).collect();
            renderer.render_nearby(&cards)?;
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.mode = AppMode::Idle;
        self.failure = None;
        self.current = None;
        self.forecast = None;
        self.nearby = None;
        self.selected_day = 0;
    }
}
