pub mod text;

use std::io;

use crate::app::{
    state::SearchFailure,
    view::{CurrentView, DayCard, DayDetail, HourCard, NearbyCard},
};

/// Presentation side of the dashboard. Implementations receive finished
/// display strings and own every layout concern.
pub trait ViewRenderer {
    fn render_current(&mut self, view: &CurrentView) -> io::Result<()>;

    /// Strip of the next few forecast samples.
    fn render_hourly(&mut self, hours: &[HourCard]) -> io::Result<()>;

    /// Day cards; `selected` is the card whose detail follows.
    fn render_forecast_days(&mut self, cards: &[DayCard], selected: usize) -> io::Result<()>;

    fn render_day_detail(&mut self, detail: &DayDetail) -> io::Result<()>;

    fn render_nearby(&mut self, cards: &[NearbyCard]) -> io::Result<()>;

    fn render_error(&mut self, failure: &SearchFailure) -> io::Result<()>;
}
