use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{
    bearing::wind_direction,
    forecast::{DAY_CARD_LIMIT, DateKey, ForecastDay, ForecastDays},
    weather::{CurrentConditions, ForecastSample, NearbyCity, Units, timestamp},
    weekday::weekday_name,
};

pub const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";
/// Hour cards per strip.
pub const HOUR_CARD_LIMIT: usize = 6;

const DATE_FORMAT: &str = "%d.%m.%Y";
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentView {
    pub title: String,
    pub date: String,
    pub icon_url: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub sunrise: String,
    pub sunset: String,
    pub day_length: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourCard {
    pub time: String,
    pub icon_url: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub wind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub key: DateKey,
    pub weekday: String,
    pub date: String,
    pub icon_url: String,
    pub temperature: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub heading: String,
    pub hours: Vec<HourCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyCard {
    pub name: String,
    pub icon_url: String,
    pub temperature: String,
}

#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_URL_BASE}/{icon}.png")
}

#[must_use]
pub fn format_temperature(value: f64, units: Units) -> String {
    format!("{value:.1} {}", units.temperature_suffix())
}

/// `"<h> ч. <m> мин."`; a sunset before sunrise reads as zero.
#[must_use]
pub fn format_day_length(sunrise: i64, sunset: i64) -> String {
    let secs = (sunset - sunrise).max(0);
    format!("{} ч. {} мин.", secs / 3600, (secs % 3600) / 60)
}

/// Turns domain values into display strings for one location.
#[derive(Debug, Clone, Copy)]
pub struct ViewBuilder {
    units: Units,
    offset: FixedOffset,
}

impl ViewBuilder {
    #[must_use]
    pub fn new(units: Units, offset: FixedOffset) -> Self {
        Self { units, offset }
    }

    #[must_use]
    pub fn current(&self, current: &CurrentConditions) -> CurrentView {
        CurrentView {
            title: current.title(),
            date: self.local(current.observed_at, DATE_FORMAT),
            icon_url: icon_url(&current.icon),
            description: current.description.clone(),
            temperature: format_temperature(current.temperature, self.units),
            feels_like: format!(
                "Ощущается {}",
                format_temperature(current.feels_like, self.units)
            ),
            sunrise: self.local(current.sunrise, TIME_FORMAT),
            sunset: self.local(current.sunset, TIME_FORMAT),
            day_length: format_day_length(current.sunrise, current.sunset),
        }
    }

    #[must_use]
    pub fn hour_card(&self, sample: &ForecastSample) -> HourCard {
        HourCard {
            time: self.local(sample.dt, TIME_FORMAT),
            icon_url: icon_url(&sample.icon),
            description: sample.description.clone(),
            temperature: format_temperature(sample.temperature, self.units),
            feels_like: format_temperature(sample.feels_like, self.units),
            wind: format!(
                "{:.2} {}, {}",
                sample.wind_speed,
                self.units.speed_suffix(),
                wind_direction(sample.wind_deg)
            ),
        }
    }

    pub fn hour_cards<'a>(
        &self,
        samples: impl IntoIterator<Item = &'a ForecastSample>,
    ) -> Vec<HourCard> {
        samples
            .into_iter()
            .take(HOUR_CARD_LIMIT)
            .map(|sample| self.hour_card(sample))
            .collect()
    }

    /// One card per day for the first five days, each showing its
    /// representative sample.
    #[must_use]
    pub fn day_cards(&self, days: &ForecastDays) -> Vec<DayCard> {
        days.take_days(DAY_CARD_LIMIT)
            .iter()
            .enumerate()
            .filter_map(|(index, day)| {
                let sample = day.representative(index)?;
                let instant = sample.time()?;
                Some(DayCard {
                    key: day.key,
                    weekday: weekday_name(instant).to_string(),
                    date: instant.format(DATE_FORMAT).to_string(),
                    icon_url: icon_url(&sample.icon),
                    temperature: format_temperature(sample.temperature, self.units),
                    description: sample.description.clone(),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn day_detail(&self, day: &ForecastDay) -> DayDetail {
        let heading = day
            .samples
            .first()
            .and_then(ForecastSample::time)
            .map(|instant| {
                format!(
                    "{}, {}",
                    instant.format(DATE_FORMAT),
                    weekday_name(instant)
                )
            })
            .unwrap_or_else(|| day.key.to_string());
        DayDetail {
            heading,
            hours: self.hour_cards(&day.samples),
        }
    }

    #[must_use]
    pub fn nearby_card(&self, city: &NearbyCity) -> NearbyCard {
        NearbyCard {
            name: city.name.clone(),
            icon_url: icon_url(&city.icon),
            temperature: format_temperature(city.temperature, self.units),
        }
    }

    fn local(&self, secs: i64, format: &str) -> String {
        timestamp(secs)
            .map(|instant| self.in_offset(instant).format(format).to_string())
            .unwrap_or_default()
    }

    fn in_offset(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }
}
