use std::fmt;

use chrono::{DateTime, Datelike, Utc};

use crate::domain::weather::ForecastSample;

/// Number of day cards a dashboard shows.
pub const DAY_CARD_LIMIT: usize = 5;

/// UTC calendar date with a zero-based month, e.g. `2026-9-17` for 17 Oct 2026.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

impl DateKey {
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month0: instant.month0(),
            day: instant.day(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month0, self.day)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub key: DateKey,
    pub samples: Vec<ForecastSample>,
}

impl ForecastDay {
    /// Sample shown on the day card at position `index`.
    ///
    /// The first card shows the earliest sample of its day; later cards use
    /// `samples[len / 2 - 1]`. A later day with a single sample would index
    /// before the start, so it falls back to that first sample.
    #[must_use]
    pub fn representative(&self, index: usize) -> Option<&ForecastSample> {
        if index == 0 {
            return self.samples.first();
        }
        (self.samples.len() / 2)
            .checked_sub(1)
            .and_then(|mid| self.samples.get(mid))
            .or_else(|| self.samples.first())
    }
}

/// Forecast samples partitioned by UTC calendar day, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastDays {
    days: Vec<ForecastDay>,
    skipped: usize,
}

impl ForecastDays {
    /// Groups a chronological list without reordering it. Samples with an
    /// unrepresentable timestamp are dropped and counted.
    #[must_use]
    pub fn group(samples: impl IntoIterator<Item = ForecastSample>) -> Self {
        let mut grouped = Self::default();
        for sample in samples {
            let Some(instant) = sample.time() else {
                grouped.skipped += 1;
                continue;
            };
            let key = DateKey::from_instant(instant);
            match grouped.days.iter_mut().find(|day| day.key == key) {
                Some(day) => day.samples.push(sample),
                None => grouped.days.push(ForecastDay {
                    key,
                    samples: vec![sample],
                }),
            }
        }
        grouped
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    /// At most the first `limit` days.
    #[must_use]
    pub fn take_days(&self, limit: usize) -> &[ForecastDay] {
        &self.days[..self.days.len().min(limit)]
    }

    #[must_use]
    pub fn get(&self, key: &DateKey) -> Option<&ForecastDay> {
        self.days.iter().find(|day| &day.key == key)
    }

    /// Every grouped sample in its original order.
    pub fn samples(&self) -> impl Iterator<Item = &ForecastSample> {
        self.days.iter().flat_map(|day| day.samples.iter())
    }
}
