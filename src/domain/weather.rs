use chrono::{DateTime, FixedOffset, Offset, Utc};
use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Value of the `units` query parameter.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    #[must_use]
    pub fn temperature_suffix(self) -> &'static str {
        match self {
            Units::Metric => "\u{00B0}C",
            Units::Imperial => "\u{00B0}F",
            Units::Standard => "K",
        }
    }

    #[must_use]
    pub fn speed_suffix(self) -> &'static str {
        match self {
            Units::Imperial => "миль/ч",
            Units::Metric | Units::Standard => "м/с",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("latitude and longitude must be provided together")]
    PartialCoordinates,
    #[error("place name must not be empty")]
    EmptyPlace,
    #[error("a place name and coordinates cannot be combined")]
    Ambiguous,
}

/// What the user searched for: a free-text place or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Place(String),
    Coordinates { lat: f64, lon: f64 },
}

impl Location {
    pub fn place(name: impl Into<String>) -> Result<Self, LocationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LocationError::EmptyPlace);
        }
        Ok(Self::Place(name))
    }

    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self::Coordinates { lat, lon }
    }

    /// Builds a location from the loose parts a caller collected, rejecting
    /// every shape that is neither a place nor a full coordinate pair.
    pub fn from_parts(
        place: Option<&str>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<Option<Self>, LocationError> {
        match (place, lat, lon) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(LocationError::Ambiguous),
            (Some(name), None, None) => Self::place(name).map(Some),
            (None, Some(lat), Some(lon)) => Ok(Some(Self::from_coords(lat, lon))),
            (None, Some(_), None) | (None, None, Some(_)) => {
                Err(LocationError::PartialCoordinates)
            }
            (None, None, None) => Ok(None),
        }
    }

    /// Key/value pairs identifying this location in an API request.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Location::Place(name) => vec![("q", name.clone())],
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        }
    }

    /// `q=<name>` or `lat=<lat>&lon=<lon>`, form-urlencoded.
    #[must_use]
    pub fn query_fragment(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Location::Place(name) => name.clone(),
            Location::Coordinates { lat, lon } => format!("{lat:.4}, {lon:.4}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub name: String,
    pub country: Option<String>,
    pub observed_at: i64,
    pub icon: String,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// Shift from UTC in seconds for the reported place.
    pub utc_offset_secs: i32,
}

impl CurrentConditions {
    /// Coordinates the follow-up forecast and nearby requests are issued for.
    #[must_use]
    pub fn coordinates(&self) -> Location {
        Location::from_coords(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix())
    }

    #[must_use]
    pub fn title(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub dt: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub wind_deg: f64,
}

impl ForecastSample {
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        timestamp(self.dt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyCity {
    pub name: String,
    pub icon: String,
    pub temperature: f64,
}

#[must_use]
pub fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
