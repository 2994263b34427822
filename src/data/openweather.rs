use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::{
    nearby::NEARBY_SEARCH_COUNT,
    weather::{CurrentConditions, ForecastSample, Location, NearbyCity, Units},
};

pub const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("location not found")]
    NotFound,
    #[error("request returned status {0}")]
    Status(StatusCode),
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode response payload")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub units: Units,
    pub lang: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: OPENWEATHER_API_URL.to_string(),
            api_key: api_key.into(),
            units: Units::Metric,
            lang: "ru".to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    config: ClientConfig,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn fetch_current(&self, location: &Location) -> Result<CurrentConditions, FetchError> {
        let payload: CurrentResponse = self.get_json("weather", location, &[]).await?;
        Ok(payload.into())
    }

    pub async fn fetch_forecast(
        &self,
        location: &Location,
    ) -> Result<Vec<ForecastSample>, FetchError> {
        let payload: ForecastResponse = self.get_json("forecast", location, &[]).await?;
        Ok(payload.list.into_iter().map(ForecastSample::from).collect())
    }

    /// Cities around `location`, nearest first.
    pub async fn fetch_nearby(&self, location: &Location) -> Result<Vec<NearbyCity>, FetchError> {
        let count = NEARBY_SEARCH_COUNT.to_string();
        let payload: FindResponse = self
            .get_json("find", location, &[("cnt", count.as_str())])
            .await?;
        Ok(payload.list.into_iter().map(NearbyCity::from).collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        location: &Location,
        extra: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!(
            "{}/{endpoint}?{}",
            self.config.base_url.trim_end_matches('/'),
            location.query_fragment()
        );
        tracing::debug!(%endpoint, location = %location.display_name(), "requesting");

        let response = self
            .client
            .get(&url)
            .query(extra)
            .query(&[
                ("appid", self.config.api_key.as_str()),
                ("lang", self.config.lang.as_str()),
                ("units", self.config.units.as_param()),
            ])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        match response.status() {
            StatusCode::OK => response.json::<T>().await.map_err(FetchError::Decode),
            StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            status => Err(FetchError::Status(status)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    dt: i64,
    #[serde(default)]
    weather: Vec<WeatherTag>,
    main: MainBlock,
    sys: SysBlock,
    coord: CoordBlock,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<WeatherTag>,
    #[serde(default)]
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    list: Vec<FindEntry>,
}

#[derive(Debug, Deserialize)]
struct FindEntry {
    name: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<WeatherTag>,
}

#[derive(Debug, Deserialize)]
struct WeatherTag {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    feels_like: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: f64,
}

fn first_tag(tags: Vec<WeatherTag>) -> (String, String) {
    tags.into_iter()
        .next()
        .map(|tag| (tag.icon, tag.description))
        .unwrap_or_default()
}

impl From<CurrentResponse> for CurrentConditions {
    fn from(payload: CurrentResponse) -> Self {
        let (icon, description) = first_tag(payload.weather);
        Self {
            name: payload.name,
            country: payload.sys.country,
            observed_at: payload.dt,
            icon,
            description,
            temperature: payload.main.temp,
            feels_like: payload.main.feels_like.unwrap_or(payload.main.temp),
            sunrise: payload.sys.sunrise,
            sunset: payload.sys.sunset,
            latitude: payload.coord.lat,
            longitude: payload.coord.lon,
            utc_offset_secs: payload.timezone,
        }
    }
}

impl From<ForecastEntry> for ForecastSample {
    fn from(entry: ForecastEntry) -> Self {
        let (icon, description) = first_tag(entry.weather);
        Self {
            dt: entry.dt,
            temperature: entry.main.temp,
            feels_like: entry.main.feels_like.unwrap_or(entry.main.temp),
            description,
            icon,
            wind_speed: entry.wind.speed,
            wind_deg: entry.wind.deg,
        }
    }
}

impl From<FindEntry> for NearbyCity {
    fn from(entry: FindEntry) -> Self {
        let (icon, _) = first_tag(entry.weather);
        Self {
            name: entry.name,
            icon,
            temperature: entry.main.temp,
        }
    }
}
