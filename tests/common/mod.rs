#![allow(dead_code)]

use std::io;

use serde_json::{Value, json};
use weather_dash::{
    app::{
        state::SearchFailure,
        view::{CurrentView, DayCard, DayDetail, HourCard, NearbyCard},
    },
    data::openweather::{ClientConfig, WeatherClient},
    domain::weather::ForecastSample,
    ui::ViewRenderer,
};
use wiremock::MockServer;

/// 2026-10-17T00:00:00Z
pub const MIDNIGHT: i64 = 1_792_195_200;
pub const API_KEY: &str = "test-key";

pub fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(ClientConfig::new(API_KEY).with_base_url(server.uri()))
        .expect("build client")
}

pub fn current_payload() -> Value {
    json!({
        "coord": {"lon": 30.52, "lat": 50.45},
        "weather": [{"id": 800, "main": "Clear", "description": "ясно", "icon": "01d"}],
        "main": {"temp": 14.27, "feels_like": 13.1, "pressure": 1016, "humidity": 60},
        "dt": MIDNIGHT + 9 * 3600,
        "sys": {"country": "UA", "sunrise": MIDNIGHT + 4 * 3600, "sunset": MIDNIGHT + 15 * 3600},
        "timezone": 10_800,
        "name": "Kyiv",
        "cod": 200
    })
}

pub fn forecast_entry(dt: i64, temp: f64) -> Value {
    json!({
        "dt": dt,
        "main": {"temp": temp, "feels_like": temp - 1.0},
        "weather": [{"description": "облачно", "icon": "03d"}],
        "wind": {"speed": 3.5, "deg": 225.0}
    })
}

/// `count` samples every three hours from `start`.
pub fn forecast_payload(start: i64, count: usize) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|idx| forecast_entry(start + idx as i64 * 3 * 3600, idx as f64))
        .collect();
    json!({"cod": "200", "cnt": count, "list": list})
}

pub fn find_payload(count: usize) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|idx| {
            json!({
                "name": format!("City {idx}"),
                "main": {"temp": idx as f64 / 2.0},
                "weather": [{"description": "ясно", "icon": "01n"}]
            })
        })
        .collect();
    json!({"message": "accurate", "cod": "200", "count": count, "list": list})
}

pub fn not_found_payload() -> Value {
    json!({"cod": "404", "message": "city not found"})
}

pub fn sample(dt: i64) -> ForecastSample {
    ForecastSample {
        dt,
        temperature: 0.0,
        feels_like: 0.0,
        description: String::new(),
        icon: String::new(),
        wind_speed: 0.0,
        wind_deg: 0.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Current(CurrentView),
    Hourly(Vec<HourCard>),
    Days(Vec<DayCard>, usize),
    Detail(DayDetail),
    Nearby(Vec<NearbyCard>),
    Error(SearchFailure),
}

/// Renderer that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Rendered>,
}

impl ViewRenderer for RecordingRenderer {
    fn render_current(&mut self, view: &CurrentView) -> io::Result<()> {
        self.calls.push(Rendered::Current(view.clone()));
        Ok(())
    }

    fn render_hourly(&mut self, hours: &[HourCard]) -> io::Result<()> {
        self.calls.push(Rendered::Hourly(hours.to_vec()));
        Ok(())
    }

    fn render_forecast_days(&mut self, cards: &[DayCard], selected: usize) -> io::Result<()> {
        self.calls.push(Rendered::Days(cards.to_vec(), selected));
        Ok(())
    }

    fn render_day_detail(&mut self, detail: &DayDetail) -> io::Result<()> {
        self.calls.push(Rendered::Detail(detail.clone()));
        Ok(())
    }

    fn render_nearby(&mut self, cards: &[NearbyCard]) -> io::Result<()> {
        self.calls.push(Rendered::Nearby(cards.to_vec()));
        Ok(())
    }

    fn render_error(&mut self, failure: &SearchFailure) -> io::Result<()> {
        self.calls.push(Rendered::Error(failure.clone()));
        Ok(())
    }
}
