use serde::Deserialize;
use serde_json::Value;

use crate::{
    Config,
    error::FetchError,
    model::{WeatherQuery, WeatherReport},
};

use super::{Endpoint, ProviderId};

pub const DEFAULT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherEndpoint {
    url: String,
}

impl OpenWeatherEndpoint {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        config
            .base_url(ProviderId::OpenWeather)
            .map(Self::with_url)
            .unwrap_or_default()
    }
}

impl Default for OpenWeatherEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

// Every field optional so that a missing one becomes an `Extraction` error
// naming the path, instead of a generic decode failure.
#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    wind: Option<OwWind>,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

impl Endpoint for OpenWeatherEndpoint {
    type Query = WeatherQuery;
    type Output = WeatherReport;

    fn provider(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn query_params(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        vec![
            ("zip", query.zip()),
            ("appid", query.api_key.clone()),
            ("units", WeatherQuery::UNITS.to_string()),
        ]
    }

    fn extract(&self, document: Value) -> Result<WeatherReport, FetchError> {
        let parsed: OwCurrentResponse = serde_json::from_value(document)
            .map_err(|err| FetchError::Extraction(err.to_string()))?;

        let main = parsed.main.ok_or_else(|| FetchError::missing("main"))?;
        let wind = parsed.wind.ok_or_else(|| FetchError::missing("wind"))?;
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::missing("weather[0]"))?
            .description
            .ok_or_else(|| FetchError::missing("weather[0].description"))?;

        Ok(WeatherReport {
            temperature_f: truncate(main.temp, "main.temp")?,
            humidity_pct: truncate(main.humidity, "main.humidity")?,
            pressure_hpa: truncate(main.pressure, "main.pressure")?,
            wind_speed_mph: truncate(wind.speed, "wind.speed")?,
            wind_direction_deg: wind.deg.ok_or_else(|| FetchError::missing("wind.deg"))?,
            condition,
        })
    }
}

/// Drop the fractional part (toward zero), never round.
fn truncate(value: Option<f64>, field: &str) -> Result<i64, FetchError> {
    value.map(|v| v.trunc() as i64).ok_or_else(|| FetchError::missing(field))
}
