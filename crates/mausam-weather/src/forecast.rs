//! Open-Meteo forecast response handling.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::rain;
use crate::timezone;
use crate::types::{Forecast, GeoLocation};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation";
const HOURLY_FIELDS: &str = "precipitation_probability";

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    current: Option<CurrentBlock>,
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    precipitation: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    precipitation_probability: Option<Vec<Option<f64>>>,
}

impl ForecastResponse {
    /// Reduce the raw response to the readings shown on the card.
    ///
    /// Rain chance prefers the hourly probability window; without one it
    /// falls back to current precipitation, then to zero.
    pub(crate) fn into_forecast(
        self,
        location: &GeoLocation,
        now: DateTime<Utc>,
        window: usize,
    ) -> Forecast {
        let current = self.current;
        let temperature = current.as_ref().and_then(|c| c.temperature_2m);
        let humidity = current.as_ref().and_then(|c| c.relative_humidity_2m);

        let rain_chance = match self.hourly {
            Some(HourlyBlock {
                time,
                precipitation_probability: Some(probabilities),
            }) if !probabilities.is_empty() => rain::average_next_hours(
                &time,
                &probabilities,
                timezone::resolve(&location.timezone),
                now,
                window,
            ),
            _ => current.and_then(|c| c.precipitation).unwrap_or(0.0),
        };

        Forecast {
            temperature,
            humidity,
            rain_chance: Some(rain_chance),
            timezone: location.timezone.clone(),
        }
    }
}

/// Query parameters for a one-day forecast at `location`
pub(crate) fn query(location: &GeoLocation) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("current", CURRENT_FIELDS.to_string()),
        ("hourly", HOURLY_FIELDS.to_string()),
        ("forecast_days", "1".to_string()),
        ("timezone", location.timezone.clone()),
    ]
}
