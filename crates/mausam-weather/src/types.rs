use serde::{Deserialize, Serialize};

/// Timezone used when the geocoder does not report one
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A geocoded place, as resolved from the user's city input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
    /// IANA timezone name, e.g. "Asia/Kolkata"
    pub timezone: String,
}

/// Current conditions plus the short-term rain outlook for a location.
///
/// Any field may be missing when the forecast API omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Degrees Celsius
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Rain probability in percent
    pub rain_chance: Option<f64>,
    pub timezone: String,
}

/// Weather lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City name is empty")]
    EmptyCity,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{endpoint} request failed with status {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Display text followed by every underlying cause, for logs
    #[must_use]
    pub fn detail(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !out.ends_with(&text) {
                out.push_str(": ");
                out.push_str(&text);
            }
            source = std::error::Error::source(cause);
        }
        out
    }
}

/// Which upstream API a request was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    Forecast,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Geocoding => write!(f, "Geocoding"),
            Endpoint::Forecast => write!(f, "Forecast"),
        }
    }
}
