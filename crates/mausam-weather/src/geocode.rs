//! Forward geocoding: resolve a city name to coordinates and a timezone.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use serde::Deserialize;

use crate::types::{GeoLocation, WeatherError, DEFAULT_TIMEZONE};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
    country: Option<String>,
    timezone: Option<String>,
}

impl GeocodingResponse {
    /// Take the best match, filling gaps from the query itself.
    pub(crate) fn into_location(self, city: &str) -> Result<GeoLocation, WeatherError> {
        let first = self
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        Ok(GeoLocation {
            latitude: first.latitude,
            longitude: first.longitude,
            name: first.name.unwrap_or_else(|| city.to_string()),
            country: first.country.unwrap_or_default(),
            timezone: first
                .timezone
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        })
    }
}

/// Query parameters for a single best-match lookup
pub(crate) fn query<'a>(city: &'a str, language: &'a str) -> [(&'static str, &'a str); 4] {
    [
        ("name", city),
        ("count", "1"),
        ("language", language),
        ("format", "json"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> GeocodingResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_first_result_wins() {
        let resp = parse(serde_json::json!({
            "results": [
                {"name": "पुणे", "latitude": 18.52, "longitude": 73.86, "country": "भारत", "timezone": "Asia/Kolkata"},
                {"name": "Pune", "latitude": 0.0, "longitude": 0.0}
            ]
        }));

        let loc = resp.into_location("pune").unwrap();
        assert_eq!(loc.name, "पुणे");
        assert_eq!(loc.country, "भारत");
        assert_eq!(loc.timezone, "Asia/Kolkata");
        assert_eq!(loc.latitude, 18.52);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let resp = parse(serde_json::json!({
            "results": [{"latitude": 1.5, "longitude": 2.5}]
        }));

        let loc = resp.into_location("Atlantis").unwrap();
        assert_eq!(loc.name, "Atlantis");
        assert_eq!(loc.country, "");
        assert_eq!(loc.timezone, "UTC");
    }

    #[test]
    fn test_no_results_key_is_not_found() {
        let resp = parse(serde_json::json!({"generationtime_ms": 0.5}));
        let err = resp.into_location("Nowhere").unwrap_err();
        assert!(matches!(err, WeatherError::CityNotFound(c) if c == "Nowhere"));
    }

    #[test]
    fn test_empty_results_is_not_found() {
        let resp = parse(serde_json::json!({"results": []}));
        assert!(matches!(
            resp.into_location("Nowhere"),
            Err(WeatherError::CityNotFound(_))
        ));
    }

    #[test]
    fn test_query_parameters() {
        let q = query("Delhi", "hi");
        assert_eq!(q[0], ("name", "Delhi"));
        assert_eq!(q[1], ("count", "1"));
        assert_eq!(q[2], ("language", "hi"));
        assert_eq!(q[3], ("format", "json"));
    }
}
