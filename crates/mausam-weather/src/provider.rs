use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::forecast::{self, ForecastResponse, FORECAST_URL};
use crate::geocode::{self, GeocodingResponse, GEOCODING_URL};
use crate::locale::Locale;
use crate::rain::DEFAULT_WINDOW_HOURS;
use crate::retry::{with_retry, RetryConfig};
use crate::types::{Endpoint, Forecast, GeoLocation, WeatherError};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("mausam/", env!("CARGO_PKG_VERSION"));

/// Endpoints and tuning for a [`WeatherProvider`]
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub locale: Locale,
    pub timeout: Duration,
    /// Hourly samples averaged into the rain chance
    pub rain_window_hours: usize,
    pub retry: RetryConfig,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            locale: Locale::default(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            rain_window_hours: DEFAULT_WINDOW_HOURS,
            retry: RetryConfig::default(),
        }
    }
}

/// Open-Meteo client: city lookup followed by a forecast fetch
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    settings: ProviderSettings,
}

impl WeatherProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            settings,
        })
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Resolve a city name to its best geocoding match.
    #[instrument(skip(self), level = "info")]
    pub async fn locate(&self, city: &str) -> Result<GeoLocation, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let params = geocode::query(city, self.settings.locale.code());
        let response = with_retry(&self.settings.retry, || {
            self.client
                .get(&self.settings.geocoding_url)
                .query(&params)
                .send()
        })
        .await?;

        let body: GeocodingResponse = read_json(response, Endpoint::Geocoding).await?;
        let location = body.into_location(city)?;
        tracing::info!(
            "Located {:?} at {}, {} ({})",
            city,
            location.latitude,
            location.longitude,
            location.timezone
        );
        Ok(location)
    }

    /// Fetch current conditions and the rain outlook for `location`.
    pub async fn forecast(&self, location: &GeoLocation) -> Result<Forecast, WeatherError> {
        self.forecast_at(location, Utc::now()).await
    }

    /// Like [`forecast`](Self::forecast), with the rain window anchored at `now`.
    #[instrument(skip(self, location), fields(place = %location.name), level = "info")]
    pub async fn forecast_at(
        &self,
        location: &GeoLocation,
        now: DateTime<Utc>,
    ) -> Result<Forecast, WeatherError> {
        let params = forecast::query(location);
        let response = with_retry(&self.settings.retry, || {
            self.client
                .get(&self.settings.forecast_url)
                .query(&params)
                .send()
        })
        .await?;

        let body: ForecastResponse = read_json(response, Endpoint::Forecast).await?;
        let forecast = body.into_forecast(location, now, self.settings.rain_window_hours);
        tracing::debug!("Forecast for {}: {:?}", location.name, forecast);
        Ok(forecast)
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: Endpoint,
) -> Result<T, WeatherError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} returned status {}", endpoint, status);
        return Err(WeatherError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| WeatherError::Parse(format!("{} response: {}", endpoint, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_point_at_open_meteo() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.geocoding_url, "https://geocoding-api.open-meteo.com/v1/search");
        assert_eq!(settings.forecast_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(settings.locale, Locale::Hi);
        assert_eq!(settings.rain_window_hours, 6);
    }

    #[tokio::test]
    async fn test_locate_rejects_blank_city_without_network() {
        let provider = WeatherProvider::new(ProviderSettings {
            geocoding_url: "http://127.0.0.1:9/unreachable".to_string(),
            ..ProviderSettings::default()
        })
        .unwrap();

        let err = provider.locate("   ").await.unwrap_err();
        assert!(matches!(err, WeatherError::EmptyCity));
    }
}
