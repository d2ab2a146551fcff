//! Turn the loaded configuration into provider settings.

use std::time::Duration;

use mausam_core::Config;
use mausam_weather::{Locale, ProviderSettings, RetryConfig};

/// Build provider settings from `config`, with `lang` taking precedence over
/// the configured language.
pub fn provider_settings(config: &Config, lang: Option<Locale>) -> ProviderSettings {
    let locale = lang
        .or_else(|| Locale::from_code(&config.weather.language))
        .unwrap_or_default();

    ProviderSettings {
        geocoding_url: config.weather.geocoding_url.clone(),
        forecast_url: config.weather.forecast_url.clone(),
        locale,
        timeout: Duration::from_secs(config.weather.request_timeout_secs),
        rain_window_hours: config.weather.rain_window_hours,
        retry: RetryConfig::new(
            config.retry.max_retries,
            config.retry.initial_delay_ms,
            config.retry.max_delay_ms,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_over() {
        let settings = provider_settings(&Config::default(), None);
        assert_eq!(settings.locale, Locale::Hi);
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.rain_window_hours, 6);
        assert_eq!(settings.retry, RetryConfig::new(2, 200, 2000));
        assert_eq!(settings.geocoding_url, mausam_weather::geocode::GEOCODING_URL);
    }

    #[test]
    fn test_config_defaults_match_provider_defaults() {
        let from_config = provider_settings(&Config::default(), None);
        let provider = ProviderSettings::default();
        assert_eq!(from_config.geocoding_url, provider.geocoding_url);
        assert_eq!(from_config.forecast_url, provider.forecast_url);
    }

    #[test]
    fn test_cli_language_overrides_config() {
        let mut config = Config::default();
        config.weather.language = "en".to_string();

        assert_eq!(provider_settings(&config, None).locale, Locale::En);
        assert_eq!(provider_settings(&config, Some(Locale::Hi)).locale, Locale::Hi);
    }

    #[test]
    fn test_unknown_language_falls_back_to_hindi() {
        let mut config = Config::default();
        config.weather.language = "de".to_string();
        assert_eq!(provider_settings(&config, None).locale, Locale::Hi);
    }
}
