//! Display-ready weather card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advice::season_advice;
use crate::locale::Locale;
use crate::rain::round_half_up;
use crate::timezone;
use crate::types::Forecast;

const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCard {
    pub temperature: String,
    pub humidity: String,
    pub rain_chance: String,
    pub advice: String,
}

impl WeatherCard {
    /// Format `forecast` for display, with the season taken from `now` in the
    /// forecast's timezone.
    pub fn render(forecast: &Forecast, now: DateTime<Utc>, locale: Locale) -> Self {
        let month = timezone::local_month(timezone::resolve(&forecast.timezone), now);

        Self {
            temperature: reading(forecast.temperature, "°C"),
            humidity: reading(forecast.humidity, "%"),
            rain_chance: reading(forecast.rain_chance, "%"),
            advice: season_advice(
                forecast.temperature,
                forecast.humidity,
                forecast.rain_chance,
                month,
                locale,
            ),
        }
    }
}

impl std::fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🌡  {}", self.temperature)?;
        writeln!(f, "💧 {}", self.humidity)?;
        writeln!(f, "☔ {}", self.rain_chance)?;
        write!(f, "{}", self.advice)
    }
}

fn reading(value: Option<f64>, unit: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{} {}", round_half_up(v), unit),
        None => format!("{} {}", PLACEHOLDER, unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn july() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 6, 0, 0).unwrap()
    }

    #[test]
    fn test_readings_are_rounded() {
        let forecast = Forecast {
            temperature: Some(31.5),
            humidity: Some(64.4),
            rain_chance: Some(42.0),
            timezone: "Asia/Kolkata".to_string(),
        };

        let card = WeatherCard::render(&forecast, july(), Locale::Hi);
        assert_eq!(card.temperature, "32 °C");
        assert_eq!(card.humidity, "64 %");
        assert_eq!(card.rain_chance, "42 %");
    }

    #[test]
    fn test_negative_half_rounds_up() {
        let forecast = Forecast {
            temperature: Some(-2.5),
            ..Forecast::default()
        };
        let card = WeatherCard::render(&forecast, july(), Locale::En);
        assert_eq!(card.temperature, "-2 °C");
    }

    #[test]
    fn test_unknown_readings_show_placeholder() {
        let forecast = Forecast {
            timezone: "UTC".to_string(),
            ..Forecast::default()
        };

        let card = WeatherCard::render(&forecast, july(), Locale::Hi);
        assert_eq!(card.temperature, "-- °C");
        assert_eq!(card.humidity, "-- %");
        assert_eq!(card.rain_chance, "-- %");
        assert_eq!(card.advice, "यह मानसून का दौर है।");
    }

    #[test]
    fn test_advice_uses_unrounded_values() {
        // 27.6 displays as 28 but still counts as below the warm threshold
        let forecast = Forecast {
            temperature: Some(27.6),
            timezone: "UTC".to_string(),
            ..Forecast::default()
        };

        let card = WeatherCard::render(&forecast, july(), Locale::En);
        assert_eq!(card.temperature, "28 °C");
        assert!(card.advice.ends_with(Locale::En.messages().temp_comfortable));
    }

    #[test]
    fn test_season_follows_location_timezone() {
        let end_of_february = Utc.with_ymd_and_hms(2025, 2, 28, 20, 0, 0).unwrap();
        let forecast = Forecast {
            timezone: "Asia/Kolkata".to_string(),
            ..Forecast::default()
        };

        // Already March 1st in Kolkata
        let card = WeatherCard::render(&forecast, end_of_february, Locale::En);
        assert_eq!(card.advice, "This is the spring-into-summer period.");
    }
}
