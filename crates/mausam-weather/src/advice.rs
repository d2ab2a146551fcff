//! Seasonal advice derived from current conditions.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub const HOT_CELSIUS: f64 = 38.0;
pub const WARM_CELSIUS: f64 = 28.0;
pub const COLD_CELSIUS: f64 = 10.0;
pub const HUMID_PERCENT: f64 = 75.0;
pub const DRY_PERCENT: f64 = 35.0;
pub const RAIN_LIKELY_PERCENT: f64 = 60.0;
pub const RAIN_POSSIBLE_PERCENT: f64 = 30.0;

/// Season of the Indian calendar year, by month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// March to May
    SpringSummer,
    /// June to September
    Monsoon,
    /// October and November
    Autumn,
    /// December to February
    Cold,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::SpringSummer,
            6..=9 => Self::Monsoon,
            10 | 11 => Self::Autumn,
            _ => Self::Cold,
        }
    }
}

/// Build the advice line for the given readings and local month.
///
/// Missing or non-finite readings contribute no sentence.
pub fn season_advice(
    temperature: Option<f64>,
    humidity: Option<f64>,
    rain_chance: Option<f64>,
    month: u32,
    locale: Locale,
) -> String {
    let m = locale.messages();
    let mut parts = vec![m.season_sentence(Season::from_month(month))];

    if let Some(temp) = finite(temperature) {
        let line = if temp >= HOT_CELSIUS {
            m.temp_hot
        } else if temp <= COLD_CELSIUS {
            m.temp_cold
        } else if temp >= WARM_CELSIUS {
            m.temp_warm
        } else {
            m.temp_comfortable
        };
        parts.push(line.to_string());
    }

    if let Some(humidity) = finite(humidity) {
        if humidity >= HUMID_PERCENT {
            parts.push(m.humidity_high.to_string());
        } else if humidity <= DRY_PERCENT {
            parts.push(m.humidity_dry.to_string());
        }
    }

    if let Some(rain) = finite(rain_chance) {
        let line = if rain >= RAIN_LIKELY_PERCENT {
            m.rain_likely
        } else if rain >= RAIN_POSSIBLE_PERCENT {
            m.rain_possible
        } else {
            m.rain_unlikely
        };
        parts.push(line.to_string());
    }

    parts.join(" ")
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(1), Season::Cold);
        assert_eq!(Season::from_month(2), Season::Cold);
        assert_eq!(Season::from_month(3), Season::SpringSummer);
        assert_eq!(Season::from_month(5), Season::SpringSummer);
        assert_eq!(Season::from_month(6), Season::Monsoon);
        assert_eq!(Season::from_month(9), Season::Monsoon);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Cold);
    }

    #[test]
    fn test_only_season_when_nothing_known() {
        let advice = season_advice(None, None, None, 7, Locale::Hi);
        assert_eq!(advice, "यह मानसून का दौर है।");
    }

    #[test]
    fn test_full_hindi_line() {
        let advice = season_advice(Some(40.0), Some(80.0), Some(65.0), 5, Locale::Hi);
        assert_eq!(
            advice,
            "यह वसंत से गर्मी का दौर है। \
             तेज़ धूप से बचने के लिए हल्के कपड़े पहनें और पर्याप्त पानी पिएँ। \
             उच्च आर्द्रता के कारण पसीना अधिक हो सकता है, ठंडा रहने के उपाय करें। \
             बारिश की प्रबल संभावना है, छाता या रेनकोट साथ रखें।"
        );
    }

    #[test]
    fn test_temperature_thresholds() {
        let m = Locale::En.messages();
        let line = |t: f64| season_advice(Some(t), None, None, 1, Locale::En);

        assert!(line(38.0).ends_with(m.temp_hot));
        assert!(line(37.9).ends_with(m.temp_warm));
        assert!(line(28.0).ends_with(m.temp_warm));
        assert!(line(27.9).ends_with(m.temp_comfortable));
        assert!(line(10.1).ends_with(m.temp_comfortable));
        assert!(line(10.0).ends_with(m.temp_cold));
        assert!(line(-5.0).ends_with(m.temp_cold));
    }

    #[test]
    fn test_moderate_humidity_adds_nothing() {
        let with = season_advice(None, Some(50.0), None, 1, Locale::En);
        let without = season_advice(None, None, None, 1, Locale::En);
        assert_eq!(with, without);
    }

    #[test]
    fn test_humidity_thresholds() {
        let m = Locale::En.messages();
        assert!(season_advice(None, Some(75.0), None, 1, Locale::En).ends_with(m.humidity_high));
        assert!(season_advice(None, Some(35.0), None, 1, Locale::En).ends_with(m.humidity_dry));
    }

    #[test]
    fn test_rain_thresholds() {
        let m = Locale::En.messages();
        let line = |r: f64| season_advice(None, None, Some(r), 1, Locale::En);

        assert!(line(60.0).ends_with(m.rain_likely));
        assert!(line(59.0).ends_with(m.rain_possible));
        assert!(line(30.0).ends_with(m.rain_possible));
        assert!(line(29.0).ends_with(m.rain_unlikely));
        assert!(line(0.0).ends_with(m.rain_unlikely));
    }

    #[test]
    fn test_non_finite_readings_are_skipped() {
        let advice = season_advice(Some(f64::NAN), Some(f64::INFINITY), None, 10, Locale::En);
        assert_eq!(advice, "This is the autumn period.");
    }
}
