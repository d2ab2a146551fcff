//! User-facing message catalogs.
//!
//! Hindi is the default catalog. English is available for users who pick
//! `en` in their settings or on the command line.

use serde::{Deserialize, Serialize};

use crate::advice::Season;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Hi,
    En,
}

impl Locale {
    /// Parse a language code such as "hi" or "en-IN". Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "hi" => Some(Self::Hi),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Language code sent to the geocoding API
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hi => "hi",
            Self::En => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Self::Hi => &HINDI,
            Self::En => &ENGLISH,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported language: {s}"))
    }
}

/// Every string the form and card can show
#[derive(Debug)]
pub struct Messages {
    pub empty_city: &'static str,
    pub fetching: &'static str,
    /// Joined as `{name}, {country}{fresh_data_suffix}`
    pub fresh_data_suffix: &'static str,
    pub failure: &'static str,
    pub submit_idle: &'static str,
    pub submit_loading: &'static str,

    pub season_spring_summer: &'static str,
    pub season_monsoon: &'static str,
    pub season_autumn: &'static str,
    pub season_cold: &'static str,
    pub season_prefix: &'static str,
    pub season_suffix: &'static str,

    pub temp_hot: &'static str,
    pub temp_cold: &'static str,
    pub temp_warm: &'static str,
    pub temp_comfortable: &'static str,

    pub humidity_high: &'static str,
    pub humidity_dry: &'static str,

    pub rain_likely: &'static str,
    pub rain_possible: &'static str,
    pub rain_unlikely: &'static str,
}

impl Messages {
    pub fn season_name(&self, season: Season) -> &'static str {
        match season {
            Season::SpringSummer => self.season_spring_summer,
            Season::Monsoon => self.season_monsoon,
            Season::Autumn => self.season_autumn,
            Season::Cold => self.season_cold,
        }
    }

    /// Opening sentence of the advice line
    pub fn season_sentence(&self, season: Season) -> String {
        format!(
            "{}{}{}",
            self.season_prefix,
            self.season_name(season),
            self.season_suffix
        )
    }

    /// Status line shown after a successful lookup
    pub fn fresh_data(&self, name: &str, country: &str) -> String {
        format!("{}, {}{}", name, country, self.fresh_data_suffix)
    }
}

static HINDI: Messages = Messages {
    empty_city: "कृपया शहर का नाम दर्ज करें।",
    fetching: "मौसम जानकारी प्राप्त की जा रही है…",
    fresh_data_suffix: " के लिए ताज़ा मौसम डेटा।",
    failure: "क्षमा करें, मौसम जानकारी प्राप्त नहीं हो सकी। कृपया बाद में पुनः प्रयास करें।",
    submit_idle: "Get Weather",
    submit_loading: "लोड हो रहा है…",

    season_spring_summer: "वसंत से गर्मी",
    season_monsoon: "मानसून",
    season_autumn: "शरद",
    season_cold: "ठंड का मौसम",
    season_prefix: "यह ",
    season_suffix: " का दौर है।",

    temp_hot: "तेज़ धूप से बचने के लिए हल्के कपड़े पहनें और पर्याप्त पानी पिएँ।",
    temp_cold: "गरम कपड़े पहनें और ठंडी हवाओं से खुद को ढँक कर रखें।",
    temp_warm: "हल्का और आरामदायक पहनावा चुनें तथा ठंडे पेय पदार्थ लें।",
    temp_comfortable: "तापमान आरामदायक है, सामान्य दिनचर्या जारी रखें।",

    humidity_high: "उच्च आर्द्रता के कारण पसीना अधिक हो सकता है, ठंडा रहने के उपाय करें।",
    humidity_dry: "हवा शुष्क है, त्वचा को मॉइस्चराइज़ रखें और पानी पिएँ।",

    rain_likely: "बारिश की प्रबल संभावना है, छाता या रेनकोट साथ रखें।",
    rain_possible: "हल्की फुहारें पड़ सकती हैं, सतर्क रहें।",
    rain_unlikely: "वर्षा की संभावना कम है, मौसम सुहाना रहेगा।",
};

static ENGLISH: Messages = Messages {
    empty_city: "Please enter a city name.",
    fetching: "Fetching weather information…",
    fresh_data_suffix: ": fresh weather data.",
    failure: "Sorry, weather information could not be retrieved. Please try again later.",
    submit_idle: "Get Weather",
    submit_loading: "Loading…",

    season_spring_summer: "spring-into-summer",
    season_monsoon: "monsoon",
    season_autumn: "autumn",
    season_cold: "cold season",
    season_prefix: "This is the ",
    season_suffix: " period.",

    temp_hot: "Wear light clothes to beat the harsh sun and drink plenty of water.",
    temp_cold: "Wear warm clothes and keep yourself covered against cold winds.",
    temp_warm: "Choose light, comfortable clothing and have cool drinks.",
    temp_comfortable: "The temperature is comfortable, carry on with your usual routine.",

    humidity_high: "High humidity may cause heavy sweating, take steps to stay cool.",
    humidity_dry: "The air is dry, keep your skin moisturised and drink water.",

    rain_likely: "Rain is very likely, carry an umbrella or raincoat.",
    rain_possible: "Light showers may fall, stay alert.",
    rain_unlikely: "Rain is unlikely, the weather will stay pleasant.",
};
