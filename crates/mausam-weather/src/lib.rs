//! City weather lookup for Mausam
//!
//! Geocodes a city name, fetches current conditions and the short-term rain
//! outlook from Open-Meteo, and renders a localized advice card.

pub mod advice;
pub mod card;
pub mod forecast;
pub mod form;
pub mod geocode;
pub mod locale;
pub mod provider;
pub mod rain;
pub mod retry;
pub mod timezone;
pub mod types;

pub use advice::{season_advice, Season};
pub use card::WeatherCard;
pub use form::{FormController, Submission};
pub use locale::{Locale, Messages};
pub use provider::{ProviderSettings, WeatherProvider};
pub use retry::RetryConfig;
pub use types::*;
