//! The weather lookup form: one submission per city entered.
//!
//! A submission trims the input, refuses blanks, then chains the geocoding
//! call into the forecast call and renders the card. Only one submission
//! may be in flight at a time; while it runs the form reports its loading
//! label and refuses further submissions.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::card::WeatherCard;
use crate::locale::{Locale, Messages};
use crate::provider::WeatherProvider;
use crate::types::{Forecast, GeoLocation, WeatherError};

/// How a submission ended
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission {
    /// Input was blank; nothing was fetched
    Rejected { status: String },
    /// Another submission was still in flight
    Busy,
    /// Lookup succeeded and the card is ready to show
    Shown {
        status: String,
        location: GeoLocation,
        forecast: Forecast,
        card: WeatherCard,
    },
    /// Lookup failed; details were logged
    Failed {
        status: String,
        #[serde(skip)]
        error: WeatherError,
    },
}

impl Submission {
    /// Status line to display, if any
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Rejected { status } | Self::Shown { status, .. } | Self::Failed { status, .. } => {
                Some(status.as_str())
            }
            Self::Busy => None,
        }
    }

    /// The card, present only on success
    pub fn card(&self) -> Option<&WeatherCard> {
        match self {
            Self::Shown { card, .. } => Some(card),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }
}

pub struct FormController {
    provider: WeatherProvider,
    loading: AtomicBool,
}

impl FormController {
    pub fn new(provider: WeatherProvider) -> Self {
        Self {
            provider,
            loading: AtomicBool::new(false),
        }
    }

    pub fn locale(&self) -> Locale {
        self.provider.settings().locale
    }

    fn messages(&self) -> &'static Messages {
        self.locale().messages()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Label of the submit control for the current state
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            self.messages().submit_loading
        } else {
            self.messages().submit_idle
        }
    }

    pub async fn submit(&self, input: &str) -> Submission {
        self.submit_with(input, Utc::now(), |_| {}).await
    }

    /// Run one submission anchored at `now`, reporting interim status lines
    /// (such as the "fetching" notice) through `on_status`.
    pub async fn submit_with<F>(&self, input: &str, now: DateTime<Utc>, mut on_status: F) -> Submission
    where
        F: FnMut(&str),
    {
        let messages = self.messages();
        let city = input.trim();

        if city.is_empty() {
            return Submission::Rejected {
                status: messages.empty_city.to_string(),
            };
        }

        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            tracing::debug!("Submission for {:?} ignored, form is busy", city);
            return Submission::Busy;
        };

        on_status(messages.fetching);

        match self.lookup(city, now).await {
            Ok((location, forecast)) => {
                let card = WeatherCard::render(&forecast, now, self.locale());
                Submission::Shown {
                    status: messages.fresh_data(&location.name, &location.country),
                    location,
                    forecast,
                    card,
                }
            }
            Err(e) => {
                tracing::error!("Weather lookup for {:?} failed: {}", city, e.detail());
                Submission::Failed {
                    status: messages.failure.to_string(),
                    error: e,
                }
            }
        }
    }

    async fn lookup(
        &self,
        city: &str,
        now: DateTime<Utc>,
    ) -> Result<(GeoLocation, Forecast), WeatherError> {
        let location = self.provider.locate(city).await?;
        let forecast = self.provider.forecast_at(&location, now).await?;
        Ok((location, forecast))
    }
}

/// Holds the loading flag for the lifetime of one submission
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
