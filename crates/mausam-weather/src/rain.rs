//! Short-term rain outlook from the hourly precipitation probability series.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::timezone;

/// Number of upcoming hourly samples averaged into the rain chance
pub const DEFAULT_WINDOW_HOURS: usize = 6;

/// Open-Meteo hourly timestamps, e.g. "2025-07-01T14:00"
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Average the precipitation probability over the next `window` hourly samples.
///
/// `times` are wall-clock timestamps in `tz`. Samples stamped at or after
/// `now` are collected in order until `window` of them are found; a
/// timestamp that cannot be parsed counts as `now`. Missing probabilities
/// count as zero, including hours past the end of a shorter probability
/// series. When no sample qualifies, the last probability in the series is
/// returned instead.
pub fn average_next_hours(
    times: &[String],
    probabilities: &[Option<f64>],
    tz: Tz,
    now: DateTime<Utc>,
    window: usize,
) -> f64 {
    let upcoming: Vec<f64> = times
        .iter()
        .enumerate()
        .filter(|(_, time)| sample_instant(time, tz).unwrap_or(now) >= now)
        .map(|(i, _)| probabilities.get(i).copied().flatten().unwrap_or(0.0))
        .take(window)
        .collect();

    if upcoming.is_empty() {
        return probabilities.last().copied().flatten().unwrap_or(0.0);
    }

    let mean = upcoming.iter().sum::<f64>() / upcoming.len() as f64;
    round_half_up(mean)
}

fn sample_instant(time: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let local = NaiveDateTime::parse_from_str(time, HOURLY_TIME_FORMAT).ok()?;
    timezone::local_to_utc(tz, local)
}

/// Round to the nearest integer, with halves rounding towards positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    // `round` is exact but sends negative halves away from zero
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}
