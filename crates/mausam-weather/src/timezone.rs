//! Timezone lookups for forecast timestamps and the advice calendar.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolve an IANA timezone name, falling back to UTC for unknown names.
pub fn resolve(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!("Unknown timezone {:?}, using UTC", name);
            Tz::UTC
        }
    }
}

/// Calendar month (1-12) of `now` as observed in `tz`
pub fn local_month(tz: Tz, now: DateTime<Utc>) -> u32 {
    now.with_timezone(&tz).month()
}

/// Interpret a local wall-clock time in `tz` as an absolute instant.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times that
/// do not exist locally (DST spring-forward gap) yield `None`.
pub fn local_to_utc(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
