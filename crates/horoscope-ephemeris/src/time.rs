//! Civil time to Julian Day conversion.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::EphemerisError;

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of the J2000.0 epoch, 2000-01-01T12:00:00 TT.
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Resolve a local wall-clock time in an IANA timezone to a UTC instant.
///
/// Ambiguous local times (the repeated hour when clocks fall back) resolve
/// to the earlier instant. Local times skipped by a spring-forward
/// transition are rejected.
pub fn to_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    timezone: &str,
) -> Result<DateTime<Utc>, EphemerisError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(EphemerisError::InvalidDate { year, month, day })?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(EphemerisError::InvalidTime { hour, minute })?;
    let tz: Tz = timezone
        .parse()
        .map_err(|e| EphemerisError::UnknownTimezone {
            name: timezone.to_owned(),
            reason: format!("{e}"),
        })?;

    let local = date.and_time(time);
    let resolved = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| EphemerisError::NonexistentLocalTime {
            local: local.to_string(),
            timezone: timezone.to_owned(),
        })?;

    Ok(resolved.with_timezone(&Utc))
}

/// Julian Day (UT) of an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    // Seconds since 1970 fit comfortably in an f64 mantissa.
    #[allow(clippy::cast_precision_loss)]
    let seconds = instant.timestamp() as f64;
    let fraction = f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    (seconds + fraction) / 86_400.0 + UNIX_EPOCH_JD
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}
