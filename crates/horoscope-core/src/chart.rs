//! The three chart operations: natal chart, daily transits, current sky.
//!
//! Each operation asks the engine for one snapshot and aggregates it. The
//! caller supplies the engine and, where it matters, the current time, so
//! the operations stay deterministic under test.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use horoscope_ephemeris::{Ephemeris, GeoLocation, SnapshotRequest};
use horoscope_types::{BirthData, Chart, Planet, SkyReport, TransitReport, UNKNOWN_SIGN};
use serde::Deserialize;
use tracing::{debug, info};

use crate::aspects::{find_aspects, self_aspects};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::extract::{extract_bodies, extract_houses, retrograde_names, sign_of};
use crate::moon::moon_phase_of;
use crate::summary::build_transit_summary;

/// Hour assumed when a birth time is unknown.
pub const DEFAULT_BIRTH_HOUR: u32 = 12;

/// Number of aspects reported for the current sky.
pub const SKY_ASPECT_LIMIT: usize = 10;

/// Snapshot label for transit charts.
const TRANSIT_LABEL: &str = "Transit";

/// Snapshot label for the current sky.
const SKY_LABEL: &str = "Now";

/// Timezone transit and sky snapshots are computed in.
const UTC_ZONE: &str = "UTC";

/// Accepted layouts for a transit target that carries a time of day.
const TARGET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Birth details submitted for a natal chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NatalChartRequest {
    /// Label for the chart.
    pub name: String,
    /// Calendar year of birth.
    pub year: i32,
    /// Month of birth, 1-12.
    pub month: u32,
    /// Day of birth.
    pub day: u32,
    /// Local hour of birth; noon when unknown.
    pub hour: Option<u32>,
    /// Local minute of birth; zero when unknown.
    pub minute: Option<u32>,
    /// Birthplace name. Accepted but not geocoded.
    pub city: Option<String>,
    /// Birthplace latitude.
    pub lat: Option<f64>,
    /// Birthplace longitude, east positive.
    pub lng: Option<f64>,
    /// IANA timezone of the birth time.
    pub tz: Option<String>,
}

/// Defaults applied to natal chart requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDefaults {
    /// Timezone used when a request has none.
    pub timezone: String,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            timezone: UTC_ZONE.to_owned(),
        }
    }
}

impl From<&ChartConfig> for ChartDefaults {
    fn from(config: &ChartConfig) -> Self {
        Self {
            timezone: config.default_timezone.clone(),
        }
    }
}

/// Compute a natal chart.
///
/// A missing hour means noon and a missing minute means zero; an explicit
/// midnight is kept as given. The location is passed to the engine only
/// when both latitude and longitude are present.
pub fn natal_chart(
    engine: &dyn Ephemeris,
    request: &NatalChartRequest,
    defaults: &ChartDefaults,
) -> Result<Chart, ChartError> {
    let hour = request.hour.unwrap_or(DEFAULT_BIRTH_HOUR);
    let minute = request.minute.unwrap_or(0);
    let tz = request
        .tz
        .as_deref()
        .filter(|tz| !tz.is_empty())
        .unwrap_or(&defaults.timezone)
        .to_owned();
    let location = match (request.lat, request.lng) {
        (Some(lat), Some(lng)) => Some(GeoLocation { lat, lng }),
        _ => None,
    };
    if let Some(city) = &request.city {
        debug!(%city, "city lookup unsupported, relying on coordinates");
    }

    let snapshot = engine.snapshot(&SnapshotRequest {
        label: request.name.clone(),
        year: request.year,
        month: request.month,
        day: request.day,
        hour,
        minute,
        timezone: tz.clone(),
        location,
        online: false,
    })?;

    let planets = extract_bodies(&snapshot);
    let houses = extract_houses(&snapshot);
    let natal_aspects = self_aspects(&planets);

    let chart = Chart {
        name: request.name.clone(),
        birth_data: BirthData {
            year: request.year,
            month: request.month,
            day: request.day,
            hour,
            minute,
            tz,
            lat: request.lat,
            lng: request.lng,
        },
        sun_sign: sign_of(&planets, Planet::Sun),
        moon_sign: sign_of(&planets, Planet::Moon),
        rising_sign: houses
            .first()
            .map_or_else(|| UNKNOWN_SIGN.to_owned(), |house| house.sign.clone()),
        moon_phase_at_birth: moon_phase_of(&planets),
        retrogrades_at_birth: retrograde_names(&planets),
        planets,
        houses,
        natal_aspects,
    };

    info!(
        name = %chart.name,
        sun = %chart.sun_sign,
        moon = %chart.moon_sign,
        rising = %chart.rising_sign,
        aspects = chart.natal_aspects.len(),
        "natal chart computed"
    );

    Ok(chart)
}

/// Parse a transit target into a UTC wall-clock time.
///
/// A bare date means midnight. Date-times without an offset are taken as
/// UTC; RFC 3339 inputs with an offset are converted to UTC.
pub fn parse_target(input: &str) -> Result<NaiveDateTime, ChartError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Some(parsed) = TARGET_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(parsed);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.naive_utc())
        .map_err(|e| {
            debug!(input, error = %e, "unparseable transit target");
            ChartError::InvalidTargetDate {
                input: input.to_owned(),
            }
        })
}

fn utc_snapshot_request(label: &str, moment: NaiveDateTime) -> SnapshotRequest {
    SnapshotRequest {
        label: label.to_owned(),
        year: moment.year(),
        month: moment.month(),
        day: moment.day(),
        hour: moment.hour(),
        minute: moment.minute(),
        timezone: UTC_ZONE.to_owned(),
        location: None,
        online: false,
    }
}

/// Compute transits for a date against a natal chart.
///
/// `date` defaults to the UTC date of `now`. The transiting bodies are
/// compared with the chart's stored bodies, so same-body pairs (transiting
/// Sun to natal Sun) are included.
pub fn daily_transits(
    engine: &dyn Ephemeris,
    chart: &Chart,
    date: Option<&str>,
    now: DateTime<Utc>,
) -> Result<TransitReport, ChartError> {
    let target = date
        .filter(|date| !date.is_empty())
        .map_or_else(|| now.date_naive().to_string(), str::to_owned);
    let moment = parse_target(&target)?;

    let snapshot = engine.snapshot(&utc_snapshot_request(TRANSIT_LABEL, moment))?;
    let current_planets = extract_bodies(&snapshot);
    let transit_to_natal = find_aspects(&current_planets, &chart.planets, false);
    let moon_phase = moon_phase_of(&current_planets);
    let retrogrades = retrograde_names(&current_planets);
    let summary =
        build_transit_summary(&current_planets, &transit_to_natal, moon_phase, &retrogrades)
            .join("\n");

    info!(
        chart = %chart.name,
        date = %target,
        aspects = transit_to_natal.len(),
        "daily transits computed"
    );

    Ok(TransitReport {
        date: target,
        moon_sign: sign_of(&current_planets, Planet::Moon),
        moon_phase,
        current_planets,
        retrogrades,
        transit_to_natal,
        summary,
    })
}

/// Compute the sky for `now`, independent of any chart.
///
/// Only the first [`SKY_ASPECT_LIMIT`] aspects in detection order are kept.
pub fn current_sky(engine: &dyn Ephemeris, now: DateTime<Utc>) -> Result<SkyReport, ChartError> {
    let snapshot = engine.snapshot(&utc_snapshot_request(SKY_LABEL, now.naive_utc()))?;
    let planets = extract_bodies(&snapshot);
    let mut sky_aspects = self_aspects(&planets);
    sky_aspects.truncate(SKY_ASPECT_LIMIT);

    debug!(timestamp = %now, aspects = sky_aspects.len(), "current sky computed");

    Ok(SkyReport {
        timestamp: now,
        moon_sign: sign_of(&planets, Planet::Moon),
        moon_phase: moon_phase_of(&planets),
        sun_sign: sign_of(&planets, Planet::Sun),
        retrogrades: retrograde_names(&planets),
        planets,
        sky_aspects,
    })
}
