//! Julian Date conversions for UTC `chrono` timestamps.

use chrono::{DateTime, NaiveDateTime};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date (UTC) of a UTC timestamp.
pub fn jd_from_utc(utc: NaiveDateTime) -> f64 {
    UNIX_EPOCH_JD + utc.and_utc().timestamp_millis() as f64 / MS_PER_DAY
}

/// UTC timestamp of a Julian Date, rounded to the millisecond.
///
/// Returns `None` when the date is outside what `chrono` can represent.
pub fn utc_from_jd(jd: f64) -> Option<NaiveDateTime> {
    let ms = ((jd - UNIX_EPOCH_JD) * MS_PER_DAY).round();
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64).map(|dt| dt.naive_utc())
}

/// Julian centuries since J2000.0.
///
/// The UTC/TT difference (about a minute) is ignored at this precision.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
