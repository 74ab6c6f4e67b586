//! Placeholder sun and moon times used without an ephemeris.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use vaas_base::lunar_age_days;
use vaas_ephem::GeoLocation;

use crate::tithi::epoch_millis;
use crate::types::{MoonTimes, SunTimes};

/// `date` at `hour:minute`. Out-of-range components give midnight.
pub(crate) fn at_hour_minute(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
}

/// Split fractional hours into (hour mod 24, minute).
fn hour_minute(hours: f64) -> (u32, u32) {
    let whole = hours.floor();
    let minute = ((hours - whole) * 60.0).floor() as u32;
    ((whole as u32) % 24, minute.min(59))
}

/// Midnight of `date` plus fractional `hours`, rolling into later days.
fn after_midnight(date: NaiveDate, hours: f64) -> NaiveDateTime {
    let whole = hours.floor();
    let minute = ((hours - whole) * 60.0).floor().min(59.0);
    let midnight = date.and_time(NaiveTime::MIN);
    midnight
        .checked_add_signed(Duration::hours(whole as i64) + Duration::minutes(minute as i64))
        .unwrap_or(midnight)
}

/// Fixed 06:30 sunrise and 18:15 sunset on the date of `date`.
///
/// The location is accepted for signature parity with the ephemeris path
/// and does not affect the result.
pub fn sun_times(date: NaiveDateTime, _location: &GeoLocation) -> SunTimes {
    let day = date.date();
    SunTimes {
        sunrise: at_hour_minute(day, 6, 30),
        sunset: at_hour_minute(day, 18, 15),
    }
}

/// Moonrise/moonset from the day-count lunar phase.
///
/// `moonrise = 6 + 0.8 * phase` hours after midnight of `date`, so from
/// phase 22.5 it falls on the next day. `moonset = 18 + 0.5 * phase` hours
/// wrapped to 24h and kept on the date of `date`.
pub fn moon_times(date: NaiveDateTime) -> MoonTimes {
    let phase = lunar_age_days(epoch_millis(date));
    let (set_h, set_m) = hour_minute(18.0 + phase * 0.5);
    let day = date.date();
    MoonTimes {
        moonrise: after_midnight(day, 6.0 + phase * 0.8),
        moonset: at_hour_minute(day, set_h, set_m),
    }
}
