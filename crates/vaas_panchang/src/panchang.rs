//! Full-day panchang.
//!
//! The primary path samples the ephemeris once and derives sunrise-relative
//! windows from it. Any ephemeris failure switches the whole record to the
//! basic panchang: day-count tithi, placeholder sun/moon times and fixed
//! windows.

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};
use vaas_base::{KARANA_PLACEHOLDER, Language};
use vaas_ephem::{Ephemeris, GeoLocation, SampleTime, SunMoonPositions};

use crate::nakshatra::{nakshatra_for_date, yoga_for_date};
use crate::sun_moon::{moon_times, sun_times};
use crate::tithi::{approximate_tithi_details, tithi_from_positions};
use crate::types::{AccurateData, AccuratePanchang, DataSource, PanchangData};

/// Gulika Kaal; not computed per location.
pub const GULIKA_WINDOW: &str = "15:00 - 16:30";
/// Abhijit Muhurta; not computed per location.
pub const ABHIJIT_WINDOW: &str = "11:48 - 12:36";
/// Rahu Kaal reported by the basic panchang.
pub const BASIC_RAHU_WINDOW: &str = "13:30 - 15:00";
/// Yamaghanta reported by the basic panchang.
pub const BASIC_YAMAGHANTA_WINDOW: &str = "10:30 - 12:00";
/// Longitude diagnostics reported by the basic panchang.
pub const BASIC_ACCURATE_DATA: AccurateData = AccurateData {
    sun_longitude: 45.0,
    moon_longitude: 120.0,
    tithi_degrees: 75.0,
};

const RAHU_OFFSET_MIN: i64 = 270;
const YAMAGHANTA_OFFSET_MIN: i64 = 450;
const WINDOW_MIN: i64 = 90;
const MOON_OFFSET_MIN: i64 = 120;

fn plus_minutes(t: NaiveDateTime, minutes: i64) -> Option<NaiveDateTime> {
    t.checked_add_signed(Duration::minutes(minutes))
}

/// `"HH:MM - HH:MM"` for a window starting `offset` minutes after `sunrise`.
fn window_after(sunrise: NaiveDateTime, offset: i64) -> Option<String> {
    let start = plus_minutes(sunrise, offset)?;
    let end = plus_minutes(start, WINDOW_MIN)?;
    Some(format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")))
}

fn panchang_from_positions(
    positions: &SunMoonPositions,
    date: NaiveDateTime,
    language: Language,
) -> Option<AccuratePanchang> {
    let tithi = tithi_from_positions(positions, language);
    let nakshatra = nakshatra_for_date(date, language);
    let tithi_degrees = positions.elongation_deg();
    debug!(tithi_degrees, sunrise = %positions.sunrise, "panchang from ephemeris");

    Some(AccuratePanchang {
        panchang: PanchangData {
            tithi: tithi.name,
            tithi_number: tithi.number,
            nakshatra: nakshatra.name,
            nakshatra_number: nakshatra.number,
            yoga: yoga_for_date(date, language),
            karana: KARANA_PLACEHOLDER.get(language),
            sunrise: positions.sunrise,
            sunset: positions.sunset,
            moonrise: plus_minutes(positions.sunrise, MOON_OFFSET_MIN)?,
            moonset: plus_minutes(positions.sunset, MOON_OFFSET_MIN)?,
            rahu: window_after(positions.sunrise, RAHU_OFFSET_MIN)?,
            yamaghanta: window_after(positions.sunrise, YAMAGHANTA_OFFSET_MIN)?,
            gulika: GULIKA_WINDOW.to_owned(),
            abhijit: ABHIJIT_WINDOW.to_owned(),
        },
        accurate_data: AccurateData {
            sun_longitude: positions.sun_longitude,
            moon_longitude: positions.moon_longitude,
            tithi_degrees,
        },
        source: DataSource::Ephemeris,
    })
}

/// Panchang without an ephemeris.
pub fn basic_panchang(
    date: NaiveDateTime,
    location: &GeoLocation,
    language: Language,
) -> AccuratePanchang {
    let tithi = approximate_tithi_details(date, language);
    let nakshatra = nakshatra_for_date(date, language);
    let sun = sun_times(date, location);
    let moon = moon_times(date);

    AccuratePanchang {
        panchang: PanchangData {
            tithi: tithi.name,
            tithi_number: tithi.number,
            nakshatra: nakshatra.name,
            nakshatra_number: nakshatra.number,
            yoga: yoga_for_date(date, language),
            karana: KARANA_PLACEHOLDER.get(language),
            sunrise: sun.sunrise,
            sunset: sun.sunset,
            moonrise: moon.moonrise,
            moonset: moon.moonset,
            rahu: BASIC_RAHU_WINDOW.to_owned(),
            yamaghanta: BASIC_YAMAGHANTA_WINDOW.to_owned(),
            gulika: GULIKA_WINDOW.to_owned(),
            abhijit: ABHIJIT_WINDOW.to_owned(),
        },
        accurate_data: BASIC_ACCURATE_DATA,
        source: DataSource::Approximation,
    }
}

/// Panchang for `date` at `location` (New Delhi when `None`).
///
/// Longitudes are sampled at sunrise of `date`, or at `specific` when given.
/// Never fails: an ephemeris error yields [`basic_panchang`].
pub fn accurate_panchang<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDateTime,
    location: Option<&GeoLocation>,
    language: Language,
    specific: Option<NaiveDateTime>,
) -> AccuratePanchang {
    let location = location.copied().unwrap_or(GeoLocation::NEW_DELHI);
    let at = match specific {
        Some(t) => SampleTime::Moment(t),
        None => SampleTime::Sunrise(date.date()),
    };
    match eph.sun_moon(at, &location) {
        Ok(positions) => match panchang_from_positions(&positions, date, language) {
            Some(p) => p,
            None => {
                warn!(
                    operation = "accurate_panchang",
                    error = "time window out of range",
                    "using basic panchang"
                );
                basic_panchang(date, &location, language)
            }
        },
        Err(error) => {
            warn!(operation = "accurate_panchang", %error, "ephemeris failed, using basic panchang");
            basic_panchang(date, &location, language)
        }
    }
}
