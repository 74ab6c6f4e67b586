//! Sunrise/sunset from the solar hour angle.
//!
//! Iterates the standard hour-angle formula a few times, re-evaluating the
//! Sun's declination and the equation of time at each event estimate.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::EphemerisError;
use crate::julian::{centuries_since_j2000, jd_from_utc, utc_from_jd};
use crate::mean::solar_terms;
use crate::types::GeoLocation;

/// Apparent altitude of the Sun's center at rise/set: refraction (34')
/// plus semidiameter (16').
pub const SUNRISE_ALTITUDE_DEG: f64 = -0.8333;

/// Refinement passes after the noon estimate.
const ITERATIONS: usize = 3;

/// Sunrise and sunset of one date, in UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSet {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

/// Approximate local solar noon JD from 0h UT JD and longitude.
fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Hour angle (degrees) of the Sun at [`SUNRISE_ALTITUDE_DEG`], together
/// with the equation of time (minutes), evaluated at `jd`.
fn hour_angle_and_eot(jd: f64, location: &GeoLocation) -> Result<(f64, f64), EphemerisError> {
    let terms = solar_terms(centuries_since_j2000(jd));
    let phi = location.latitude_rad();
    let dec = terms.declination_rad;
    let cos_h = (SUNRISE_ALTITUDE_DEG.to_radians().sin() - phi.sin() * dec.sin())
        / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        return Err(EphemerisError::SunNeverRises);
    }
    if cos_h < -1.0 {
        return Err(EphemerisError::SunNeverSets);
    }
    Ok((cos_h.acos().to_degrees(), terms.equation_of_time_min))
}

/// Event time as minutes after 0h UTC of the date.
fn event_minutes(
    jd_midnight: f64,
    location: &GeoLocation,
    rising: bool,
) -> Result<f64, EphemerisError> {
    let mut jd = approximate_local_noon_jd(jd_midnight, location.longitude_deg);
    let mut minutes = 0.0;
    for _ in 0..ITERATIONS {
        let (h, eot) = hour_angle_and_eot(jd, location)?;
        let noon = 720.0 - 4.0 * location.longitude_deg - eot;
        minutes = if rising { noon - 4.0 * h } else { noon + 4.0 * h };
        jd = jd_midnight + minutes / 1440.0;
    }
    Ok(minutes)
}

/// Sunrise and sunset (UTC) for the given calendar date at `location`.
///
/// The date is taken at 0h UTC; the results may fall on the neighbouring
/// UTC date for locations far from Greenwich.
pub fn sun_rise_set_utc(date: NaiveDate, location: &GeoLocation) -> Result<RiseSet, EphemerisError> {
    location.validate()?;
    let jd_midnight = jd_from_utc(date.and_time(chrono::NaiveTime::MIN));
    let rise = event_minutes(jd_midnight, location, true)?;
    let set = event_minutes(jd_midnight, location, false)?;
    let to_utc = |minutes: f64| {
        utc_from_jd(jd_midnight + minutes / 1440.0)
            .ok_or(EphemerisError::OutOfRange("rise/set time not representable"))
    };
    Ok(RiseSet {
        sunrise: to_utc(rise)?,
        sunset: to_utc(set)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn minutes_of_day(t: NaiveDateTime) -> i64 {
        i64::from(t.hour()) * 60 + i64::from(t.minute())
    }

    #[test]
    fn greenwich_equinox_near_six() {
        let rs = sun_rise_set_utc(date(2024, 3, 20), &GeoLocation::new(0.0, 0.0)).unwrap();
        // Equator at equinox: about 06:00/18:00 minus EoT (~7 min) and the
        // refraction allowance (~4 min).
        assert!((minutes_of_day(rs.sunrise) - 360).abs() < 15, "{}", rs.sunrise);
        assert!((minutes_of_day(rs.sunset) - 1080).abs() < 15, "{}", rs.sunset);
        assert!(rs.sunrise < rs.sunset);
    }

    #[test]
    fn polar_night() {
        let r = sun_rise_set_utc(date(2024, 12, 21), &GeoLocation::new(80.0, 0.0));
        assert_eq!(r, Err(EphemerisError::SunNeverRises));
    }

    #[test]
    fn midnight_sun() {
        let r = sun_rise_set_utc(date(2024, 6, 21), &GeoLocation::new(80.0, 0.0));
        assert_eq!(r, Err(EphemerisError::SunNeverSets));
    }

    #[test]
    fn invalid_location() {
        let r = sun_rise_set_utc(date(2024, 6, 21), &GeoLocation::new(100.0, 0.0));
        assert!(matches!(r, Err(EphemerisError::InvalidLocation(_))));
    }
}
