//! Analytic low-precision Sun and Moon.
//!
//! Sun: mean longitude plus equation of center (Meeus ch. 25, low accuracy).
//! Moon: the largest periodic terms of Meeus ch. 47. Longitudes are good to
//! a few arcminutes for the Sun and roughly 0.3 deg for the Moon, well inside
//! a 12 deg tithi segment.

use chrono::{Duration, NaiveDateTime};

use crate::Ephemeris;
use crate::error::EphemerisError;
use crate::julian::{centuries_since_j2000, jd_from_utc};
use crate::riseset::sun_rise_set_utc;
use crate::types::{GeoLocation, PlanetaryPosition, SampleTime, SunMoonPositions};

/// Indian Standard Time, UTC+05:30.
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Largest UTC offset accepted, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

// ---------------------------------------------------------------------------
// Sun
// ---------------------------------------------------------------------------

/// Intermediate solar quantities shared by longitude and rise/set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolarTerms {
    pub apparent_longitude_deg: f64,
    pub distance_au: f64,
    pub declination_rad: f64,
    pub equation_of_time_min: f64,
}

pub(crate) fn solar_terms(t: f64) -> SolarTerms {
    let l0 = normalize_deg(280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t);
    let m = normalize_deg(357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_longitude = l0 + c;
    let anomaly = m + c.to_radians();
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * anomaly.cos());

    let omega = (125.04 - 1_934.136 * t).to_radians();
    let apparent = normalize_deg(true_longitude - 0.005_69 - 0.004_78 * omega.sin());

    let obliquity = (23.439_291 - 0.013_004_2 * t + 0.002_56 * omega.cos()).to_radians();
    let declination_rad = (obliquity.sin() * apparent.to_radians().sin()).asin();

    let y = (obliquity / 2.0).tan().powi(2);
    let l0r = l0.to_radians();
    let eot_rad = y * (2.0 * l0r).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0r).cos()
        - 0.5 * y * y * (4.0 * l0r).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    SolarTerms {
        apparent_longitude_deg: apparent,
        distance_au,
        declination_rad,
        equation_of_time_min: 4.0 * eot_rad.to_degrees(),
    }
}

/// Apparent geocentric ecliptic position of the Sun at Julian centuries `t`
/// since J2000. Distance in AU.
pub fn sun_position(t: f64) -> PlanetaryPosition {
    let terms = solar_terms(t);
    PlanetaryPosition {
        longitude: terms.apparent_longitude_deg,
        latitude: 0.0,
        distance: terms.distance_au,
    }
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

/// Geocentric ecliptic position of the Moon at Julian centuries `t` since
/// J2000. Distance in km.
pub fn moon_position(t: f64) -> PlanetaryPosition {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    // Eccentricity damping of terms involving the solar anomaly.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let sum_l = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * e * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * e * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * e * (2.0 * d - m).sin()
        - 0.040_923 * e * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * e * (m + mp).sin();

    let sum_b = 5.128_122 * f.sin()
        + 0.280_602 * (mp + f).sin()
        + 0.277_693 * (mp - f).sin()
        + 0.173_237 * (2.0 * d - f).sin();

    let distance = 385_000.56
        - 20_905.355 * mp.cos()
        - 3_699.111 * (2.0 * d - mp).cos()
        - 2_955.968 * (2.0 * d).cos()
        - 569.925 * (2.0 * mp).cos();

    PlanetaryPosition {
        longitude: normalize_deg(lp + sum_l),
        latitude: sum_b,
        distance,
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Self-contained [`Ephemeris`] with a fixed civil UTC offset.
///
/// All timestamps it accepts and returns are local civil time in that
/// offset (IST by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanEphemeris {
    utc_offset_minutes: i32,
}

impl MeanEphemeris {
    /// Provider for a civil offset east of UTC, in minutes (IST is 330).
    pub fn new(utc_offset_minutes: i32) -> Result<Self, EphemerisError> {
        if utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(EphemerisError::OutOfRange(
                "UTC offset must be within +/-18 hours",
            ));
        }
        Ok(Self { utc_offset_minutes })
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    fn offset(&self) -> Duration {
        Duration::minutes(i64::from(self.utc_offset_minutes))
    }

    /// Local civil time to UTC.
    pub fn to_utc(&self, local: NaiveDateTime) -> Result<NaiveDateTime, EphemerisError> {
        local
            .checked_sub_signed(self.offset())
            .ok_or(EphemerisError::OutOfRange("timestamp not representable"))
    }

    /// UTC to local civil time.
    pub fn to_local(&self, utc: NaiveDateTime) -> Result<NaiveDateTime, EphemerisError> {
        utc.checked_add_signed(self.offset())
            .ok_or(EphemerisError::OutOfRange("timestamp not representable"))
    }

    /// Sun and Moon at a local instant, without rise/set.
    pub fn positions_at(
        &self,
        local: NaiveDateTime,
    ) -> Result<(PlanetaryPosition, PlanetaryPosition), EphemerisError> {
        let t = centuries_since_j2000(jd_from_utc(self.to_utc(local)?));
        Ok((sun_position(t), moon_position(t)))
    }
}

impl Default for MeanEphemeris {
    fn default() -> Self {
        Self {
            utc_offset_minutes: IST_OFFSET_MINUTES,
        }
    }
}

impl Ephemeris for MeanEphemeris {
    fn sun_moon(
        &self,
        at: SampleTime,
        location: &GeoLocation,
    ) -> Result<SunMoonPositions, EphemerisError> {
        let rs = sun_rise_set_utc(at.date(), location)?;
        let sunrise = self.to_local(rs.sunrise)?;
        let sunset = self.to_local(rs.sunset)?;
        let sample = match at {
            SampleTime::Sunrise(_) => sunrise,
            SampleTime::Moment(t) => t,
        };
        let (sun, moon) = self.positions_at(sample)?;
        tracing::trace!(
            %sample,
            sun = sun.longitude,
            moon = moon.longitude,
            "mean ephemeris sample"
        );
        Ok(SunMoonPositions {
            sun_longitude: sun.longitude,
            moon_longitude: moon.longitude,
            sunrise,
            sunset,
            sun,
            moon,
        })
    }
}
