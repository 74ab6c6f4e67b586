//! Locations, sampling instants, and provider results.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::EphemerisError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// New Delhi, the reference location when none is given.
    pub const NEW_DELHI: GeoLocation = GeoLocation::new(28.6139, 77.2090);

    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Check that both coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !self.longitude_deg.is_finite() {
            return Err(EphemerisError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::NEW_DELHI
    }
}

/// When to sample the Sun and Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTime {
    /// At local sunrise of the given date.
    Sunrise(NaiveDate),
    /// At an explicit local time.
    Moment(NaiveDateTime),
}

impl SampleTime {
    /// Local calendar date whose sunrise/sunset are reported.
    pub fn date(self) -> NaiveDate {
        match self {
            Self::Sunrise(d) => d,
            Self::Moment(t) => t.date(),
        }
    }
}

/// Ecliptic position of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryPosition {
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Geocentric distance (AU for the Sun, km for the Moon).
    pub distance: f64,
}

/// Result of an [`Ephemeris`](crate::Ephemeris) query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunMoonPositions {
    /// Sun ecliptic longitude in degrees at the sample instant.
    pub sun_longitude: f64,
    /// Moon ecliptic longitude in degrees at the sample instant.
    pub moon_longitude: f64,
    /// Local sunrise of the sample's date.
    pub sunrise: NaiveDateTime,
    /// Local sunset of the sample's date.
    pub sunset: NaiveDateTime,
    pub sun: PlanetaryPosition,
    pub moon: PlanetaryPosition,
}

impl SunMoonPositions {
    /// Moon-Sun elongation `(moon - sun + 360) mod 360`, in [0, 360).
    pub fn elongation_deg(&self) -> f64 {
        let e = (self.moon_longitude - self.sun_longitude + 360.0).rem_euclid(360.0);
        if e >= 360.0 { 0.0 } else { e }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_new_delhi() {
        let loc = GeoLocation::default();
        assert!((loc.latitude_deg - 28.6139).abs() < 1e-12);
        assert!((loc.longitude_deg - 77.2090).abs() < 1e-12);
        assert!(loc.validate().is_ok());
    }

    #[test]
    fn rejects_bad_latitude() {
        assert!(matches!(
            GeoLocation::new(91.0, 0.0).validate(),
            Err(EphemerisError::InvalidLocation(_))
        ));
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn rejects_bad_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -180.0).validate().is_ok());
    }

    #[test]
    fn sample_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(SampleTime::Sunrise(d).date(), d);
        let t = d.and_hms_opt(22, 10, 0).unwrap();
        assert_eq!(SampleTime::Moment(t).date(), d);
    }
}
