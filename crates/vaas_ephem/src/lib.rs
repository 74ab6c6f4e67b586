//! Sun and Moon positions for panchang calculations.
//!
//! Calculators never reach for a global ephemeris; they take an
//! [`Ephemeris`] by reference so tests can substitute a deterministic stub.
//!
//! This crate provides:
//! - The [`Ephemeris`] capability (one method) and its result types
//! - [`MeanEphemeris`], an analytic low-precision provider (truncated
//!   Meeus series, hour-angle sunrise) that needs no data files
//! - Julian Date helpers for `chrono` timestamps

pub mod error;
pub mod julian;
pub mod mean;
pub mod riseset;
pub mod types;

pub use error::EphemerisError;
pub use julian::{J2000_JD, UNIX_EPOCH_JD, centuries_since_j2000, jd_from_utc, utc_from_jd};
pub use mean::{IST_OFFSET_MINUTES, MeanEphemeris, moon_position, sun_position};
pub use riseset::{RiseSet, SUNRISE_ALTITUDE_DEG, sun_rise_set_utc};
pub use types::{GeoLocation, PlanetaryPosition, SampleTime, SunMoonPositions};

/// Source of Sun/Moon longitudes and sunrise/sunset for a location.
///
/// Implementations are synchronous and deterministic. They return an error
/// for inputs they cannot serve (invalid location, no sunrise on that date);
/// callers decide how to degrade.
pub trait Ephemeris {
    /// Positions sampled at `at`, with the sunrise and sunset of that
    /// sample's local date.
    fn sun_moon(
        &self,
        at: SampleTime,
        location: &GeoLocation,
    ) -> Result<SunMoonPositions, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sun_moon(
        &self,
        at: SampleTime,
        location: &GeoLocation,
    ) -> Result<SunMoonPositions, EphemerisError> {
        (**self).sun_moon(at, location)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn sun_moon(
        &self,
        at: SampleTime,
        location: &GeoLocation,
    ) -> Result<SunMoonPositions, EphemerisError> {
        (**self).sun_moon(at, location)
    }
}
