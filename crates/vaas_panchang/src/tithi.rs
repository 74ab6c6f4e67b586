//! Tithi from ephemeris elongation, with day-count fallback.

use chrono::NaiveDateTime;
use tracing::{debug, warn};
use vaas_base::{
    Language, Paksha, TITHI_NAMES, TithiPosition, approximate_tithi_number, tithi_from_elongation,
    tithi_name_index,
};
use vaas_ephem::{Ephemeris, GeoLocation, SampleTime, SunMoonPositions};

use crate::types::{ApproxTithi, TithiDetails};

/// Unix milliseconds of a civil timestamp, read as UTC.
pub(crate) fn epoch_millis(date: NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}

/// Day-count tithi: `floor((days since 1970) mod 29.53) + 1`.
///
/// The name is always Sanskrit and the number is not folded into a paksha
/// (16..=30 are returned as is).
pub fn approximate_tithi(date: NaiveDateTime) -> ApproxTithi {
    let number = approximate_tithi_number(epoch_millis(date));
    ApproxTithi {
        name: TITHI_NAMES[tithi_name_index(number)].sanskrit,
        number,
    }
}

/// Day-count tithi with name and paksha in `language`. Used when the
/// ephemeris is unavailable.
pub fn approximate_tithi_details(date: NaiveDateTime, language: Language) -> TithiDetails {
    let number = approximate_tithi_number(epoch_millis(date));
    TithiDetails {
        name: TITHI_NAMES[tithi_name_index(number)].get(language),
        number,
        paksha: Paksha::from_tithi_number(number).name(language),
    }
}

/// Tithi details from an ephemeris sample.
pub(crate) fn tithi_from_positions(
    positions: &SunMoonPositions,
    language: Language,
) -> TithiDetails {
    let elongation = positions.elongation_deg();
    let tithi = tithi_from_elongation(elongation);
    debug!(
        sun = positions.sun_longitude,
        moon = positions.moon_longitude,
        elongation,
        tithi = tithi.number,
        "tithi from elongation"
    );
    details(&tithi, language)
}

fn details(tithi: &TithiPosition, language: Language) -> TithiDetails {
    TithiDetails {
        name: tithi.name(language),
        number: tithi.number,
        paksha: tithi.paksha.name(language),
    }
}

/// Tithi at local sunrise of `date`.
///
/// Falls back to [`approximate_tithi_details`] when the ephemeris fails.
pub fn accurate_tithi<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDateTime,
    location: &GeoLocation,
    language: Language,
) -> TithiDetails {
    match eph.sun_moon(SampleTime::Sunrise(date.date()), location) {
        Ok(positions) => tithi_from_positions(&positions, language),
        Err(error) => {
            warn!(operation = "accurate_tithi", %error, "ephemeris failed, using day-count tithi");
            approximate_tithi_details(date, language)
        }
    }
}

/// Tithi at `specific`.
///
/// Falls back to [`accurate_tithi`] at sunrise of `date` (which in turn may
/// fall back to the day-count estimate).
pub fn accurate_tithi_at_time<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDateTime,
    location: &GeoLocation,
    specific: NaiveDateTime,
    language: Language,
) -> TithiDetails {
    match eph.sun_moon(SampleTime::Moment(specific), location) {
        Ok(positions) => tithi_from_positions(&positions, language),
        Err(error) => {
            warn!(
                operation = "accurate_tithi_at_time",
                %error,
                "ephemeris failed, using tithi at sunrise"
            );
            accurate_tithi(eph, date, location, language)
        }
    }
}
