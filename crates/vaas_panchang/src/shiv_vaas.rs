//! Shiv Vaas: the daily abode of Shiva and Shiva observance days.
//!
//! Two independent classifications:
//! - [`accurate_shiv_vaas`]: abode from `(tithi * 2 + 5) mod 7`, valid from
//!   one sunrise to the next.
//! - [`shiv_vaas_for_date`]: Monday/Pradosh/Shivaratri/Shravan observance
//!   rules on the day-count tithi and weekday.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use tracing::{debug, warn};
use vaas_base::{
    Language, MONDAY_FAST, MONTHLY_SHIVARATRI, Observance, PRADOSH_FAST, SHRAVAN_MONDAY_FAST,
    shiv_vaas_location,
};
use vaas_ephem::{Ephemeris, GeoLocation, SampleTime};

use crate::sun_moon::{at_hour_minute, sun_times};
use crate::tithi::{accurate_tithi, accurate_tithi_at_time, approximate_tithi};
use crate::types::{AccurateShivVaas, DataSource, ShivVaasData};

/// Shiva's abode for `date` (or for `specific`, when given).
///
/// The tithi follows [`accurate_tithi`] / [`accurate_tithi_at_time`],
/// including their fallbacks. If sunrise cannot be computed the 06:30
/// placeholder is used and `source` is [`DataSource::Approximation`].
pub fn accurate_shiv_vaas<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDateTime,
    location: &GeoLocation,
    language: Language,
    specific: Option<NaiveDateTime>,
) -> AccurateShivVaas {
    let tithi = match specific {
        Some(at) => accurate_tithi_at_time(eph, date, location, at, language),
        None => accurate_tithi(eph, date, location, language),
    };

    let anchor = specific.unwrap_or(date);
    let (sunrise, source) = match eph.sun_moon(SampleTime::Sunrise(anchor.date()), location) {
        Ok(p) => (p.sunrise, DataSource::Ephemeris),
        Err(error) => {
            warn!(
                operation = "accurate_shiv_vaas",
                %error,
                "ephemeris failed, using placeholder sunrise"
            );
            (
                sun_times(anchor, location).sunrise,
                DataSource::Approximation,
            )
        }
    };

    let loc = shiv_vaas_location(tithi.number);
    debug!(tithi = tithi.number, index = loc.index, "shiv vaas abode");

    AccurateShivVaas {
        shiv_vaas: ShivVaasData {
            is_shiv_vaas: true,
            kind: format!("{} ({})", loc.name.get(language), loc.name.english),
            start_time: sunrise,
            end_time: sunrise
                .checked_add_signed(Duration::days(1))
                .unwrap_or(sunrise),
            significance: loc.significance.get(language).to_owned(),
            observances: loc.observances.to_vec(language),
        },
        shiv_vaas_index: loc.index,
        location: *loc,
        sunrise_time: sunrise,
        tithi_details: tithi,
        source,
    }
}

/// Shiva observance for the day of `date`, if any.
///
/// Rules run in order and later matches overwrite earlier ones: Monday,
/// Chaturdashi (tithi 14), Trayodashi (tithi 13), then a July/August Monday
/// which replaces only the name and significance. The window is 05:00 on the
/// day to 06:00 the next day whether or not a rule matched.
pub fn shiv_vaas_for_date(date: NaiveDateTime, language: Language) -> ShivVaasData {
    let tithi = approximate_tithi(date).number;
    let monday = date.weekday() == Weekday::Mon;
    let shravan = matches!(date.month(), 7 | 8);

    let mut matched: Option<Observance> = None;
    if monday {
        matched = Some(MONDAY_FAST);
    }
    if tithi == 14 {
        matched = Some(MONTHLY_SHIVARATRI);
    }
    if tithi == 13 {
        matched = Some(PRADOSH_FAST);
    }
    if shravan && monday {
        let observances = matched.map_or(SHRAVAN_MONDAY_FAST.observances, |o| o.observances);
        matched = Some(Observance {
            observances,
            ..SHRAVAN_MONDAY_FAST
        });
    }
    debug!(tithi, monday, shravan, matched = matched.is_some(), "day shiv vaas");

    let day = date.date();
    let next = day.succ_opt().unwrap_or(day);
    let (kind, significance, observances) = match matched {
        Some(o) => (
            o.kind.get(language).to_owned(),
            o.significance.get(language).to_owned(),
            o.observances.to_vec(language),
        ),
        None => (String::new(), String::new(), Vec::new()),
    };

    ShivVaasData {
        is_shiv_vaas: matched.is_some(),
        kind,
        start_time: at_hour_minute(day, 5, 0),
        end_time: at_hour_minute(next, 6, 0),
        significance,
        observances,
    }
}
