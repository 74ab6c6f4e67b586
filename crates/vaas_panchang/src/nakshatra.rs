//! Day-of-year nakshatra and yoga.
//!
//! These are calendar proxies, not longitude-based: the nakshatra number is
//! `(day_of_year mod 27) + 1` and the yoga index is `day_of_year mod 27`
//! (0-based, so the two drift apart by one).

use chrono::{Datelike, NaiveDateTime};
use vaas_base::{
    Language, NAKSHATRA_NAMES, YOGA_NAMES, nakshatra_number_from_day_of_year,
    yoga_index_from_day_of_year,
};

use crate::types::NakshatraDetails;

/// Whole days since Dec 31 of the previous year (Jan 1 is 1).
pub fn day_of_year(date: NaiveDateTime) -> u32 {
    date.ordinal()
}

pub fn nakshatra_for_date(date: NaiveDateTime, language: Language) -> NakshatraDetails {
    let number = nakshatra_number_from_day_of_year(day_of_year(date));
    NakshatraDetails {
        name: NAKSHATRA_NAMES[(number - 1) as usize].get(language),
        number,
    }
}

pub fn yoga_for_date(date: NaiveDateTime, language: Language) -> &'static str {
    YOGA_NAMES[yoga_index_from_day_of_year(day_of_year(date))].get(language)
}
