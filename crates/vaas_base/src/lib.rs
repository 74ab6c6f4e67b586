//! Static panchang vocabulary and the pure formulas that index into it.
//!
//! This crate provides:
//! - Bilingual (Sanskrit/English) name tables for tithi, nakshatra, yoga
//! - The seven Shiv Vaas abodes and the `(tithi * 2 + 5) mod 7` rule
//! - Day-based Shiva observance literals (Monday, Pradosh, Shivaratri, Shravan)
//! - Puja time bands by hour of day
//!
//! Nothing here performs I/O or consults an ephemeris. Every table is a
//! `const` array of [`Bilingual`] records so the two languages share one
//! index space.

pub mod language;
pub mod muhurta;
pub mod nakshatra;
pub mod shiv_vaas;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use language::{Bilingual, BilingualList, Language, ParseLanguageError};
pub use muhurta::{PujaBand, puja_band};
pub use nakshatra::{NAKSHATRA_COUNT, NAKSHATRA_NAMES, nakshatra_number_from_day_of_year};
pub use shiv_vaas::{
    MONDAY_FAST, MONTHLY_SHIVARATRI, Observance, PRADOSH_FAST, SHIV_VAAS_LOCATIONS,
    SHRAVAN_MONDAY_FAST, ShivVaasLocation, shiv_vaas_index, shiv_vaas_location,
};
pub use tithi::{
    KARANA_PLACEHOLDER, MS_PER_DAY, Paksha, SYNODIC_CYCLE_DAYS, TITHI_NAMES, TITHI_SEGMENT_DEG,
    TithiPosition, approximate_tithi_number, lunar_age_days, tithi_from_elongation,
    tithi_name_index,
};
pub use util::normalize_360;
pub use yoga::{YOGA_COUNT, YOGA_NAMES, yoga_index_from_day_of_year};
