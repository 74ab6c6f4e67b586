//! Panchang and Shiv Vaas calculators.
//!
//! Every calculator returns a plain value. Functions that need Sun/Moon
//! positions take an [`Ephemeris`] and, when it fails, log a warning and fall
//! back to day-count approximations instead of returning an error.
//!
//! Timestamps are `chrono::NaiveDateTime` in the observer's local civil time.
//! Day-count formulas read them as UTC milliseconds since 1970.

pub mod config;
pub mod convenience;
pub mod nakshatra;
pub mod panchang;
pub mod puja;
pub mod shiv_vaas;
pub mod sun_moon;
pub mod tithi;
pub mod types;

pub use config::PanchangConfig;
pub use convenience::Panchang;
pub use nakshatra::{day_of_year, nakshatra_for_date, yoga_for_date};
pub use panchang::{
    ABHIJIT_WINDOW, BASIC_ACCURATE_DATA, BASIC_RAHU_WINDOW, BASIC_YAMAGHANTA_WINDOW,
    GULIKA_WINDOW, accurate_panchang, basic_panchang,
};
pub use puja::puja_time;
pub use shiv_vaas::{accurate_shiv_vaas, shiv_vaas_for_date};
pub use sun_moon::{moon_times, sun_times};
pub use tithi::{accurate_tithi, accurate_tithi_at_time, approximate_tithi, approximate_tithi_details};
pub use types::{
    AccurateData, AccuratePanchang, AccurateShivVaas, ApproxTithi, DataSource, MoonTimes,
    NakshatraDetails, PanchangData, PujaTime, ShivVaasData, SunTimes, TithiDetails,
};

pub use vaas_base::Language;
pub use vaas_ephem::{Ephemeris, EphemerisError, GeoLocation, MeanEphemeris};
