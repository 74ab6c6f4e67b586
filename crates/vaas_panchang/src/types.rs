//! Result records returned by the panchang calculators.

use chrono::NaiveDateTime;
use serde::Serialize;
use vaas_base::ShivVaasLocation;

/// Day-count tithi estimate.
///
/// `number` is the raw 1..=30 position in the mean synodic cycle and is not
/// comparable with [`TithiDetails::number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproxTithi {
    /// Sanskrit tithi name.
    pub name: &'static str,
    pub number: u32,
}

/// Tithi with its paksha, in the requested language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TithiDetails {
    pub name: &'static str,
    /// 1-based tithi number (1..=30).
    pub number: u32,
    /// Paksha label, e.g. "Shukla Paksha".
    pub paksha: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NakshatraDetails {
    pub name: &'static str,
    /// 1-based nakshatra number (1..=27).
    pub number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunTimes {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonTimes {
    pub moonrise: NaiveDateTime,
    pub moonset: NaiveDateTime,
}

/// One day's panchang.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanchangData {
    pub tithi: &'static str,
    pub tithi_number: u32,
    pub nakshatra: &'static str,
    pub nakshatra_number: u32,
    pub yoga: &'static str,
    pub karana: &'static str,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub moonrise: NaiveDateTime,
    pub moonset: NaiveDateTime,
    /// Rahu Kaal as "HH:MM - HH:MM".
    pub rahu: String,
    /// Yamaghanta as "HH:MM - HH:MM".
    pub yamaghanta: String,
    pub gulika: String,
    pub abhijit: String,
}

/// Raw longitudes behind a panchang.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccurateData {
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    /// Moon-Sun elongation in degrees [0, 360).
    pub tithi_degrees: f64,
}

/// Which tier produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Computed from ephemeris positions.
    Ephemeris,
    /// Ephemeris unavailable; day-count approximations and placeholders.
    Approximation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuratePanchang {
    #[serde(flatten)]
    pub panchang: PanchangData,
    pub accurate_data: AccurateData,
    pub source: DataSource,
}

/// A Shiva observance window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShivVaasData {
    pub is_shiv_vaas: bool,
    /// Observance name; empty when no rule matched.
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub significance: String,
    pub observances: Vec<String>,
}

/// Shiva's abode for the day, from the tithi.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccurateShivVaas {
    #[serde(flatten)]
    pub shiv_vaas: ShivVaasData,
    /// 1..=7, see [`vaas_base::SHIV_VAAS_LOCATIONS`].
    pub shiv_vaas_index: u8,
    pub location: ShivVaasLocation,
    pub sunrise_time: NaiveDateTime,
    pub tithi_details: TithiDetails,
    pub source: DataSource,
}

/// Recommended worship period for an hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PujaTime {
    pub time: &'static str,
    pub significance: &'static str,
}
