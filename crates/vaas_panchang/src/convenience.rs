//! Calculator bundle with a fixed ephemeris and defaults.

use chrono::NaiveDateTime;
use vaas_ephem::{Ephemeris, MeanEphemeris};

use crate::config::PanchangConfig;
use crate::types::{
    AccuratePanchang, AccurateShivVaas, ApproxTithi, MoonTimes, NakshatraDetails, PujaTime,
    ShivVaasData, SunTimes, TithiDetails,
};

/// Every calculator, bound to one ephemeris and [`PanchangConfig`].
///
/// ```no_run
/// use vaas_panchang::Panchang;
///
/// let p = Panchang::default();
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
///     .and_then(|d| d.and_hms_opt(0, 0, 0))
///     .unwrap();
/// println!("{}", p.panchang(date, None).panchang.tithi);
/// ```
#[derive(Debug, Clone)]
pub struct Panchang<E> {
    ephemeris: E,
    config: PanchangConfig,
}

impl<E: Ephemeris> Panchang<E> {
    pub fn new(ephemeris: E, config: PanchangConfig) -> Self {
        Self { ephemeris, config }
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn approximate_tithi(&self, date: NaiveDateTime) -> ApproxTithi {
        crate::tithi::approximate_tithi(date)
    }

    pub fn tithi(&self, date: NaiveDateTime) -> TithiDetails {
        crate::tithi::accurate_tithi(
            &self.ephemeris,
            date,
            &self.config.location,
            self.config.language,
        )
    }

    pub fn tithi_at(&self, date: NaiveDateTime, specific: NaiveDateTime) -> TithiDetails {
        crate::tithi::accurate_tithi_at_time(
            &self.ephemeris,
            date,
            &self.config.location,
            specific,
            self.config.language,
        )
    }

    pub fn shiv_vaas(
        &self,
        date: NaiveDateTime,
        specific: Option<NaiveDateTime>,
    ) -> AccurateShivVaas {
        crate::shiv_vaas::accurate_shiv_vaas(
            &self.ephemeris,
            date,
            &self.config.location,
            self.config.language,
            specific,
        )
    }

    pub fn shiv_vaas_day(&self, date: NaiveDateTime) -> ShivVaasData {
        crate::shiv_vaas::shiv_vaas_for_date(date, self.config.language)
    }

    pub fn nakshatra(&self, date: NaiveDateTime) -> NakshatraDetails {
        crate::nakshatra::nakshatra_for_date(date, self.config.language)
    }

    pub fn yoga(&self, date: NaiveDateTime) -> &'static str {
        crate::nakshatra::yoga_for_date(date, self.config.language)
    }

    pub fn sun_times(&self, date: NaiveDateTime) -> SunTimes {
        crate::sun_moon::sun_times(date, &self.config.location)
    }

    pub fn moon_times(&self, date: NaiveDateTime) -> MoonTimes {
        crate::sun_moon::moon_times(date)
    }

    pub fn panchang(
        &self,
        date: NaiveDateTime,
        specific: Option<NaiveDateTime>,
    ) -> AccuratePanchang {
        crate::panchang::accurate_panchang(
            &self.ephemeris,
            date,
            Some(&self.config.location),
            self.config.language,
            specific,
        )
    }

    pub fn puja_time(&self, date: NaiveDateTime) -> PujaTime {
        crate::puja::puja_time(date, self.config.language)
    }
}

impl Default for Panchang<MeanEphemeris> {
    fn default() -> Self {
        Self::new(MeanEphemeris::default(), PanchangConfig::default())
    }
}
