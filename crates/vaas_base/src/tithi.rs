//! Tithi (lunar day) names and index arithmetic.
//!
//! A synodic month is split into 30 tithis of 12 deg of Moon-Sun elongation.
//! Names repeat across the two pakshas, so the table has 15 entries and the
//! last one covers both Purnima and Amavasya.

use serde::Serialize;

use crate::language::{Bilingual, Language};
use crate::util::normalize_360;

/// Elongation covered by one tithi: 360/30 = 12 degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Mean synodic month used by the approximate (no-ephemeris) formula.
pub const SYNODIC_CYCLE_DAYS: f64 = 29.53;

/// Milliseconds per civil day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// The 15 tithi names, Pratipada to Purnima/Amavasya.
pub const TITHI_NAMES: [Bilingual; 15] = [
    Bilingual::new("प्रतिपदा", "Pratipada"),
    Bilingual::new("द्वितीया", "Dwitiya"),
    Bilingual::new("तृतीया", "Tritiya"),
    Bilingual::new("चतुर्थी", "Chaturthi"),
    Bilingual::new("पंचमी", "Panchami"),
    Bilingual::new("षष्ठी", "Shashthi"),
    Bilingual::new("सप्तमी", "Saptami"),
    Bilingual::new("अष्टमी", "Ashtami"),
    Bilingual::new("नवमी", "Navami"),
    Bilingual::new("दशमी", "Dashami"),
    Bilingual::new("एकादशी", "Ekadashi"),
    Bilingual::new("द्वादशी", "Dwadashi"),
    Bilingual::new("त्रयोदशी", "Trayodashi"),
    Bilingual::new("चतुर्दशी", "Chaturdashi"),
    Bilingual::new("पूर्णिमा/अमावस्या", "Purnima/Amavasya"),
];

/// Karana is not computed; every panchang reports this value.
pub const KARANA_PLACEHOLDER: Bilingual = Bilingual::new("बव", "Bava");

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Bright (waxing) half, tithis 1-15.
    Shukla,
    /// Dark (waning) half, tithis 16-30.
    Krishna,
}

impl Paksha {
    /// Paksha for a 1-based tithi number: Shukla iff `number <= 15`.
    pub const fn from_tithi_number(number: u32) -> Self {
        if number <= 15 { Self::Shukla } else { Self::Krishna }
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Shukla => Bilingual::new("शुक्ल पक्ष", "Shukla Paksha"),
            Self::Krishna => Bilingual::new("कृष्ण पक्ष", "Krishna Paksha"),
        }
    }

    pub const fn name(self, language: Language) -> &'static str {
        self.label().get(language)
    }
}

/// Tithi derived from an elongation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TithiPosition {
    /// 1-based tithi number, 1..=30.
    pub number: u32,
    pub paksha: Paksha,
    /// Index into [`TITHI_NAMES`], 0..=14.
    pub name_index: usize,
}

impl TithiPosition {
    pub const fn name(&self, language: Language) -> &'static str {
        TITHI_NAMES[self.name_index].get(language)
    }
}

/// Index into [`TITHI_NAMES`] for a 1-based tithi number.
///
/// Numbers above 15 are folded into the second paksha. Anything that still
/// falls outside the table (0, or above 30) maps to the last entry.
pub fn tithi_name_index(number: u32) -> usize {
    let adjusted = if number > 15 { number - 15 } else { number };
    match adjusted.checked_sub(1) {
        Some(i) if (i as usize) < TITHI_NAMES.len() => i as usize,
        _ => TITHI_NAMES.len() - 1,
    }
}

/// Tithi from Moon-Sun elongation in degrees.
///
/// `floor(((moon - sun) mod 360) / 12) + 1`, then reduced into 1..=30.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let diff = normalize_360(elongation_deg);
    let raw = (diff / TITHI_SEGMENT_DEG).floor() as u32 + 1;
    let number = ((raw - 1) % 30) + 1;
    TithiPosition {
        number,
        paksha: Paksha::from_tithi_number(number),
        name_index: tithi_name_index(number),
    }
}

/// Days into the mean synodic cycle for a Unix epoch in milliseconds.
pub fn lunar_age_days(epoch_millis: i64) -> f64 {
    (epoch_millis as f64 / MS_PER_DAY).rem_euclid(SYNODIC_CYCLE_DAYS)
}

/// Approximate tithi number, 1..=30, not folded into a paksha.
pub fn approximate_tithi_number(epoch_millis: i64) -> u32 {
    lunar_age_days(epoch_millis).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_alignment() {
        for (i, t) in TITHI_NAMES.iter().enumerate() {
            assert!(!t.sanskrit.is_empty(), "sanskrit tithi {i} empty");
            assert!(!t.english.is_empty(), "english tithi {i} empty");
        }
        assert_eq!(TITHI_NAMES[13].english, "Chaturdashi");
        assert_eq!(TITHI_NAMES[14].english, "Purnima/Amavasya");
    }

    #[test]
    fn elongation_zero_is_pratipada() {
        let pos = tithi_from_elongation(0.0);
        assert_eq!(pos.number, 1);
        assert_eq!(pos.paksha, Paksha::Shukla);
        assert_eq!(pos.name(Language::English), "Pratipada");
    }

    #[test]
    fn elongation_boundaries() {
        assert_eq!(tithi_from_elongation(11.999).number, 1);
        assert_eq!(tithi_from_elongation(12.0).number, 2);
        assert_eq!(tithi_from_elongation(179.9).number, 15);
        assert_eq!(tithi_from_elongation(180.0).number, 16);
        assert_eq!(tithi_from_elongation(359.9).number, 30);
    }

    #[test]
    fn krishna_half_folds_names() {
        let pos = tithi_from_elongation(200.0);
        assert_eq!(pos.number, 17);
        assert_eq!(pos.paksha, Paksha::Krishna);
        assert_eq!(pos.name(Language::English), "Dwitiya");
    }

    #[test]
    fn negative_elongation_wraps() {
        let pos = tithi_from_elongation(-10.0);
        assert_eq!(pos.number, 30);
        assert_eq!(pos.name(Language::English), "Purnima/Amavasya");
    }

    #[test]
    fn name_index_out_of_table() {
        assert_eq!(tithi_name_index(0), 14);
        assert_eq!(tithi_name_index(31), 14);
        assert_eq!(tithi_name_index(14), 13);
        assert_eq!(tithi_name_index(29), 13);
    }

    #[test]
    fn paksha_labels() {
        assert_eq!(Paksha::from_tithi_number(15), Paksha::Shukla);
        assert_eq!(Paksha::from_tithi_number(16), Paksha::Krishna);
        assert_eq!(Paksha::Shukla.name(Language::Sanskrit), "शुक्ल पक्ष");
        assert_eq!(Paksha::Krishna.name(Language::English), "Krishna Paksha");
    }

    #[test]
    fn approximate_at_epoch() {
        assert_eq!(approximate_tithi_number(0), 1);
        // 15 days after the epoch
        assert_eq!(approximate_tithi_number(15 * 86_400_000), 16);
    }

    #[test]
    fn approximate_before_epoch_in_range() {
        let n = approximate_tithi_number(-1);
        assert!((1..=30).contains(&n), "got {n}");
    }
}
