//! Hour-of-day bands for Shiva puja.

use serde::Serialize;

use crate::language::Bilingual;

/// Named worship period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PujaBand {
    /// 04:00-06:00.
    BrahmaMuhurta,
    /// 18:00-20:00, Pradosh.
    Evening,
    /// 23:00-02:00, wrapping midnight.
    Midnight,
    General,
}

impl PujaBand {
    pub const fn time(self) -> Bilingual {
        match self {
            Self::BrahmaMuhurta => Bilingual::new("ब्रह्म मुहूर्त", "Brahma Muhurta"),
            Self::Evening => Bilingual::new("संध्या काल", "Evening Time"),
            Self::Midnight => Bilingual::new("निशीथ काल", "Midnight Time"),
            Self::General => Bilingual::new("सामान्य काल", "General Time"),
        }
    }

    pub const fn significance(self) -> Bilingual {
        match self {
            Self::BrahmaMuhurta => Bilingual::new("सर्वोत्तम पूजा काल", "Best worship time"),
            Self::Evening => Bilingual::new("प्रदोष पूजा का समय", "Pradosh worship time"),
            Self::Midnight => Bilingual::new("शिवरात्रि पूजा काल", "Shivaratri worship time"),
            Self::General => Bilingual::new("नियमित पूजा समय", "Regular worship time"),
        }
    }
}

/// Band for an hour of day (0-23). Bands are tested in a fixed order and
/// the first match wins.
pub const fn puja_band(hour: u32) -> PujaBand {
    if hour >= 4 && hour < 6 {
        PujaBand::BrahmaMuhurta
    } else if hour >= 18 && hour < 20 {
        PujaBand::Evening
    } else if hour >= 23 || hour < 2 {
        PujaBand::Midnight
    } else {
        PujaBand::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hours() {
        assert_eq!(puja_band(5), PujaBand::BrahmaMuhurta);
        assert_eq!(puja_band(19), PujaBand::Evening);
        assert_eq!(puja_band(23), PujaBand::Midnight);
        assert_eq!(puja_band(1), PujaBand::Midnight);
        assert_eq!(puja_band(10), PujaBand::General);
    }

    #[test]
    fn band_edges() {
        assert_eq!(puja_band(0), PujaBand::Midnight);
        assert_eq!(puja_band(2), PujaBand::General);
        assert_eq!(puja_band(4), PujaBand::BrahmaMuhurta);
        assert_eq!(puja_band(6), PujaBand::General);
        assert_eq!(puja_band(18), PujaBand::Evening);
        assert_eq!(puja_band(20), PujaBand::General);
        assert_eq!(puja_band(22), PujaBand::General);
    }

    #[test]
    fn every_hour_has_labels() {
        for h in 0..24 {
            let band = puja_band(h);
            assert!(!band.time().english.is_empty());
            assert!(!band.significance().sanskrit.is_empty());
        }
    }
}
