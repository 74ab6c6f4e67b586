use chrono::{NaiveDateTime, Timelike};
use vaas_base::{Language, puja_band};

use crate::types::PujaTime;

/// Worship period for the hour of `date`.
pub fn puja_time(date: NaiveDateTime, language: Language) -> PujaTime {
    let band = puja_band(date.hour());
    PujaTime {
        time: band.time().get(language),
        significance: band.significance().get(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_hour(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 8)
            .unwrap()
            .and_hms_opt(h, 45, 0)
            .unwrap()
    }

    #[test]
    fn brahma_muhurta_in_sanskrit() {
        let p = puja_time(at_hour(5), Language::Sanskrit);
        assert_eq!(p.time, "ब्रह्म मुहूर्त");
        assert_eq!(p.significance, "सर्वोत्तम पूजा काल");
    }

    #[test]
    fn bands_in_english() {
        assert_eq!(puja_time(at_hour(19), Language::English).time, "Evening Time");
        assert_eq!(
            puja_time(at_hour(19), Language::English).significance,
            "Pradosh worship time"
        );
        assert_eq!(puja_time(at_hour(23), Language::English).time, "Midnight Time");
        assert_eq!(puja_time(at_hour(1), Language::English).time, "Midnight Time");
        assert_eq!(puja_time(at_hour(10), Language::English).time, "General Time");
    }
}
