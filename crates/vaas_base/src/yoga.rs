//! Yoga names and the day-of-year index.
//!
//! Unlike nakshatra numbering, the yoga index is used directly as a 0-based
//! table offset.

use crate::language::Bilingual;

/// Number of yogas.
pub const YOGA_COUNT: usize = 27;

/// The 27 yogas from Vishkumbha to Vaidhriti.
pub const YOGA_NAMES: [Bilingual; YOGA_COUNT] = [
    Bilingual::new("विष्कुम्भ", "Vishkumbha"),
    Bilingual::new("प्रीति", "Preeti"),
    Bilingual::new("आयुष्मान", "Ayushman"),
    Bilingual::new("सौभाग्य", "Saubhagya"),
    Bilingual::new("शोभन", "Shobhana"),
    Bilingual::new("अतिगण्ड", "Atiganda"),
    Bilingual::new("सुकर्मा", "Sukarma"),
    Bilingual::new("धृति", "Dhriti"),
    Bilingual::new("शूल", "Shoola"),
    Bilingual::new("गण्ड", "Ganda"),
    Bilingual::new("वृद्धि", "Vriddhi"),
    Bilingual::new("ध्रुव", "Dhruva"),
    Bilingual::new("व्याघात", "Vyaghata"),
    Bilingual::new("हर्षण", "Harshana"),
    Bilingual::new("वज्र", "Vajra"),
    Bilingual::new("सिद्धि", "Siddhi"),
    Bilingual::new("व्यतीपात", "Vyatipata"),
    Bilingual::new("वरीयान", "Variyan"),
    Bilingual::new("परिघ", "Parigha"),
    Bilingual::new("शिव", "Shiva"),
    Bilingual::new("सिद्ध", "Siddha"),
    Bilingual::new("साध्य", "Sadhya"),
    Bilingual::new("शुभ", "Shubha"),
    Bilingual::new("शुक्ल", "Shukla"),
    Bilingual::new("ब्रह्म", "Brahma"),
    Bilingual::new("इन्द्र", "Indra"),
    Bilingual::new("वैधृति", "Vaidhriti"),
];

/// 0-based yoga index for a day of the year: `doy mod 27`.
pub const fn yoga_index_from_day_of_year(day_of_year: u32) -> usize {
    (day_of_year % YOGA_COUNT as u32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(YOGA_NAMES[0].english, "Vishkumbha");
        assert_eq!(YOGA_NAMES[26].english, "Vaidhriti");
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(yoga_index_from_day_of_year(0), 0);
        assert_eq!(yoga_index_from_day_of_year(1), 1);
        assert_eq!(yoga_index_from_day_of_year(27), 0);
    }
}
