//! Nakshatra (lunar mansion) names and the day-of-year index.
//!
//! The index used here is a calendar proxy, not the Moon's sidereal
//! longitude: consecutive days of the year step through the 27 mansions.

use crate::language::Bilingual;

/// Number of nakshatras in the 27-fold scheme.
pub const NAKSHATRA_COUNT: usize = 27;

/// The 27 nakshatras from Ashwini to Revati.
pub const NAKSHATRA_NAMES: [Bilingual; NAKSHATRA_COUNT] = [
    Bilingual::new("अश्विनी", "Ashwini"),
    Bilingual::new("भरणी", "Bharani"),
    Bilingual::new("कृत्तिका", "Krittika"),
    Bilingual::new("रोहिणी", "Rohini"),
    Bilingual::new("मृगशीर्षा", "Mrigashirsha"),
    Bilingual::new("आर्द्रा", "Ardra"),
    Bilingual::new("पुनर्वसु", "Punarvasu"),
    Bilingual::new("पुष्य", "Pushya"),
    Bilingual::new("आश्लेषा", "Ashlesha"),
    Bilingual::new("मघा", "Magha"),
    Bilingual::new("पूर्व फाल्गुनी", "Purva Phalguni"),
    Bilingual::new("उत्तर फाल्गुनी", "Uttara Phalguni"),
    Bilingual::new("हस्त", "Hasta"),
    Bilingual::new("चित्रा", "Chitra"),
    Bilingual::new("स्वाती", "Swati"),
    Bilingual::new("विशाखा", "Vishakha"),
    Bilingual::new("अनुराधा", "Anuradha"),
    Bilingual::new("ज्येष्ठा", "Jyeshtha"),
    Bilingual::new("मूल", "Mula"),
    Bilingual::new("पूर्वाषाढ़ा", "Purva Ashadha"),
    Bilingual::new("उत्तराषाढ़ा", "Uttara Ashadha"),
    Bilingual::new("श्रवण", "Shravana"),
    Bilingual::new("धनिष्ठा", "Dhanishta"),
    Bilingual::new("शतभिषा", "Shatabhisha"),
    Bilingual::new("पूर्वभाद्रपद", "Purva Bhadrapada"),
    Bilingual::new("उत्तरभाद्रपद", "Uttara Bhadrapada"),
    Bilingual::new("रेवती", "Revati"),
];

/// 1-based nakshatra number for a day of the year: `(doy mod 27) + 1`.
pub const fn nakshatra_number_from_day_of_year(day_of_year: u32) -> u32 {
    (day_of_year % NAKSHATRA_COUNT as u32) + 1
}
