//! Shiv Vaas: the seven daily abodes of Shiva, and the day-based Shiva
//! observances (Monday fast, Pradosh, monthly Shivaratri, Shravan Monday).
//!
//! Abode rule: `X = tithi * 2 + 5`, `r = X mod 7`, abode `r`, with a zero
//! remainder meaning abode 7 (Shmashaan).

use serde::Serialize;

use crate::language::{Bilingual, BilingualList};

/// One of the seven Shiv Vaas abodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShivVaasLocation {
    /// 1-based abode number, 1..=7.
    pub index: u8,
    pub name: Bilingual,
    pub significance: Bilingual,
    pub observances: BilingualList,
    /// False only for Shmashaan, where new ventures are avoided.
    pub auspicious: bool,
}

/// The seven abodes, indexed by `index - 1`.
pub static SHIV_VAAS_LOCATIONS: [ShivVaasLocation; 7] = [
    ShivVaasLocation {
        index: 1,
        name: Bilingual::new("कैलाश", "Kailash"),
        significance: Bilingual::new(
            "भगवान शिव कैलाश में—अत्यंत शुभ",
            "Lord Shiva at Mount Kailash—very auspicious",
        ),
        observances: BilingualList::new(
            &["सभी शुभ कार्य", "आध्यात्मिक साधना", "नई शुरुआत"],
            &["All auspicious activities", "Spiritual practices", "New beginnings"],
        ),
        auspicious: true,
    },
    ShivVaasLocation {
        index: 2,
        name: Bilingual::new("गौरी सानिध्य", "Gauri Sannidhya"),
        significance: Bilingual::new(
            "शिव गौरी के साथ—विवाह और पारिवारिक कार्यों के लिए अच्छा",
            "Shiva with Gauri—good for marriage & family",
        ),
        observances: BilingualList::new(
            &["विवाह समारोह", "पारिवारिक कार्य", "रिश्तों के मामले"],
            &["Marriage ceremonies", "Family functions", "Relationship matters"],
        ),
        auspicious: true,
    },
    ShivVaasLocation {
        index: 3,
        name: Bilingual::new("वृषभ", "Vrishabh"),
        significance: Bilingual::new(
            "शिव नंदी पर सवार—यात्रा और नए उपक्रमों के लिए अच्छा",
            "Shiva riding Nandi—good for travel & new ventures",
        ),
        observances: BilingualList::new(
            &["यात्रा", "नए उपक्रम", "वाहन खरीदारी"],
            &["Travel", "New ventures", "Vehicle purchase"],
        ),
        auspicious: true,
    },
    ShivVaasLocation {
        index: 4,
        name: Bilingual::new("सभा", "Sabha"),
        significance: Bilingual::new(
            "शिव सभा में—बैठकों और कानूनी मामलों के लिए अच्छा",
            "Shiva in assembly—good for meetings & legal matters",
        ),
        observances: BilingualList::new(
            &["व्यापारिक बैठकें", "कानूनी मामले", "न्यायालयी कार्य"],
            &["Business meetings", "Legal matters", "Court cases"],
        ),
        auspicious: true,
    },
    ShivVaasLocation {
        index: 5,
        name: Bilingual::new("भोजन", "Bhojan"),
        significance: Bilingual::new(
            "शिव भोजन कर रहे हैं—भोजन संस्कारों के लिए अच्छा",
            "Shiva having meal—good for food ceremonies",
        ),
        observances: BilingualList::new(
            &["भोजन संस्कार", "अन्नप्राशन", "भोज आयोजन"],
            &["Food ceremonies", "Annaprashan", "Feast organizing"],
        ),
        auspicious: true,
    },
    ShivVaasLocation {
        index: 6,
        name: Bilingual::new("क्रीड़ा", "Krida"),
        significance: Bilingual::new(
            "शिव खेल में—मनोरंजन और रचनात्मकता के लिए अच्छा",
            "Shiva at play—good for recreation & creativity",
        ),
        observances: BilingualList::new(
            &["रचनात्मक कार्य", "मनोरंजन", "कला और शिल्प"],
            &["Creative work", "Recreation", "Arts and crafts"],
        ),
        auspicious: true,
    },
    ShivVaasLocation {
        index: 7,
        name: Bilingual::new("श्मशान", "Shmashaan"),
        significance: Bilingual::new(
            "शिव श्मशान में—नए उपक्रमों से बचें",
            "Shiva at cremation ground—avoid new ventures",
        ),
        observances: BilingualList::new(
            &["नई शुरुआत से बचें", "आध्यात्मिक चिंतन", "ध्यान"],
            &["Avoid new beginnings", "Spiritual contemplation", "Meditation"],
        ),
        auspicious: false,
    },
];

/// Abode number (1..=7) for a tithi number.
pub const fn shiv_vaas_index(tithi_number: u32) -> u8 {
    let remainder = (tithi_number.wrapping_mul(2).wrapping_add(5) % 7) as u8;
    if remainder == 0 { 7 } else { remainder }
}

/// Abode record for a tithi number.
pub fn shiv_vaas_location(tithi_number: u32) -> &'static ShivVaasLocation {
    &SHIV_VAAS_LOCATIONS[(shiv_vaas_index(tithi_number) - 1) as usize]
}

/// A day-based Shiva observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observance {
    pub kind: Bilingual,
    pub significance: Bilingual,
    pub observances: BilingualList,
}

/// Every Monday.
pub const MONDAY_FAST: Observance = Observance {
    kind: Bilingual::new("सोमवार व्रत", "Monday Fast"),
    significance: Bilingual::new(
        "भगवान शिव को समर्पित पवित्र दिन",
        "Sacred day dedicated to Lord Shiva",
    ),
    observances: BilingualList::new(
        &["सूर्योदय से सूर्यास्त तक उपवास", "शिव मंत्र जाप", "रुद्राभिषेक", "बिल्व पत्र अर्पण"],
        &[
            "Fast from sunrise to sunset",
            "Shiva mantra chanting",
            "Rudrabhishek",
            "Bilva leaf offering",
        ],
    ),
};

/// Chaturdashi (tithi 14).
pub const MONTHLY_SHIVARATRI: Observance = Observance {
    kind: Bilingual::new("मासिक शिवरात्रि", "Monthly Shivaratri"),
    significance: Bilingual::new(
        "मासिक शिवरात्रि - अत्यंत पुण्यकारी",
        "Monthly Shivaratri - highly auspicious",
    ),
    observances: BilingualList::new(
        &["रात्रि जागरण", "निर्जला उपवास", "शिव तांडव स्तोत्र", "महामृत्युंजय मंत्र"],
        &["Night vigil", "Nirjala fast", "Shiva Tandava Stotra", "Mahamrityunjaya Mantra"],
    ),
};

/// Trayodashi (tithi 13).
pub const PRADOSH_FAST: Observance = Observance {
    kind: Bilingual::new("प्रदोष व्रत", "Pradosh Fast"),
    significance: Bilingual::new(
        "प्रदोष काल में शिव पूजा अत्यंत फलदायी",
        "Shiva worship during Pradosh time is highly fruitful",
    ),
    observances: BilingualList::new(
        &["संध्या काल पूजा", "शिव चालीसा पाठ", "नंदी दर्शन", "धूप दीप अर्पण"],
        &[
            "Evening worship",
            "Shiva Chalisa recitation",
            "Nandi darshan",
            "Incense and lamp offering",
        ],
    ),
};

/// Monday in July or August. Only `kind` and `significance` are applied;
/// the observance list of an earlier rule is kept.
pub const SHRAVAN_MONDAY_FAST: Observance = Observance {
    kind: Bilingual::new("श्रावण सोमवार व्रत", "Shravan Monday Fast"),
    significance: Bilingual::new(
        "श्रावण मास का सोमवार - सर्वोत्तम शिव व्रत",
        "Shravan month Monday - supreme Shiva fast",
    ),
    observances: BilingualList::EMPTY,
};
