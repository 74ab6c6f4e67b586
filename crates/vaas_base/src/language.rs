//! Output language selection and parallel Sanskrit/English literals.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// Language used for every user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Devanagari script.
    #[default]
    Sanskrit,
    English,
}

impl Language {
    /// Both languages, in declaration order.
    pub const ALL: [Language; 2] = [Language::Sanskrit, Language::English];

    /// Lowercase identifier (`"sanskrit"` / `"english"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sanskrit => "sanskrit",
            Self::English => "english",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a language identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language {0:?} (expected \"sanskrit\" or \"english\")")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sanskrit" => Ok(Self::Sanskrit),
            "english" => Ok(Self::English),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// A single literal in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bilingual {
    pub sanskrit: &'static str,
    pub english: &'static str,
}

impl Bilingual {
    pub const fn new(sanskrit: &'static str, english: &'static str) -> Self {
        Self { sanskrit, english }
    }

    /// The variant for `language`.
    pub const fn get(self, language: Language) -> &'static str {
        match language {
            Language::Sanskrit => self.sanskrit,
            Language::English => self.english,
        }
    }
}

/// An ordered list of literals in both languages.
///
/// The two slices are index-aligned; `len()` reports the shared length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BilingualList {
    pub sanskrit: &'static [&'static str],
    pub english: &'static [&'static str],
}

impl BilingualList {
    pub const EMPTY: BilingualList = BilingualList::new(&[], &[]);

    pub const fn new(sanskrit: &'static [&'static str], english: &'static [&'static str]) -> Self {
        Self { sanskrit, english }
    }

    pub const fn get(self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Sanskrit => self.sanskrit,
            Language::English => self.english,
        }
    }

    /// Owned copy of the list in `language`.
    pub fn to_vec(self, language: Language) -> Vec<String> {
        self.get(language).iter().map(|s| (*s).to_string()).collect()
    }

    /// Number of entries. Both languages must carry the same count.
    pub const fn len(self) -> usize {
        debug_assert!(self.is_aligned());
        self.english.len()
    }

    pub const fn is_empty(self) -> bool {
        self.english.is_empty()
    }

    /// Whether both languages carry the same number of entries.
    pub const fn is_aligned(self) -> bool {
        self.sanskrit.len() == self.english.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sanskrit() {
        assert_eq!(Language::default(), Language::Sanskrit);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" SANSKRIT ".parse::<Language>().unwrap(), Language::Sanskrit);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "latin".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("latin"));
    }

    #[test]
    fn parse_rejects_short_codes() {
        for code in ["sa", "hi", "en"] {
            assert!(code.parse::<Language>().is_err(), "{code}");
        }
    }

    #[test]
    fn display_matches_identifier() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn bilingual_get() {
        let b = Bilingual::new("बव", "Bava");
        assert_eq!(b.get(Language::Sanskrit), "बव");
        assert_eq!(b.get(Language::English), "Bava");
    }

    #[test]
    fn list_to_vec() {
        let l = BilingualList::new(&["ध्यान"], &["Meditation"]);
        assert_eq!(l.to_vec(Language::English), vec!["Meditation".to_string()]);
        assert!(l.is_aligned());
        assert!(BilingualList::EMPTY.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn len_rejects_misaligned_list() {
        let _ = BilingualList::new(&["ध्यान"], &[]).len();
    }
}
