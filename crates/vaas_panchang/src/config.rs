//! Defaults applied when a caller does not pass a location or language.

use serde::Serialize;
use vaas_base::Language;
use vaas_ephem::GeoLocation;

/// Calculator defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangConfig {
    /// Observer location; New Delhi unless overridden.
    pub location: GeoLocation,
    /// Output language; Sanskrit unless overridden.
    pub language: Language,
}

impl PanchangConfig {
    pub const fn new(location: GeoLocation, language: Language) -> Self {
        Self { location, language }
    }

    pub const fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = location;
        self
    }

    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self::new(GeoLocation::NEW_DELHI, Language::Sanskrit)
    }
}
