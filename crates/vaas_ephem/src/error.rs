//! Error types for ephemeris providers.

/// Errors an [`Ephemeris`](crate::Ephemeris) may report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Latitude/longitude outside their ranges or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The Sun stays below the horizon all day (polar night).
    #[error("sun never rises at this location on the requested date")]
    SunNeverRises,
    /// The Sun stays above the horizon all day (midnight sun).
    #[error("sun never sets at this location on the requested date")]
    SunNeverSets,
    /// A timestamp or offset cannot be represented.
    #[error("out of range: {0}")]
    OutOfRange(&'static str),
    /// Failure reported by an injected provider.
    #[error("provider error: {0}")]
    Provider(String),
}
