//! The three transformation services the application offers.

use std::fmt;

// ---------------------------------------------------------------------------
// ServiceType
// ---------------------------------------------------------------------------

/// Selects which transformation the backend is asked to perform.
///
/// The variant determines the prompt template and the expected output
/// language; nothing else about the request changes between services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// Fix Turkish spelling, punctuation and casing without changing meaning.
    Correction,
    /// Translate Turkish text into English.
    TranslateToEnglish,
    /// Translate English text into Turkish.
    TranslateToTurkish,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceType::Correction => "correction",
            ServiceType::TranslateToEnglish => "translate-to-english",
            ServiceType::TranslateToTurkish => "translate-to-turkish",
        };
        write!(f, "{name}")
    }
}
