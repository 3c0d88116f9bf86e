//! Language identifiers.

/// A supported language.
///
/// The engine shape is shared; each language supplies its own lexicon
/// and rule tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Spanish
    Spanish,
    /// Catalan
    Catalan,
}

impl Language {
    /// Returns the ISO 639-1 code for this language.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::Catalan => "ca",
        }
    }
}
