//! Part-of-speech tags.
//!
//! Tags are the shared node-type vocabulary across languages. Each
//! language supplies its own rule tables; the tag set itself is fixed.

/// A part-of-speech tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PosTag {
    /// Article or other determiner (`the`, `a`, `la`)
    Determiner,
    /// Common noun
    Noun,
    /// Proper noun (capitalized name)
    ProperNoun,
    /// Pronoun (`I`, `she`, `them`)
    Pronoun,
    /// Main verb
    Verb,
    /// Auxiliary verb (`have`, `will`, `haber`)
    Auxiliary,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Preposition (`on`, `with`, `de`)
    Preposition,
    /// Coordinating conjunction (`and`, `but`)
    CoordConj,
    /// Subordinating conjunction (`because`, `although`)
    SubordConj,
    /// Relativizer introducing a relative clause (`that`, `which`, `who`)
    Relativizer,
    /// Numeric literal; resolved by the tokenizer
    Number,
    /// Punctuation; resolved by the tokenizer
    Punctuation,
    /// Interjection (`oh`, `hey`)
    Interjection,
    /// Placeholder awaiting the tagger
    Unresolved,
}

impl PosTag {
    /// Returns true if this tag was already resolved by the tokenizer
    /// and passes through the tagger untouched.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Number | Self::Punctuation)
    }

    /// Returns true if this tag can head or appear inside a noun phrase.
    #[must_use]
    pub const fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun | Self::Pronoun)
    }

    /// Returns true if this tag is verbal (main verb or auxiliary).
    #[must_use]
    pub const fn is_verbal(&self) -> bool {
        matches!(self, Self::Verb | Self::Auxiliary)
    }

    /// Returns a human-readable name for this tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Determiner => "determiner",
            Self::Noun => "noun",
            Self::ProperNoun => "proper noun",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Auxiliary => "auxiliary",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::CoordConj => "coordinating conjunction",
            Self::SubordConj => "subordinating conjunction",
            Self::Relativizer => "relativizer",
            Self::Number => "number",
            Self::Punctuation => "punctuation",
            Self::Interjection => "interjection",
            Self::Unresolved => "unresolved",
        }
    }

    /// All tags that can appear in tagged output, in a fixed order.
    ///
    /// Used by the statistical tagger to enumerate decode states.
    /// `Unresolved` is deliberately excluded.
    #[must_use]
    pub const fn all_resolved() -> &'static [Self] {
        &[
            Self::Determiner,
            Self::Noun,
            Self::ProperNoun,
            Self::Pronoun,
            Self::Verb,
            Self::Auxiliary,
            Self::Adjective,
            Self::Adverb,
            Self::Preposition,
            Self::CoordConj,
            Self::SubordConj,
            Self::Relativizer,
            Self::Number,
            Self::Punctuation,
            Self::Interjection,
        ]
    }
}
