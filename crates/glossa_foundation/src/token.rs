//! Positioned tokens.
//!
//! Tokens are the leaf nodes of every later stage. The tokenizer creates
//! them with a placeholder tag; the tagger and morphological analyzer
//! refine them by value replacement, never aliased mutation.

use crate::language::Language;
use crate::morph::FeatureSet;
use crate::span::Span;
use crate::tag::PosTag;

/// A token of source text with its tag, lemma, and features.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The surface text, exactly as it appears in the source.
    pub text: String,
    /// The part-of-speech tag.
    pub tag: PosTag,
    /// The lemma (dictionary form), populated by morphological analysis.
    pub lemma: Option<String>,
    /// Morphological features, populated by morphological analysis.
    pub features: FeatureSet,
    /// The language this token was scanned under.
    pub language: Language,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token with no lemma or features.
    #[must_use]
    pub fn new(text: impl Into<String>, tag: PosTag, language: Language, span: Span) -> Self {
        Self {
            text: text.into(),
            tag,
            lemma: None,
            features: FeatureSet::new(),
            language,
            span,
        }
    }

    /// Returns a copy of this token with a different tag.
    #[must_use]
    pub fn with_tag(&self, tag: PosTag) -> Self {
        Self {
            tag,
            ..self.clone()
        }
    }

    /// Returns a copy of this token with a lemma.
    #[must_use]
    pub fn with_lemma(&self, lemma: impl Into<String>) -> Self {
        Self {
            lemma: Some(lemma.into()),
            ..self.clone()
        }
    }

    /// Returns a copy of this token with morphological features.
    #[must_use]
    pub fn with_features(&self, features: FeatureSet) -> Self {
        Self {
            features,
            ..self.clone()
        }
    }

    /// Returns the lemma, falling back to the surface text.
    #[must_use]
    pub fn lemma(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.text)
    }

    /// Returns the text this token's span covers in the given source.
    #[must_use]
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}
