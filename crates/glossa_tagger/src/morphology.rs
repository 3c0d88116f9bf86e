//! Morphological analysis: lemmas and feature maps.
//!
//! Lemmatization tries, in order: irregular-form dictionary lookup
//! (exact word + tag key), ordered suffix rewrite rules keyed by tag,
//! and finally identity. Feature extraction merges every matching
//! suffix predicate for the token's tag into one feature set; an absent
//! feature means "not applicable", never an error.

use glossa_foundation::Token;
use glossa_lexicon::{Lexicon, normalize};

/// Populates lemma and morphological features for tagged tokens.
#[must_use]
pub fn analyze(tokens: &[Token], lexicon: &Lexicon) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| {
            let lemma = lemmatize(token, lexicon);
            let features = lexicon.features(&token.text, token.tag);
            token.with_lemma(lemma).with_features(features)
        })
        .collect()
}

/// Derives the lemma for one tagged token.
fn lemmatize(token: &Token, lexicon: &Lexicon) -> String {
    if let Some(lemma) = lexicon.lookup_irregular(&token.text, token.tag) {
        return lemma.to_string();
    }
    if let Some(lemma) = lexicon.rewrite(&token.text, token.tag) {
        return lemma;
    }
    normalize(&token.text)
}
