//! Rule-based part-of-speech tagging.
//!
//! A single left-to-right pass classifies each token using, in priority
//! order: already-resolved tags, exact closed-class lookup, context
//! rules, the suffix rule bank, and finally the default noun tag.
//! Tagging never fails structurally; a token that matches nothing still
//! receives the default tag.
//!
//! Context rules see the already-produced tag of the preceding token but
//! only the raw text of the following token. That asymmetric window is
//! preserved behavior; the rule tables were tuned against it.

use glossa_foundation::{PosTag, Token};
use glossa_lexicon::Lexicon;

/// Tags a token stream with the layered rule bank.
#[must_use]
pub fn tag_rule_based(tokens: &[Token], lexicon: &Lexicon) -> Vec<Token> {
    let mut tagged: Vec<Token> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        // (a) tags the tokenizer already resolved pass through untouched
        if token.tag != PosTag::Unresolved {
            tagged.push(token.clone());
            continue;
        }

        // (b) exact closed-class lookup: highest confidence, unambiguous
        if let Some(tag) = lexicon.lookup_word(&token.text) {
            tagged.push(token.with_tag(tag));
            continue;
        }

        // (c) context rules over the tagged predecessor and raw successor
        let prev = tagged.last();
        let next = tokens.get(i + 1);
        if let Some(tag) = context_tag(token, prev, next, lexicon) {
            tagged.push(token.with_tag(tag));
            continue;
        }

        // (d) ordered suffix bank, (e) default fallback
        let tag = lexicon.suffix_tag(&token.text).unwrap_or(PosTag::Noun);
        tagged.push(token.with_tag(tag));
    }

    tagged
}

/// Applies the context rule bank to one unresolved token.
///
/// `prev` carries its final tag; `next` is raw (still unresolved).
fn context_tag(
    token: &Token,
    prev: Option<&Token>,
    next: Option<&Token>,
    lexicon: &Lexicon,
) -> Option<PosTag> {
    let prev_tag = prev.map(|t| t.tag);

    // Token after a determiner is a noun unless it carries an
    // adjectival suffix.
    if prev_tag == Some(PosTag::Determiner) {
        if lexicon.has_adjectival_suffix(&token.text) {
            return Some(PosTag::Adjective);
        }
        // A determiner followed by two words puts the noun at the end:
        // the middle word modifies it.
        if next.is_some_and(|n| looks_nominal(n, lexicon)) {
            return Some(PosTag::Adjective);
        }
        return Some(PosTag::Noun);
    }

    // Token after an auxiliary or relativizer is a verb.
    if matches!(prev_tag, Some(PosTag::Auxiliary | PosTag::Relativizer)) {
        return Some(PosTag::Verb);
    }

    // Capitalized token not at the start of a sentence is a proper noun.
    if starts_uppercase(&token.text)
        && prev.is_some_and(|p| p.tag != PosTag::Punctuation)
    {
        return Some(PosTag::ProperNoun);
    }

    // Token before a known noun form is an adjective.
    if next.is_some_and(|n| looks_nominal(n, lexicon))
        && prev_tag.is_some_and(|t| t == PosTag::Adjective)
    {
        return Some(PosTag::Adjective);
    }

    None
}

/// Returns true if the raw successor token looks like a noun by shape.
fn looks_nominal(token: &Token, lexicon: &Lexicon) -> bool {
    token.tag == PosTag::Unresolved
        && lexicon.lookup_word(&token.text).is_none()
        && lexicon.suffix_tag(&token.text) == Some(PosTag::Noun)
}

/// Returns true if the word starts with an uppercase letter.
fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
