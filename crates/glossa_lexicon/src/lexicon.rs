//! Lexicon registry for per-language lexical tables.
//!
//! Stores closed-class words, multi-character lexical units, irregular
//! forms, and suffix rule banks. Built once at startup and treated as
//! read-only shared state afterwards; no method mutates a lexicon after
//! registration ends, so concurrent readers need no synchronization.

use std::collections::HashMap;

use glossa_foundation::{FeatureSet, FeatureValue, Language, PosTag};

/// A multi-character lexical unit matched before generic word rules.
///
/// Covers contractions, clitics, article fusions, and abbreviations
/// that must scan as one token rather than being split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexicalUnit {
    /// The unit text, stored case-folded.
    pub text: String,
    /// A pre-resolved tag, if the unit's category is already known.
    pub tag: Option<PosTag>,
}

/// An ordered suffix rule assigning a tag by word shape.
#[derive(Clone, Debug)]
pub struct SuffixRule {
    /// The suffix to test, case-folded.
    pub suffix: String,
    /// The tag assigned on a match.
    pub tag: PosTag,
}

/// A suffix-stripping/rewriting rule used for lemmatization.
#[derive(Clone, Debug)]
pub struct RewriteRule {
    /// The tag this rule applies to.
    pub tag: PosTag,
    /// The suffix stripped from the word.
    pub strip: String,
    /// The replacement appended after stripping.
    pub append: String,
}

/// A suffix predicate producing one morphological feature value.
#[derive(Clone, Debug)]
pub struct FeatureRule {
    /// The tag this rule applies to.
    pub tag: PosTag,
    /// The suffix to test, case-folded.
    pub suffix: String,
    /// The feature value produced on a match.
    pub value: FeatureValue,
}

/// Case-folds a word for lexicon lookup.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Read-only lexical tables for one language.
#[derive(Clone, Debug)]
pub struct Lexicon {
    /// The language these tables describe.
    language: Language,
    /// Exact-match closed-class words (normalized) to tags.
    closed_class: HashMap<String, PosTag>,
    /// Multi-character units, kept sorted longest-first.
    units: Vec<LexicalUnit>,
    /// Irregular forms: (normalized surface, tag) to lemma.
    irregular: HashMap<(String, PosTag), String>,
    /// Ordered POS suffix rules, most specific first.
    suffix_rules: Vec<SuffixRule>,
    /// Ordered lemma rewrite rules.
    rewrite_rules: Vec<RewriteRule>,
    /// Feature extraction rules.
    feature_rules: Vec<FeatureRule>,
}

impl Lexicon {
    /// Creates an empty lexicon for the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            closed_class: HashMap::new(),
            units: Vec::new(),
            irregular: HashMap::new(),
            suffix_rules: Vec::new(),
            rewrite_rules: Vec::new(),
            feature_rules: Vec::new(),
        }
    }

    /// Returns the language these tables describe.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Registers one closed-class word.
    pub fn register_word(&mut self, word: &str, tag: PosTag) {
        self.closed_class.insert(normalize(word), tag);
    }

    /// Registers several closed-class words under one tag.
    pub fn register_words(&mut self, words: &[&str], tag: PosTag) {
        for word in words {
            self.register_word(word, tag);
        }
    }

    /// Registers a multi-character lexical unit.
    ///
    /// Units are matched by the tokenizer before generic rules, longest
    /// first; registration keeps the internal order sorted accordingly.
    pub fn register_unit(&mut self, text: &str, tag: Option<PosTag>) {
        self.units.push(LexicalUnit {
            text: normalize(text),
            tag,
        });
        self.units.sort_by(|a, b| b.text.len().cmp(&a.text.len()));
    }

    /// Registers an irregular form with its lemma.
    pub fn register_irregular(&mut self, surface: &str, tag: PosTag, lemma: &str) {
        self.irregular
            .insert((normalize(surface), tag), lemma.to_string());
    }

    /// Registers a POS suffix rule. Rules fire in registration order, so
    /// callers register the longest/most specific suffixes first.
    pub fn register_suffix_rule(&mut self, suffix: &str, tag: PosTag) {
        self.suffix_rules.push(SuffixRule {
            suffix: normalize(suffix),
            tag,
        });
    }

    /// Registers a lemma rewrite rule for a tag.
    pub fn register_rewrite(&mut self, tag: PosTag, strip: &str, append: &str) {
        self.rewrite_rules.push(RewriteRule {
            tag,
            strip: normalize(strip),
            append: append.to_string(),
        });
    }

    /// Registers a morphological feature rule.
    pub fn register_feature_rule(&mut self, tag: PosTag, suffix: &str, value: FeatureValue) {
        self.feature_rules.push(FeatureRule {
            tag,
            suffix: normalize(suffix),
            value,
        });
    }

    /// Looks up a closed-class word. Highest-confidence, unambiguous.
    #[must_use]
    pub fn lookup_word(&self, word: &str) -> Option<PosTag> {
        self.closed_class.get(&normalize(word)).copied()
    }

    /// Matches the longest lexical unit at the start of `rest`.
    ///
    /// The match is case-insensitive and must end at a word boundary
    /// (the following character, if any, is not alphanumeric). Returns
    /// the unit and the number of bytes of `rest` it consumed.
    #[must_use]
    pub fn match_unit<'a>(&'a self, rest: &str) -> Option<(&'a LexicalUnit, usize)> {
        for unit in &self.units {
            if let Some(consumed) = prefix_match_len(rest, &unit.text) {
                let boundary_ok = rest[consumed..]
                    .chars()
                    .next()
                    .is_none_or(|c| !c.is_alphanumeric());
                if boundary_ok {
                    return Some((unit, consumed));
                }
            }
        }
        None
    }

    /// Looks up the lemma of an irregular form.
    #[must_use]
    pub fn lookup_irregular(&self, surface: &str, tag: PosTag) -> Option<&str> {
        self.irregular
            .get(&(normalize(surface), tag))
            .map(String::as_str)
    }

    /// Returns the tag assigned by the first matching suffix rule.
    ///
    /// A rule only fires when the word is strictly longer than the
    /// suffix, so a bare suffix never tags itself.
    #[must_use]
    pub fn suffix_tag(&self, word: &str) -> Option<PosTag> {
        let word = normalize(word);
        self.suffix_rules
            .iter()
            .find(|rule| word.len() > rule.suffix.len() && word.ends_with(&rule.suffix))
            .map(|rule| rule.tag)
    }

    /// Returns true if the word carries a suffix the rules consider
    /// adjectival. Used by the tagger's determiner context rule.
    #[must_use]
    pub fn has_adjectival_suffix(&self, word: &str) -> bool {
        self.suffix_tag(word) == Some(PosTag::Adjective)
    }

    /// Applies the first matching rewrite rule for the given tag.
    #[must_use]
    pub fn rewrite(&self, word: &str, tag: PosTag) -> Option<String> {
        let word = normalize(word);
        self.rewrite_rules
            .iter()
            .find(|rule| {
                rule.tag == tag && word.len() > rule.strip.len() && word.ends_with(&rule.strip)
            })
            .map(|rule| {
                let stem = &word[..word.len() - rule.strip.len()];
                format!("{stem}{}", rule.append)
            })
    }

    /// Extracts morphological features for a word under a tag.
    ///
    /// All matching feature rules are merged into one set; for each
    /// feature slot the first matching rule wins.
    #[must_use]
    pub fn features(&self, word: &str, tag: PosTag) -> FeatureSet {
        let word = normalize(word);
        let mut features = FeatureSet::new();
        for rule in &self.feature_rules {
            if rule.tag == tag && word.len() > rule.suffix.len() && word.ends_with(&rule.suffix) {
                features.set(rule.value);
            }
        }
        features
    }
}

/// Returns the byte length of `rest` matched if `pattern` (case-folded)
/// is a case-insensitive prefix of it.
fn prefix_match_len(rest: &str, pattern: &str) -> Option<usize> {
    let mut pattern_chars = pattern.chars();
    let mut consumed = 0;
    for c in rest.chars() {
        let Some(p) = pattern_chars.next() else {
            return Some(consumed);
        };
        if !c.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
        consumed += c.len_utf8();
    }
    if pattern_chars.next().is_none() {
        Some(consumed)
    } else {
        None
    }
}
