//! Hidden Markov Model tagging with Viterbi decoding.
//!
//! The model holds trigram transition counts `(t_{i-2}, t_{i-1}, t_i)`
//! and emission counts `(word, tag)`, both additive-k smoothed and
//! evaluated in log space to avoid underflow. Unknown words fall back to
//! a reserved open-class emission distribution.
//!
//! The model is saved and loaded as an opaque MessagePack blob; callers
//! only rely on the `train`/`predict` contracts, not the storage format.

use std::collections::{BTreeMap, HashMap, HashSet};

use glossa_foundation::{Error, PosTag, Result, Token};
use serde::{Deserialize, Serialize};

/// The sentence-boundary pseudo-tag.
///
/// `Unresolved` never appears in tagged output, so it doubles as the
/// start-of-sentence marker in transition contexts.
const BOUNDARY: PosTag = PosTag::Unresolved;

/// Open-class tags unknown words may emit from.
const OPEN_CLASS: &[PosTag] = &[
    PosTag::Noun,
    PosTag::ProperNoun,
    PosTag::Verb,
    PosTag::Adjective,
    PosTag::Adverb,
];

/// A trained trigram HMM tagging model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HmmModel {
    /// Additive smoothing constant.
    smoothing: f64,
    /// Trigram counts keyed by `(t_{i-2}, t_{i-1}, t_i)`.
    trigrams: HashMap<(PosTag, PosTag, PosTag), u64>,
    /// Bigram context counts keyed by `(t_{i-2}, t_{i-1})`.
    contexts: HashMap<(PosTag, PosTag), u64>,
    /// Emission counts keyed by `(normalized word, tag)`.
    emissions: HashMap<(String, PosTag), u64>,
    /// Total count per tag.
    tag_counts: HashMap<PosTag, u64>,
    /// Every word form seen in training, normalized.
    vocabulary: HashSet<String>,
}

impl HmmModel {
    /// Trains a model from tagged sentences.
    ///
    /// Each sentence is a sequence of `(word, tag)` pairs.
    ///
    /// # Errors
    /// Returns an error if the corpus contains no tagged tokens.
    pub fn train(corpus: &[Vec<(String, PosTag)>], smoothing: f64) -> Result<Self> {
        let mut model = Self {
            smoothing,
            trigrams: HashMap::new(),
            contexts: HashMap::new(),
            emissions: HashMap::new(),
            tag_counts: HashMap::new(),
            vocabulary: HashSet::new(),
        };

        for sentence in corpus {
            let mut t0 = BOUNDARY;
            let mut t1 = BOUNDARY;
            for (word, tag) in sentence {
                let word = word.to_lowercase();
                *model.trigrams.entry((t0, t1, *tag)).or_insert(0) += 1;
                *model.contexts.entry((t0, t1)).or_insert(0) += 1;
                *model.emissions.entry((word.clone(), *tag)).or_insert(0) += 1;
                *model.tag_counts.entry(*tag).or_insert(0) += 1;
                model.vocabulary.insert(word);
                t0 = t1;
                t1 = *tag;
            }
        }

        if model.tag_counts.is_empty() {
            return Err(Error::new(glossa_foundation::ErrorKind::EmptyModel));
        }
        Ok(model)
    }

    /// Serializes the model to an opaque blob.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec(self).map_err(|e| Error::model_format(e.to_string()))
    }

    /// Deserializes a model from an opaque blob.
    ///
    /// # Errors
    /// Returns an error if the blob is not a valid model.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes).map_err(|e| Error::model_format(e.to_string()))
    }

    /// Log transition probability `P(t2 | t0, t1)`, additive-k smoothed.
    fn transition(&self, t0: PosTag, t1: PosTag, t2: PosTag) -> f64 {
        let states = PosTag::all_resolved().len() as f64;
        let tri = *self.trigrams.get(&(t0, t1, t2)).unwrap_or(&0) as f64;
        let ctx = *self.contexts.get(&(t0, t1)).unwrap_or(&0) as f64;
        ((tri + self.smoothing) / (ctx + self.smoothing * states)).ln()
    }

    /// Log emission probability `P(word | tag)`.
    ///
    /// Words never seen in training use the reserved open-class
    /// distribution instead of per-tag smoothed estimates.
    fn emission(&self, word: &str, tag: PosTag) -> f64 {
        if !self.vocabulary.contains(word) {
            return if OPEN_CLASS.contains(&tag) {
                (1.0 / OPEN_CLASS.len() as f64).ln()
            } else {
                self.unseen_mass(tag)
            };
        }
        let count = *self.emissions.get(&(word.to_string(), tag)).unwrap_or(&0) as f64;
        let total = *self.tag_counts.get(&tag).unwrap_or(&0) as f64;
        ((count + self.smoothing) / (total + self.smoothing * (self.vocabulary.len() + 1) as f64))
            .ln()
    }

    /// Smoothed probability mass for an unseen `(word, tag)` pair.
    fn unseen_mass(&self, tag: PosTag) -> f64 {
        let total = *self.tag_counts.get(&tag).unwrap_or(&0) as f64;
        (self.smoothing / (total + self.smoothing * (self.vocabulary.len() + 1) as f64)).ln()
    }

    /// Predicts the most probable tag sequence for the given tokens.
    ///
    /// Tokens the tokenizer already resolved (numbers, punctuation,
    /// pre-tagged lexical units) are clamped to their existing tag.
    #[must_use]
    pub fn predict(&self, tokens: &[Token]) -> Vec<PosTag> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<Vec<PosTag>> = tokens
            .iter()
            .map(|t| {
                if t.tag == PosTag::Unresolved {
                    PosTag::all_resolved().to_vec()
                } else {
                    vec![t.tag]
                }
            })
            .collect();
        let words: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        // Viterbi over tag pairs: state (t_{i-1}, t_i). BTreeMap keeps
        // tie-breaking deterministic across runs.
        let mut scores: BTreeMap<(PosTag, PosTag), f64> = BTreeMap::new();
        let mut backpointers: Vec<BTreeMap<(PosTag, PosTag), PosTag>> =
            Vec::with_capacity(tokens.len());

        for &tag in &candidates[0] {
            let score = self.transition(BOUNDARY, BOUNDARY, tag) + self.emission(&words[0], tag);
            scores.insert((BOUNDARY, tag), score);
        }
        backpointers.push(BTreeMap::new());

        for i in 1..tokens.len() {
            let mut next_scores: BTreeMap<(PosTag, PosTag), f64> = BTreeMap::new();
            let mut back: BTreeMap<(PosTag, PosTag), PosTag> = BTreeMap::new();

            for &t2 in &candidates[i] {
                let emit = self.emission(&words[i], t2);
                for (&(t0, t1), &score) in &scores {
                    let candidate = score + self.transition(t0, t1, t2) + emit;
                    let best = next_scores.get(&(t1, t2));
                    if best.is_none_or(|&b| candidate > b) {
                        next_scores.insert((t1, t2), candidate);
                        back.insert((t1, t2), t0);
                    }
                }
            }

            scores = next_scores;
            backpointers.push(back);
        }

        // Best final pair, then trace back.
        let (&(mut t_prev, mut t_last), _) = scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .unwrap_or((&(BOUNDARY, PosTag::Noun), &0.0));

        let mut tags = vec![t_last];
        for i in (1..tokens.len()).rev() {
            tags.push(t_prev);
            let t0 = backpointers[i]
                .get(&(t_prev, t_last))
                .copied()
                .unwrap_or(BOUNDARY);
            t_last = t_prev;
            t_prev = t0;
        }
        tags.reverse();
        tags
    }
}

/// Tags a token stream with a trained model.
#[must_use]
pub fn tag_hmm(tokens: &[Token], model: &HmmModel) -> Vec<Token> {
    let tags = model.predict(tokens);
    tokens
        .iter()
        .zip(tags)
        .map(|(token, tag)| {
            if token.tag == PosTag::Unresolved {
                token.with_tag(tag)
            } else {
                token.clone()
            }
        })
        .collect()
}
