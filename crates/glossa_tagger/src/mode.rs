//! Tagging modes and the mode dispatcher.

use std::str::FromStr;

use glossa_foundation::{Error, PosTag, Result, Token};
use glossa_lexicon::Lexicon;

use crate::hmm::{HmmModel, tag_hmm};
use crate::rules::tag_rule_based;

/// How tagging ambiguity is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TagMode {
    /// Layered lexical/context/suffix rules. The default.
    #[default]
    RuleBased,
    /// Viterbi decoding over a trained trigram model.
    Hmm,
    /// Neural tagging. Recognized in configuration but model loading is
    /// a collaborator concern; invoking it is an error.
    Neural,
    /// Run rule-based and statistical tagging, then reconcile.
    Ensemble,
}

impl FromStr for TagMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rule_based" | "rules" => Ok(Self::RuleBased),
            "hmm" => Ok(Self::Hmm),
            "neural" => Ok(Self::Neural),
            "ensemble" => Ok(Self::Ensemble),
            other => Err(Error::unknown_mode(other)),
        }
    }
}

/// Assigns a part-of-speech tag to each token.
///
/// Tagging never fails structurally; errors are reserved for invalid
/// configuration (a mode invoked without the model it needs).
///
/// # Errors
/// Returns an error for `Hmm`/`Ensemble` without a model, and always
/// for `Neural`.
pub fn tag(
    tokens: &[Token],
    mode: TagMode,
    lexicon: &Lexicon,
    model: Option<&HmmModel>,
) -> Result<Vec<Token>> {
    match mode {
        TagMode::RuleBased => Ok(tag_rule_based(tokens, lexicon)),
        TagMode::Hmm => {
            let model = model.ok_or_else(|| Error::model_unavailable("hmm"))?;
            Ok(tag_hmm(tokens, model))
        }
        TagMode::Neural => Err(Error::model_unavailable("neural")),
        TagMode::Ensemble => {
            let model = model.ok_or_else(|| Error::model_unavailable("ensemble"))?;
            Ok(tag_ensemble(tokens, lexicon, model))
        }
    }
}

/// Runs both taggers and reconciles their answers.
///
/// Closed-class and pre-resolved tokens keep the rule-based answer
/// (those lookups are unambiguous); every other disagreement goes to
/// the statistical tagger.
fn tag_ensemble(tokens: &[Token], lexicon: &Lexicon, model: &HmmModel) -> Vec<Token> {
    let ruled = tag_rule_based(tokens, lexicon);
    let decoded = tag_hmm(tokens, model);

    tokens
        .iter()
        .zip(ruled)
        .zip(decoded)
        .map(|((original, ruled), decoded)| {
            let unambiguous = original.tag != PosTag::Unresolved
                || lexicon.lookup_word(&original.text).is_some();
            if unambiguous { ruled } else { decoded }
        })
        .collect()
}
