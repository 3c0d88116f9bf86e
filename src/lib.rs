//! Glossa: a multi-stage grammatical analysis engine.
//!
//! Glossa turns raw text into tokens, part-of-speech tags, lemmas and
//! morphological features, a phrase-structure tree, and a dependency
//! graph. The stages are independent crates; this crate re-exports
//! them and provides [`Pipeline`], a builder that runs them in order.
//!
//! ```
//! use glossa::{Language, Pipeline, Relation};
//!
//! let pipeline = Pipeline::new(Language::English);
//! let analysis = pipeline.analyze("The cat sat on the mat.").unwrap();
//! let sentence = analysis.document.sentences().next().unwrap();
//! let edges = glossa::extract(sentence);
//! assert_eq!(edges[0].relation, Relation::Nsubj);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use glossa_foundation::{
    Aspect, Error, ErrorKind, FeatureSet, FeatureValue, Gender, Language, Mood, Number, PosTag,
    Result, Span, Tense, Token,
};
pub use glossa_lexicon::{Lexicon, stdlib};
pub use glossa_relations::{Dependency, Relation, extract};
pub use glossa_syntax::{
    Clause, ClauseKind, Complement, Document, NounPhrase, Paragraph, PostModifier,
    PrepositionalPhrase, RelativeClause, Sentence, SentenceFunction, SentenceStructure,
    VerbPhrase, parse_document,
};
pub use glossa_tagger::{HmmModel, TagMode, morphology, tag};
pub use glossa_tokenizer::tokenize;

/// The result of running the full pipeline over a text.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// The parsed document.
    pub document: Document,
    /// The tagged, lemmatized tokens the document was parsed from.
    pub tokens: Vec<Token>,
}

impl Analysis {
    /// Extracts the dependency edges of one sentence of this analysis.
    #[must_use]
    pub fn dependencies<'a>(&self, sentence: &'a Sentence) -> Vec<Dependency<'a>> {
        extract(sentence)
    }
}

/// Runs tokenization, tagging, morphology, parsing, and extraction in
/// order over a text.
///
/// Built with [`Pipeline::new`] and configured with `with_*` methods.
/// The pipeline is pure and single-threaded; one pipeline can analyze
/// any number of texts.
#[derive(Clone, Debug)]
pub struct Pipeline {
    language: Language,
    lexicon: Lexicon,
    mode: TagMode,
    model: Option<HmmModel>,
}

impl Pipeline {
    /// Creates a pipeline for a language using its bundled lexicon and
    /// rule-based tagging.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            lexicon: stdlib::for_language(language),
            mode: TagMode::default(),
            model: None,
        }
    }

    /// Replaces the bundled lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Selects the tagging mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: TagMode) -> Self {
        self.mode = mode;
        self
    }

    /// Supplies a trained statistical model for `Hmm` or `Ensemble`
    /// tagging.
    #[must_use]
    pub fn with_model(mut self, model: HmmModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Returns this pipeline's language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Analyzes a text end to end.
    ///
    /// Empty input yields an empty document, not an error.
    ///
    /// # Errors
    /// Returns an error for unscannable input or a tagging mode missing
    /// its model.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let tokens = tokenize(text, &self.lexicon)?;
        let tokens = tag(&tokens, self.mode, &self.lexicon, self.model.as_ref())?;
        let tokens = glossa_tagger::morphology::analyze(&tokens, &self.lexicon);
        let document = parse_document(&tokens, self.language);
        Ok(Analysis { document, tokens })
    }
}
