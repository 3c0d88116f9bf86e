//! Phrase-structure and clause/sentence parsing for Glossa.
//!
//! This crate provides:
//! - [`ast`] - Immutable tree nodes from [`NounPhrase`] up to [`Document`]
//! - [`phrase`] - Recursive cursor-based grammar rules
//! - [`sentence`] - Segmentation and the total [`parse_document`] entry point
//!
//! Parsing is deterministic and total: ambiguity is resolved by fixed
//! rule order and right attachment, and unparseable regions degrade to
//! fragment sentences instead of errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod phrase;
pub mod sentence;

pub use ast::{
    Clause, ClauseKind, Complement, Document, NounPhrase, Paragraph, PostModifier,
    PrepositionalPhrase, RelativeClause, Sentence, SentenceFunction, SentenceStructure,
    VerbPhrase,
};
pub use phrase::{
    NoMatch, RuleResult, parse_clause, parse_noun_phrase, parse_prepositional_phrase,
    parse_relative_clause, parse_verb_phrase,
};
pub use sentence::parse_document;
