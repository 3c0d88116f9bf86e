//! Core types for the Glossa grammatical analysis engine.
//!
//! This crate provides:
//! - [`Span`] - Exact byte/line/column source locations
//! - [`Token`] - Positioned tokens with tag, lemma, and features
//! - [`PosTag`] - The shared part-of-speech vocabulary
//! - [`FeatureSet`] - Fixed-key morphological features
//! - [`Language`] - Supported language identifiers
//! - [`Error`] - Typed errors for fatal pipeline conditions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod language;
pub mod morph;
pub mod span;
pub mod tag;
pub mod token;

pub use error::{Error, ErrorKind, Result};
pub use language::Language;
pub use morph::{Aspect, FeatureSet, FeatureValue, Gender, Mood, Number, Tense};
pub use span::Span;
pub use tag::PosTag;
pub use token::Token;
