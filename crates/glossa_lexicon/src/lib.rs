//! Per-language lexical tables for Glossa.
//!
//! This crate provides:
//! - [`Lexicon`] - Read-only registry of closed-class words, lexical
//!   units, irregular forms, and suffix rule banks
//! - [`stdlib`] - Bundled standard lexicons (English, Spanish)
//!
//! Lexicons are built once at startup and shared immutably for the
//! process lifetime; concurrent readers need no synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod stdlib;

pub use lexicon::{FeatureRule, LexicalUnit, Lexicon, RewriteRule, SuffixRule, normalize};
