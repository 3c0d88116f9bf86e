//! Unicode-aware tokenization for Glossa.
//!
//! This crate provides:
//! - [`Scanner`] - Cursor-based scanner with exact byte/line/column tracking
//! - [`tokenize`] - One-shot tokenization of a document
//!
//! Tokens carry either an already-known coarse tag (numbers,
//! punctuation, pre-resolved lexical units) or the `Unresolved`
//! placeholder for the tagger to fill in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scanner;

pub use scanner::{Scanner, tokenize};
