//! Grammatical dependency extraction for Glossa.
//!
//! This crate provides:
//! - [`Relation`] - Universal Dependencies style relation labels
//! - [`Dependency`] - A labeled head/dependent edge borrowing sentence tokens
//! - [`extract`] - Deterministic edge extraction over a parsed sentence
//!
//! The dependency graph is a flat view over the syntax tree: edges
//! reference tokens the tree owns and never outlive the sentence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extract;
pub mod relation;

pub use extract::extract;
pub use relation::{Dependency, Relation};
