//! Part-of-speech tagging and morphological analysis for Glossa.
//!
//! This crate provides:
//! - [`tag`] - The mode dispatcher over rule-based, HMM, and ensemble tagging
//! - [`TagMode`] - Tagging mode selection
//! - [`HmmModel`] - Trainable trigram HMM with Viterbi decoding
//! - [`morphology::analyze`] - Lemma and feature population
//!
//! Tagging is a single left-to-right pass: context rules see the
//! already-produced tags of earlier tokens, favoring determinism and
//! O(n) cost over globally-optimal disambiguation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hmm;
pub mod mode;
pub mod morphology;
pub mod rules;

pub use hmm::{HmmModel, tag_hmm};
pub use mode::{TagMode, tag};
pub use rules::tag_rule_based;
