//! Integration tests for the glossa_tagger crate.
//!
//! Tests for part-of-speech tagging and morphology:
//! - Rule-based tagging over scanned text
//! - Statistical tagging and model serialization
//! - Lemmatization and feature extraction

mod hmm_tests;
mod morphology_tests;
