//! Integration tests for the glossa_syntax crate.
//!
//! Tests for parsing tagged text into phrase-structure trees:
//! - Phrase rules over real pipeline output
//! - Sentence segmentation, clause structure, and the fragment fallback

mod phrase_structure_tests;
