//! Integration tests for the glossa_relations crate.
//!
//! Tests for dependency extraction over full pipeline output.
