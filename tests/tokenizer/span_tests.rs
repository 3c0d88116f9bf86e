//! Span accuracy tests.
//!
//! Every token's span must reconstruct its text from the source, with
//! exact byte offsets and 1-based line/column positions.

use glossa::{stdlib, tokenize};

#[test]
fn spans_reconstruct_every_token() {
    let source = "The cat sat on the mat. The dog ran!\nBecause it could.";
    let tokens = tokenize(source, &stdlib::english()).expect("tokenize");
    for token in &tokens {
        assert_eq!(token.span.text(source), token.text);
    }
}

#[test]
fn spans_are_ordered_and_disjoint() {
    let source = "One, two, and three.";
    let tokens = tokenize(source, &stdlib::english()).expect("tokenize");
    for pair in tokens.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start);
    }
}

#[test]
fn line_and_column_track_newlines() {
    let source = "cats sat\non mats";
    let tokens = tokenize(source, &stdlib::english()).expect("tokenize");
    assert_eq!(tokens[1].span.start_line, 1);
    assert_eq!(tokens[1].span.start_column, 6);
    assert_eq!(tokens[2].span.start_line, 2);
    assert_eq!(tokens[2].span.start_column, 1);
    assert_eq!(tokens[3].span.start_line, 2);
    assert_eq!(tokens[3].span.start_column, 4);
}

#[test]
fn multibyte_offsets_are_byte_exact() {
    let source = "él corre";
    let tokens = tokenize(source, &stdlib::spanish()).expect("tokenize");
    // "él" is three bytes; the next token starts after it plus a space.
    assert_eq!(tokens[0].span.end, 3);
    assert_eq!(tokens[1].span.start, 4);
    assert_eq!(tokens[1].span.text(source), "corre");
}

#[test]
fn whitespace_is_excluded_from_spans() {
    let source = "a   cat";
    let tokens = tokenize(source, &stdlib::english()).expect("tokenize");
    assert_eq!(tokens[0].span.end, 1);
    assert_eq!(tokens[1].span.start, 4);
}
