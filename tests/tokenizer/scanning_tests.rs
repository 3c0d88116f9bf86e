//! Scanning rule tests.
//!
//! Tests for the ordered-alternative scanner: lexicon units first, then
//! numbers, words, and punctuation.

use glossa::{Language, PosTag, Token, stdlib, tokenize};

fn scan(source: &str) -> Vec<Token> {
    tokenize(source, &stdlib::english()).expect("tokenize")
}

#[test]
fn scans_simple_sentence() {
    let tokens = scan("The cat sat on the mat.");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["The", "cat", "sat", "on", "the", "mat", "."]);
}

#[test]
fn empty_and_whitespace_only_input() {
    assert!(scan("").is_empty());
    assert!(scan(" \t\n\n  ").is_empty());
}

#[test]
fn punctuation_tokens_are_tagged() {
    let tokens = scan("Wait, really?");
    assert_eq!(tokens[1].text, ",");
    assert_eq!(tokens[1].tag, PosTag::Punctuation);
    assert_eq!(tokens[3].text, "?");
    assert_eq!(tokens[3].tag, PosTag::Punctuation);
}

#[test]
fn numbers_scan_with_decimals() {
    let tokens = scan("12 cats weigh 3.5 kilos");
    assert_eq!(tokens[0].text, "12");
    assert_eq!(tokens[0].tag, PosTag::Number);
    assert_eq!(tokens[3].text, "3.5");
    assert_eq!(tokens[3].tag, PosTag::Number);
}

#[test]
fn trailing_period_after_number_is_punctuation() {
    let tokens = scan("I have 3.");
    assert_eq!(tokens[2].text, "3");
    assert_eq!(tokens[3].text, ".");
}

#[test]
fn contractions_scan_as_one_token() {
    let tokens = scan("They don't sit.");
    assert_eq!(tokens[1].text, "don't");
    assert_eq!(tokens[1].tag, PosTag::Auxiliary);
}

#[test]
fn abbreviations_keep_their_period() {
    let tokens = scan("Mr. Smith sat.");
    assert_eq!(tokens[0].text, "Mr.");
    assert_eq!(tokens[0].tag, PosTag::ProperNoun);
    assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("."));
}

#[test]
fn word_scan_does_not_split_prefixes() {
    // "del" is a Spanish closed-class word; "delta" must still scan
    // as one whole word.
    let lexicon = stdlib::spanish();
    let tokens = tokenize("delta del rio", &lexicon).expect("tokenize");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["delta", "del", "rio"]);
}

#[test]
fn hyphenated_word_is_one_token() {
    let tokens = scan("a well-known cat");
    assert_eq!(tokens[1].text, "well-known");
}

#[test]
fn inverted_marks_scan_in_spanish() {
    let lexicon = stdlib::spanish();
    let tokens = tokenize("¿corre el gato?", &lexicon).expect("tokenize");
    assert_eq!(tokens[0].text, "¿");
    assert_eq!(tokens[0].tag, PosTag::Punctuation);
    assert_eq!(tokens[0].language, Language::Spanish);
}

#[test]
fn unscannable_character_is_an_error() {
    let err = tokenize("cat \u{1f408}", &stdlib::english()).unwrap_err();
    assert!(matches!(
        err.kind,
        glossa::ErrorKind::UnscannableCharacter { character: '\u{1f408}', .. }
    ));
}
