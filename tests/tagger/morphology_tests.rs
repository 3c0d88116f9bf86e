//! Morphology tests: lemmas and feature maps over tagged text.

use glossa::{Aspect, Gender, Number, TagMode, Tense, Token, morphology, stdlib, tag, tokenize};

fn analyzed(source: &str) -> Vec<Token> {
    let lexicon = stdlib::english();
    let tokens = tokenize(source, &lexicon).expect("tokenize");
    let tokens = tag(&tokens, TagMode::RuleBased, &lexicon, None).expect("tag");
    morphology::analyze(&tokens, &lexicon)
}

#[test]
fn irregular_verbs_use_the_dictionary() {
    let tokens = analyzed("The cat sat.");
    assert_eq!(tokens[2].lemma(), "sit");
}

#[test]
fn regular_inflection_uses_rewrite_rules() {
    let tokens = analyzed("The cats walked home.");
    assert_eq!(tokens[1].lemma(), "cat");
    assert_eq!(tokens[2].lemma(), "walk");
}

#[test]
fn lemma_defaults_to_folded_surface() {
    let tokens = analyzed("The cat sat.");
    assert_eq!(tokens[0].lemma(), "the");
    assert_eq!(tokens[1].lemma(), "cat");
}

#[test]
fn english_features() {
    let tokens = analyzed("The cats walked.");
    assert_eq!(tokens[1].features.number, Some(Number::Plural));
    assert_eq!(tokens[2].features.tense, Some(Tense::Past));
}

#[test]
fn progressive_aspect() {
    let lexicon = stdlib::english();
    let tokens = tokenize("she is running", &lexicon).expect("tokenize");
    let tokens = tag(&tokens, TagMode::RuleBased, &lexicon, None).expect("tag");
    let tokens = morphology::analyze(&tokens, &lexicon);
    assert_eq!(tokens[2].lemma(), "run");
    assert_eq!(tokens[2].features.aspect, Some(Aspect::Progressive));
}

#[test]
fn absent_features_stay_absent() {
    let tokens = analyzed("The cat sat.");
    assert!(tokens[1].features.gender.is_none());
    assert!(tokens[1].features.mood.is_none());
}

#[test]
fn spanish_gender_and_number() {
    let lexicon = stdlib::spanish();
    let tokens = tokenize("los gatos", &lexicon).expect("tokenize");
    let tokens = tag(&tokens, TagMode::RuleBased, &lexicon, None).expect("tag");
    let tokens = morphology::analyze(&tokens, &lexicon);
    assert_eq!(tokens[1].lemma(), "gato");
    assert_eq!(tokens[1].features.gender, Some(Gender::Masculine));
    assert_eq!(tokens[1].features.number, Some(Number::Plural));
}

#[test]
fn analysis_preserves_order_and_spans() {
    let source = "The cats walked home.";
    let tokens = analyzed(source);
    for token in &tokens {
        assert_eq!(token.span.text(source), token.text);
    }
}
