//! Statistical tagging tests: training, decoding, serialization, and
//! the ensemble mode.

use glossa::{ErrorKind, HmmModel, PosTag, TagMode, Token, stdlib, tag, tokenize};

fn corpus() -> Vec<Vec<(String, PosTag)>> {
    let sentences: &[&[(&str, PosTag)]] = &[
        &[
            ("the", PosTag::Determiner),
            ("cat", PosTag::Noun),
            ("sat", PosTag::Verb),
            ("on", PosTag::Preposition),
            ("the", PosTag::Determiner),
            ("mat", PosTag::Noun),
        ],
        &[
            ("the", PosTag::Determiner),
            ("dog", PosTag::Noun),
            ("ran", PosTag::Verb),
            ("home", PosTag::Noun),
        ],
        &[
            ("a", PosTag::Determiner),
            ("bird", PosTag::Noun),
            ("sang", PosTag::Verb),
        ],
    ];
    sentences
        .iter()
        .map(|s| s.iter().map(|(w, t)| ((*w).to_string(), *t)).collect())
        .collect()
}

fn scan(source: &str) -> Vec<Token> {
    tokenize(source, &stdlib::english()).expect("tokenize")
}

#[test]
fn training_on_empty_corpus_is_an_error() {
    let err = HmmModel::train(&[], 0.01).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyModel));
}

#[test]
fn decodes_a_seen_sentence() {
    let model = HmmModel::train(&corpus(), 0.01).expect("train");
    let tokens = scan("the cat sat");
    let tagged = tag(&tokens, TagMode::Hmm, &stdlib::english(), Some(&model)).expect("tag");
    let tags: Vec<_> = tagged.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![PosTag::Determiner, PosTag::Noun, PosTag::Verb]);
}

#[test]
fn unknown_words_get_open_class_tags() {
    let model = HmmModel::train(&corpus(), 0.01).expect("train");
    let tokens = scan("the wug sat");
    let tagged = tag(&tokens, TagMode::Hmm, &stdlib::english(), Some(&model)).expect("tag");
    // "wug" was never seen; the transition context still places a noun
    // between a determiner and a verb.
    assert_eq!(tagged[1].tag, PosTag::Noun);
}

#[test]
fn decoding_is_deterministic() {
    let model = HmmModel::train(&corpus(), 0.01).expect("train");
    let tokens = scan("the dog sat on the mat");
    let lexicon = stdlib::english();
    let first = tag(&tokens, TagMode::Hmm, &lexicon, Some(&model)).expect("tag");
    for _ in 0..10 {
        let again = tag(&tokens, TagMode::Hmm, &lexicon, Some(&model)).expect("tag");
        assert_eq!(first, again);
    }
}

#[test]
fn serialization_round_trips() {
    let model = HmmModel::train(&corpus(), 0.01).expect("train");
    let bytes = model.to_bytes().expect("serialize");
    let restored = HmmModel::from_bytes(&bytes).expect("deserialize");

    let tokens = scan("the cat ran");
    let lexicon = stdlib::english();
    let a = tag(&tokens, TagMode::Hmm, &lexicon, Some(&model)).expect("tag");
    let b = tag(&tokens, TagMode::Hmm, &lexicon, Some(&restored)).expect("tag");
    assert_eq!(a, b);
}

#[test]
fn garbage_bytes_are_a_format_error() {
    let err = HmmModel::from_bytes(&[0xff, 0x00, 0x13]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ModelFormat(_)));
}

#[test]
fn ensemble_reconciles_rule_and_statistical_answers() {
    let model = HmmModel::train(&corpus(), 0.01).expect("train");
    let lexicon = stdlib::english();
    let tokens = scan("the cat sat on the mat");
    let tagged = tag(&tokens, TagMode::Ensemble, &lexicon, Some(&model)).expect("tag");
    let tags: Vec<_> = tagged.iter().map(|t| t.tag).collect();
    assert_eq!(
        tags,
        vec![
            PosTag::Determiner,
            PosTag::Noun,
            PosTag::Verb,
            PosTag::Preposition,
            PosTag::Determiner,
            PosTag::Noun,
        ]
    );
}

#[test]
fn modes_without_models_fail_cleanly() {
    let lexicon = stdlib::english();
    let tokens = scan("the cat");
    for mode in [TagMode::Hmm, TagMode::Ensemble] {
        let err = tag(&tokens, mode, &lexicon, None).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ModelUnavailable { .. }));
    }
}
