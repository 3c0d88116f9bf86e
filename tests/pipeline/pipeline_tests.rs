//! End-to-end pipeline tests.

use glossa::{
    ErrorKind, HmmModel, Language, Pipeline, PosTag, Relation, SentenceStructure, TagMode,
};

#[test]
fn analyzes_a_simple_sentence() {
    let pipeline = Pipeline::new(Language::English);
    let analysis = pipeline.analyze("The cat sat.").expect("analyze");

    let tags: Vec<_> = analysis.tokens.iter().map(|t| t.tag).collect();
    assert_eq!(
        tags,
        vec![
            PosTag::Determiner,
            PosTag::Noun,
            PosTag::Verb,
            PosTag::Punctuation,
        ]
    );

    let sentence = analysis.document.sentences().next().expect("sentence");
    let edges = analysis.dependencies(sentence);
    let labels: Vec<_> = edges.iter().map(ToString::to_string).collect();
    assert_eq!(labels, vec!["nsubj(sat, cat)", "det(cat, The)"]);
}

#[test]
fn empty_input_is_an_empty_analysis() {
    let pipeline = Pipeline::new(Language::English);
    let analysis = pipeline.analyze("").expect("analyze");
    assert!(analysis.tokens.is_empty());
    assert!(analysis.document.is_empty());
}

#[test]
fn lemmas_and_features_are_populated() {
    let pipeline = Pipeline::new(Language::English);
    let analysis = pipeline.analyze("The cats walked.").expect("analyze");
    assert_eq!(analysis.tokens[1].lemma(), "cat");
    assert_eq!(analysis.tokens[2].lemma(), "walk");
}

#[test]
fn scenario_oblique_dependencies() {
    let pipeline = Pipeline::new(Language::English);
    let analysis = pipeline.analyze("The cat sat on the mat.").expect("analyze");
    let sentence = analysis.document.sentences().next().expect("sentence");
    let edges = analysis.dependencies(sentence);
    assert!(edges
        .iter()
        .any(|e| e.relation == Relation::Obl && e.dependent.text == "mat"));
    assert!(edges
        .iter()
        .any(|e| e.relation == Relation::Case && e.dependent.text == "on"));
}

#[test]
fn scenario_relative_clause() {
    let pipeline = Pipeline::new(Language::English);
    let analysis = pipeline.analyze("I see the cat that sits.").expect("analyze");
    let sentence = analysis.document.sentences().next().expect("sentence");
    let edges = analysis.dependencies(sentence);
    assert!(edges
        .iter()
        .any(|e| e.relation == Relation::Acl && e.head.text == "cat"));
    assert!(edges
        .iter()
        .any(|e| e.relation == Relation::Mark && e.dependent.text == "that"));
}

#[test]
fn scenario_subordinate_fragment() {
    let pipeline = Pipeline::new(Language::English);
    let analysis = pipeline.analyze("Because I ran home.").expect("analyze");
    let sentence = analysis.document.sentences().next().expect("sentence");
    assert_eq!(sentence.structure, SentenceStructure::Simple);
    assert!(sentence.main_clause.subordinator.is_some());
}

#[test]
fn unscannable_input_surfaces_the_tokenizer_error() {
    let pipeline = Pipeline::new(Language::English);
    let err = pipeline.analyze("cat \u{1f408}").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnscannableCharacter { .. }));
}

#[test]
fn hmm_mode_without_model_fails() {
    let pipeline = Pipeline::new(Language::English).with_mode(TagMode::Hmm);
    let err = pipeline.analyze("The cat sat.").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ModelUnavailable { .. }));
}

#[test]
fn neural_mode_is_unavailable() {
    let pipeline = Pipeline::new(Language::English).with_mode(TagMode::Neural);
    let err = pipeline.analyze("The cat sat.").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ModelUnavailable { .. }));
}

#[test]
fn hmm_mode_with_model_analyzes() {
    let corpus = vec![vec![
        ("the".to_string(), PosTag::Determiner),
        ("cat".to_string(), PosTag::Noun),
        ("sat".to_string(), PosTag::Verb),
    ]];
    let model = HmmModel::train(&corpus, 0.01).expect("train");
    let pipeline = Pipeline::new(Language::English)
        .with_mode(TagMode::Hmm)
        .with_model(model);
    let analysis = pipeline.analyze("the cat sat").expect("analyze");
    let tags: Vec<_> = analysis.tokens.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![PosTag::Determiner, PosTag::Noun, PosTag::Verb]);
}

#[test]
fn spanish_pipeline_end_to_end() {
    let pipeline = Pipeline::new(Language::Spanish);
    let analysis = pipeline.analyze("El gato corre.").expect("analyze");
    assert_eq!(analysis.tokens[0].tag, PosTag::Determiner);
    assert_eq!(analysis.tokens[0].language, Language::Spanish);
    assert_eq!(analysis.document.sentences().count(), 1);
}

#[test]
fn one_pipeline_analyzes_many_texts() {
    let pipeline = Pipeline::new(Language::English);
    let first = pipeline.analyze("The cat sat.").expect("analyze");
    let second = pipeline.analyze("The dog ran.").expect("analyze");
    let again = pipeline.analyze("The cat sat.").expect("analyze");
    assert_eq!(first, again);
    assert_ne!(first.tokens, second.tokens);
}
