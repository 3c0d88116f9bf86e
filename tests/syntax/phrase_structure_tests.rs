//! Phrase structure tests over scanned and tagged text.

use glossa::{
    Complement, Document, Language, PostModifier, SentenceStructure, TagMode, parse_document,
    stdlib, tag, tokenize,
};

fn parse(source: &str) -> Document {
    let lexicon = stdlib::english();
    let tokens = tokenize(source, &lexicon).expect("tokenize");
    let tokens = tag(&tokens, TagMode::RuleBased, &lexicon, None).expect("tag");
    parse_document(&tokens, Language::English)
}

#[test]
fn subject_and_predicate() {
    let doc = parse("The cat sat.");
    let sentence = doc.sentences().next().expect("sentence");
    let clause = &sentence.main_clause;
    let subject = clause.subject.as_ref().expect("subject");
    assert_eq!(subject.determiner.as_ref().unwrap().text, "The");
    assert_eq!(subject.head.text, "cat");
    assert_eq!(clause.predicate.head.text, "sat");
    assert!(clause.predicate.complements.is_empty());
}

#[test]
fn prepositional_phrase_attaches_to_verb() {
    let doc = parse("The cat sat on the mat.");
    let sentence = doc.sentences().next().expect("sentence");
    let predicate = &sentence.main_clause.predicate;
    assert_eq!(predicate.complements.len(), 1);
    let Complement::Prep(pp) = &predicate.complements[0] else {
        panic!("expected prepositional complement");
    };
    assert_eq!(pp.head.text, "on");
    assert_eq!(pp.object.head.text, "mat");
}

#[test]
fn nested_prepositional_phrases_attach_rightward() {
    let doc = parse("The cat sat on the mat in the house.");
    let sentence = doc.sentences().next().expect("sentence");
    let predicate = &sentence.main_clause.predicate;
    // One complement; "in the house" modifies "mat", not "sat".
    assert_eq!(predicate.complements.len(), 1);
    let Complement::Prep(pp) = &predicate.complements[0] else {
        panic!("expected prepositional complement");
    };
    assert_eq!(pp.object.head.text, "mat");
    assert_eq!(pp.object.post_modifiers.len(), 1);
    let PostModifier::Prepositional(inner) = &pp.object.post_modifiers[0] else {
        panic!("expected nested prepositional phrase");
    };
    assert_eq!(inner.object.head.text, "house");
}

#[test]
fn relative_clause_modifies_object() {
    let doc = parse("I see the cat that sits.");
    let sentence = doc.sentences().next().expect("sentence");
    let predicate = &sentence.main_clause.predicate;
    let Complement::Noun(object) = &predicate.complements[0] else {
        panic!("expected noun complement");
    };
    assert_eq!(object.head.text, "cat");
    let PostModifier::Relative(rc) = &object.post_modifiers[0] else {
        panic!("expected relative clause");
    };
    assert!(rc.restrictive);
    assert_eq!(rc.relativizer.text, "that");
    assert!(rc.clause.subject.is_none());
    assert_eq!(rc.clause.predicate.head.text, "sits");
}

#[test]
fn adjectives_become_modifiers() {
    let doc = parse("The beautiful cat sat.");
    let sentence = doc.sentences().next().expect("sentence");
    let subject = sentence.main_clause.subject.as_ref().expect("subject");
    assert_eq!(subject.modifiers.len(), 1);
    assert_eq!(subject.modifiers[0].text, "beautiful");
    assert_eq!(subject.head.text, "cat");
}

#[test]
fn auxiliary_chain_in_predicate() {
    let doc = parse("The cat has been sleeping.");
    let sentence = doc.sentences().next().expect("sentence");
    let predicate = &sentence.main_clause.predicate;
    assert_eq!(predicate.auxiliaries.len(), 2);
    assert_eq!(predicate.head.text, "sleeping");
}

#[test]
fn copular_predicate_heads_on_auxiliary() {
    let doc = parse("The cat is on the mat.");
    let sentence = doc.sentences().next().expect("sentence");
    assert_eq!(sentence.structure, SentenceStructure::Simple);
    let predicate = &sentence.main_clause.predicate;
    assert_eq!(predicate.head.text, "is");
    assert!(matches!(predicate.complements[0], Complement::Prep(_)));
}

#[test]
fn node_spans_contain_children() {
    let source = "The old cat that sits saw the small dog on the mat.";
    let doc = parse(source);
    for sentence in doc.sentences() {
        for clause in sentence.clauses() {
            assert!(sentence.span.contains(&clause.span));
            assert!(clause.span.contains(&clause.predicate.span));
            if let Some(subject) = &clause.subject {
                assert!(clause.span.contains(&subject.span));
                for post in &subject.post_modifiers {
                    assert!(subject.span.contains(&post.span()));
                }
            }
            for complement in &clause.predicate.complements {
                assert!(clause.predicate.span.contains(&complement.span()));
            }
        }
    }
}
