//! Dependency extraction over a parsed sentence.
//!
//! Extraction is a pure, deterministic walk of the syntax tree. Edge
//! order is fixed by the traversal: per clause (main first, then
//! additional), the subject edge, edges inside the subject, edges
//! inside the predicate, then the subordinator marker. It never fails;
//! an absent optional field simply omits its edges.

use glossa_syntax::ast::{
    Clause, Complement, NounPhrase, PostModifier, PrepositionalPhrase, Sentence, VerbPhrase,
};

use crate::relation::{Dependency, Relation};

/// Extracts all dependency edges of a sentence in traversal order.
#[must_use]
pub fn extract(sentence: &Sentence) -> Vec<Dependency<'_>> {
    let mut edges = Vec::new();
    for clause in sentence.clauses() {
        clause_edges(clause, &mut edges);
    }
    edges
}

fn clause_edges<'a>(clause: &'a Clause, edges: &mut Vec<Dependency<'a>>) {
    let verb = &clause.predicate.head;
    if let Some(subject) = &clause.subject {
        edges.push(Dependency::new(Relation::Nsubj, verb, &subject.head));
        noun_phrase_edges(subject, edges);
    }
    verb_phrase_edges(&clause.predicate, edges);
    if let Some(subordinator) = &clause.subordinator {
        edges.push(Dependency::new(Relation::Mark, verb, subordinator));
    }
}

/// Edges internal to a noun phrase, headed by the phrase head.
fn noun_phrase_edges<'a>(np: &'a NounPhrase, edges: &mut Vec<Dependency<'a>>) {
    if let Some(determiner) = &np.determiner {
        edges.push(Dependency::new(Relation::Det, &np.head, determiner));
    }
    for modifier in &np.modifiers {
        edges.push(Dependency::new(Relation::Amod, &np.head, modifier));
    }
    for post in &np.post_modifiers {
        match post {
            PostModifier::Prepositional(pp) => {
                edges.push(Dependency::new(Relation::Nmod, &np.head, &pp.object.head));
                prepositional_edges(pp, edges);
            }
            PostModifier::Relative(rc) => {
                let inner_verb = &rc.clause.predicate.head;
                edges.push(Dependency::new(Relation::Acl, &np.head, inner_verb));
                edges.push(Dependency::new(Relation::Mark, inner_verb, &rc.relativizer));
                clause_edges(&rc.clause, edges);
            }
        }
    }
}

/// Edges internal to a verb phrase, headed by the main verb.
fn verb_phrase_edges<'a>(vp: &'a VerbPhrase, edges: &mut Vec<Dependency<'a>>) {
    for auxiliary in &vp.auxiliaries {
        edges.push(Dependency::new(Relation::Aux, &vp.head, auxiliary));
    }
    for complement in &vp.complements {
        match complement {
            Complement::Noun(np) => {
                edges.push(Dependency::new(Relation::Obj, &vp.head, &np.head));
                noun_phrase_edges(np, edges);
            }
            Complement::Prep(pp) => {
                edges.push(Dependency::new(Relation::Obl, &vp.head, &pp.object.head));
                prepositional_edges(pp, edges);
            }
            Complement::Adverb(adverb) => {
                edges.push(Dependency::new(Relation::Advmod, &vp.head, adverb));
            }
        }
    }
}

/// The case edge plus the object's internal edges.
fn prepositional_edges<'a>(pp: &'a PrepositionalPhrase, edges: &mut Vec<Dependency<'a>>) {
    edges.push(Dependency::new(Relation::Case, &pp.object.head, &pp.head));
    noun_phrase_edges(&pp.object, edges);
}
