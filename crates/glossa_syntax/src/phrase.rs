//! Recursive phrase-structure rules.
//!
//! Every rule is a pure cursor function over a shared token slice:
//! `parse_x(tokens, start)` returns the built node and the cursor just
//! past the last consumed token, or [`NoMatch`]. `NoMatch` is control
//! flow, not an error; callers try the next alternative. Every
//! recursive call consumes at least one token before recursing, so
//! parsing always terminates.
//!
//! Post-modifiers attach to the nearest noun phrase still being built,
//! which makes right attachment the documented tie-break: in "the cat
//! on the mat in the house", the second prepositional phrase modifies
//! "mat", not "cat".

use glossa_foundation::{Language, PosTag, Token};

use crate::ast::{
    Clause, ClauseKind, Complement, NounPhrase, PostModifier, PrepositionalPhrase,
    RelativeClause, VerbPhrase,
};

/// Signals that a grammar rule did not match at the given cursor.
///
/// Distinct from [`glossa_foundation::Error`]: failing to match is the
/// normal way rules decline input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMatch;

/// The result of a grammar rule: the node plus the next cursor.
pub type RuleResult<T> = Result<(T, usize), NoMatch>;

fn tag_at(tokens: &[Token], at: usize) -> Option<PosTag> {
    tokens.get(at).map(|t| t.tag)
}

/// Parses `Det? (Adj|Number)* (Noun | ProperNoun+ | Pronoun) Adj*
/// PostModifier*` at the cursor.
///
/// A run of proper nouns forms one phrase: earlier tokens become
/// modifiers and the last becomes the head. Post-modifiers are
/// prepositional phrases and relative clauses; a comma directly before
/// a relativizer marks the relative clause non-restrictive and the
/// comma is consumed with it.
///
/// # Errors
/// Returns [`NoMatch`] when no nominal head is found.
pub fn parse_noun_phrase(tokens: &[Token], start: usize) -> RuleResult<NounPhrase> {
    let mut cursor = start;

    let determiner = if tag_at(tokens, cursor) == Some(PosTag::Determiner) {
        cursor += 1;
        Some(tokens[cursor - 1].clone())
    } else {
        None
    };

    let mut modifiers = Vec::new();
    while matches!(
        tag_at(tokens, cursor),
        Some(PosTag::Adjective | PosTag::Number)
    ) {
        modifiers.push(tokens[cursor].clone());
        cursor += 1;
    }

    let head = match tag_at(tokens, cursor) {
        Some(PosTag::Noun | PosTag::Pronoun) => {
            cursor += 1;
            tokens[cursor - 1].clone()
        }
        Some(PosTag::ProperNoun) => {
            // "New York City": all but the last proper noun modify it.
            while tag_at(tokens, cursor + 1) == Some(PosTag::ProperNoun) {
                modifiers.push(tokens[cursor].clone());
                cursor += 1;
            }
            cursor += 1;
            tokens[cursor - 1].clone()
        }
        _ => return Err(NoMatch),
    };

    // Post-posed adjectives (Spanish "el gato negro").
    while tag_at(tokens, cursor) == Some(PosTag::Adjective) {
        modifiers.push(tokens[cursor].clone());
        cursor += 1;
    }

    let mut post_modifiers = Vec::new();
    loop {
        if let Ok((pp, next)) = parse_prepositional_phrase(tokens, cursor) {
            post_modifiers.push(PostModifier::Prepositional(pp));
            cursor = next;
            continue;
        }
        if let Ok((rc, next)) = parse_relative_clause(tokens, cursor) {
            post_modifiers.push(PostModifier::Relative(rc));
            cursor = next;
            continue;
        }
        // ", which ..." is a non-restrictive relative clause.
        if tokens.get(cursor).is_some_and(|t| t.text == ",")
            && tag_at(tokens, cursor + 1) == Some(PosTag::Relativizer)
        {
            if let Ok((mut rc, next)) = parse_relative_clause(tokens, cursor + 1) {
                rc.restrictive = false;
                rc.span = tokens[cursor].span.to(rc.span);
                post_modifiers.push(PostModifier::Relative(rc));
                cursor = next;
                continue;
            }
        }
        break;
    }

    let language = head.language;
    Ok((
        NounPhrase::new(determiner, modifiers, head, post_modifiers, language),
        cursor,
    ))
}

/// Parses the strictly binary `Prep NP` at the cursor.
///
/// # Errors
/// Returns [`NoMatch`] when the cursor is not at a preposition or the
/// preposition has no noun-phrase object.
pub fn parse_prepositional_phrase(
    tokens: &[Token],
    start: usize,
) -> RuleResult<PrepositionalPhrase> {
    if tag_at(tokens, start) != Some(PosTag::Preposition) {
        return Err(NoMatch);
    }
    let head = tokens[start].clone();
    let (object, next) = parse_noun_phrase(tokens, start + 1)?;
    let language = head.language;
    Ok((PrepositionalPhrase::new(head, object, language), next))
}

/// Parses `Relativizer ClauseBody` at the cursor.
///
/// The clause body may lack a subject (subject-gap: "the cat that
/// sits") or carry one ("the cat that I saw"). Produced clauses are
/// restrictive; callers downgrade when a comma precedes the
/// relativizer.
///
/// # Errors
/// Returns [`NoMatch`] when the cursor is not at a relativizer or no
/// clause body follows.
pub fn parse_relative_clause(tokens: &[Token], start: usize) -> RuleResult<RelativeClause> {
    if tag_at(tokens, start) != Some(PosTag::Relativizer) {
        return Err(NoMatch);
    }
    let relativizer = tokens[start].clone();
    let (clause, next) = parse_clause(tokens, start + 1, ClauseKind::Relative)?;
    Ok((RelativeClause::new(relativizer, clause, true), next))
}

/// Parses `Aux* Verb NP? (PP | Adverb)*` at the cursor.
///
/// When auxiliaries are present but no main verb follows, the last
/// auxiliary is promoted to head (copular "the cat is on the mat").
///
/// # Errors
/// Returns [`NoMatch`] when no verbal head is found.
pub fn parse_verb_phrase(tokens: &[Token], start: usize) -> RuleResult<VerbPhrase> {
    let mut cursor = start;

    let mut auxiliaries = Vec::new();
    while tag_at(tokens, cursor) == Some(PosTag::Auxiliary) {
        auxiliaries.push(tokens[cursor].clone());
        cursor += 1;
    }

    let head = if tag_at(tokens, cursor) == Some(PosTag::Verb) {
        cursor += 1;
        tokens[cursor - 1].clone()
    } else if let Some(copula) = auxiliaries.pop() {
        copula
    } else {
        return Err(NoMatch);
    };

    let mut complements = Vec::new();
    if let Ok((object, next)) = parse_noun_phrase(tokens, cursor) {
        complements.push(Complement::Noun(object));
        cursor = next;
    }
    loop {
        if let Ok((pp, next)) = parse_prepositional_phrase(tokens, cursor) {
            complements.push(Complement::Prep(pp));
            cursor = next;
            continue;
        }
        if tag_at(tokens, cursor) == Some(PosTag::Adverb) {
            complements.push(Complement::Adverb(tokens[cursor].clone()));
            cursor += 1;
            continue;
        }
        break;
    }

    let language = head.language;
    Ok((
        VerbPhrase::new(auxiliaries, head, complements, language),
        cursor,
    ))
}

/// Parses a clause of the given kind at the cursor.
///
/// Finds the first verbal token at or after the cursor and splits
/// around it: a leading noun phrase becomes the subject only if it
/// stops at or before the verb; otherwise the clause is parsed
/// subject-less from the verb. A clause with the verb first gets an
/// optional post-posed subject, which covers pro-drop inversion.
///
/// # Errors
/// Returns [`NoMatch`] when no verbal token exists at or after the
/// cursor.
pub fn parse_clause(tokens: &[Token], start: usize, kind: ClauseKind) -> RuleResult<Clause> {
    let verb_offset = tokens[start..]
        .iter()
        .position(|t| t.tag.is_verbal())
        .ok_or(NoMatch)?;
    let verb_pos = start + verb_offset;
    let language = tokens[verb_pos].language;

    if verb_pos == start {
        let (predicate, mut next) = parse_verb_phrase(tokens, start)?;
        // Post-posed subject ("corre el gato") when the predicate left
        // a noun phrase unconsumed.
        let subject = match parse_noun_phrase(tokens, next) {
            Ok((np, after)) => {
                next = after;
                Some(np)
            }
            Err(NoMatch) => None,
        };
        return Ok((
            Clause::new(kind, subject, predicate, None, language),
            next,
        ));
    }

    if let Ok((subject, after_subject)) = parse_noun_phrase(tokens, start) {
        if after_subject <= verb_pos {
            if let Ok((predicate, next)) = parse_verb_phrase(tokens, after_subject) {
                return Ok((
                    Clause::new(kind, Some(subject), predicate, None, language),
                    next,
                ));
            }
        }
    }

    // No usable subject before the verb; parse from the verb itself.
    let (predicate, next) = parse_verb_phrase(tokens, verb_pos)?;
    Ok((Clause::new(kind, None, predicate, None, language), next))
}
