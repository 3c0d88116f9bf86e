//! Sentence segmentation and clause assembly.
//!
//! [`parse_document`] is total: every punctuation-delimited region of
//! the input yields exactly one [`Sentence`], falling back to a
//! [`SentenceStructure::Fragment`] wrapper when no clause rule
//! matches. Callers never see a parse error; a fragment is an honest
//! answer, not a failure.

use glossa_foundation::{Language, PosTag, Span, Token};

use crate::ast::{
    Clause, ClauseKind, Document, Paragraph, Sentence, SentenceFunction, SentenceStructure,
    VerbPhrase,
};
use crate::phrase::parse_clause;

/// Parses tagged tokens into a document.
///
/// Paragraph breaks are blank lines (a gap of at least one full line
/// between consecutive tokens). Within a paragraph, sentences are
/// segmented on terminal punctuation with the terminator kept in its
/// group; an un-terminated trailing run still becomes a sentence.
#[must_use]
pub fn parse_document(tokens: &[Token], language: Language) -> Document {
    let mut paragraphs = Vec::new();
    for group in split_paragraphs(tokens) {
        let sentences: Vec<Sentence> = split_sentences(group)
            .into_iter()
            .map(|s| parse_sentence(s, language))
            .collect();
        if !sentences.is_empty() {
            paragraphs.push(Paragraph::new(sentences));
        }
    }
    Document { paragraphs }
}

/// Splits tokens into paragraph-sized runs on blank lines.
fn split_paragraphs(tokens: &[Token]) -> Vec<&[Token]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..tokens.len() {
        if tokens[i].span.start_line > tokens[i - 1].span.end_line + 1 {
            runs.push(&tokens[start..i]);
            start = i;
        }
    }
    if start < tokens.len() {
        runs.push(&tokens[start..]);
    }
    runs
}

fn is_terminator(token: &Token) -> bool {
    token.tag == PosTag::Punctuation && matches!(token.text.as_str(), "." | "!" | "?")
}

/// Splits a paragraph run into sentence groups, terminator included.
fn split_sentences(tokens: &[Token]) -> Vec<&[Token]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if is_terminator(token) {
            groups.push(&tokens[start..=i]);
            start = i + 1;
        }
    }
    if start < tokens.len() {
        groups.push(&tokens[start..]);
    }
    groups
}

/// Parses one terminator-delimited group into a sentence. Total.
fn parse_sentence(group: &[Token], language: Language) -> Sentence {
    let function = sentence_function(group);

    // Strip the terminator and any leading inverted marks; fall back
    // over the original group so even a bare terminator yields a
    // sentence.
    let mut body = group;
    if body.last().is_some_and(is_terminator) {
        body = &body[..body.len() - 1];
    }
    while body
        .first()
        .is_some_and(|t| t.tag == PosTag::Punctuation && matches!(t.text.as_str(), "¿" | "¡"))
    {
        body = &body[1..];
    }

    let mut sentence = parse_body(body, language)
        .unwrap_or_else(|| fragment_sentence(group, function, language));
    sentence.function = function;
    // The sentence accounts for its whole region, terminator included.
    if let (Some(first), Some(last)) = (group.first(), group.last()) {
        sentence.span = first.span.to(last.span);
    }
    sentence
}

fn sentence_function(group: &[Token]) -> SentenceFunction {
    let terminal = group.last().map(|t| t.text.as_str());
    let leading = group.first().map(|t| t.text.as_str());
    match (leading, terminal) {
        (_, Some("?")) | (Some("¿"), _) => SentenceFunction::Interrogative,
        (_, Some("!")) | (Some("¡"), _) => SentenceFunction::Exclamative,
        _ => SentenceFunction::Declarative,
    }
}

/// Attempts subordination, then coordination, then a simple clause.
fn parse_body(body: &[Token], language: Language) -> Option<Sentence> {
    if body.is_empty() {
        return None;
    }

    if body[0].tag == PosTag::SubordConj {
        if let Ok((mut clause, _)) = parse_clause(body, 1, ClauseKind::Subordinate) {
            let subordinator = body[0].clone();
            clause.span = subordinator.span.to(clause.span);
            clause.subordinator = Some(subordinator);
            return Some(Sentence::new(
                SentenceFunction::Declarative,
                SentenceStructure::Simple,
                clause,
                Vec::new(),
                language,
            ));
        }
    }

    // Coordination: split on the first non-leading coordinator; if
    // either side fails to parse, the group falls through to a single
    // simple clause.
    if let Some(pos) = body[1..]
        .iter()
        .position(|t| t.tag == PosTag::CoordConj)
        .map(|p| p + 1)
    {
        let left = parse_clause(&body[..pos], 0, ClauseKind::Main);
        let right = parse_clause(body, pos + 1, ClauseKind::Independent);
        if let (Ok((main, _)), Ok((extra, _))) = (left, right) {
            return Some(Sentence::new(
                SentenceFunction::Declarative,
                SentenceStructure::Compound,
                main,
                vec![extra],
                language,
            ));
        }
    }

    let (clause, _) = parse_clause(body, 0, ClauseKind::Main).ok()?;
    Some(Sentence::new(
        SentenceFunction::Declarative,
        SentenceStructure::Simple,
        clause,
        Vec::new(),
        language,
    ))
}

/// Wraps an unparseable group as a one-token-predicate fragment.
fn fragment_sentence(group: &[Token], function: SentenceFunction, language: Language) -> Sentence {
    let anchor = group
        .iter()
        .find(|t| t.tag.is_verbal())
        .or_else(|| group.first())
        .cloned()
        .unwrap_or_else(|| Token::new("", PosTag::Unresolved, language, Span::at_start()));
    let predicate = VerbPhrase::new(Vec::new(), anchor, Vec::new(), language);
    let clause = Clause::new(ClauseKind::Main, None, predicate, None, language);
    Sentence::new(
        function,
        SentenceStructure::Fragment,
        clause,
        Vec::new(),
        language,
    )
}
