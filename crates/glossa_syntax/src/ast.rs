//! Phrase-structure tree nodes.
//!
//! All nodes are built bottom-up in a single pass and are immutable
//! thereafter. A composite node's span is the union of its children's
//! spans, computed once at construction and never recomputed. No node
//! is shared between two parents; ownership runs strictly top-down.

use glossa_foundation::{Language, Span, Token};

/// Returns the smallest span covering both inputs.
#[must_use]
pub fn span_union(a: Span, b: Span) -> Span {
    let (start, start_line, start_column) = if a.start <= b.start {
        (a.start, a.start_line, a.start_column)
    } else {
        (b.start, b.start_line, b.start_column)
    };
    let (end, end_line, end_column) = if a.end >= b.end {
        (a.end, a.end_line, a.end_column)
    } else {
        (b.end, b.end_line, b.end_column)
    };
    Span::new(start, end, start_line, start_column, end_line, end_column)
}

/// A noun phrase: `Det? Adj* (Noun|ProperNoun+|Pronoun) Adj* PostModifier*`.
#[derive(Clone, Debug, PartialEq)]
pub struct NounPhrase {
    /// Optional determiner.
    pub determiner: Option<Token>,
    /// Ordered modifiers (quantifiers, adjectives, leading proper nouns).
    pub modifiers: Vec<Token>,
    /// The mandatory head token.
    pub head: Token,
    /// Ordered post-modifiers, attached right-recursively.
    pub post_modifiers: Vec<PostModifier>,
    /// The language of this phrase.
    pub language: Language,
    /// Union of all consumed token spans.
    pub span: Span,
}

impl NounPhrase {
    /// Creates a noun phrase, computing its span from its parts.
    #[must_use]
    pub fn new(
        determiner: Option<Token>,
        modifiers: Vec<Token>,
        head: Token,
        post_modifiers: Vec<PostModifier>,
        language: Language,
    ) -> Self {
        let mut span = head.span;
        if let Some(det) = &determiner {
            span = span_union(span, det.span);
        }
        for modifier in &modifiers {
            span = span_union(span, modifier.span);
        }
        for post in &post_modifiers {
            span = span_union(span, post.span());
        }
        Self {
            determiner,
            modifiers,
            head,
            post_modifiers,
            language,
            span,
        }
    }
}

/// A verb phrase: `Aux* Verb NounPhrase? (PrepositionalPhrase|Adverb)*`.
#[derive(Clone, Debug, PartialEq)]
pub struct VerbPhrase {
    /// Ordered auxiliary tokens.
    pub auxiliaries: Vec<Token>,
    /// The mandatory head verb.
    pub head: Token,
    /// Ordered complements.
    pub complements: Vec<Complement>,
    /// The language of this phrase.
    pub language: Language,
    /// Union of all consumed token spans.
    pub span: Span,
}

impl VerbPhrase {
    /// Creates a verb phrase, computing its span from its parts.
    #[must_use]
    pub fn new(
        auxiliaries: Vec<Token>,
        head: Token,
        complements: Vec<Complement>,
        language: Language,
    ) -> Self {
        let mut span = head.span;
        for aux in &auxiliaries {
            span = span_union(span, aux.span);
        }
        for complement in &complements {
            span = span_union(span, complement.span());
        }
        Self {
            auxiliaries,
            head,
            complements,
            language,
            span,
        }
    }
}

/// A strictly binary prepositional phrase: preposition plus object.
#[derive(Clone, Debug, PartialEq)]
pub struct PrepositionalPhrase {
    /// The preposition token.
    pub head: Token,
    /// The exclusively-owned object noun phrase.
    pub object: NounPhrase,
    /// The language of this phrase.
    pub language: Language,
    /// Union of the preposition and object spans.
    pub span: Span,
}

impl PrepositionalPhrase {
    /// Creates a prepositional phrase, computing its span.
    #[must_use]
    pub fn new(head: Token, object: NounPhrase, language: Language) -> Self {
        let span = span_union(head.span, object.span);
        Self {
            head,
            object,
            language,
            span,
        }
    }
}

/// A relative clause modifying a noun.
#[derive(Clone, Debug, PartialEq)]
pub struct RelativeClause {
    /// The relativizer token (`that`, `which`, `who`).
    pub relativizer: Token,
    /// The clause body.
    pub clause: Box<Clause>,
    /// True for restrictive clauses; a comma before the relativizer
    /// marks a non-restrictive one.
    pub restrictive: bool,
    /// Union of the relativizer and clause spans.
    pub span: Span,
}

impl RelativeClause {
    /// Creates a relative clause, computing its span.
    #[must_use]
    pub fn new(relativizer: Token, clause: Clause, restrictive: bool) -> Self {
        let span = span_union(relativizer.span, clause.span);
        Self {
            relativizer,
            clause: Box::new(clause),
            restrictive,
            span,
        }
    }
}

/// A post-modifier attached to a noun phrase.
#[derive(Clone, Debug, PartialEq)]
pub enum PostModifier {
    /// A prepositional phrase (`the cat on the mat`).
    Prepositional(PrepositionalPhrase),
    /// A relative clause (`the cat that sits`).
    Relative(RelativeClause),
}

impl PostModifier {
    /// Returns this post-modifier's span.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Prepositional(pp) => pp.span,
            Self::Relative(rc) => rc.span,
        }
    }
}

/// A complement inside a verb phrase.
#[derive(Clone, Debug, PartialEq)]
pub enum Complement {
    /// A noun phrase object.
    Noun(NounPhrase),
    /// A prepositional phrase (verb-governed oblique).
    Prep(PrepositionalPhrase),
    /// A bare adverb.
    Adverb(Token),
}

impl Complement {
    /// Returns this complement's span.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Noun(np) => np.span,
            Self::Prep(pp) => pp.span,
            Self::Adverb(t) => t.span,
        }
    }
}

/// The grammatical role of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseKind {
    /// A coordinated independent clause.
    Independent,
    /// The main clause of a sentence.
    Main,
    /// A clause introduced by a subordinating conjunction.
    Subordinate,
    /// The body of a relative clause.
    Relative,
}

/// A clause: an optional subject plus a mandatory predicate.
///
/// The subject may be absent even for main clauses (pro-drop or
/// imperative).
#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    /// The grammatical role of this clause.
    pub kind: ClauseKind,
    /// The subject noun phrase, if present.
    pub subject: Option<NounPhrase>,
    /// The mandatory predicate.
    pub predicate: VerbPhrase,
    /// The subordinating conjunction, for subordinate clauses.
    pub subordinator: Option<Token>,
    /// The language of this clause.
    pub language: Language,
    /// Union of all consumed token spans.
    pub span: Span,
}

impl Clause {
    /// Creates a clause, computing its span from its parts.
    #[must_use]
    pub fn new(
        kind: ClauseKind,
        subject: Option<NounPhrase>,
        predicate: VerbPhrase,
        subordinator: Option<Token>,
        language: Language,
    ) -> Self {
        let mut span = predicate.span;
        if let Some(subject) = &subject {
            span = span_union(span, subject.span);
        }
        if let Some(subordinator) = &subordinator {
            span = span_union(span, subordinator.span);
        }
        Self {
            kind,
            subject,
            predicate,
            subordinator,
            language,
            span,
        }
    }
}

/// The communicative function of a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentenceFunction {
    /// A statement (terminated by `.` or nothing).
    Declarative,
    /// A question (terminated by `?`).
    Interrogative,
    /// An exclamation (terminated by `!`).
    Exclamative,
}

/// The structural shape of a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentenceStructure {
    /// One clause.
    Simple,
    /// Coordinated clauses; `additional_clauses` is non-empty exactly
    /// when the structure is compound.
    Compound,
    /// A degenerate recovery sentence built by the total-coverage
    /// fallback.
    Fragment,
}

/// A parsed sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct Sentence {
    /// The communicative function.
    pub function: SentenceFunction,
    /// The structural shape.
    pub structure: SentenceStructure,
    /// The main clause.
    pub main_clause: Clause,
    /// Coordinated clauses beyond the first.
    pub additional_clauses: Vec<Clause>,
    /// The language of this sentence.
    pub language: Language,
    /// Union of all clause spans.
    pub span: Span,
}

impl Sentence {
    /// Creates a sentence, computing its span from its clauses.
    #[must_use]
    pub fn new(
        function: SentenceFunction,
        structure: SentenceStructure,
        main_clause: Clause,
        additional_clauses: Vec<Clause>,
        language: Language,
    ) -> Self {
        let mut span = main_clause.span;
        for clause in &additional_clauses {
            span = span_union(span, clause.span);
        }
        Self {
            function,
            structure,
            main_clause,
            additional_clauses,
            language,
            span,
        }
    }

    /// Returns all clauses in order: main first, then additional.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        std::iter::once(&self.main_clause).chain(self.additional_clauses.iter())
    }
}

/// An ordered container of sentences separated by blank lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    /// The sentences of this paragraph, in order.
    pub sentences: Vec<Sentence>,
    /// Union of all sentence spans.
    pub span: Span,
}

impl Paragraph {
    /// Creates a paragraph from a non-empty sentence list.
    #[must_use]
    pub fn new(sentences: Vec<Sentence>) -> Self {
        let mut span = sentences.first().map_or_else(Span::at_start, |s| s.span);
        for sentence in &sentences {
            span = span_union(span, sentence.span);
        }
        Self { sentences, span }
    }
}

/// The traversal root for a parsed document.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document {
    /// The paragraphs of this document, in order.
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Returns all sentences in document order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flat_map(|p| p.sentences.iter())
    }

    /// Returns true if the document has no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.sentences.is_empty())
    }
}
