//! Dependency relation labels and edges.

use std::fmt;

use glossa_foundation::{Span, Token};

/// A grammatical relation between a head token and a dependent token.
///
/// Labels follow the Universal Dependencies convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Nominal subject of a predicate.
    Nsubj,
    /// Determiner of a noun.
    Det,
    /// Adjectival (or numeric) modifier of a noun.
    Amod,
    /// Direct object of a verb.
    Obj,
    /// Oblique nominal attached to a verb through a preposition.
    Obl,
    /// Case marker: the preposition itself, headed by its object.
    Case,
    /// Nominal modifier: a prepositional phrase inside a noun phrase.
    Nmod,
    /// Clausal modifier of a noun (relative clause).
    Acl,
    /// Marker: a relativizer or subordinating conjunction.
    Mark,
    /// Auxiliary of a verb.
    Aux,
    /// Adverbial modifier of a verb.
    Advmod,
}

impl Relation {
    /// Returns the conventional lowercase label for this relation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nsubj => "nsubj",
            Self::Det => "det",
            Self::Amod => "amod",
            Self::Obj => "obj",
            Self::Obl => "obl",
            Self::Case => "case",
            Self::Nmod => "nmod",
            Self::Acl => "acl",
            Self::Mark => "mark",
            Self::Aux => "aux",
            Self::Advmod => "advmod",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One labeled edge in the dependency graph of a sentence.
///
/// Edges borrow their endpoints from the syntax tree; the graph is a
/// view over tokens the tree owns, and no edge outlives the sentence
/// it was extracted from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dependency<'a> {
    /// The relation label.
    pub relation: Relation,
    /// The governing token.
    pub head: &'a Token,
    /// The governed token.
    pub dependent: &'a Token,
    /// Union of the head and dependent spans.
    pub span: Span,
}

impl<'a> Dependency<'a> {
    /// Creates an edge, computing its span from its endpoints.
    #[must_use]
    pub fn new(relation: Relation, head: &'a Token, dependent: &'a Token) -> Self {
        let span = if head.span.start <= dependent.span.start {
            head.span.to(dependent.span)
        } else {
            dependent.span.to(head.span)
        };
        Self {
            relation,
            head,
            dependent,
            span,
        }
    }
}

impl fmt::Display for Dependency<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {})",
            self.relation, self.head.text, self.dependent.text
        )
    }
}
