//! Morphological features.
//!
//! Features are a fixed set of recognized keys mapped to fixed-enum
//! values with an explicit absent state, rather than an open
//! string-keyed map. Absence means "not applicable", not an error.

/// Grammatical gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Masculine gender.
    Masculine,
    /// Feminine gender.
    Feminine,
    /// Neuter gender.
    Neuter,
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Number {
    /// Exactly one.
    Singular,
    /// More than one.
    Plural,
}

/// Verb tense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tense {
    /// Present tense.
    Present,
    /// Past tense.
    Past,
    /// Future tense.
    Future,
}

/// Verb mood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Statement of fact.
    Indicative,
    /// Hypothetical or wished-for.
    Subjunctive,
    /// Command.
    Imperative,
    /// Uninflected citation form.
    Infinitive,
}

/// Verb aspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// Simple aspect.
    Simple,
    /// Ongoing action.
    Progressive,
    /// Completed action.
    Perfect,
}

/// A value for one morphological feature.
///
/// Rule tables produce these; `FeatureSet::set` routes each to its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureValue {
    /// A gender value.
    Gender(Gender),
    /// A number value.
    Number(Number),
    /// A tense value.
    Tense(Tense),
    /// A mood value.
    Mood(Mood),
    /// An aspect value.
    Aspect(Aspect),
}

/// The morphological features of one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FeatureSet {
    /// Grammatical gender, if applicable.
    pub gender: Option<Gender>,
    /// Grammatical number, if applicable.
    pub number: Option<Number>,
    /// Verb tense, if applicable.
    pub tense: Option<Tense>,
    /// Verb mood, if applicable.
    pub mood: Option<Mood>,
    /// Verb aspect, if applicable.
    pub aspect: Option<Aspect>,
}

impl FeatureSet {
    /// Creates an empty feature set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gender: None,
            number: None,
            tense: None,
            mood: None,
            aspect: None,
        }
    }

    /// Returns true if no feature is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.gender.is_none()
            && self.number.is_none()
            && self.tense.is_none()
            && self.mood.is_none()
            && self.aspect.is_none()
    }

    /// Sets one feature value in place.
    ///
    /// The first rule to set a feature wins; later rules do not
    /// overwrite it.
    pub fn set(&mut self, value: FeatureValue) {
        match value {
            FeatureValue::Gender(v) => {
                self.gender.get_or_insert(v);
            }
            FeatureValue::Number(v) => {
                self.number.get_or_insert(v);
            }
            FeatureValue::Tense(v) => {
                self.tense.get_or_insert(v);
            }
            FeatureValue::Mood(v) => {
                self.mood.get_or_insert(v);
            }
            FeatureValue::Aspect(v) => {
                self.aspect.get_or_insert(v);
            }
        }
    }

    /// Sets one feature value, returning the updated set.
    #[must_use]
    pub fn with(mut self, value: FeatureValue) -> Self {
        self.set(value);
        self
    }
}
