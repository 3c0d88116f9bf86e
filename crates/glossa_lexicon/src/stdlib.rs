//! Bundled standard lexicons.
//!
//! Default lexical tables for the languages Glossa ships with. Callers
//! with their own corpora can build a [`Lexicon`] from scratch through
//! the same registration API.

use glossa_foundation::{Aspect, FeatureValue, Gender, Language, Mood, Number, PosTag, Tense};

use crate::lexicon::Lexicon;

/// Builds the standard English lexicon.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn english() -> Lexicon {
    let mut lex = Lexicon::new(Language::English);

    // Closed-class words
    lex.register_words(
        &[
            "the", "a", "an", "this", "these", "those", "my", "your", "his", "its", "our",
            "their", "some", "any", "no", "every", "each",
        ],
        PosTag::Determiner,
    );
    lex.register_words(
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "myself", "yourself", "himself", "herself", "itself", "themselves",
        ],
        PosTag::Pronoun,
    );
    lex.register_words(
        &[
            "on", "in", "at", "with", "from", "to", "of", "by", "for", "under", "over",
            "about", "into", "through", "between", "against", "near",
        ],
        PosTag::Preposition,
    );
    lex.register_words(&["and", "but", "or", "nor", "yet", "so"], PosTag::CoordConj);
    lex.register_words(
        &[
            "because", "although", "though", "while", "since", "if", "unless", "until",
            "whereas", "after", "before",
        ],
        PosTag::SubordConj,
    );
    lex.register_words(
        &["that", "which", "who", "whom", "whose"],
        PosTag::Relativizer,
    );
    lex.register_words(
        &[
            "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
            "do", "does", "did", "will", "would", "can", "could", "may", "might", "shall",
            "should", "must",
        ],
        PosTag::Auxiliary,
    );
    lex.register_words(&["not", "never", "always", "often", "here", "there"], PosTag::Adverb);
    lex.register_words(&["oh", "ah", "hey", "ouch", "wow"], PosTag::Interjection);

    // Common irregular verb forms the suffix bank cannot reach
    lex.register_words(
        &[
            "sat", "sit", "sits", "ran", "run", "runs", "saw", "see", "sees", "went", "go",
            "goes", "came", "come", "comes", "ate", "eat", "eats", "took", "take", "takes",
            "gave", "give", "gives", "made", "make", "makes", "said", "say", "says", "knew",
            "know", "knows", "found", "find", "finds", "told", "tell", "tells",
        ],
        PosTag::Verb,
    );

    // Multi-character units
    for unit in ["mr.", "mrs.", "ms.", "dr.", "st."] {
        lex.register_unit(unit, Some(PosTag::ProperNoun));
    }
    for unit in ["e.g.", "i.e.", "etc.", "vs."] {
        lex.register_unit(unit, Some(PosTag::Adverb));
    }
    for unit in [
        "don't",
        "doesn't",
        "didn't",
        "can't",
        "won't",
        "isn't",
        "aren't",
        "wasn't",
        "weren't",
        "couldn't",
        "shouldn't",
        "wouldn't",
        "hasn't",
        "haven't",
    ] {
        lex.register_unit(unit, Some(PosTag::Auxiliary));
    }

    // Irregular lemmas, keyed on surface + tag
    for (surface, lemma) in [
        ("sat", "sit"),
        ("sits", "sit"),
        ("ran", "run"),
        ("runs", "run"),
        ("saw", "see"),
        ("sees", "see"),
        ("went", "go"),
        ("goes", "go"),
        ("came", "come"),
        ("ate", "eat"),
        ("took", "take"),
        ("gave", "give"),
        ("made", "make"),
        ("said", "say"),
        ("knew", "know"),
        ("found", "find"),
        ("told", "tell"),
        // Doubled final consonants the generic -ing rewrite would keep
        ("running", "run"),
        ("sitting", "sit"),
        ("getting", "get"),
        ("stopped", "stop"),
        ("swimming", "swim"),
    ] {
        lex.register_irregular(surface, PosTag::Verb, lemma);
    }
    for (surface, lemma) in [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("does", "do"),
        ("did", "do"),
    ] {
        lex.register_irregular(surface, PosTag::Auxiliary, lemma);
    }
    for (surface, lemma) in [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("mice", "mouse"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("people", "person"),
    ] {
        lex.register_irregular(surface, PosTag::Noun, lemma);
    }

    // POS suffix rules, most specific first
    lex.register_suffix_rule("ation", PosTag::Noun);
    lex.register_suffix_rule("ness", PosTag::Noun);
    lex.register_suffix_rule("ment", PosTag::Noun);
    lex.register_suffix_rule("ship", PosTag::Noun);
    lex.register_suffix_rule("able", PosTag::Adjective);
    lex.register_suffix_rule("ible", PosTag::Adjective);
    lex.register_suffix_rule("ous", PosTag::Adjective);
    lex.register_suffix_rule("ful", PosTag::Adjective);
    lex.register_suffix_rule("ive", PosTag::Adjective);
    lex.register_suffix_rule("less", PosTag::Adjective);
    lex.register_suffix_rule("ish", PosTag::Adjective);
    lex.register_suffix_rule("ing", PosTag::Verb);
    lex.register_suffix_rule("ed", PosTag::Verb);
    lex.register_suffix_rule("ly", PosTag::Adverb);

    // Lemma rewrites
    lex.register_rewrite(PosTag::Verb, "ying", "y");
    lex.register_rewrite(PosTag::Verb, "ing", "");
    lex.register_rewrite(PosTag::Verb, "ied", "y");
    lex.register_rewrite(PosTag::Verb, "ed", "");
    lex.register_rewrite(PosTag::Verb, "ies", "y");
    lex.register_rewrite(PosTag::Verb, "es", "");
    lex.register_rewrite(PosTag::Verb, "s", "");
    lex.register_rewrite(PosTag::Noun, "ies", "y");
    lex.register_rewrite(PosTag::Noun, "ses", "s");
    lex.register_rewrite(PosTag::Noun, "s", "");
    lex.register_rewrite(PosTag::Adjective, "est", "");
    lex.register_rewrite(PosTag::Adjective, "er", "");

    // Morphological features
    lex.register_feature_rule(PosTag::Noun, "s", FeatureValue::Number(Number::Plural));
    lex.register_feature_rule(PosTag::Verb, "ing", FeatureValue::Aspect(Aspect::Progressive));
    lex.register_feature_rule(PosTag::Verb, "ed", FeatureValue::Tense(Tense::Past));
    lex.register_feature_rule(PosTag::Verb, "s", FeatureValue::Tense(Tense::Present));
    lex.register_feature_rule(PosTag::Verb, "s", FeatureValue::Number(Number::Singular));

    lex
}

/// Builds the standard Spanish lexicon.
#[must_use]
pub fn spanish() -> Lexicon {
    let mut lex = Lexicon::new(Language::Spanish);

    lex.register_words(
        &["el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "esos"],
        PosTag::Determiner,
    );
    lex.register_words(
        &["yo", "tú", "él", "ella", "usted", "nosotros", "ellos", "ellas", "me", "te", "se"],
        PosTag::Pronoun,
    );
    // "del" and "al" are article fusions (de + el, a + el) kept as one token.
    lex.register_words(
        &["de", "en", "a", "con", "por", "para", "sin", "sobre", "del", "al", "entre"],
        PosTag::Preposition,
    );
    lex.register_words(&["y", "e", "o", "u", "pero", "ni"], PosTag::CoordConj);
    lex.register_words(
        &["porque", "aunque", "cuando", "si", "mientras", "como"],
        PosTag::SubordConj,
    );
    lex.register_words(&["que", "quien", "cual", "cuyo"], PosTag::Relativizer);
    lex.register_words(
        &[
            "ser", "es", "son", "era", "eran", "fue", "fueron", "estar", "está", "están",
            "estaba", "haber", "ha", "han", "había", "he", "hemos",
        ],
        PosTag::Auxiliary,
    );
    lex.register_words(&["no", "nunca", "siempre", "aquí", "allí"], PosTag::Adverb);

    for (surface, lemma) in [
        ("es", "ser"),
        ("son", "ser"),
        ("era", "ser"),
        ("fue", "ser"),
        ("está", "estar"),
        ("están", "estar"),
        ("ha", "haber"),
        ("han", "haber"),
        ("había", "haber"),
    ] {
        lex.register_irregular(surface, PosTag::Auxiliary, lemma);
    }
    for (surface, lemma) in [("fui", "ir"), ("voy", "ir"), ("va", "ir"), ("dijo", "decir")] {
        lex.register_irregular(surface, PosTag::Verb, lemma);
    }

    // Suffix rules: participle/gerund endings before generic ones
    lex.register_suffix_rule("mente", PosTag::Adverb);
    lex.register_suffix_rule("ción", PosTag::Noun);
    lex.register_suffix_rule("sión", PosTag::Noun);
    lex.register_suffix_rule("dad", PosTag::Noun);
    lex.register_suffix_rule("ando", PosTag::Verb);
    lex.register_suffix_rule("iendo", PosTag::Verb);
    lex.register_suffix_rule("ado", PosTag::Verb);
    lex.register_suffix_rule("ido", PosTag::Verb);
    lex.register_suffix_rule("oso", PosTag::Adjective);
    lex.register_suffix_rule("osa", PosTag::Adjective);
    lex.register_suffix_rule("able", PosTag::Adjective);
    lex.register_suffix_rule("ar", PosTag::Verb);
    lex.register_suffix_rule("er", PosTag::Verb);
    lex.register_suffix_rule("ir", PosTag::Verb);

    lex.register_rewrite(PosTag::Verb, "ando", "ar");
    lex.register_rewrite(PosTag::Verb, "iendo", "er");
    lex.register_rewrite(PosTag::Verb, "ado", "ar");
    lex.register_rewrite(PosTag::Verb, "ido", "ir");
    lex.register_rewrite(PosTag::Noun, "es", "");
    lex.register_rewrite(PosTag::Noun, "s", "");

    lex.register_feature_rule(PosTag::Noun, "os", FeatureValue::Gender(Gender::Masculine));
    lex.register_feature_rule(PosTag::Noun, "as", FeatureValue::Gender(Gender::Feminine));
    lex.register_feature_rule(PosTag::Noun, "o", FeatureValue::Gender(Gender::Masculine));
    lex.register_feature_rule(PosTag::Noun, "a", FeatureValue::Gender(Gender::Feminine));
    lex.register_feature_rule(PosTag::Noun, "s", FeatureValue::Number(Number::Plural));
    lex.register_feature_rule(PosTag::Verb, "ando", FeatureValue::Aspect(Aspect::Progressive));
    lex.register_feature_rule(PosTag::Verb, "aba", FeatureValue::Tense(Tense::Past));
    lex.register_feature_rule(PosTag::Verb, "ar", FeatureValue::Mood(Mood::Infinitive));
    lex.register_feature_rule(PosTag::Verb, "er", FeatureValue::Mood(Mood::Infinitive));
    lex.register_feature_rule(PosTag::Verb, "ir", FeatureValue::Mood(Mood::Infinitive));

    lex
}

/// Returns the bundled lexicon for a language.
///
/// Catalan currently gets an empty lexicon; callers supply their own
/// tables through the registration API.
#[must_use]
pub fn for_language(language: Language) -> Lexicon {
    match language {
        Language::English => english(),
        Language::Spanish => spanish(),
        Language::Catalan => Lexicon::new(Language::Catalan),
    }
}
