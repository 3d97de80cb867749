//! Pleonastic "it" detection (after Paice & Husk, 1987).
//!
//! "It" is expletive in constructions such as "it is important to ...",
//! "it is unclear whether ..." or "it is raining". Such occurrences have no
//! antecedent and must never be resolved.

use layered_anaphora_document::{Document, Pos, Token};

use crate::lexicon::{
    PLEONASTIC_IDIOMS, PREPOSITIONS, STATE_OF_KNOWLEDGE_WORDS, TASK_STATUS_WORDS,
};

/// Number of tokens after "it" inspected by the idiom and parenthetical rules.
pub const DEFAULT_LOOKAHEAD: usize = 5;

/// The construction that made an "it" pleonastic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PleonasticRule {
    /// it + be + ... + that, where "that" does not follow a preposition
    ThatClause,
    /// it + be + ... + to
    Infinitive,
    /// it + be + task/evaluative adjective + ... + to/that
    EvaluativeAdjective,
    /// it + be + ... state-of-knowledge word ... + whether/if
    StateOfKnowledge,
    /// a fixed expression such as "it seems that"
    Idiom,
    /// ", it ... ," parenthetical
    Parenthetical,
}

impl PleonasticRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ThatClause => "that_clause",
            Self::Infinitive => "infinitive",
            Self::EvaluativeAdjective => "evaluative_adjective",
            Self::StateOfKnowledge => "state_of_knowledge",
            Self::Idiom => "idiom",
            Self::Parenthetical => "parenthetical",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PleonasticFilter {
    lookahead: usize,
}

impl Default for PleonasticFilter {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl PleonasticFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn is_pleonastic(&self, document: &Document, token: usize) -> bool {
        self.classify(document, token).is_some()
    }

    /// The rule that classifies the token at `token` as pleonastic, if any.
    ///
    /// When several rules match, the most specific one is reported: the
    /// adjective and state-of-knowledge constructions before the bare
    /// that/to clauses, which come before the surface patterns.
    pub fn classify(&self, document: &Document, token: usize) -> Option<PleonasticRule> {
        let following = &document.tokens()[token + 1..];
        let copular = following
            .first()
            .map_or(false, |next| next.lemma.eq_ignore_ascii_case("be"));

        if copular {
            // everything after the copula
            let rest = &following[1..];
            if evaluative_adjective(rest) {
                return Some(PleonasticRule::EvaluativeAdjective);
            }
            if state_of_knowledge(rest) {
                return Some(PleonasticRule::StateOfKnowledge);
            }
            if that_clause(document, rest) {
                return Some(PleonasticRule::ThatClause);
            }
            if rest.iter().any(|t| t.lower() == "to") {
                return Some(PleonasticRule::Infinitive);
            }
        }

        let window = &following[..following.len().min(self.lookahead)];
        if self.idiom(document.token(token), window) {
            return Some(PleonasticRule::Idiom);
        }
        if token > 0
            && document.token(token - 1).text == ","
            && window.iter().any(|t| t.text == ",")
        {
            return Some(PleonasticRule::Parenthetical);
        }
        None
    }

    fn idiom(&self, it: &Token, window: &[Token]) -> bool {
        let mut text = it.lower();
        for token in window {
            text.push(' ');
            text.push_str(&token.lower());
        }
        PLEONASTIC_IDIOMS.iter().any(|idiom| text.contains(idiom))
    }
}

/// A "that" anywhere after the copula, unless a preposition precedes it.
fn that_clause(document: &Document, rest: &[Token]) -> bool {
    rest.iter().any(|t| {
        t.lower() == "that" && !PREPOSITIONS.contains(&document.token(t.index - 1).lemma)
    })
}

fn evaluative_adjective(rest: &[Token]) -> bool {
    match rest.split_first() {
        Some((adjective, later)) => {
            adjective.pos == Pos::Adjective
                && TASK_STATUS_WORDS.contains(&adjective.lemma)
                && later.iter().any(|t| matches!(t.lower().as_str(), "to" | "that"))
        }
        None => false,
    }
}

/// On reaching "whether"/"if", a state-of-knowledge lemma lies strictly
/// between the copula and it.
fn state_of_knowledge(rest: &[Token]) -> bool {
    rest.iter().enumerate().any(|(i, t)| {
        matches!(t.lower().as_str(), "whether" | "if")
            && rest[..i]
                .iter()
                .any(|between| STATE_OF_KNOWLEDGE_WORDS.contains(&between.lemma))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_anaphora_document::DocumentBuilder;

    /// Builds a flat sentence headed by its second token; enough for the
    /// surface-pattern rules, which ignore the tree.
    fn flat(words: &[(&str, &str, &str)]) -> Document {
        let mut builder = DocumentBuilder::new();
        for (text, lemma, pos) in words {
            builder = builder.token(text, lemma, pos, "dep", 1);
        }
        builder.build().unwrap()
    }

    #[test]
    fn raining_is_an_idiom() {
        let doc = flat(&[("It", "it", "PRON"), ("is", "be", "AUX"), ("raining", "rain", "VERB")]);
        assert_eq!(PleonasticFilter::new().classify(&doc, 0), Some(PleonasticRule::Idiom));
    }

    #[test]
    fn that_after_preposition_is_anaphoric() {
        // "It is in that box ."
        let doc = flat(&[
            ("It", "it", "PRON"),
            ("is", "be", "AUX"),
            ("in", "in", "ADP"),
            ("that", "that", "DET"),
            ("box", "box", "NOUN"),
            (".", ".", "PUNCT"),
        ]);
        assert_eq!(PleonasticFilter::new().classify(&doc, 0), None);
    }

    #[test]
    fn lookahead_bounds_the_idiom_window() {
        // "it seems that" only fits a window of two following tokens or more
        let doc = flat(&[("it", "it", "PRON"), ("seems", "seem", "VERB"), ("that", "that", "SCONJ")]);
        assert!(PleonasticFilter::new().is_pleonastic(&doc, 0));
        assert!(!PleonasticFilter::new().with_lookahead(1).is_pleonastic(&doc, 0));
    }

    #[test]
    fn last_token_has_nothing_to_inspect() {
        let doc = flat(&[("Take", "take", "VERB"), ("it", "it", "PRON")]);
        assert_eq!(PleonasticFilter::new().classify(&doc, 1), None);
    }
}
