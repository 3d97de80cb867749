//! Closed word lists used by the heuristics.
//!
//! Every lookup is case-insensitive. Absence from a list is an ordinary
//! negative answer, never an error.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// A closed, lowercase vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: HashSet<&'static str>,
}

impl Vocabulary {
    fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Third-person pronouns eligible for resolution.
pub static THIRD_PERSON_PRONOUNS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(&[
        "he", "she", "it", "they", "him", "her", "them", "his", "hers", "its", "their", "theirs",
    ])
});

/// Adjectives of task status and evaluation ("it is important to ...").
pub static TASK_STATUS_WORDS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(&[
        "abnormal", "advantageous", "advisable", "appropriate", "bad", "beneficial", "best",
        "better", "common", "correct", "customary", "dangerous", "decided", "difficult",
        "easier", "easiest", "easy", "essential", "faster", "feasible", "fitting", "foolish",
        "good", "hard", "harder", "hardest", "helpful", "importance", "important",
        "impossibility", "impossible", "impracticable", "inadvisable", "inappropriate",
        "incorrect", "incumbent", "infeasible", "intended", "interest", "interesting",
        "irrelevant", "job", "justified", "necessary", "normal", "obligatory", "policy",
        "possible", "practicable", "practice", "preferred", "rare", "rarer", "rarest",
        "reasonable", "relevant", "remains", "right", "safe", "safer", "safest", "sensible",
        "shock", "simple", "simpler", "simplest", "sufficient", "tempting", "traditional",
        "trivial", "uncommon", "unhelpful", "unnecessary", "unreasonable", "unsafe",
        "unscientific", "unusual", "unwise", "useful", "useless", "usual", "wise", "wiser",
        "wisest", "worthwhile", "wrong",
    ])
});

/// Prepositions that make a following "that" anaphoric ("in it that ...").
pub static PREPOSITIONS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(&[
        "among", "at", "before", "below", "beneath", "beside", "between", "by", "despite",
        "during", "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "outside",
        "over", "through", "to", "under", "until", "via", "with", "within", "without",
    ])
});

/// Words expressing a state of knowledge ("it is unclear whether ...").
pub static STATE_OF_KNOWLEDGE_WORDS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(&[
        "certain", "debatable", "known", "questionable", "uncertain", "wondered", "clear",
        "doubted", "doubtful", "dubious", "questioned", "unclear", "understood", "unknown",
    ])
});

/// Fixed expressions in which "it" is non-referential.
pub const PLEONASTIC_IDIOMS: &[&str] = &[
    "on the face of it",
    "if it wasn't for",
    "as it were",
    "as we know it",
    "it remains to",
    "i think it was",
    "it is important to",
    "it is necessary to",
    "it seems that",
    "it appears that",
    "it happens that",
    "it remains to be seen",
    "as it turns out",
    "if it weren't for",
    "if it were not for",
    "it is raining",
    "it is snowing",
    "it is sunny",
    "it is cloudy",
    "it is windy",
];

/// Discourse-organising verbs whose objects tend to be salient.
pub static INDICATING_VERBS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new(&[
        "analyze", "assess", "check", "consider", "cover", "define", "describe", "develop",
        "discuss", "examine", "explore", "highlight", "identify", "illustrate", "investigate",
        "outline", "present", "report", "review", "show", "study", "summarize", "survey",
        "synthesise",
    ])
});

/// Coordinators linking two verbs for the immediate-reference indicator.
pub static IMMEDIATE_REFERENCE_CONJUNCTIONS: Lazy<Vocabulary> =
    Lazy::new(|| Vocabulary::new(&["and", "or", "before", "after", "until"]));

pub static INDEFINITE_ARTICLES: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(&["a", "an"]));

/// Punctuation rendered without a preceding space.
pub static CLOSING_PUNCTUATION: Lazy<Vocabulary> =
    Lazy::new(|| Vocabulary::new(&[",", ".", ":", ";", "!", "?"]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        assert!(THIRD_PERSON_PRONOUNS.contains("They"));
        assert!(TASK_STATUS_WORDS.contains("IMPORTANT"));
        assert!(!PREPOSITIONS.contains("and"));
    }

    #[test]
    fn list_sizes() {
        assert_eq!(THIRD_PERSON_PRONOUNS.len(), 12);
        assert_eq!(PREPOSITIONS.len(), 29);
        assert_eq!(STATE_OF_KNOWLEDGE_WORDS.len(), 14);
        assert_eq!(INDICATING_VERBS.len(), 24);
        assert_eq!(PLEONASTIC_IDIOMS.len(), 20);
    }
}
