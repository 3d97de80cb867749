//! Antecedent indicators (Mitkov, 1998).
//!
//! Each [`Indicator`] inspects one pronoun/candidate pair and returns a small
//! integer: positive values boost the candidate, negative values penalise it.
//! All indicators carry unit weight and their sum is the candidate's score.
//!
//! | Indicator | Values |
//! |---|---|
//! | obliqueness | subject 2, direct object 1, `iobj` 0, else -1 (including `dative`) |
//! | indicating verb | 1 |
//! | lexical reiteration | 0, 1, 2 |
//! | section heading match | always 0 |
//! | collocation match | 2 |
//! | immediate reference | 2 |
//! | sequential instruction | 2 |
//! | term preference | 1 |
//! | indefiniteness penalty | -1 |
//! | prepositional NP penalty | -1 |
//! | referential distance | 2, 1, 0, -1 |
//! | pronoun boost | always 0 |
//! | syntactic parallelism | 1 |
//! | frequent candidate | 0, 1, 2 |

use std::fmt;

use layered_anaphora_document::{Dep, Document, Pos, Span, Token};

use crate::anaphor::Anaphor;
use crate::candidate::Candidate;
use crate::frequency::{FrequencyTable, TopTerms};
use crate::lexicon::{IMMEDIATE_REFERENCE_CONJUNCTIONS, INDEFINITE_ARTICLES, INDICATING_VERBS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    Obliqueness = 0,
    IndicatingVerb,
    LexicalReiteration,
    SectionHeadingMatch,
    CollocationMatch,
    ImmediateReference,
    SequentialInstruction,
    TermPreference,
    IndefinitenessPenalty,
    PrepositionalNpPenalty,
    ReferentialDistance,
    BoostPronoun,
    SyntacticParallelism,
    FrequentCandidate,
}

/// Everything an indicator may consult besides the pair itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'d> {
    pub document: &'d Document,
    pub frequencies: &'d FrequencyTable,
    pub top_terms: &'d TopTerms,
}

impl Indicator {
    pub const COUNT: usize = 14;

    /// Evaluation order, which is also the order of a [`ScoreVector`].
    pub const ALL: [Indicator; Indicator::COUNT] = [
        Self::Obliqueness,
        Self::IndicatingVerb,
        Self::LexicalReiteration,
        Self::SectionHeadingMatch,
        Self::CollocationMatch,
        Self::ImmediateReference,
        Self::SequentialInstruction,
        Self::TermPreference,
        Self::IndefinitenessPenalty,
        Self::PrepositionalNpPenalty,
        Self::ReferentialDistance,
        Self::BoostPronoun,
        Self::SyntacticParallelism,
        Self::FrequentCandidate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Obliqueness => "obliqueness",
            Self::IndicatingVerb => "indicating_verb",
            Self::LexicalReiteration => "lexical_reiteration",
            Self::SectionHeadingMatch => "section_heading_match",
            Self::CollocationMatch => "collocation_match",
            Self::ImmediateReference => "immediate_reference",
            Self::SequentialInstruction => "sequential_instruction",
            Self::TermPreference => "term_preference",
            Self::IndefinitenessPenalty => "indefiniteness_penalty",
            Self::PrepositionalNpPenalty => "prepositional_np_penalty",
            Self::ReferentialDistance => "referential_distance",
            Self::BoostPronoun => "boost_pronoun",
            Self::SyntacticParallelism => "syntactic_parallelism",
            Self::FrequentCandidate => "frequent_candidate",
        }
    }

    pub fn evaluate(&self, context: &ScoringContext<'_>, anaphor: &Anaphor, span: &Span) -> i32 {
        let document = context.document;
        let pronoun = anaphor.token_of(document);
        let root = document.token(span.root);

        match self {
            Self::Obliqueness => match &root.dep {
                dep if dep.is_subject() => 2,
                Dep::DirectObject => 1,
                Dep::IndirectObject => 0,
                _ => -1,
            },
            Self::IndicatingVerb => {
                let head = document.head_of(root);
                (head.pos == Pos::Verb && INDICATING_VERBS.contains(&head.lemma)) as i32
            }
            Self::LexicalReiteration => {
                match context.frequencies.count(&root.lemma).saturating_sub(1) {
                    0 => 0,
                    1 => 1,
                    _ => 2,
                }
            }
            Self::SectionHeadingMatch => 0,
            Self::CollocationMatch => {
                let candidate_head = document.head_of(root);
                let pronoun_head = document.head_of(pronoun);
                if candidate_head.pos.is_verbal()
                    && pronoun_head.pos.is_verbal()
                    && candidate_head.lemma_lower() == pronoun_head.lemma_lower()
                {
                    2
                } else {
                    0
                }
            }
            Self::ImmediateReference => immediate_reference(document, pronoun, root),
            Self::SequentialInstruction => sequential_instruction(document, anaphor, root),
            Self::TermPreference => context.top_terms.contains(&root.lemma) as i32,
            Self::IndefinitenessPenalty => {
                let indefinite = document
                    .span_tokens(span)
                    .iter()
                    .any(|t| t.dep == Dep::Determiner && INDEFINITE_ARTICLES.contains(&t.text));
                -(indefinite as i32)
            }
            Self::PrepositionalNpPenalty => -((root.dep == Dep::PrepositionalObject) as i32),
            Self::ReferentialDistance => {
                let distance = anaphor.sentence as isize - document.sentence_index_of(root.index) as isize;
                match distance {
                    0 => 2,
                    1 => 1,
                    2 => 0,
                    _ => -1,
                }
            }
            Self::BoostPronoun => 0,
            Self::SyntacticParallelism => (pronoun.dep == root.dep) as i32,
            Self::FrequentCandidate => match context.frequencies.count(&root.lemma) {
                count if count >= 5 => 2,
                count if count >= 2 => 1,
                _ => 0,
            },
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// "Press the button and release it": both verbs coordinated in one sentence.
fn immediate_reference(document: &Document, pronoun: &Token, root: &Token) -> i32 {
    if document.sentence_index_of(pronoun.index) != document.sentence_index_of(root.index) {
        return 0;
    }
    let candidate_verb = document.head_of(root);
    let pronoun_verb = document.head_of(pronoun);
    if candidate_verb.pos != Pos::Verb || pronoun_verb.pos != Pos::Verb {
        return 0;
    }
    let coordinated = candidate_verb.children.iter().any(|&child| {
        let child = document.token(child);
        child.dep == Dep::Coordination && IMMEDIATE_REFERENCE_CONJUNCTIONS.contains(&child.text)
    });
    if coordinated && candidate_verb.conjuncts.contains(&pronoun_verb.index) {
        2
    } else {
        0
    }
}

/// "To install the driver, download it": the candidate's sentence opens with
/// an infinitive and precedes the pronoun by at most two sentences.
fn sequential_instruction(document: &Document, anaphor: &Anaphor, root: &Token) -> i32 {
    let sentence = document.sentence_of(root.index);
    if sentence.index >= anaphor.sentence {
        return 0;
    }
    let tokens = document.sentence_tokens(sentence);
    let opens_with_infinitive = tokens.len() >= 2
        && tokens[0].lower() == "to"
        && tokens[1].pos == Pos::Verb;
    if !opens_with_infinitive {
        return 0;
    }
    if document.head_of(anaphor.token_of(document)).pos != Pos::Verb {
        return 0;
    }
    if anaphor.sentence - sentence.index > 2 {
        return 0;
    }
    2
}

/// Indicator values of one candidate, in [`Indicator::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreVector([i32; Indicator::COUNT]);

impl ScoreVector {
    pub fn get(&self, indicator: Indicator) -> i32 {
        self.0[indicator as usize]
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Indicator, i32)> + '_ {
        Indicator::ALL.iter().map(move |&indicator| (indicator, self.get(indicator)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub vector: ScoreVector,
    pub total: i32,
}

impl ScoredCandidate {
    pub fn span(&self) -> &Span {
        &self.candidate.span
    }
}

/// Evaluate every indicator for one candidate.
pub fn score(context: &ScoringContext<'_>, anaphor: &Anaphor, candidate: &Candidate) -> ScoredCandidate {
    let mut values = [0; Indicator::COUNT];
    for (slot, indicator) in values.iter_mut().zip(Indicator::ALL) {
        *slot = indicator.evaluate(context, anaphor, &candidate.span);
    }
    let vector = ScoreVector(values);
    ScoredCandidate {
        candidate: *candidate,
        vector,
        total: vector.total(),
    }
}
