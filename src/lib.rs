//! Rule-based pronoun resolution.
//!
//! Resolves third-person pronouns to antecedent noun phrases with Mitkov's
//! knowledge-poor approach: a handful of hard filters followed by fourteen
//! unit-weighted antecedent indicators. Every decision is a plain integer
//! sum, so any resolution can be explained indicator by indicator.
//!
//! ## Pipeline
//!
//! 1. [`FrequencyTable`] - head-lemma frequencies over the document's noun chunks
//! 2. [`AnaphorDetector`] - referential pronouns, skipping pleonastic "it" ([`PleonasticFilter`])
//! 3. [`CandidateGenerator`] - noun chunks and their [`sub_spans`] in a sentence window,
//!    subject to [`agrees`] and [`permits`]
//! 4. [`score`] - one [`ScoreVector`] per candidate, see [`Indicator`]
//! 5. [`select`] - highest total, well-formed noun phrases first, earliest start
//!
//! [`Pipeline`] runs these over an annotated [`Document`];
//! [`AnaphoraResolver`] adds the [`Annotator`] in front and [`substitute`]
//! behind.
//!
//! ## Example
//!
//! ```
//! use layered_anaphora::{resolve_document, DocumentBuilder, ResolverConfig};
//!
//! // "The printer jammed . It beeped ."
//! let doc = DocumentBuilder::new()
//!     .token("The", "the", "DET", "det", 1)
//!     .token("printer", "printer", "NOUN", "nsubj", 2).morph("Number=Sing")
//!     .token("jammed", "jam", "VERB", "ROOT", 2)
//!     .token(".", ".", "PUNCT", "punct", 2)
//!     .end_sentence()
//!     .token("It", "it", "PRON", "nsubj", 5).morph("Number=Sing")
//!     .token("beeped", "beep", "VERB", "ROOT", 5)
//!     .token(".", ".", "PUNCT", "punct", 5)
//!     .chunk(0, 2)
//!     .chunk(4, 5)
//!     .build()
//!     .unwrap();
//!
//! let resolution = resolve_document(&doc, &ResolverConfig::default());
//! let antecedent = resolution.antecedent_of(4).unwrap();
//! assert_eq!(doc.span_text(&antecedent), "The printer");
//! ```

mod anaphor;
mod candidate;
mod config;
mod decompose;
mod display;
mod error;
mod filter;
mod frequency;
mod indicator;
mod lexicon;
mod pleonastic;
mod resolver;
mod selector;
mod substitute;
mod trace;

pub use anaphor::{Anaphor, AnaphorDetector};
pub use candidate::{Candidate, CandidateGenerator, CandidateOrigin, DEFAULT_WINDOW};
pub use config::ResolverConfig;
pub use decompose::sub_spans;
pub use display::ResolutionDisplay;
pub use error::{Error, Result};
pub use filter::{agrees, permits};
pub use frequency::{FrequencyTable, FrequencyTableBuilder, TopTerms, DEFAULT_TOP_TERMS};
pub use indicator::{score, Indicator, ScoreVector, ScoredCandidate, ScoringContext};
pub use lexicon::{Vocabulary, PLEONASTIC_IDIOMS, THIRD_PERSON_PRONOUNS};
pub use pleonastic::{PleonasticFilter, PleonasticRule, DEFAULT_LOOKAHEAD};
pub use resolver::{resolve_document, Analysis, AnaphoraResolver, Pipeline, ResolvedAnaphor, Resolution};
pub use selector::{is_well_formed, select};
pub use substitute::substitute;
pub use trace::CandidateTrace;

pub use layered_anaphora_document::{
    install, installed, shutdown, AnnotatedText, AnnotationError, Annotator, Dep, Document,
    DocumentBuilder, FixtureAnnotator, Morphology, Number, Pos, Sentence, Span, Token,
};
