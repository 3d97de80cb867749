//! The resolution pipeline.
//!
//! A run indexes noun-chunk frequencies, detects anaphors, and then resolves
//! every anaphor independently: generate candidates, score them, select one.
//! Nothing learned about one anaphor affects another, so the per-anaphor
//! phase may run on a worker pool without changing the result.

use std::fmt;
use std::sync::Arc;

use layered_anaphora_document::{installed, Annotator, Document, Span};
use rayon::prelude::*;

use crate::anaphor::{Anaphor, AnaphorDetector};
use crate::candidate::CandidateGenerator;
use crate::config::ResolverConfig;
use crate::frequency::FrequencyTable;
use crate::indicator::{score, ScoringContext};
use crate::pleonastic::PleonasticFilter;
use crate::selector::select;
use crate::substitute::substitute;
use crate::trace::CandidateTrace;
use crate::{Error, Result};

/// The outcome for one anaphor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnaphor {
    pub anaphor: Anaphor,
    /// Surface text of the pronoun.
    pub pronoun: String,
    pub antecedent: Option<Span>,
    /// Surface text of the antecedent.
    pub antecedent_text: Option<String>,
    /// Indicator breakdown per candidate, in candidate order. Empty unless
    /// diagnostics are enabled.
    pub traces: Vec<CandidateTrace>,
}

/// Anaphors of a document with their antecedents, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    entries: Vec<ResolvedAnaphor>,
}

impl Resolution {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedAnaphor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for the pronoun at token `token`.
    pub fn get(&self, token: usize) -> Option<&ResolvedAnaphor> {
        self.entries.iter().find(|entry| entry.anaphor.token == token)
    }

    /// Whether the token at `token` was detected as an anaphor at all.
    pub fn contains(&self, token: usize) -> bool {
        self.get(token).is_some()
    }

    pub fn antecedent_of(&self, token: usize) -> Option<Span> {
        self.get(token).and_then(|entry| entry.antecedent)
    }

    pub fn traces(&self, token: usize) -> &[CandidateTrace] {
        match self.get(token) {
            Some(entry) => &entry.traces,
            None => &[],
        }
    }

    pub fn anaphors(&self) -> impl Iterator<Item = Anaphor> + '_ {
        self.entries.iter().map(|entry| entry.anaphor)
    }
}

impl<'a> IntoIterator for &'a Resolution {
    type Item = &'a ResolvedAnaphor;
    type IntoIter = std::slice::Iter<'a, ResolvedAnaphor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}@{} -> ", entry.pronoun, entry.anaphor.token)?;
            match (&entry.antecedent, &entry.antecedent_text) {
                (Some(span), Some(text)) => write!(f, "{:?} [{}, {})", text, span.start, span.end)?,
                _ => write!(f, "<none>")?,
            }
        }
        Ok(())
    }
}

enum Execution {
    Sequential,
    /// rayon's global pool
    Global,
    Pool(rayon::ThreadPool),
}

/// A configured pipeline, reusable across documents.
pub struct Pipeline {
    config: ResolverConfig,
    detector: AnaphorDetector,
    generator: CandidateGenerator,
    execution: Execution,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("config", &self.config).finish()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::unpooled(ResolverConfig::default())
    }
}

impl Pipeline {
    /// Build a pipeline, starting a dedicated worker pool when the config
    /// asks for a parallel run with a fixed number of threads.
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let mut pipeline = Self::unpooled(config);
        if let (true, Some(threads)) = (pipeline.config.parallel, pipeline.config.worker_threads) {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|index| format!("anaphora-{index}"))
                .build()?;
            pipeline.execution = Execution::Pool(pool);
        }
        Ok(pipeline)
    }

    fn unpooled(config: ResolverConfig) -> Self {
        let detector =
            AnaphorDetector::new(PleonasticFilter::new().with_lookahead(config.idiom_lookahead));
        let generator = CandidateGenerator::new(config.window_sentences);
        let execution = if config.parallel {
            Execution::Global
        } else {
            Execution::Sequential
        };
        Self {
            config,
            detector,
            generator,
            execution,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn run(&self, document: &Document) -> Resolution {
        let span = tracing::info_span!(
            "resolve",
            tokens = document.len(),
            sentences = document.sentences().len()
        );
        let _enter = span.enter();

        let frequencies = FrequencyTable::index(document);
        let top_terms = frequencies.top_terms(self.config.top_terms);
        tracing::debug!(
            chunks = document.noun_chunks().len(),
            lemmas = frequencies.len(),
            "indexed noun chunks"
        );

        let anaphors = self.detector.detect(document);
        tracing::debug!(anaphors = anaphors.len(), "detected anaphors");

        let context = ScoringContext {
            document,
            frequencies: &frequencies,
            top_terms: &top_terms,
        };
        let entries: Vec<ResolvedAnaphor> = match &self.execution {
            Execution::Sequential => anaphors
                .iter()
                .map(|anaphor| self.resolve_anaphor(&context, anaphor))
                .collect(),
            Execution::Global => self.resolve_parallel(&context, &anaphors),
            Execution::Pool(pool) => pool.install(|| self.resolve_parallel(&context, &anaphors)),
        };
        Resolution { entries }
    }

    fn resolve_parallel(&self, context: &ScoringContext<'_>, anaphors: &[Anaphor]) -> Vec<ResolvedAnaphor> {
        // indexed collect keeps detection order
        anaphors
            .par_iter()
            .map(|anaphor| self.resolve_anaphor(context, anaphor))
            .collect()
    }

    fn resolve_anaphor(&self, context: &ScoringContext<'_>, anaphor: &Anaphor) -> ResolvedAnaphor {
        let document = context.document;
        let scored: Vec<_> = self
            .generator
            .generate(document, anaphor)
            .iter()
            .map(|candidate| score(context, anaphor, candidate))
            .collect();

        let traces = if self.config.diagnostics {
            scored
                .iter()
                .map(|candidate| {
                    let trace = CandidateTrace::new(document, candidate);
                    tracing::debug!(anaphor = anaphor.token, "{}", trace);
                    trace
                })
                .collect()
        } else {
            Vec::new()
        };

        let antecedent = select(document, &scored);
        let antecedent_text = antecedent.as_ref().map(|span| document.span_text(span));
        let pronoun = anaphor.token_of(document).text.clone();
        match &antecedent_text {
            Some(text) => tracing::debug!(anaphor = anaphor.token, %pronoun, antecedent = %text, "resolved"),
            None => tracing::debug!(anaphor = anaphor.token, %pronoun, "no antecedent"),
        }

        ResolvedAnaphor {
            anaphor: *anaphor,
            pronoun,
            antecedent,
            antecedent_text,
            traces,
        }
    }
}

/// Resolve an already annotated document.
///
/// A parallel config runs on rayon's global pool here; `worker_threads` only
/// takes effect through [`Pipeline::new`].
pub fn resolve_document(document: &Document, config: &ResolverConfig) -> Resolution {
    Pipeline::unpooled(config.clone()).run(document)
}

/// An annotated document together with its resolution.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub document: Document,
    pub resolution: Resolution,
}

impl Analysis {
    /// The text with every resolved pronoun replaced by its antecedent.
    pub fn substituted(&self) -> String {
        substitute(&self.document, &self.resolution)
    }

    pub fn display(&self) -> crate::ResolutionDisplay<'_> {
        crate::ResolutionDisplay::new(&self.document, &self.resolution)
    }
}

/// Annotates text and resolves its pronouns.
///
/// ```
/// use layered_anaphora::{AnaphoraResolver, DocumentBuilder, FixtureAnnotator};
///
/// // "The cat ate . It slept ."
/// let doc = DocumentBuilder::new()
///     .token("The", "the", "DET", "det", 1)
///     .token("cat", "cat", "NOUN", "nsubj", 2).morph("Number=Sing")
///     .token("ate", "eat", "VERB", "ROOT", 2)
///     .token(".", ".", "PUNCT", "punct", 2)
///     .end_sentence()
///     .token("It", "it", "PRON", "nsubj", 5).morph("Number=Sing")
///     .token("slept", "sleep", "VERB", "ROOT", 5)
///     .token(".", ".", "PUNCT", "punct", 5)
///     .chunk(0, 2)
///     .chunk(4, 5)
///     .build()
///     .unwrap();
/// let text = doc.text().to_string();
///
/// let resolver = AnaphoraResolver::new(FixtureAnnotator::new().with_document(doc));
/// assert_eq!(resolver.replace(&text).unwrap(), "The cat ate. The cat slept.");
/// ```
#[derive(Debug)]
pub struct AnaphoraResolver<A> {
    annotator: A,
    pipeline: Pipeline,
}

impl<A: Annotator> AnaphoraResolver<A> {
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            pipeline: Pipeline::default(),
        }
    }

    pub fn with_config(annotator: A, config: ResolverConfig) -> Result<Self> {
        Ok(Self {
            annotator,
            pipeline: Pipeline::new(config)?,
        })
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    pub fn config(&self) -> &ResolverConfig {
        self.pipeline.config()
    }

    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let document = self.annotator.annotate(text)?;
        let resolution = self.pipeline.run(&document);
        Ok(Analysis { document, resolution })
    }

    pub fn resolve(&self, text: &str) -> Result<Resolution> {
        Ok(self.analyze(text)?.resolution)
    }

    /// The text with every resolved pronoun replaced by its antecedent.
    pub fn replace(&self, text: &str) -> Result<String> {
        Ok(self.analyze(text)?.substituted())
    }
}

impl AnaphoraResolver<Arc<dyn Annotator>> {
    /// A resolver over the process-wide engine; see
    /// [`install`](layered_anaphora_document::install).
    pub fn from_installed(config: ResolverConfig) -> Result<Self> {
        let engine = installed().ok_or(Error::AnnotatorUnavailable)?;
        tracing::debug!(engine = engine.name(), "using installed annotation engine");
        Self::with_config(engine, config)
    }
}
