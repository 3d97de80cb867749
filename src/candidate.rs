use layered_anaphora_document::{Document, Pos, Span};

use crate::anaphor::Anaphor;
use crate::decompose::sub_spans;
use crate::filter::admits;

/// Number of sentences before the anaphor's own that are searched.
pub const DEFAULT_WINDOW: usize = 2;

/// Where a candidate span came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateOrigin {
    /// A noun chunk reported by the annotator.
    Chunk,
    /// A sub-span of the given chunk.
    SubSpan { chunk: Span },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub span: Span,
    pub origin: CandidateOrigin,
}

impl Candidate {
    pub fn chunk(span: Span) -> Self {
        Self {
            span,
            origin: CandidateOrigin::Chunk,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    window: usize,
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl CandidateGenerator {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Candidate antecedents for `anaphor`, in document order.
    ///
    /// Each chunk in the window is followed by its admitted sub-spans. A
    /// chunk rejected by the filters still contributes its sub-spans, but a
    /// pronoun-rooted chunk or one covering the anaphor contributes nothing.
    pub fn generate(&self, document: &Document, anaphor: &Anaphor) -> Vec<Candidate> {
        let pronoun = anaphor.token_of(document);
        let first = anaphor.sentence.saturating_sub(self.window);

        let mut candidates = Vec::new();
        for sentence in first..=anaphor.sentence {
            for chunk in document.chunks_in_sentence(sentence) {
                if document.token(chunk.root).pos == Pos::Pronoun {
                    continue;
                }
                if chunk.contains(anaphor.token) {
                    continue;
                }
                if admits(document, pronoun, chunk) {
                    candidates.push(Candidate::chunk(*chunk));
                }
                for span in sub_spans(document, chunk) {
                    if admits(document, pronoun, &span) {
                        candidates.push(Candidate {
                            span,
                            origin: CandidateOrigin::SubSpan { chunk: *chunk },
                        });
                    }
                }
            }
        }
        tracing::debug!(anaphor = anaphor.token, candidates = candidates.len(), "generated candidates");
        candidates
    }
}
