//! Per-candidate diagnostics.

use std::fmt;

use layered_anaphora_document::{Document, Span};

use crate::indicator::{ScoreVector, ScoredCandidate};

/// The indicator breakdown behind one candidate's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTrace {
    pub text: String,
    pub span: Span,
    pub vector: ScoreVector,
    pub total: i32,
}

impl CandidateTrace {
    pub fn new(document: &Document, scored: &ScoredCandidate) -> Self {
        Self {
            text: document.span_text(scored.span()),
            span: *scored.span(),
            vector: scored.vector,
            total: scored.total,
        }
    }
}

impl fmt::Display for CandidateTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Candidate: {}", self.text)?;
        for (indicator, value) in self.vector.iter() {
            writeln!(f, "  {}: {}", indicator, value)?;
        }
        write!(f, "  Total Score: {}", self.total)
    }
}
