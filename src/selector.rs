use layered_anaphora_document::{Document, Pos, Span};

use crate::indicator::ScoredCandidate;

/// A nominal root and nothing but adjectives, nouns and determiners.
pub fn is_well_formed(document: &Document, span: &Span) -> bool {
    matches!(document.token(span.root).pos, Pos::Noun | Pos::ProperNoun)
        && document
            .span_tokens(span)
            .iter()
            .all(|t| t.pos.is_nominal_modifier() || t.pos == Pos::Determiner)
}

/// Pick the antecedent among scored candidates.
///
/// Highest total first. Among the tied, well-formed noun phrases are
/// preferred when there are any; the earliest start wins what remains, and
/// on equal starts the candidate generated first.
pub fn select(document: &Document, scored: &[ScoredCandidate]) -> Option<Span> {
    let best = scored.iter().map(|c| c.total).max()?;
    let top: Vec<&ScoredCandidate> = scored.iter().filter(|c| c.total == best).collect();

    let well_formed: Vec<&ScoredCandidate> = top
        .iter()
        .copied()
        .filter(|c| is_well_formed(document, c.span()))
        .collect();
    let pool = if well_formed.is_empty() { top } else { well_formed };

    // min_by_key keeps the first of equal keys
    pool.into_iter().min_by_key(|c| c.span().start).map(|c| *c.span())
}
