//! Expanding a noun chunk into the shorter phrases it contains.

use layered_anaphora_document::{Document, Span};

/// Every contiguous run over the chunk's adjective and noun tokens.
///
/// The chunk's ADJ/NOUN/PROPN tokens are picked out in order; for each pair
/// `i <= j` of them the sub-span runs from the `i`-th to the `j`-th token
/// inclusive, keeping any tokens that lie in between. Runs are produced with
/// `i` outermost, so "the annual report" yields "annual", "annual report",
/// "report".
pub fn sub_spans(document: &Document, chunk: &Span) -> Vec<Span> {
    let selected: Vec<usize> = document
        .span_tokens(chunk)
        .iter()
        .filter(|token| token.pos.is_nominal_modifier())
        .map(|token| token.index)
        .collect();

    let mut spans = Vec::with_capacity(selected.len() * (selected.len() + 1) / 2);
    for (i, &first) in selected.iter().enumerate() {
        for &last in &selected[i..] {
            if let Some(span) = document.span(first, last + 1) {
                spans.push(span);
            }
        }
    }
    spans
}
