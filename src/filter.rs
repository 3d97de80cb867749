//! Hard constraints a candidate must satisfy before it is scored.

use layered_anaphora_document::{Document, Span, Token};

/// Number agreement between a pronoun and a candidate's root.
///
/// Both sides need a known grammatical number; an unknown number on either
/// side rejects. Otherwise the number sets must be equal.
pub fn agrees(anaphor: &Token, root: &Token) -> bool {
    match (anaphor.morph.number(), root.morph.number()) {
        (Some(anaphor), Some(root)) => anaphor == root,
        _ => false,
    }
}

/// Binding constraints between a pronoun and a candidate span.
///
/// A pronoun does not corefer with a co-argument of its own head, nor with a
/// constituent that contains it.
pub fn permits(document: &Document, anaphor: &Token, span: &Span) -> bool {
    let root = document.token(span.root);
    root.head != anaphor.head && !span.contains(anaphor.index)
}

/// Both filters, with the rejection reason logged at `trace`.
pub(crate) fn admits(document: &Document, anaphor: &Token, span: &Span) -> bool {
    if !agrees(anaphor, document.token(span.root)) {
        tracing::trace!(anaphor = anaphor.index, start = span.start, end = span.end, "number disagreement");
        return false;
    }
    if !permits(document, anaphor, span) {
        tracing::trace!(anaphor = anaphor.index, start = span.start, end = span.end, "syntactically excluded");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_anaphora_document::DocumentBuilder;

    fn sample() -> Document {
        // "Dogs chase it ."
        DocumentBuilder::new()
            .token("Dogs", "dog", "NOUN", "nsubj", 1)
            .morph("Number=Plur")
            .token("chase", "chase", "VERB", "ROOT", 1)
            .token("it", "it", "PRON", "dobj", 1)
            .morph("Number=Sing")
            .token(".", ".", "PUNCT", "punct", 1)
            .chunk(0, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn number_must_match() {
        let doc = sample();
        assert!(!agrees(doc.token(2), doc.token(0)));
        assert!(agrees(doc.token(2), doc.token(2)));
        // "chase" has no number
        assert!(!agrees(doc.token(2), doc.token(1)));
    }

    #[test]
    fn co_arguments_are_excluded() {
        let doc = sample();
        assert!(!permits(&doc, doc.token(2), &doc.noun_chunks()[0]));
    }

    #[test]
    fn containing_span_is_excluded() {
        let doc = sample();
        let everything = doc.span(0, 4).unwrap();
        assert!(!permits(&doc, doc.token(2), &everything));
    }
}
