//! The annotated document consumed by the resolution pipeline.
//!
//! A [`Document`] is produced once by an annotator and never mutated
//! afterwards. Token indices are global and stable; every range is half-open.

use serde::Serialize;

use crate::{Dep, Morphology, Pos};

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub dep: Dep,
    /// Syntactic head. Equal to `index` at a sentence root.
    pub head: usize,
    pub children: Vec<usize>,
    /// Tokens coordinated with this one (excluding itself), in document order.
    pub conjuncts: Vec<usize>,
    pub morph: Morphology,
    /// Whether the source text has whitespace after this token.
    pub space_after: bool,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn lemma_lower(&self) -> String {
        self.lemma.to_lowercase()
    }

    pub fn is_root(&self) -> bool {
        self.head == self.index
    }
}

/// A contiguous run of tokens forming one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sentence {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    pub fn contains(&self, token: usize) -> bool {
        self.start <= token && token < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A half-open token range `[start, end)` with its syntactic root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub root: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the token at `position` falls inside the span.
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// An annotated document: tokens, sentences and noun chunks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub(crate) text: String,
    pub(crate) tokens: Vec<Token>,
    pub(crate) sentences: Vec<Sentence>,
    pub(crate) noun_chunks: Vec<Span>,
    /// Sentence index of every token.
    #[serde(skip)]
    pub(crate) token_sentence: Vec<usize>,
    /// Number of head hops from every token to its sentence root.
    #[serde(skip)]
    pub(crate) depth: Vec<usize>,
}

impl Document {
    /// The text the document was annotated from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Panics if `index` is out of range; indices handed out by the document
    /// are always valid.
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    pub fn head_of(&self, token: &Token) -> &Token {
        &self.tokens[token.head]
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> &Sentence {
        &self.sentences[index]
    }

    pub fn sentence_index_of(&self, token: usize) -> usize {
        self.token_sentence[token]
    }

    /// The sentence containing the token at `token`.
    pub fn sentence_of(&self, token: usize) -> &Sentence {
        &self.sentences[self.token_sentence[token]]
    }

    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.start..sentence.end]
    }

    pub fn noun_chunks(&self) -> &[Span] {
        &self.noun_chunks
    }

    /// Noun chunks that start inside the given sentence, in document order.
    pub fn chunks_in_sentence(&self, sentence: usize) -> impl Iterator<Item = &Span> + '_ {
        let bounds = self.sentences[sentence];
        self.noun_chunks
            .iter()
            .filter(move |chunk| bounds.contains(chunk.start))
    }

    pub fn span_tokens(&self, span: &Span) -> &[Token] {
        &self.tokens[span.indices()]
    }

    /// Build a span over `[start, end)`, computing its root.
    ///
    /// The root is the token whose head lies outside the span (or which is its
    /// own head), preferring the one closest to the sentence root and then the
    /// leftmost. Returns `None` for empty or out-of-range ranges.
    pub fn span(&self, start: usize, end: usize) -> Option<Span> {
        if start >= end || end > self.tokens.len() {
            return None;
        }
        let root = (start..end)
            .filter(|&i| {
                let head = self.tokens[i].head;
                head == i || head < start || head >= end
            })
            .min_by_key(|&i| (self.depth[i], i))
            .unwrap_or(start);
        Some(Span { start, end, root })
    }

    /// Surface text of a span, honouring the source whitespace between tokens.
    pub fn span_text(&self, span: &Span) -> String {
        let tokens = self.span_tokens(span);
        let mut text = String::new();
        for (offset, token) in tokens.iter().enumerate() {
            text.push_str(&token.text);
            if token.space_after && offset + 1 < tokens.len() {
                text.push(' ');
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use crate::{DocumentBuilder, Pos};

    fn report_sentence() -> crate::Document {
        // "The annual report arrived ."
        DocumentBuilder::new()
            .token("The", "the", "DET", "det", 2)
            .token("annual", "annual", "ADJ", "amod", 2)
            .token("report", "report", "NOUN", "nsubj", 3)
            .token("arrived", "arrive", "VERB", "ROOT", 3)
            .token(".", ".", "PUNCT", "punct", 3)
            .end_sentence()
            .chunk(0, 3)
            .build()
            .unwrap()
    }

    #[test]
    fn span_root_is_the_outward_pointing_token() {
        let doc = report_sentence();
        assert_eq!(doc.noun_chunks()[0].root, 2);
        assert_eq!(doc.span(0, 2).unwrap().root, 1);
        assert_eq!(doc.span(1, 2).unwrap().root, 1);
        assert_eq!(doc.span(0, 5).unwrap().root, 3);
        assert!(doc.span(2, 2).is_none());
        assert!(doc.span(4, 9).is_none());
    }

    #[test]
    fn span_text_joins_on_source_whitespace() {
        let doc = report_sentence();
        assert_eq!(doc.span_text(&doc.noun_chunks()[0]), "The annual report");
        assert_eq!(doc.token(1).pos, Pos::Adjective);
    }

    #[test]
    fn chunks_are_grouped_by_sentence() {
        let doc = report_sentence();
        assert_eq!(doc.chunks_in_sentence(0).count(), 1);
        assert_eq!(doc.sentence_index_of(4), 0);
    }
}
