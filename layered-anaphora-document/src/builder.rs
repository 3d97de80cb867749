//! Assembling and validating documents.
//!
//! Annotators (and tests) describe a document as flat token records with
//! global head indices plus sentence and chunk ranges. [`DocumentBuilder`]
//! derives children and conjuncts from the heads and checks the structural
//! invariants the pipeline relies on, so nothing downstream re-validates.

use crate::{AnnotationError, AnnotationResult, Dep, Document, Morphology, Pos, Sentence, Span, Token};

/// A token as described by an annotator, before structure is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub dep: Dep,
    pub head: usize,
    pub morph: Morphology,
    pub space_after: bool,
}

/// Incremental document construction.
///
/// ```
/// use layered_anaphora_document::DocumentBuilder;
///
/// let doc = DocumentBuilder::new()
///     .token("Dogs", "dog", "NOUN", "nsubj", 1).morph("Number=Plur")
///     .token("bark", "bark", "VERB", "ROOT", 1).no_space()
///     .token(".", ".", "PUNCT", "punct", 1)
///     .end_sentence()
///     .chunk(0, 1)
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.text(), "Dogs bark.");
/// assert_eq!(doc.token(1).children, vec![0, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    text: Option<String>,
    tokens: Vec<TokenRecord>,
    sentences: Vec<(usize, usize)>,
    sentence_start: usize,
    chunks: Vec<(usize, usize, Option<usize>)>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source text. Without it the text is rebuilt from the tokens.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a token. `head` is a global token index.
    pub fn token(mut self, text: &str, lemma: &str, pos: &str, dep: &str, head: usize) -> Self {
        self.tokens.push(TokenRecord {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: Pos::from_upos(pos),
            dep: Dep::parse(dep),
            head,
            morph: Morphology::new(),
            space_after: true,
        });
        self
    }

    /// Set the FEATS of the most recently added token.
    pub fn morph(mut self, feats: &str) -> Self {
        if let Some(last) = self.tokens.last_mut() {
            last.morph = Morphology::parse(feats);
        }
        self
    }

    /// Mark the most recently added token as not followed by whitespace.
    pub fn no_space(mut self) -> Self {
        if let Some(last) = self.tokens.last_mut() {
            last.space_after = false;
        }
        self
    }

    /// Close the current sentence at the last added token.
    pub fn end_sentence(mut self) -> Self {
        let end = self.tokens.len();
        if end > self.sentence_start {
            self.sentences.push((self.sentence_start, end));
            self.sentence_start = end;
        }
        self
    }

    /// Declare a sentence range directly.
    pub fn sentence(mut self, start: usize, end: usize) -> Self {
        self.sentences.push((start, end));
        self.sentence_start = end;
        self
    }

    /// Declare a noun chunk `[start, end)`; its root is computed from the heads.
    pub fn chunk(mut self, start: usize, end: usize) -> Self {
        self.chunks.push((start, end, None));
        self
    }

    /// Declare a noun chunk with the root the annotator reported.
    pub fn chunk_with_root(mut self, start: usize, end: usize, root: usize) -> Self {
        self.chunks.push((start, end, Some(root)));
        self
    }

    pub fn build(mut self) -> AnnotationResult<Document> {
        if self.sentence_start < self.tokens.len() {
            self = self.end_sentence();
        }
        assemble(self.text, self.tokens, &self.sentences, &self.chunks)
    }
}

pub(crate) fn assemble(
    text: Option<String>,
    records: Vec<TokenRecord>,
    sentence_ranges: &[(usize, usize)],
    chunk_ranges: &[(usize, usize, Option<usize>)],
) -> AnnotationResult<Document> {
    let len = records.len();

    let mut sentences = Vec::with_capacity(sentence_ranges.len());
    let mut token_sentence = vec![0; len];
    let mut expected = 0;
    for (index, &(start, end)) in sentence_ranges.iter().enumerate() {
        if start != expected || end <= start || end > len {
            return Err(AnnotationError::SentenceGap { expected, start, end });
        }
        for slot in &mut token_sentence[start..end] {
            *slot = index;
        }
        sentences.push(Sentence { index, start, end });
        expected = end;
    }
    if expected != len {
        return Err(AnnotationError::UncoveredTokens { covered: expected, len });
    }

    for (index, record) in records.iter().enumerate() {
        if record.head >= len {
            return Err(AnnotationError::HeadOutOfRange {
                token: index,
                head: record.head,
                len,
            });
        }
        let sentence = sentences[token_sentence[index]];
        if !sentence.contains(record.head) {
            return Err(AnnotationError::HeadCrossesSentence {
                token: index,
                head: record.head,
                start: sentence.start,
                end: sentence.end,
            });
        }
    }

    let mut depth = vec![0; len];
    for (index, slot) in depth.iter_mut().enumerate() {
        let limit = sentences[token_sentence[index]].len();
        let mut current = index;
        let mut hops = 0;
        while records[current].head != current {
            current = records[current].head;
            hops += 1;
            if hops > limit {
                return Err(AnnotationError::HeadCycle { token: index });
            }
        }
        *slot = hops;
    }

    let mut children = vec![Vec::new(); len];
    for (index, record) in records.iter().enumerate() {
        if record.head != index {
            children[record.head].push(index);
        }
    }

    let conjuncts = coordination_groups(&records, &children);

    let text = text.unwrap_or_else(|| rebuild_text(&records));
    let tokens: Vec<Token> = records
        .into_iter()
        .zip(children)
        .zip(conjuncts)
        .enumerate()
        .map(|(index, ((record, children), conjuncts))| Token {
            index,
            text: record.text,
            lemma: record.lemma,
            pos: record.pos,
            dep: record.dep,
            head: record.head,
            children,
            conjuncts,
            morph: record.morph,
            space_after: record.space_after,
        })
        .collect();

    let mut document = Document {
        text,
        tokens,
        sentences,
        noun_chunks: Vec::new(),
        token_sentence,
        depth,
    };

    let mut noun_chunks = Vec::with_capacity(chunk_ranges.len());
    for &(start, end, root) in chunk_ranges {
        if start >= end || end > len || document.token_sentence[start] != document.token_sentence[end - 1] {
            return Err(AnnotationError::InvalidChunk { start, end });
        }
        let span = match root {
            Some(root) if (start..end).contains(&root) => Span { start, end, root },
            Some(_) => return Err(AnnotationError::InvalidChunk { start, end }),
            None => document
                .span(start, end)
                .ok_or(AnnotationError::InvalidChunk { start, end })?,
        };
        noun_chunks.push(span);
    }
    noun_chunks.sort_by_key(|chunk| (chunk.start, chunk.end));
    document.noun_chunks = noun_chunks;

    Ok(document)
}

/// Conjuncts of every token: the members of its `conj` group, excluding itself.
///
/// A group is a token that is not itself a `conj` plus everything reachable
/// from it through `conj` children.
fn coordination_groups(records: &[TokenRecord], children: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut conjuncts = vec![Vec::new(); records.len()];
    for (index, record) in records.iter().enumerate() {
        if record.dep == Dep::Conjunct && record.head != index {
            continue;
        }
        let mut group = vec![index];
        let mut cursor = 0;
        while cursor < group.len() {
            let member = group[cursor];
            for &child in &children[member] {
                if records[child].dep == Dep::Conjunct {
                    group.push(child);
                }
            }
            cursor += 1;
        }
        if group.len() < 2 {
            continue;
        }
        group.sort_unstable();
        for &member in &group {
            conjuncts[member] = group.iter().copied().filter(|&other| other != member).collect();
        }
    }
    conjuncts
}

fn rebuild_text(records: &[TokenRecord]) -> String {
    let mut text = String::new();
    for (index, record) in records.iter().enumerate() {
        text.push_str(&record.text);
        if record.space_after && index + 1 < records.len() {
            text.push(' ');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinated() -> DocumentBuilder {
        // "Open the file and read it ."
        DocumentBuilder::new()
            .token("Open", "open", "VERB", "ROOT", 0)
            .token("the", "the", "DET", "det", 2)
            .token("file", "file", "NOUN", "dobj", 0)
            .token("and", "and", "CCONJ", "cc", 0)
            .token("read", "read", "VERB", "conj", 0)
            .token("it", "it", "PRON", "dobj", 4)
            .token(".", ".", "PUNCT", "punct", 0)
    }

    #[test]
    fn derives_children_and_conjuncts() {
        let doc = coordinated().build().unwrap();
        assert_eq!(doc.token(0).children, vec![2, 3, 4, 6]);
        assert_eq!(doc.token(0).conjuncts, vec![4]);
        assert_eq!(doc.token(4).conjuncts, vec![0]);
        assert!(doc.token(2).conjuncts.is_empty());
        assert_eq!(doc.sentences().len(), 1);
    }

    #[test]
    fn conjunct_chains_are_transitive() {
        // "wash , dry and fold"
        let doc = DocumentBuilder::new()
            .token("wash", "wash", "VERB", "ROOT", 0)
            .token(",", ",", "PUNCT", "punct", 0)
            .token("dry", "dry", "VERB", "conj", 0)
            .token("and", "and", "CCONJ", "cc", 2)
            .token("fold", "fold", "VERB", "conj", 2)
            .build()
            .unwrap();
        assert_eq!(doc.token(0).conjuncts, vec![2, 4]);
        assert_eq!(doc.token(4).conjuncts, vec![0, 2]);
    }

    #[test]
    fn rejects_heads_outside_the_sentence() {
        let err = DocumentBuilder::new()
            .token("Go", "go", "VERB", "ROOT", 0)
            .end_sentence()
            .token("now", "now", "ADV", "advmod", 0)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnnotationError::HeadCrossesSentence { token: 1, head: 0, .. }));
    }

    #[test]
    fn rejects_head_cycles() {
        let err = DocumentBuilder::new()
            .token("a", "a", "X", "dep", 1)
            .token("b", "b", "X", "dep", 0)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnnotationError::HeadCycle { token: 0 }));
    }

    #[test]
    fn rejects_chunks_across_sentences() {
        let err = coordinated()
            .sentence(0, 3)
            .sentence(3, 7)
            .chunk(2, 4)
            .build();
        // heads of tokens 3..7 point into the first sentence
        assert!(err.is_err());

        let err = DocumentBuilder::new()
            .token("Hi", "hi", "INTJ", "ROOT", 0)
            .end_sentence()
            .token("Bye", "bye", "INTJ", "ROOT", 1)
            .end_sentence()
            .chunk(0, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnnotationError::InvalidChunk { start: 0, end: 2 }));
    }

    #[test]
    fn reported_chunk_roots_must_lie_inside_the_chunk() {
        let doc = coordinated().chunk_with_root(1, 3, 2).build().unwrap();
        assert_eq!(doc.noun_chunks()[0].root, 2);
        assert_eq!(doc.noun_chunks()[0], doc.span(1, 3).unwrap());

        let err = coordinated().chunk_with_root(1, 3, 0).build().unwrap_err();
        assert!(matches!(err, AnnotationError::InvalidChunk { start: 1, end: 3 }));
    }

    #[test]
    fn rejects_sentence_gaps() {
        let err = DocumentBuilder::new()
            .token("Hi", "hi", "INTJ", "ROOT", 0)
            .token("there", "there", "ADV", "advmod", 0)
            .sentence(1, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnnotationError::SentenceGap { expected: 0, start: 1, end: 2 }));
    }
}
