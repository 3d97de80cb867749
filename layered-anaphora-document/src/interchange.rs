//! Serialized form of an annotated document.
//!
//! External annotators hand documents over in this shape, as RON or JSON:
//!
//! ```text
//! (
//!     text: "Dogs bark.",
//!     tokens: [
//!         (text: "Dogs", lemma: "dog", pos: "NOUN", dep: "nsubj", head: 1, morph: "Number=Plur"),
//!         (text: "bark", lemma: "bark", pos: "VERB", dep: "ROOT", head: 1, space_after: false),
//!         (text: ".", lemma: ".", pos: "PUNCT", dep: "punct", head: 1),
//!     ],
//!     sentences: [(0, 3)],
//!     noun_chunks: [(0, 1)],
//! )
//! ```
//!
//! Heads are global token indices. Chunk roots are derived from the heads.

use serde::{Deserialize, Serialize};

use crate::builder::{assemble, TokenRecord};
use crate::{AnnotationError, AnnotationResult, Dep, Document, Morphology, Pos};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub dep: Dep,
    pub head: usize,
    #[serde(default)]
    pub morph: Morphology,
    #[serde(default = "default_space_after")]
    pub space_after: bool,
}

fn default_space_after() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedText {
    pub text: String,
    pub tokens: Vec<AnnotatedToken>,
    pub sentences: Vec<(usize, usize)>,
    #[serde(default)]
    pub noun_chunks: Vec<(usize, usize)>,
}

impl AnnotatedText {
    pub fn from_ron(source: &str) -> AnnotationResult<Self> {
        ron::from_str(source).map_err(|e| AnnotationError::Decode(e.to_string()))
    }

    pub fn from_json(source: &str) -> AnnotationResult<Self> {
        serde_json::from_str(source).map_err(|e| AnnotationError::Decode(e.to_string()))
    }

    pub fn to_ron(&self) -> AnnotationResult<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| AnnotationError::Decode(e.to_string()))
    }

    /// Validate and convert into a [`Document`].
    pub fn into_document(self) -> AnnotationResult<Document> {
        let records = self
            .tokens
            .into_iter()
            .map(|token| TokenRecord {
                text: token.text,
                lemma: token.lemma,
                pos: token.pos,
                dep: token.dep,
                head: token.head,
                morph: token.morph,
                space_after: token.space_after,
            })
            .collect();
        let chunks: Vec<(usize, usize, Option<usize>)> = self
            .noun_chunks
            .iter()
            .map(|&(start, end)| (start, end, None))
            .collect();
        assemble(Some(self.text), records, &self.sentences, &chunks)
    }
}

impl From<&Document> for AnnotatedText {
    fn from(document: &Document) -> Self {
        Self {
            text: document.text().to_string(),
            tokens: document
                .tokens()
                .iter()
                .map(|token| AnnotatedToken {
                    text: token.text.clone(),
                    lemma: token.lemma.clone(),
                    pos: token.pos,
                    dep: token.dep.clone(),
                    head: token.head,
                    morph: token.morph.clone(),
                    space_after: token.space_after,
                })
                .collect(),
            sentences: document
                .sentences()
                .iter()
                .map(|sentence| (sentence.start, sentence.end))
                .collect(),
            noun_chunks: document
                .noun_chunks()
                .iter()
                .map(|chunk| (chunk.start, chunk.end))
                .collect(),
        }
    }
}
