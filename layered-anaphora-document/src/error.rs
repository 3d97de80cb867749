//! Errors raised while producing a [`Document`](crate::Document).

use thiserror::Error;

/// Annotation failed or produced a structure that violates the document model.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// A token's head points outside the document.
    #[error("token {token} has head {head}, but the document only has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    /// A token's head lives in another sentence.
    #[error("token {token} has head {head} outside its sentence [{start}, {end})")]
    HeadCrossesSentence {
        token: usize,
        head: usize,
        start: usize,
        end: usize,
    },

    /// Following heads from this token never reaches a sentence root.
    #[error("token {token} is part of a head cycle")]
    HeadCycle { token: usize },

    /// Sentences must be contiguous and cover every token exactly once.
    #[error("sentences do not cover the document: expected a sentence starting at token {expected}, found [{start}, {end})")]
    SentenceGap {
        expected: usize,
        start: usize,
        end: usize,
    },

    /// Tokens are left over after the last sentence.
    #[error("sentences end at token {covered}, but the document has {len} tokens")]
    UncoveredTokens { covered: usize, len: usize },

    /// A noun chunk is empty, out of range, or spans a sentence boundary.
    #[error("noun chunk [{start}, {end}) is not inside a single sentence")]
    InvalidChunk { start: usize, end: usize },

    /// The fixture annotator has no document for the requested text.
    #[error("no annotation available for text {0:?}")]
    UnknownText(String),

    /// The serialized document could not be decoded.
    #[error("failed to decode annotated document: {0}")]
    Decode(String),

    /// Reading an annotation source failed.
    #[error("failed to read {path}: {message}")]
    Load { path: String, message: String },

    /// The underlying engine reported a failure.
    #[error("annotation engine {engine} failed: {message}")]
    Engine { engine: String, message: String },
}

pub type AnnotationResult<T> = Result<T, AnnotationError>;
