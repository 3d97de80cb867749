//! Error types for resolution.

use layered_anaphora_document::AnnotationError;
use thiserror::Error;

/// Errors that can occur while resolving a text.
///
/// The heuristics themselves never fail: missing morphology, empty
/// candidate lists and ties all have defined outcomes.
#[derive(Debug, Error)]
pub enum Error {
    /// The annotator could not produce a document.
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration: {path}: {message}")]
    Config { path: String, message: String },

    /// The per-anaphor worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// No annotation engine has been installed.
    #[error("no annotation engine installed")]
    AnnotatorUnavailable,
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, Error>;
