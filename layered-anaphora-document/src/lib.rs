//! Annotated document model for layered-anaphora.
//!
//! The resolution pipeline never tokenizes, tags or parses text itself. It
//! consumes a [`Document`] produced by an [`Annotator`]: globally indexed
//! tokens with lemma, part of speech, dependency head and label, and
//! morphology, grouped into sentences, plus the document's noun chunks.
//!
//! ## Core Types
//!
//! - [`Document`] / [`Sentence`] / [`Token`] / [`Span`] - the immutable model
//! - [`Pos`] / [`Dep`] - closed tag enumerations
//! - [`Morphology`] / [`Number`] - UD feature maps
//! - [`DocumentBuilder`] - validated construction (and hand-built test documents)
//! - [`AnnotatedText`] - RON/JSON interchange for external annotators
//! - [`Annotator`] / [`FixtureAnnotator`] - the annotation boundary
//!
//! ## Example
//!
//! ```
//! use layered_anaphora_document::{Annotator, DocumentBuilder, FixtureAnnotator};
//!
//! let doc = DocumentBuilder::new()
//!     .token("It", "it", "PRON", "nsubj", 1).morph("Number=Sing")
//!     .token("works", "work", "VERB", "ROOT", 1)
//!     .build()
//!     .unwrap();
//!
//! let annotator = FixtureAnnotator::new().with_document(doc);
//! assert_eq!(annotator.annotate("It works").unwrap().sentences().len(), 1);
//! ```

mod annotator;
mod builder;
mod document;
mod error;
mod interchange;
mod morphology;
mod tag;

pub use annotator::{install, installed, shutdown, Annotator, FixtureAnnotator};
pub use builder::{DocumentBuilder, TokenRecord};
pub use document::{Document, Sentence, Span, Token};
pub use error::{AnnotationError, AnnotationResult};
pub use interchange::{AnnotatedText, AnnotatedToken};
pub use morphology::{Morphology, Number};
pub use tag::{Dep, Pos};
