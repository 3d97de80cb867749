//! The annotation boundary.
//!
//! Everything linguistic (tokenizing, tagging, parsing, chunking) happens
//! behind [`Annotator`]. Engines are expensive to load, so a single instance
//! can be installed process-wide and shared read-only; see [`install`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{AnnotatedText, AnnotationError, AnnotationResult, Document};

/// Turns raw text into an annotated [`Document`].
///
/// Implementations must be deterministic for a given text and model version.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> AnnotationResult<Document>;

    /// Engine identifier used in logs and errors.
    fn name(&self) -> &str {
        "annotator"
    }
}

impl<A: Annotator + ?Sized> Annotator for Arc<A> {
    fn annotate(&self, text: &str) -> AnnotationResult<Document> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Serves pre-annotated documents, keyed by their source text.
///
/// This is the adapter for annotations produced offline by an external
/// parser, and the test double for the pipeline.
#[derive(Debug, Clone, Default)]
pub struct FixtureAnnotator {
    documents: HashMap<String, Document>,
}

impl FixtureAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.insert(document);
        self
    }

    pub fn insert(&mut self, document: Document) {
        self.documents.insert(document.text().to_string(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Load every `.ron` file in `dir` as an [`AnnotatedText`].
    pub fn from_dir(dir: &Path) -> AnnotationResult<Self> {
        let load_error = |path: &Path, e: std::io::Error| AnnotationError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| load_error(dir, e))? {
            let path = entry.map_err(|e| load_error(dir, e))?.path();
            if path.extension().map_or(false, |e| e == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut annotator = Self::new();
        for path in paths {
            let source = fs::read_to_string(&path).map_err(|e| load_error(&path, e))?;
            let document = AnnotatedText::from_ron(&source)
                .and_then(AnnotatedText::into_document)
                .map_err(|e| AnnotationError::Load {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            annotator.insert(document);
        }
        tracing::debug!(dir = %dir.display(), documents = annotator.len(), "loaded fixture annotations");
        Ok(annotator)
    }
}

impl Annotator for FixtureAnnotator {
    fn annotate(&self, text: &str) -> AnnotationResult<Document> {
        self.documents
            .get(text)
            .cloned()
            .ok_or_else(|| AnnotationError::UnknownText(text.to_string()))
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

static ENGINE: Lazy<RwLock<Option<Arc<dyn Annotator>>>> = Lazy::new(|| RwLock::new(None));

/// Install the process-wide annotation engine, replacing any previous one.
pub fn install(engine: Arc<dyn Annotator>) {
    tracing::info!(engine = engine.name(), "installing annotation engine");
    *ENGINE.write() = Some(engine);
}

/// The installed engine, if any. Callers keep the returned handle for as long
/// as they need it; a concurrent [`shutdown`] does not invalidate it.
pub fn installed() -> Option<Arc<dyn Annotator>> {
    ENGINE.read().clone()
}

/// Release the process-wide engine. Returns the engine that was installed.
pub fn shutdown() -> Option<Arc<dyn Annotator>> {
    let engine = ENGINE.write().take();
    if let Some(engine) = &engine {
        tracing::info!(engine = engine.name(), "annotation engine shut down");
    }
    engine
}
