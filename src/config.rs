//! Resolver configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::candidate::DEFAULT_WINDOW;
use crate::frequency::DEFAULT_TOP_TERMS;
use crate::pleonastic::DEFAULT_LOOKAHEAD;
use crate::{Error, Result};

/// Tunables of the resolution pipeline.
///
/// Every field may be omitted from a TOML file:
///
/// ```
/// use layered_anaphora::ResolverConfig;
///
/// let config = ResolverConfig::from_toml_str("window_sentences = 1\nparallel = true").unwrap();
/// assert_eq!(config.window_sentences, 1);
/// assert_eq!(config.top_terms, 10);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Sentences before the pronoun's own that are searched for candidates.
    pub window_sentences: usize,
    /// Number of most frequent head lemmas that earn the term preference.
    pub top_terms: usize,
    /// Tokens after "it" inspected by the idiom and parenthetical rules.
    pub idiom_lookahead: usize,
    /// Keep the indicator breakdown of every candidate.
    pub diagnostics: bool,
    /// Resolve anaphors on a worker pool.
    pub parallel: bool,
    /// Pool size; rayon's default when unset.
    pub worker_threads: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            window_sentences: DEFAULT_WINDOW,
            top_terms: DEFAULT_TOP_TERMS,
            idiom_lookahead: DEFAULT_LOOKAHEAD,
            diagnostics: false,
            parallel: false,
            worker_threads: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_parallel(mut self, worker_threads: Option<usize>) -> Self {
        self.parallel = true;
        self.worker_threads = worker_threads;
        self
    }

    pub fn with_window(mut self, window_sentences: usize) -> Self {
        self.window_sentences = window_sentences;
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::parse(source, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&source, &path.display().to_string())
    }

    fn parse(source: &str, path: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Config {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
