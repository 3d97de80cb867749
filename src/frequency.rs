//! Document-wide frequency of noun-phrase heads.
//!
//! Counts are accumulated with a [`FrequencyTableBuilder`] and frozen into a
//! [`FrequencyTable`] before any candidate is scored.

use indexmap::IndexMap;
use layered_anaphora_document::Document;

/// Number of most frequent lemmas treated as preferred terms.
pub const DEFAULT_TOP_TERMS: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct FrequencyTableBuilder {
    counts: IndexMap<String, usize>,
}

impl FrequencyTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `lemma` (lowercased).
    pub fn add(&mut self, lemma: &str) -> &mut Self {
        *self.counts.entry(lemma.to_lowercase()).or_insert(0) += 1;
        self
    }

    pub fn build(self) -> FrequencyTable {
        FrequencyTable {
            counts: self.counts,
        }
    }
}

/// Lowercase lemma → number of noun chunks rooted in it.
///
/// Iteration order is the order in which each lemma first occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Count the root lemma of every noun chunk in the document.
    pub fn index(document: &Document) -> Self {
        let mut builder = FrequencyTableBuilder::new();
        for chunk in document.noun_chunks() {
            builder.add(&document.token(chunk.root).lemma);
        }
        builder.build()
    }

    pub fn count(&self, lemma: &str) -> usize {
        self.counts.get(&lemma.to_lowercase()).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(lemma, &count)| (lemma.as_str(), count))
    }

    /// The `n` most frequent lemmas, most frequent first. Equal counts keep
    /// first-occurrence order.
    pub fn top_terms(&self, n: usize) -> TopTerms {
        let mut ranked: Vec<(&String, usize)> =
            self.counts.iter().map(|(lemma, &count)| (lemma, count)).collect();
        // stable: ties stay in first-occurrence order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        TopTerms {
            terms: ranked
                .into_iter()
                .take(n)
                .map(|(lemma, _)| lemma.clone())
                .collect(),
        }
    }
}

/// The preferred terms of a document, in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopTerms {
    terms: Vec<String>,
}

impl TopTerms {
    pub fn contains(&self, lemma: &str) -> bool {
        let lemma = lemma.to_lowercase();
        self.terms.iter().any(|term| *term == lemma)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
