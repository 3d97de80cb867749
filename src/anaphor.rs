use layered_anaphora_document::{Document, Pos, Token};

use crate::lexicon::THIRD_PERSON_PRONOUNS;
use crate::pleonastic::PleonasticFilter;

/// A referential third-person pronoun awaiting resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anaphor {
    /// Global token index.
    pub token: usize,
    /// Index of the containing sentence.
    pub sentence: usize,
}

impl Anaphor {
    pub fn token_of<'d>(&self, document: &'d Document) -> &'d Token {
        document.token(self.token)
    }
}

/// Scans a document for the pronouns the resolver should handle.
#[derive(Debug, Clone, Default)]
pub struct AnaphorDetector {
    pleonastic: PleonasticFilter,
}

impl AnaphorDetector {
    pub fn new(pleonastic: PleonasticFilter) -> Self {
        Self { pleonastic }
    }

    /// Referential pronouns, in document order.
    pub fn detect(&self, document: &Document) -> Vec<Anaphor> {
        let mut anaphors = Vec::new();
        for sentence in document.sentences() {
            for token in document.sentence_tokens(sentence) {
                if token.pos != Pos::Pronoun || !THIRD_PERSON_PRONOUNS.contains(&token.text) {
                    continue;
                }
                if token.lower() == "it" {
                    if let Some(rule) = self.pleonastic.classify(document, token.index) {
                        tracing::debug!(token = token.index, rule = rule.name(), "pleonastic it");
                        continue;
                    }
                }
                anaphors.push(Anaphor {
                    token: token.index,
                    sentence: sentence.index,
                });
            }
        }
        anaphors
    }
}
