//! Hand-annotated documents shared by the scenario tests.
//!
//! Annotations follow spaCy's English models: ClearNLP dependency labels,
//! UD part-of-speech tags, and `Number` morphology on nouns and pronouns.

use crate::{Document, DocumentBuilder};

/// "The manager reviewed the report. She approved it quickly."
pub fn manager_report() -> Document {
    DocumentBuilder::new()
        .token("The", "the", "DET", "det", 1)
        .token("manager", "manager", "NOUN", "nsubj", 2)
        .morph("Number=Sing")
        .token("reviewed", "review", "VERB", "ROOT", 2)
        .token("the", "the", "DET", "det", 4)
        .token("report", "report", "NOUN", "dobj", 2)
        .morph("Number=Sing")
        .no_space()
        .token(".", ".", "PUNCT", "punct", 2)
        .end_sentence()
        .token("She", "she", "PRON", "nsubj", 7)
        .morph("Case=Nom|Gender=Fem|Number=Sing|Person=3|PronType=Prs")
        .token("approved", "approve", "VERB", "ROOT", 7)
        .token("it", "it", "PRON", "dobj", 7)
        .morph("Case=Acc|Gender=Neut|Number=Sing|Person=3|PronType=Prs")
        .token("quickly", "quickly", "ADV", "advmod", 7)
        .no_space()
        .token(".", ".", "PUNCT", "punct", 7)
        .chunk(0, 2)
        .chunk(3, 5)
        .chunk(6, 7)
        .chunk(8, 9)
        .build()
        .unwrap()
}

/// "A report was submitted. A manager reviewed it."
pub fn submitted_report() -> Document {
    DocumentBuilder::new()
        .token("A", "a", "DET", "det", 1)
        .token("report", "report", "NOUN", "nsubjpass", 3)
        .morph("Number=Sing")
        .token("was", "be", "AUX", "auxpass", 3)
        .token("submitted", "submit", "VERB", "ROOT", 3)
        .no_space()
        .token(".", ".", "PUNCT", "punct", 3)
        .end_sentence()
        .token("A", "a", "DET", "det", 6)
        .token("manager", "manager", "NOUN", "nsubj", 7)
        .morph("Number=Sing")
        .token("reviewed", "review", "VERB", "ROOT", 7)
        .token("it", "it", "PRON", "dobj", 7)
        .morph("Case=Acc|Gender=Neut|Number=Sing|Person=3|PronType=Prs")
        .no_space()
        .token(".", ".", "PUNCT", "punct", 7)
        .chunk(0, 2)
        .chunk(5, 7)
        .chunk(8, 9)
        .build()
        .unwrap()
}

/// "It is important to test the system carefully."
pub fn important_to_test() -> Document {
    DocumentBuilder::new()
        .token("It", "it", "PRON", "nsubj", 1)
        .morph("Number=Sing")
        .token("is", "be", "AUX", "ROOT", 1)
        .token("important", "important", "ADJ", "acomp", 1)
        .token("to", "to", "PART", "aux", 4)
        .token("test", "test", "VERB", "xcomp", 1)
        .token("the", "the", "DET", "det", 6)
        .token("system", "system", "NOUN", "dobj", 4)
        .morph("Number=Sing")
        .token("carefully", "carefully", "ADV", "advmod", 4)
        .no_space()
        .token(".", ".", "PUNCT", "punct", 1)
        .chunk(0, 1)
        .chunk(5, 7)
        .build()
        .unwrap()
}

/// A flat sentence for the surface-pattern rules: every token hangs off the
/// second one. Words are `(text, lemma, upos)`.
pub fn flat(words: &[(&str, &str, &str)]) -> Document {
    let mut builder = DocumentBuilder::new();
    for (text, lemma, pos) in words {
        builder = builder.token(text, lemma, pos, "dep", 1);
    }
    builder.build().unwrap()
}

/// One "<Noun> arrived." sentence per noun, then "It left." Every noun is
/// singular and forms its own chunk.
pub fn arrivals(nouns: &[&str]) -> Document {
    let mut builder = DocumentBuilder::new();
    let mut chunks = Vec::new();
    let mut offset = 0;
    for noun in nouns {
        builder = builder
            .token(noun, &noun.to_lowercase(), "NOUN", "nsubj", offset + 1)
            .morph("Number=Sing")
            .token("arrived", "arrive", "VERB", "ROOT", offset + 1)
            .no_space()
            .token(".", ".", "PUNCT", "punct", offset + 1)
            .end_sentence();
        chunks.push(offset);
        offset += 3;
    }
    builder = builder
        .token("It", "it", "PRON", "nsubj", offset + 1)
        .morph("Number=Sing")
        .token("left", "leave", "VERB", "ROOT", offset + 1)
        .no_space()
        .token(".", ".", "PUNCT", "punct", offset + 1);
    for start in chunks {
        builder = builder.chunk(start, start + 1);
    }
    builder.chunk(offset, offset + 1).build().unwrap()
}
