use super::support::arrivals;
use crate::{
    resolve_document, AnaphorDetector, Candidate, CandidateGenerator, CandidateOrigin, Document,
    DocumentBuilder, ResolverConfig,
};

fn spans(candidates: &[Candidate]) -> Vec<(usize, usize)> {
    candidates.iter().map(|c| (c.span.start, c.span.end)).collect()
}

fn only_anaphor(doc: &Document) -> crate::Anaphor {
    let anaphors = AnaphorDetector::default().detect(doc);
    assert_eq!(anaphors.len(), 1);
    anaphors[0]
}

#[test]
fn window_covers_two_preceding_sentences() {
    let doc = arrivals(&["Ship", "Train", "Plane", "Truck"]);
    let it = only_anaphor(&doc);
    assert_eq!((it.token, it.sentence), (12, 4));

    let candidates = CandidateGenerator::default().generate(&doc, &it);
    assert_eq!(spans(&candidates), vec![(6, 7), (6, 7), (9, 10), (9, 10)]);
    assert_eq!(candidates[0].origin, CandidateOrigin::Chunk);
    assert_eq!(
        candidates[1].origin,
        CandidateOrigin::SubSpan {
            chunk: doc.noun_chunks()[2]
        }
    );

    assert!(CandidateGenerator::new(0).generate(&doc, &it).is_empty());
    assert_eq!(CandidateGenerator::new(10).generate(&doc, &it).len(), 8);
}

#[test]
fn nearest_sentence_wins_on_distance() {
    let doc = arrivals(&["Ship", "Train", "Plane", "Truck"]);
    let resolution = resolve_document(&doc, &ResolverConfig::default());
    assert_eq!(resolution.antecedent_of(12).map(|s| (s.start, s.end)), Some((9, 10)));

    let narrow = resolve_document(&doc, &ResolverConfig::default().with_window(0));
    assert!(narrow.contains(12));
    assert_eq!(narrow.antecedent_of(12), None);
    assert_eq!(narrow.to_string(), "It@12 -> <none>");
}

#[test]
fn rejected_chunk_still_contributes_sub_spans() {
    // "The factory workers left. It closed."
    let doc = DocumentBuilder::new()
        .token("The", "the", "DET", "det", 2)
        .token("factory", "factory", "NOUN", "compound", 2)
        .morph("Number=Sing")
        .token("workers", "worker", "NOUN", "nsubj", 3)
        .morph("Number=Plur")
        .token("left", "leave", "VERB", "ROOT", 3)
        .no_space()
        .token(".", ".", "PUNCT", "punct", 3)
        .end_sentence()
        .token("It", "it", "PRON", "nsubj", 6)
        .morph("Number=Sing")
        .token("closed", "close", "VERB", "ROOT", 6)
        .no_space()
        .token(".", ".", "PUNCT", "punct", 6)
        .chunk(0, 3)
        .chunk(5, 6)
        .build()
        .unwrap();

    let it = only_anaphor(&doc);
    let candidates = CandidateGenerator::default().generate(&doc, &it);
    assert_eq!(spans(&candidates), vec![(1, 2)]);
    assert_eq!(
        candidates[0].origin,
        CandidateOrigin::SubSpan {
            chunk: doc.noun_chunks()[0]
        }
    );

    let resolution = resolve_document(&doc, &ResolverConfig::default());
    assert_eq!(resolution.get(5).unwrap().antecedent_text.as_deref(), Some("factory"));
}

#[test]
fn chunk_holding_the_pronoun_is_skipped_whole() {
    // "The jar lost its lid."
    let doc = DocumentBuilder::new()
        .token("The", "the", "DET", "det", 1)
        .token("jar", "jar", "NOUN", "nsubj", 2)
        .morph("Number=Sing")
        .token("lost", "lose", "VERB", "ROOT", 2)
        .token("its", "its", "PRON", "poss", 4)
        .morph("Number=Sing|Poss=Yes")
        .token("lid", "lid", "NOUN", "dobj", 2)
        .morph("Number=Sing")
        .no_space()
        .token(".", ".", "PUNCT", "punct", 2)
        .chunk(0, 2)
        .chunk(3, 5)
        .build()
        .unwrap();

    let its = only_anaphor(&doc);
    let candidates = CandidateGenerator::default().generate(&doc, &its);
    // no "lid" even though it agrees and is not a co-argument
    assert_eq!(spans(&candidates), vec![(0, 2), (1, 2)]);

    let resolution = resolve_document(&doc, &ResolverConfig::default());
    assert_eq!(resolution.get(3).unwrap().antecedent_text.as_deref(), Some("The jar"));
}

#[test]
fn chunk_ending_at_the_pronoun_is_kept() {
    // "Ann fed the dog its bone."
    let doc = DocumentBuilder::new()
        .token("Ann", "Ann", "PROPN", "nsubj", 1)
        .morph("Number=Sing")
        .token("fed", "feed", "VERB", "ROOT", 1)
        .token("the", "the", "DET", "det", 3)
        .token("dog", "dog", "NOUN", "dative", 1)
        .morph("Number=Sing")
        .token("its", "its", "PRON", "poss", 5)
        .morph("Number=Sing|Poss=Yes")
        .token("bone", "bone", "NOUN", "dobj", 1)
        .morph("Number=Sing")
        .no_space()
        .token(".", ".", "PUNCT", "punct", 1)
        .chunk(0, 1)
        .chunk(2, 4)
        .chunk(4, 6)
        .build()
        .unwrap();

    let its = only_anaphor(&doc);
    assert_eq!(its.token, 4);
    assert!(!doc.noun_chunks()[1].contains(4));

    let candidates = CandidateGenerator::default().generate(&doc, &its);
    assert!(candidates.contains(&Candidate::chunk(doc.noun_chunks()[1])));
    assert!(candidates.iter().all(|c| c.span.end <= 4));
}

#[test]
fn pronoun_rooted_chunks_are_not_candidates() {
    let doc = super::support::manager_report();
    let anaphors = AnaphorDetector::default().detect(&doc);
    let it = anaphors[1];
    assert_eq!(it.token, 8);

    let candidates = CandidateGenerator::default().generate(&doc, &it);
    assert!(candidates.iter().all(|c| c.span.end <= 5));
}
