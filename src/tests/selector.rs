use crate::{
    is_well_formed, select, Candidate, CandidateOrigin, Document, DocumentBuilder, ScoreVector,
    ScoredCandidate,
};

/// "Paris , the big city near it"
fn city() -> Document {
    DocumentBuilder::new()
        .token("Paris", "Paris", "PROPN", "ROOT", 0)
        .token(",", ",", "PUNCT", "punct", 0)
        .token("the", "the", "DET", "det", 4)
        .token("big", "big", "ADJ", "amod", 4)
        .token("city", "city", "NOUN", "appos", 0)
        .token("near", "near", "ADP", "prep", 4)
        .token("it", "it", "PRON", "pobj", 5)
        .build()
        .unwrap()
}

fn scored(doc: &Document, start: usize, end: usize, total: i32) -> ScoredCandidate {
    ScoredCandidate {
        candidate: Candidate {
            span: doc.span(start, end).unwrap(),
            origin: CandidateOrigin::Chunk,
        },
        vector: ScoreVector::default(),
        total,
    }
}

#[test]
fn well_formedness() {
    let doc = city();
    assert!(is_well_formed(&doc, &doc.span(2, 5).unwrap()));
    assert!(is_well_formed(&doc, &doc.span(0, 1).unwrap()));
    // adjective root
    assert!(!is_well_formed(&doc, &doc.span(3, 4).unwrap()));
    // punctuation inside
    assert!(!is_well_formed(&doc, &doc.span(0, 5).unwrap()));
}

#[test]
fn empty_list_selects_nothing() {
    assert_eq!(select(&city(), &[]), None);
}

#[test]
fn highest_total_wins() {
    let doc = city();
    let picked = select(&doc, &[scored(&doc, 0, 1, 1), scored(&doc, 2, 5, 3)]).unwrap();
    assert_eq!((picked.start, picked.end), (2, 5));
}

#[test]
fn well_formed_beats_earlier_ill_formed() {
    let doc = city();
    let picked = select(&doc, &[scored(&doc, 0, 5, 4), scored(&doc, 3, 4, 4), scored(&doc, 3, 5, 4)]).unwrap();
    assert_eq!((picked.start, picked.end), (3, 5));
}

#[test]
fn ill_formed_pool_falls_back_to_earliest() {
    let doc = city();
    let picked = select(&doc, &[scored(&doc, 3, 4, 2), scored(&doc, 0, 5, 2)]).unwrap();
    assert_eq!((picked.start, picked.end), (0, 5));
}

#[test]
fn equal_starts_keep_candidate_order() {
    let doc = city();
    let picked = select(&doc, &[scored(&doc, 0, 5, 2), scored(&doc, 0, 2, 2)]).unwrap();
    assert_eq!((picked.start, picked.end), (0, 5));

    let picked = select(&doc, &[scored(&doc, 0, 2, 2), scored(&doc, 0, 5, 2)]).unwrap();
    assert_eq!((picked.start, picked.end), (0, 2));
}

#[test]
fn negative_totals_still_select() {
    let doc = city();
    let picked = select(&doc, &[scored(&doc, 4, 5, -3), scored(&doc, 0, 1, -1)]).unwrap();
    assert_eq!((picked.start, picked.end), (0, 1));
}
