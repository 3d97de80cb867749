//! Part-of-speech and dependency label enumerations.
//!
//! Annotators speak in free-form strings (`"PROPN"`, `"nsubjpass"`). These
//! are parsed once at the document boundary into closed enums so that the
//! resolution rules can match on them exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category (Universal Dependencies UPOS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pos {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    CoordinatingConjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    SubordinatingConjunction,
    Symbol,
    Verb,
    /// `X` or any tag the annotator emits that UPOS does not define
    Other,
}

impl Pos {
    /// Parse a UPOS tag, case-insensitively. Unknown tags map to [`Pos::Other`].
    pub fn from_upos(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "ADJ" => Self::Adjective,
            "ADP" => Self::Adposition,
            "ADV" => Self::Adverb,
            "AUX" => Self::Auxiliary,
            "CCONJ" | "CONJ" => Self::CoordinatingConjunction,
            "DET" => Self::Determiner,
            "INTJ" => Self::Interjection,
            "NOUN" => Self::Noun,
            "NUM" => Self::Numeral,
            "PART" => Self::Particle,
            "PRON" => Self::Pronoun,
            "PROPN" => Self::ProperNoun,
            "PUNCT" => Self::Punctuation,
            "SCONJ" => Self::SubordinatingConjunction,
            "SYM" => Self::Symbol,
            "VERB" => Self::Verb,
            _ => Self::Other,
        }
    }

    pub fn as_upos(&self) -> &'static str {
        match self {
            Self::Adjective => "ADJ",
            Self::Adposition => "ADP",
            Self::Adverb => "ADV",
            Self::Auxiliary => "AUX",
            Self::CoordinatingConjunction => "CCONJ",
            Self::Determiner => "DET",
            Self::Interjection => "INTJ",
            Self::Noun => "NOUN",
            Self::Numeral => "NUM",
            Self::Particle => "PART",
            Self::Pronoun => "PRON",
            Self::ProperNoun => "PROPN",
            Self::Punctuation => "PUNCT",
            Self::SubordinatingConjunction => "SCONJ",
            Self::Symbol => "SYM",
            Self::Verb => "VERB",
            Self::Other => "X",
        }
    }

    /// Adjective, noun or proper noun: the categories a noun phrase is built from.
    pub fn is_nominal_modifier(&self) -> bool {
        matches!(self, Self::Adjective | Self::Noun | Self::ProperNoun)
    }

    pub fn is_verbal(&self) -> bool {
        matches!(self, Self::Verb | Self::Auxiliary)
    }
}

impl From<String> for Pos {
    fn from(tag: String) -> Self {
        Self::from_upos(&tag)
    }
}

impl From<Pos> for String {
    fn from(pos: Pos) -> Self {
        pos.as_upos().to_string()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upos())
    }
}

/// Dependency relation of a token to its head.
///
/// Covers the ClearNLP label set used by English dependency parsers, with the
/// UD spellings accepted as aliases where the meaning is the same. Labels
/// outside the set are kept verbatim in [`Dep::Other`] so two unknown labels
/// still compare by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dep {
    Root,
    NominalSubject,
    PassiveNominalSubject,
    DirectObject,
    IndirectObject,
    Dative,
    PrepositionalObject,
    Preposition,
    Determiner,
    Possessive,
    Compound,
    AdjectivalModifier,
    AdverbialModifier,
    Auxiliary,
    PassiveAuxiliary,
    Coordination,
    Conjunct,
    Attribute,
    AdjectivalComplement,
    OpenClausalComplement,
    ClausalComplement,
    Marker,
    Expletive,
    Negation,
    Punctuation,
    Other(String),
}

impl Dep {
    pub fn parse(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "root" => Self::Root,
            "nsubj" => Self::NominalSubject,
            "nsubjpass" | "nsubj:pass" => Self::PassiveNominalSubject,
            "dobj" | "obj" => Self::DirectObject,
            "iobj" => Self::IndirectObject,
            "dative" => Self::Dative,
            "pobj" => Self::PrepositionalObject,
            "prep" => Self::Preposition,
            "det" => Self::Determiner,
            "poss" | "nmod:poss" => Self::Possessive,
            "compound" => Self::Compound,
            "amod" => Self::AdjectivalModifier,
            "advmod" => Self::AdverbialModifier,
            "aux" => Self::Auxiliary,
            "auxpass" | "aux:pass" => Self::PassiveAuxiliary,
            "cc" => Self::Coordination,
            "conj" => Self::Conjunct,
            "attr" => Self::Attribute,
            "acomp" => Self::AdjectivalComplement,
            "xcomp" => Self::OpenClausalComplement,
            "ccomp" => Self::ClausalComplement,
            "mark" => Self::Marker,
            "expl" => Self::Expletive,
            "neg" => Self::Negation,
            "punct" => Self::Punctuation,
            _ => Self::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "ROOT",
            Self::NominalSubject => "nsubj",
            Self::PassiveNominalSubject => "nsubjpass",
            Self::DirectObject => "dobj",
            Self::IndirectObject => "iobj",
            Self::Dative => "dative",
            Self::PrepositionalObject => "pobj",
            Self::Preposition => "prep",
            Self::Determiner => "det",
            Self::Possessive => "poss",
            Self::Compound => "compound",
            Self::AdjectivalModifier => "amod",
            Self::AdverbialModifier => "advmod",
            Self::Auxiliary => "aux",
            Self::PassiveAuxiliary => "auxpass",
            Self::Coordination => "cc",
            Self::Conjunct => "conj",
            Self::Attribute => "attr",
            Self::AdjectivalComplement => "acomp",
            Self::OpenClausalComplement => "xcomp",
            Self::ClausalComplement => "ccomp",
            Self::Marker => "mark",
            Self::Expletive => "expl",
            Self::Negation => "neg",
            Self::Punctuation => "punct",
            Self::Other(label) => label,
        }
    }

    pub fn is_subject(&self) -> bool {
        matches!(self, Self::NominalSubject | Self::PassiveNominalSubject)
    }
}

impl From<String> for Dep {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Dep> for String {
    fn from(dep: Dep) -> Self {
        match dep {
            Dep::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Dep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
