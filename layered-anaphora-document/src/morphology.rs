//! Morphological features attached to tokens.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Number {
    Singular,
    Plural,
    Dual,
}

impl Number {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Sing" => Some(Self::Singular),
            "Plur" => Some(Self::Plural),
            "Dual" => Some(Self::Dual),
            _ => None,
        }
    }
}

/// UD-style feature map (`Number=Sing|Person=3`).
///
/// A feature may carry several values (`PronType=Int,Rel`). Values are kept in
/// sorted order so two maps built from differently ordered strings compare
/// equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Morphology {
    features: BTreeMap<String, BTreeSet<String>>,
}

impl Morphology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a FEATS string. `""` and `"_"` yield an empty map; malformed
    /// entries without `=` are ignored.
    pub fn parse(feats: &str) -> Self {
        let mut features: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in feats.split('|') {
            let Some((key, values)) = entry.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let slot = features.entry(key.to_string()).or_default();
            for value in values.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                slot.insert(value.to_string());
            }
        }
        features.retain(|_, values| !values.is_empty());
        Self { features }
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.features.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The grammatical number, or `None` when the annotator did not resolve it.
    pub fn number(&self) -> Option<BTreeSet<Number>> {
        let numbers: BTreeSet<Number> = self
            .get("Number")?
            .iter()
            .filter_map(|value| Number::parse(value))
            .collect();
        if numbers.is_empty() {
            None
        } else {
            Some(numbers)
        }
    }
}

impl fmt::Display for Morphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, values) in &self.features {
            if !first {
                f.write_str("|")?;
            }
            first = false;
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            write!(f, "{}={}", key, joined.join(","))?;
        }
        Ok(())
    }
}

impl From<String> for Morphology {
    fn from(feats: String) -> Self {
        Self::parse(&feats)
    }
}

impl From<&str> for Morphology {
    fn from(feats: &str) -> Self {
        Self::parse(feats)
    }
}

impl From<Morphology> for String {
    fn from(morph: Morphology) -> Self {
        morph.to_string()
    }
}
