use crate::chord::Chord;
use crate::error::{CfResult, ChordError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Printable name for a key; the space bar would otherwise render as blank.
pub fn display_key(key: &str) -> &str {
    match key {
        " " => "SPACE",
        other => other,
    }
}

/// One character or control token bound to a chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub key: String,
    pub chord: Chord,
}

impl Mapping {
    pub fn new(key: impl Into<String>, chord: Chord) -> Self {
        Self {
            key: key.into(),
            chord,
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}{}", self.key, self.chord)
    }
}

/// The validated output table: unique keys, unique chords.
///
/// Keeps insertion order (fixed entries first, then assigned ones).
#[derive(Debug, Clone, Default)]
pub struct ChordMap {
    mappings: Vec<Mapping>,
    by_key: HashMap<String, usize>,
    by_chord: HashMap<Chord, usize>,
}

impl ChordMap {
    pub fn from_mappings(mappings: Vec<Mapping>) -> CfResult<Self> {
        let mut by_key = HashMap::with_capacity(mappings.len());
        let mut by_chord = HashMap::with_capacity(mappings.len());

        for (idx, m) in mappings.iter().enumerate() {
            if by_key.insert(m.key.clone(), idx).is_some() {
                return Err(ChordError::DuplicateKey(m.key.clone()));
            }
            if let Some(prev) = by_chord.insert(m.chord, idx) {
                return Err(ChordError::DuplicateChord {
                    chord: m.chord.to_string(),
                    first: mappings[prev].key.clone(),
                    second: m.key.clone(),
                });
            }
        }

        Ok(Self {
            mappings,
            by_key,
            by_chord,
        })
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.mappings.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Mapping> {
        self.by_key.get(key).map(|&i| &self.mappings[i])
    }

    pub fn chord_for(&self, key: &str) -> Option<Chord> {
        self.get(key).map(|m| m.chord)
    }

    pub fn key_for(&self, chord: &Chord) -> Option<&str> {
        self.by_chord
            .get(chord)
            .map(|&i| self.mappings[i].key.as_str())
    }

    /// Byte-wise ascending by key, as shown in the human listing.
    pub fn sorted_by_key(&self) -> Vec<&Mapping> {
        let mut out: Vec<&Mapping> = self.mappings.iter().collect();
        out.sort_by(|a, b| a.key.cmp(&b.key));
        out
    }

    /// Ascending by [`Chord::identifier`], the firmware table order.
    pub fn sorted_by_identifier(&self) -> Vec<&Mapping> {
        let mut out: Vec<&Mapping> = self.mappings.iter().collect();
        out.sort_by_key(|m| m.chord.identifier());
        out
    }
}

impl<'a> IntoIterator for &'a ChordMap {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}
