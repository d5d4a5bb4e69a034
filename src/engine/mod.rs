pub mod universe;

pub use self::universe::{enumerate_universe, exclude_fixed, rank_by_comfort};

use crate::chord::{Chord, FingerMap};
use crate::config::EngineConfig;
use crate::error::{CfResult, ChordError};
use crate::mapping::{ChordMap, Mapping};
use crate::scorer::ComfortScorer;
use crate::tables::{FixedTable, FreeList};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Pairs free keys with chords in order, stopping at the shorter list.
pub fn assign(free: &FreeList, chords: &[Chord]) -> Vec<Mapping> {
    free.keys()
        .iter()
        .zip(chords)
        .map(|(key, &chord)| Mapping::new(key.clone(), chord))
        .collect()
}

/// Builds complete chord maps from a fixed table and a free list.
pub struct AssignmentEngine {
    scorer: ComfortScorer,
    key_count: usize,
    max_chord_size: usize,
}

impl AssignmentEngine {
    pub fn new(config: &EngineConfig, fingers: FingerMap) -> CfResult<Self> {
        config.validate()?;
        Ok(Self {
            scorer: ComfortScorer::new(fingers),
            key_count: config.key_count,
            max_chord_size: config.max_chord_size,
        })
    }

    pub fn scorer(&self) -> &ComfortScorer {
        &self.scorer
    }

    pub fn universe(&self) -> CfResult<Vec<Chord>> {
        enumerate_universe(self.key_count, self.max_chord_size)
    }

    pub fn ranked_universe(&self) -> CfResult<Vec<Chord>> {
        Ok(rank_by_comfort(&self.universe()?, &self.scorer))
    }

    /// Ranked chords left over once `fixed` has claimed its own.
    pub fn free_chords(&self, fixed: &FixedTable) -> CfResult<Vec<Chord>> {
        let universe = self.universe()?;
        self.validate_fixed(fixed, &universe)?;
        let ranked = rank_by_comfort(&universe, &self.scorer);
        let free = exclude_fixed(&ranked, fixed);
        debug!(
            "Universe: {} chords, {} fixed, {} free",
            ranked.len(),
            fixed.len(),
            free.len()
        );
        Ok(free)
    }

    pub fn build(&self, fixed: &FixedTable, free: &FreeList) -> CfResult<ChordMap> {
        let free_chords = self.free_chords(fixed)?;
        validate_keys(fixed, free)?;

        let assigned = assign(free, &free_chords);
        if assigned.len() < free.len() {
            warn!(
                "Only {} chords remain for {} free keys; {} keys left unassigned (first: '{}')",
                free_chords.len(),
                free.len(),
                free.len() - assigned.len(),
                free.keys()[assigned.len()]
            );
        }

        let mut mappings = fixed.entries().to_vec();
        mappings.extend(assigned);
        let map = ChordMap::from_mappings(mappings)?;
        info!(
            "Built chord map: {} fixed + {} assigned",
            fixed.len(),
            map.len() - fixed.len()
        );
        Ok(map)
    }

    fn validate_fixed(&self, fixed: &FixedTable, universe: &[Chord]) -> CfResult<()> {
        let known: HashSet<&Chord> = universe.iter().collect();
        let mut owners: HashMap<Chord, &str> = HashMap::with_capacity(fixed.len());

        for m in fixed.entries() {
            if !known.contains(&m.chord) {
                return Err(ChordError::UnknownFixedChord {
                    key: m.key.clone(),
                    chord: m.chord.to_string(),
                });
            }
            if let Some(first) = owners.insert(m.chord, &m.key) {
                return Err(ChordError::DuplicateChord {
                    chord: m.chord.to_string(),
                    first: first.to_string(),
                    second: m.key.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate_keys(fixed: &FixedTable, free: &FreeList) -> CfResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(fixed.len() + free.len());
    for key in fixed.keys().chain(free.keys().iter().map(String::as_str)) {
        if !seen.insert(key) {
            return Err(ChordError::DuplicateKey(key.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_truncates_to_chords() {
        let chords = [Chord::new(&[3]).unwrap(), Chord::new(&[6]).unwrap()];
        let free = FreeList::new(["e", "t", "a"]);
        let out = assign(&free, &chords);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], Mapping::new("t", chords[1]));
    }

    #[test]
    fn test_assign_truncates_to_keys() {
        let chords = [Chord::new(&[3]).unwrap(), Chord::new(&[6]).unwrap()];
        let out = assign(&FreeList::new(["e"]), &chords);
        assert_eq!(out, vec![Mapping::new("e", chords[0])]);
    }
}
