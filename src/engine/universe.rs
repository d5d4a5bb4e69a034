use crate::chord::Chord;
use crate::consts::KEY_COUNT;
use crate::error::{CfResult, ChordError};
use crate::scorer::ComfortScorer;
use crate::tables::FixedTable;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Every key subset of size `1..=max_size` over `0..key_count`.
///
/// Ordered by size, then lexicographically by position within a size.
pub fn enumerate_universe(key_count: usize, max_size: usize) -> CfResult<Vec<Chord>> {
    if key_count > KEY_COUNT {
        return Err(ChordError::Config(format!(
            "key count {} exceeds the {} physical keys",
            key_count, KEY_COUNT
        )));
    }

    let mut chords = Vec::new();
    for size in 1..=max_size.min(key_count) {
        let mut idx: Vec<usize> = (0..size).collect();
        loop {
            let bits = idx.iter().fold(0u16, |acc, &p| acc | (1 << p));
            chords.push(Chord::from_bits(bits)?);

            // Advance to the next combination in lexicographic order.
            let Some(i) = (0..size).rev().find(|&i| idx[i] < key_count - size + i) else {
                break;
            };
            idx[i] += 1;
            for j in i + 1..size {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
    Ok(chords)
}

/// Most comfortable first. Equal scores keep their input order.
pub fn rank_by_comfort(chords: &[Chord], scorer: &ComfortScorer) -> Vec<Chord> {
    let mut ranked = chords.to_vec();
    ranked.sort_by_cached_key(|c| Reverse(scorer.score(c)));
    ranked
}

/// Removes every chord the fixed table already uses, keeping order.
pub fn exclude_fixed(ranked: &[Chord], fixed: &FixedTable) -> Vec<Chord> {
    let taken: HashSet<Chord> = fixed.chords().collect();
    ranked
        .iter()
        .filter(|c| !taken.contains(c))
        .copied()
        .collect()
}
