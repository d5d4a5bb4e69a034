//! Detection of pivots: runs of characters whose chords can be rolled from
//! one to the next while at least one key stays held.

pub mod aggregate;

pub use self::aggregate::{aggregate, PivotReport, PivotStat};

use crate::chord::Chord;
use crate::error::{CfResult, ChordError};
use crate::mapping::ChordMap;
use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Which chords may extend a run.
///
/// `MultiKey` refuses to pivot into a single-key chord; `AnyKey` allows it.
/// Both require the new chord to be at least as large as the previous one
/// and to keep one of its keys held.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    ValueEnum,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    #[default]
    MultiKey,
    AnyKey,
}

#[inline(always)]
pub fn merge_predicate(policy: MergePolicy, previous: &Chord, current: &Chord) -> bool {
    let size_ok = match policy {
        MergePolicy::MultiKey => current.len() > 1,
        MergePolicy::AnyKey => true,
    };
    size_ok && current.len() >= previous.len() && current.overlaps(previous)
}

/// A corpus word and the pivots found in it, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub pivots: Vec<String>,
}

impl Word {
    pub fn analyze(text: &str, map: &ChordMap, policy: MergePolicy) -> CfResult<Self> {
        Ok(Self {
            text: text.to_string(),
            pivots: find_pivots(text, map, policy)?,
        })
    }
}

fn resolve(c: char, word: &str, map: &ChordMap) -> CfResult<Chord> {
    let mut buf = [0u8; 4];
    let key: &str = c.encode_utf8(&mut buf);
    map.chord_for(key)
        .ok_or_else(|| ChordError::UnmappedCharacter {
            character: key.to_string(),
            word: word.to_string(),
        })
}

/// Splits `word` into maximal mergeable runs and returns those of length >= 2.
pub fn find_pivots(word: &str, map: &ChordMap, policy: MergePolicy) -> CfResult<Vec<String>> {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return Ok(Vec::new());
    };

    let mut pivots = Vec::new();
    let mut previous = resolve(first, word, map)?;
    let mut run = String::from(first);
    let mut run_len = 1;

    for c in chars {
        let current = resolve(c, word, map)?;
        if merge_predicate(policy, &previous, &current) {
            run.push(c);
            run_len += 1;
        } else {
            if run_len >= 2 {
                pivots.push(std::mem::take(&mut run));
            }
            run.clear();
            run.push(c);
            run_len = 1;
        }
        previous = current;
    }

    if run_len >= 2 {
        pivots.push(run);
    }
    Ok(pivots)
}

/// Runs [`find_pivots`] over every word in parallel, keeping corpus order.
///
/// On failure the error for the earliest offending word is returned.
pub fn analyze_words<S>(words: &[S], map: &ChordMap, policy: MergePolicy) -> CfResult<Vec<Word>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<CfResult<Word>> = words
        .par_iter()
        .map(|w| Word::analyze(w.as_ref(), map, policy))
        .collect();
    let analyzed = results.into_iter().collect::<CfResult<Vec<_>>>()?;
    debug!(
        "Analyzed {} words with policy {}",
        analyzed.len(),
        policy
    );
    Ok(analyzed)
}
