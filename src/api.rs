use crate::chord::{Chord, FingerMap};
use crate::config::{Config, PivotConfig, TableSources};
use crate::corpus;
use crate::engine::AssignmentEngine;
use crate::error::CfResult;
use crate::keycodes::ScancodeTable;
use crate::macros::{self, Macro};
use crate::mapping::ChordMap;
use crate::pivot::{self, PivotReport};
use crate::scorer::FeatureVector;
use crate::tables::{self, FixedTable, FreeList};
use std::path::Path;
use tracing::{info, warn};

/// The two externally supplied inputs of the assignment engine.
#[derive(Debug, Clone)]
pub struct Tables {
    pub fixed: FixedTable,
    pub free: FreeList,
}

/// A free chord with its score breakdown.
#[derive(Debug, Clone)]
pub struct RankedChord {
    pub chord: Chord,
    pub comfort: u64,
    pub features: FeatureVector,
}

/// Service: Resolve the fixed table and free list from files or bundled defaults.
pub fn load_tables(sources: &TableSources) -> CfResult<Tables> {
    let fixed = match &sources.fixed {
        Some(path) => {
            info!("📂 Loading Fixed Table: {}", path.display());
            FixedTable::load_from_file(path)?
        }
        None => tables::default_fixed_table()?,
    };

    let free = match &sources.free {
        Some(path) => {
            info!("📂 Loading Free List: {}", path.display());
            FreeList::load_from_file(path)?
        }
        None => tables::default_free_list(),
    };

    // Only the bundled list overlaps the fixed table on purpose. A user list
    // that repeats a fixed key fails the build with DuplicateKey.
    let free = if sources.strict_free_list || sources.free.is_some() {
        free
    } else {
        let reduced = free.without_fixed(&fixed);
        if reduced.len() < free.len() {
            info!(
                "Dropped {} free keys already placed by the fixed table",
                free.len() - reduced.len()
            );
        }
        reduced
    };

    Ok(Tables { fixed, free })
}

pub fn engine(config: &Config) -> CfResult<AssignmentEngine> {
    AssignmentEngine::new(&config.engine, FingerMap::standard())
}

/// Service: Build the complete, validated chord map.
pub fn build_chord_map(config: &Config) -> CfResult<ChordMap> {
    let tables = load_tables(&config.tables)?;
    engine(config)?.build(&tables.fixed, &tables.free)
}

/// Service: Ranked chords not claimed by the fixed table.
pub fn list_free_chords(config: &Config) -> CfResult<Vec<RankedChord>> {
    let tables = load_tables(&config.tables)?;
    let engine = engine(config)?;
    let scorer = engine.scorer();
    Ok(engine
        .free_chords(&tables.fixed)?
        .into_iter()
        .map(|chord| RankedChord {
            chord,
            comfort: scorer.score(&chord),
            features: scorer.features(&chord),
        })
        .collect())
}

/// Service: Detect and rank pivots over an in-memory word list.
pub fn analyze_words<S>(words: &[S], map: &ChordMap, cfg: &PivotConfig) -> CfResult<PivotReport>
where
    S: AsRef<str> + Sync,
{
    let analyzed = pivot::analyze_words(words, map, cfg.merge_policy)?;
    Ok(pivot::aggregate(&analyzed))
}

/// Service: Load a corpus file and run pivot analysis on it.
pub fn analyze_corpus<P: AsRef<Path>>(
    path: P,
    map: &ChordMap,
    cfg: &PivotConfig,
) -> CfResult<PivotReport> {
    let words = corpus::load_words(path)?;
    if words.is_empty() {
        warn!("⚠️  Corpus is empty. Report will contain no pivots.");
    }
    let report = analyze_words(&words, map, cfg)?;
    info!(
        "Found {} distinct pivots ({} occurrences)",
        report.ranked.len(),
        report.total_occurrences()
    );
    Ok(report)
}

pub fn load_scancodes(sources: &TableSources) -> CfResult<ScancodeTable> {
    match &sources.scancodes {
        Some(path) => {
            info!("🔑 Loading Scancodes: {}", path.display());
            ScancodeTable::load_from_file(path)
        }
        None => Ok(ScancodeTable::uk_default()),
    }
}

/// Service: Resolve macro definitions against the chord map.
pub fn load_macros(sources: &TableSources, map: &ChordMap) -> CfResult<Vec<Macro>> {
    let defs = match &sources.macros {
        Some(path) => {
            info!("📂 Loading Macros: {}", path.display());
            tables::load_macros_from_file(path)?
        }
        None => tables::default_macros()?,
    };
    macros::resolve_all(&defs, map)
}
