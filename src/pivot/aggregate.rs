use super::Word;
use serde::Serialize;
use std::collections::HashMap;

/// One distinct pivot and every word occurrence that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotStat {
    pub pivot: String,
    /// One entry per occurrence; a word repeats if it holds the pivot twice.
    pub words: Vec<String>,
}

impl PivotStat {
    pub fn occurrences(&self) -> usize {
        self.words.len()
    }
}

/// Distinct pivots ranked by occurrence count, ties in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PivotReport {
    pub word_count: usize,
    pub ranked: Vec<PivotStat>,
}

impl PivotReport {
    pub fn top(&self, n: usize) -> &[PivotStat] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn get(&self, pivot: &str) -> Option<&PivotStat> {
        self.ranked.iter().find(|s| s.pivot == pivot)
    }

    pub fn total_occurrences(&self) -> usize {
        self.ranked.iter().map(PivotStat::occurrences).sum()
    }
}

pub fn aggregate(words: &[Word]) -> PivotReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<PivotStat> = Vec::new();

    for word in words {
        for pivot in &word.pivots {
            let slot = *index.entry(pivot.as_str()).or_insert_with(|| {
                stats.push(PivotStat {
                    pivot: pivot.clone(),
                    words: Vec::new(),
                });
                stats.len() - 1
            });
            stats[slot].words.push(word.text.clone());
        }
    }

    // Stable: equal counts stay in first-discovery order.
    stats.sort_by(|a, b| b.occurrences().cmp(&a.occurrences()));

    PivotReport {
        word_count: words.len(),
        ranked: stats,
    }
}
