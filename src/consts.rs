/// Number of physical keys on the board (5 per hand).
pub const KEY_COUNT: usize = 10;

/// Keys per hand. Left hand owns positions `0..HAND_SIZE`.
pub const HAND_SIZE: usize = 5;

/// Largest chord the default universe enumerates.
pub const DEFAULT_MAX_CHORD_SIZE: usize = 3;

/// Number of comfort features (and decimal digits in a comfort score).
pub const COMFORT_FEATURE_COUNT: usize = 12;

/// Default length of the pivot report.
pub const DEFAULT_PIVOT_REPORT_LIMIT: usize = 20;

/// Word list used by `pivots` when no corpus is given.
pub const DEFAULT_CORPUS_PATH: &str = "data/words.txt";

/// Marker for a pressed key in a chord pattern.
pub const PRESSED: char = 'O';

/// Marker for a released key in a chord pattern.
pub const RELEASED: char = '.';
