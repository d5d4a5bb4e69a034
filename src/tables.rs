use crate::chord::Chord;
use crate::error::{CfResult, ChordError};
use crate::mapping::Mapping;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Hand-placed chords the assignment engine leaves as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedTable {
    entries: Vec<Mapping>,
}

impl FixedTable {
    pub fn new(entries: Vec<Mapping>) -> Self {
        Self { entries }
    }

    /// Builds a table from `(key, "LLLLL RRRRR")` pairs.
    pub fn from_patterns(pairs: &[(&str, &str)]) -> CfResult<Self> {
        let entries = pairs
            .iter()
            .map(|&(key, pattern)| Ok(Mapping::new(key, Chord::parse(pattern)?)))
            .collect::<CfResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// JSON array of `{ "key": ..., "chord": "LLLLL RRRRR" }`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        debug!("Loading fixed table from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn entries(&self) -> &[Mapping] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|m| m.key.as_str())
    }

    pub fn chords(&self) -> impl Iterator<Item = Chord> + '_ {
        self.entries.iter().map(|m| m.chord)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keys awaiting an automatic chord, most important first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreeList {
    keys: Vec<String>,
}

impl FreeList {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// JSON array of strings.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        debug!("Loading free list from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drops every key that `fixed` already places, keeping order.
    pub fn without_fixed(&self, fixed: &FixedTable) -> Self {
        let taken: HashSet<&str> = fixed.keys().collect();
        Self {
            keys: self
                .keys
                .iter()
                .filter(|k| !taken.contains(k.as_str()))
                .cloned()
                .collect(),
        }
    }
}

/// A trigger chord that types a sequence of mapped keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDef {
    pub trigger: Chord,
    pub keys: Vec<String>,
}

impl MacroDef {
    /// Splits `text` into single-character keys and appends `tail` tokens.
    pub fn typing(trigger: &str, text: &str, tail: &[&str]) -> CfResult<Self> {
        let mut keys: Vec<String> = text.chars().map(String::from).collect();
        keys.extend(tail.iter().map(|s| s.to_string()));
        Ok(Self {
            trigger: Chord::parse(trigger)?,
            keys,
        })
    }
}

const FIXED_PATTERNS: &[(&str, &str)] = &[
    (" ", "....O ....."),
    ("!", "OO... ....."),
    ("\"", ".O..O ....."),
    ("#", "...OO ...O."),
    ("$", "...O. ..OO."),
    ("%", "....O .O.O."),
    ("&", "..OO. .O..."),
    ("(", "O.... ..O.."),
    (")", "..O.. ....O"),
    ("*", "..... ...OO"),
    ("+", "..O.. .OO.."),
    (",", ".O.O. ....."),
    ("-", "..... O..O."),
    (".", "..... O.O.."),
    ("/", "O...O ....."),
    ("0", "O.... .O..."),
    ("1", "O.... O...."),
    ("2", "..... .O..O"),
    ("3", "..O.. .O.O."),
    ("4", ".OO.. .O..."),
    ("5", ".O.O. ..O.."),
    ("6", "O.... .OO.."),
    ("7", "O..O. ..O.."),
    ("8", "..OO. ....O"),
    ("9", "..O.. .O..O"),
    (":", "O..O. ....."),
    (";", "...O. ....O"),
    ("<", "..O.. OO..."),
    ("=", "O.... ...O."),
    (">", "...OO ..O.."),
    ("?", "...O. O.O.."),
    ("@", "...O. O..O."),
    ("BACKSPACE", "..... .O..."),
    ("DELETE", "...OO ....O"),
    ("DOWN_ARROW", "..O.. .O..."),
    ("END", "..O.O ...O."),
    ("ESC", "....O O...."),
    ("HOME", "..OOO ....."),
    ("INSERT", "...O. O...O"),
    ("LEFT_ARROW", "..OO. ....."),
    ("PAGE_DOWN", "..O.O .O..."),
    ("PAGE_UP", "..O.O ..O.."),
    ("RETURN", "...O. .O..."),
    ("RIGHT_ARROW", "..O.. ...O."),
    ("TAB", "..O.O ....."),
    ("UP_ARROW", "..O.. ..O.."),
    ("[", ".O... .OO.."),
    ("'", "..... ....O"),
    ("\\", "...O. .OO.."),
    ("]", "..OO. ...O."),
    ("^", ".O... OO..."),
    ("_", "....O .O..."),
    ("`", ".O..O .O..."),
    ("a", "..O.. ....."),
    ("b", "..... .O.O."),
    ("c", "..O.. O...."),
    ("d", "....O ..O.."),
    ("e", "...O. ....."),
    ("f", ".O... O...."),
    ("g", ".O... ...O."),
    ("h", "...O. ...O."),
    ("i", "..... ...O."),
    ("j", "....O ....O"),
    ("k", ".OO.. ....."),
    ("l", ".O... .O..."),
    ("m", "....O ...O."),
    ("n", ".O... ....."),
    ("o", "..... O...."),
    ("p", "..... .OO.."),
    ("q", ".O... ....O"),
    ("r", "...O. O...."),
    ("s", "...O. ..O.."),
    ("t", "..... ..O.."),
    ("u", ".O... ..O.."),
    ("v", "..... ..OO."),
    ("w", "...OO ....."),
    ("x", "O.... ....."),
    ("y", "..... OO..."),
    ("z", "..... O...O"),
    ("{", "....O .OO.."),
    ("|", "..OO. ..O.."),
    ("}", "..OO. O...."),
    ("~", ".O.O. O...."),
    ("£", "....O .O..O"),
    ("¬", "O.... OO..."),
];

/// English letter frequency order, then punctuation, digits and rare keys.
const FREE_KEYS: &[&str] = &[
    "e", "t", "a", "o", "i", "n", "s", "r", "h", "l", "d", "c", "u", "m", "f", "g", "p", "y",
    "w", "b", ",", ".", "v", "k", "-", "\"", "'", "x", ";", "0", "j", "1", "q", "=", "2", ":",
    "z", "/", "*", "!", "?", "$", "3", "5", "4", "9", "8", "6", "7", "\\", "+", "|", "&", "%",
    "@", "#", "^", "`", "~", "£", "INSERT", "DELETE", "¬",
];

/// The bundled hand-tuned layout.
pub fn default_fixed_table() -> CfResult<FixedTable> {
    FixedTable::from_patterns(FIXED_PATTERNS)
}

/// The bundled frequency-ordered free list. Overlaps the fixed table; reduce
/// it with [`FreeList::without_fixed`] before building.
pub fn default_free_list() -> FreeList {
    FreeList::new(FREE_KEYS.iter().copied())
}

/// Shell shortcuts bound to four-key chords outside the assignable universe.
pub fn default_macros() -> CfResult<Vec<MacroDef>> {
    Ok(vec![
        MacroDef::typing("..OOO O....", "bundle exec ", &[])?,
        MacroDef::typing("..OOO .O...", "git status", &["RETURN"])?,
        MacroDef::typing("..OOO ..O..", "git commit -m ''", &["LEFT_ARROW"])?,
        MacroDef::typing(
            "..OOO ...O.",
            "git log --decorate --graph --oneline",
            &["RETURN"],
        )?,
    ])
}

/// Loads macro definitions from a JSON array of `{ "trigger", "keys" }`.
pub fn load_macros_from_file<P: AsRef<Path>>(path: P) -> CfResult<Vec<MacroDef>> {
    let content = fs::read_to_string(path.as_ref())?;
    let defs: Vec<MacroDef> = serde_json::from_str(&content)?;
    if defs.iter().any(|d| d.keys.is_empty()) {
        return Err(ChordError::Config(
            "macro definitions must type at least one key".to_string(),
        ));
    }
    Ok(defs)
}
