use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    #[error("Invalid Chord: {0}")]
    InvalidChord(String),

    #[error("Duplicate Key: '{0}' is assigned more than once")]
    DuplicateKey(String),

    #[error("Unknown Fixed Chord: '{key}' uses [{chord}], which is outside the chord universe")]
    UnknownFixedChord { key: String, chord: String },

    #[error("Duplicate Chord: [{chord}] is shared by '{first}' and '{second}'")]
    DuplicateChord {
        chord: String,
        first: String,
        second: String,
    },

    #[error("Unmapped Character: '{character}' in '{word}' has no chord")]
    UnmappedCharacter { character: String, word: String },

    #[error("Corpus Unavailable: could not read '{}': {source}", path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed Corpus: '{}' is not valid UTF-8 text: {source}", path.display())]
    MalformedCorpus {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing Scancode: no keystroke defined for '{0}'")]
    MissingScancode(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CfResult<T> = Result<T, ChordError>;
