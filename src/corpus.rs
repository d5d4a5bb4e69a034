use crate::error::{CfResult, ChordError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads one word per line. Blank lines are skipped, surrounding whitespace trimmed.
pub fn load_words_from_reader<R: Read>(reader: R) -> CfResult<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0;

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            skipped += 1;
            continue;
        }
        words.push(word.to_string());
    }

    if skipped > 0 {
        debug!("Skipped {} blank lines in corpus", skipped);
    }
    Ok(words)
}

/// Loads a word list.
///
/// Open and read failures are `CorpusUnavailable`; a file that is not
/// UTF-8 text is `MalformedCorpus`.
pub fn load_words<P: AsRef<Path>>(path: P) -> CfResult<Vec<String>> {
    let path = path.as_ref();
    let unavailable = |source: io::Error| ChordError::CorpusUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let words = load_words_from_reader(file).map_err(|e| match e {
        ChordError::Io(source) if source.kind() == io::ErrorKind::InvalidData => {
            ChordError::MalformedCorpus {
                path: path.to_path_buf(),
                source,
            }
        }
        ChordError::Io(source) => unavailable(source),
        other => other,
    })?;

    info!("📚 Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
