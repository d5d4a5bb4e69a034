use crate::consts::{DEFAULT_MAX_CHORD_SIZE, DEFAULT_PIVOT_REPORT_LIMIT, KEY_COUNT};
use crate::error::{CfResult, ChordError};
use crate::pivot::MergePolicy;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub engine: EngineConfig,
    #[command(flatten)]
    pub pivots: PivotConfig,
    #[command(flatten)]
    pub tables: TableSources,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Physical keys taking part in chords (at most 10).
    #[arg(long, global = true, default_value_t = KEY_COUNT)]
    pub key_count: usize,
    /// Largest chord the universe enumerates.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CHORD_SIZE)]
    pub max_chord_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            key_count: KEY_COUNT,
            max_chord_size: DEFAULT_MAX_CHORD_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> CfResult<()> {
        if self.key_count == 0 || self.key_count > KEY_COUNT {
            return Err(ChordError::Config(format!(
                "--key-count must be in 1..={} (got {})",
                KEY_COUNT, self.key_count
            )));
        }
        if self.max_chord_size == 0 || self.max_chord_size > self.key_count {
            return Err(ChordError::Config(format!(
                "--max-chord-size must be in 1..={} (got {})",
                self.key_count, self.max_chord_size
            )));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    #[arg(long, global = true, value_enum, default_value_t = MergePolicy::MultiKey)]
    pub merge_policy: MergePolicy,
    /// Number of pivots in the report.
    #[arg(long, global = true, default_value_t = DEFAULT_PIVOT_REPORT_LIMIT)]
    pub top: usize,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            merge_policy: MergePolicy::MultiKey,
            top: DEFAULT_PIVOT_REPORT_LIMIT,
        }
    }
}

/// Where the externally supplied tables come from. `None` means bundled.
#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TableSources {
    /// JSON fixed table: `[{"key": "a", "chord": "..O.. ....."}, ...]`.
    #[arg(long, global = true)]
    pub fixed: Option<PathBuf>,
    /// JSON free list: `["e", "t", ...]`.
    #[arg(long, global = true)]
    pub free: Option<PathBuf>,
    /// Keep bundled free keys the fixed table already places (the build then
    /// fails). A `--free` file is never reduced.
    #[arg(long, global = true, default_value_t = false)]
    pub strict_free_list: bool,
    /// CSV scancode table (`token,modifier,usage`).
    #[arg(long, global = true)]
    pub scancodes: Option<PathBuf>,
    /// JSON macro definitions.
    #[arg(long, global = true)]
    pub macros: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies every value the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(engine.key_count);
        update_if_present!(engine.max_chord_size);

        update_if_present!(pivots.merge_policy);
        update_if_present!(pivots.top);

        update_if_present!(tables.fixed);
        update_if_present!(tables.free);
        update_if_present!(tables.strict_free_list);
        update_if_present!(tables.scancodes);
        update_if_present!(tables.macros);
    }
}
