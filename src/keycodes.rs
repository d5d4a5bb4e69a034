use crate::error::{CfResult, ChordError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Modifier the firmware holds while sending the usage code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Modifier {
    #[default]
    None,
    Shift,
    AltGr,
}

/// Platform keystroke for one key: a USB HID usage id plus modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keystroke {
    pub modifier: Modifier,
    pub usage: u8,
}

impl Keystroke {
    pub const fn plain(usage: u8) -> Self {
        Self {
            modifier: Modifier::None,
            usage,
        }
    }

    pub const fn shifted(usage: u8) -> Self {
        Self {
            modifier: Modifier::Shift,
            usage,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScancodeRow {
    token: String,
    modifier: String,
    usage: String,
}

/// Maps key tokens to keystrokes for one target platform.
#[derive(Debug, Clone, Default)]
pub struct ScancodeTable {
    entries: HashMap<String, Keystroke>,
}

// CSV-hostile tokens are written by name.
fn decode_token(token: &str) -> &str {
    match token {
        "COMMA" => ",",
        "SPACE" => " ",
        other => other,
    }
}

fn parse_usage(raw: &str) -> Option<u8> {
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

impl ScancodeTable {
    pub fn insert(&mut self, token: impl Into<String>, keystroke: Keystroke) {
        self.entries.insert(token.into(), keystroke);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<Keystroke> {
        self.entries.get(token).copied()
    }

    pub fn lookup(&self, token: &str) -> CfResult<Keystroke> {
        self.get(token)
            .ok_or_else(|| ChordError::MissingScancode(token.to_string()))
    }

    /// CSV with a `token,modifier,usage` header. Usage may be decimal or `0x` hex.
    pub fn load_from_reader<R: Read>(reader: R) -> CfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let mut table = Self::default();
        for (row_idx, result) in rdr.deserialize::<ScancodeRow>().enumerate() {
            let row = result?;
            let modifier = Modifier::from_str(&row.modifier).map_err(|_| {
                ChordError::Config(format!(
                    "scancode row {}: unknown modifier '{}'",
                    row_idx + 1,
                    row.modifier
                ))
            })?;
            let usage = parse_usage(&row.usage).ok_or_else(|| {
                ChordError::Config(format!(
                    "scancode row {}: invalid usage '{}'",
                    row_idx + 1,
                    row.usage
                ))
            })?;
            table.insert(decode_token(&row.token), Keystroke { modifier, usage });
        }

        debug!("Loaded {} scancodes", table.len());
        Ok(table)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        Self::load_from_reader(File::open(path)?)
    }

    /// USB HID usages for a UK ISO layout.
    pub fn uk_default() -> Self {
        let mut t = Self::default();

        for (i, c) in ('a'..='z').enumerate() {
            t.insert(c.to_string(), Keystroke::plain(0x04 + i as u8));
        }
        // 1..9 then 0 on 0x1E..0x27; shifted symbols follow the UK legends.
        let digits = "1234567890";
        let shifted = ['!', '"', '£', '$', '%', '^', '&', '*', '(', ')'];
        for (i, (d, s)) in digits.chars().zip(shifted).enumerate() {
            t.insert(d.to_string(), Keystroke::plain(0x1E + i as u8));
            t.insert(s.to_string(), Keystroke::shifted(0x1E + i as u8));
        }

        let symbols: &[(&str, &str, u8)] = &[
            ("-", "_", 0x2D),
            ("=", "+", 0x2E),
            ("[", "{", 0x2F),
            ("]", "}", 0x30),
            ("#", "~", 0x32),
            (";", ":", 0x33),
            ("'", "@", 0x34),
            ("`", "¬", 0x35),
            (",", "<", 0x36),
            (".", ">", 0x37),
            ("/", "?", 0x38),
            ("\\", "|", 0x64),
        ];
        for &(plain, shift, usage) in symbols {
            t.insert(plain, Keystroke::plain(usage));
            t.insert(shift, Keystroke::shifted(usage));
        }

        let controls: &[(&str, u8)] = &[
            ("RETURN", 0x28),
            ("ESC", 0x29),
            ("BACKSPACE", 0x2A),
            ("TAB", 0x2B),
            (" ", 0x2C),
            ("INSERT", 0x49),
            ("HOME", 0x4A),
            ("PAGE_UP", 0x4B),
            ("DELETE", 0x4C),
            ("END", 0x4D),
            ("PAGE_DOWN", 0x4E),
            ("RIGHT_ARROW", 0x4F),
            ("LEFT_ARROW", 0x50),
            ("DOWN_ARROW", 0x51),
            ("UP_ARROW", 0x52),
        ];
        for &(token, usage) in controls {
            t.insert(token, Keystroke::plain(usage));
        }

        t
    }
}
