use crate::consts::{HAND_SIZE, KEY_COUNT, PRESSED, RELEASED};
use crate::error::{CfResult, ChordError};
use crate::scorer::ComfortScorer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Index of one of the 10 physical keys (0..=9).
pub type KeyPosition = u8;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

/// Assignment of every key position to the hand and finger that presses it.
///
/// The map is passed explicitly into scoring so alternative boards can be
/// evaluated without touching global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerMap {
    assignments: [(Hand, Finger); KEY_COUNT],
}

impl Default for FingerMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl FingerMap {
    /// Left hand pinky..thumb on 0..=4, right hand thumb..pinky on 5..=9.
    pub fn standard() -> Self {
        use Finger::*;
        use Hand::*;
        Self {
            assignments: [
                (Left, Pinky),
                (Left, Ring),
                (Left, Middle),
                (Left, Index),
                (Left, Thumb),
                (Right, Thumb),
                (Right, Index),
                (Right, Middle),
                (Right, Ring),
                (Right, Pinky),
            ],
        }
    }

    /// Builds a custom map. Every (hand, finger) pair must occur exactly once.
    pub fn new(assignments: [(Hand, Finger); KEY_COUNT]) -> CfResult<Self> {
        for hand in Hand::iter() {
            for finger in Finger::iter() {
                let count = assignments
                    .iter()
                    .filter(|&&(h, f)| h == hand && f == finger)
                    .count();
                if count != 1 {
                    return Err(ChordError::Config(format!(
                        "finger map must assign {} {} exactly once (found {})",
                        hand, finger, count
                    )));
                }
            }
        }
        Ok(Self { assignments })
    }

    pub fn assignment(&self, pos: KeyPosition) -> Option<(Hand, Finger)> {
        self.assignments.get(pos as usize).copied()
    }

    /// Bitmask of the single key pressed by `finger` on `hand`.
    pub fn mask(&self, hand: Hand, finger: Finger) -> u16 {
        self.mask_where(|h, f| h == hand && f == finger)
    }

    /// Bitmask of `finger` on both hands.
    pub fn finger_mask(&self, finger: Finger) -> u16 {
        self.mask_where(|_, f| f == finger)
    }

    pub fn hand_mask(&self, hand: Hand) -> u16 {
        self.mask_where(|h, _| h == hand)
    }

    fn mask_where(&self, pred: impl Fn(Hand, Finger) -> bool) -> u16 {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, &(h, f))| pred(h, f))
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }
}

/// A set of simultaneously pressed keys, stored as a 10-bit mask
/// (bit `i` = key position `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Chord(u16);

const VALID_MASK: u16 = (1 << KEY_COUNT) - 1;

impl Chord {
    pub fn new(positions: &[KeyPosition]) -> CfResult<Self> {
        let mut bits = 0u16;
        for &pos in positions {
            if pos as usize >= KEY_COUNT {
                return Err(ChordError::InvalidChord(format!(
                    "position {} is outside 0..{}",
                    pos, KEY_COUNT
                )));
            }
            let bit = 1 << pos;
            if bits & bit != 0 {
                return Err(ChordError::InvalidChord(format!(
                    "position {} is listed twice",
                    pos
                )));
            }
            bits |= bit;
        }
        Ok(Self(bits))
    }

    pub fn from_bits(bits: u16) -> CfResult<Self> {
        if bits & !VALID_MASK != 0 {
            return Err(ChordError::InvalidChord(format!(
                "bitmask {:#b} uses keys beyond position {}",
                bits,
                KEY_COUNT - 1
            )));
        }
        Ok(Self(bits))
    }

    /// Parses the `"LLLLL RRRRR"` presence form, e.g. `"....O ....."`.
    pub fn parse(pattern: &str) -> CfResult<Self> {
        let malformed = || {
            ChordError::InvalidChord(format!(
                "'{}' is not of the form \"LLLLL RRRRR\" using '{}' and '{}'",
                pattern, PRESSED, RELEASED
            ))
        };

        let (left, right) = pattern.split_once(' ').ok_or_else(malformed)?;
        if left.chars().count() != HAND_SIZE || right.chars().count() != HAND_SIZE {
            return Err(malformed());
        }

        let mut bits = 0u16;
        for (i, c) in left.chars().chain(right.chars()).enumerate() {
            match c {
                PRESSED => bits |= 1 << i,
                RELEASED => {}
                _ => return Err(malformed()),
            }
        }
        Ok(Self(bits))
    }

    #[inline(always)]
    pub fn bits(&self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn contains(&self, pos: KeyPosition) -> bool {
        (pos as usize) < KEY_COUNT && self.0 & (1 << pos) != 0
    }

    /// True when at least one key is held in both chords.
    #[inline(always)]
    pub fn overlaps(&self, other: &Chord) -> bool {
        self.0 & other.0 != 0
    }

    /// Keys pressed in `self` but not in `other`.
    #[inline(always)]
    pub fn difference(&self, other: &Chord) -> Chord {
        Chord(self.0 & !other.0)
    }

    #[inline(always)]
    pub fn is_subset_of_mask(&self, mask: u16) -> bool {
        self.0 & !mask == 0
    }

    #[inline(always)]
    pub fn is_subset_of(&self, other: &Chord) -> bool {
        self.is_subset_of_mask(other.0)
    }

    pub fn positions(&self) -> impl Iterator<Item = KeyPosition> + '_ {
        (0..KEY_COUNT as u8).filter(move |&p| self.contains(p))
    }

    fn render(&self, pressed: char, released: char) -> (String, String) {
        let flag = |p: usize| if self.contains(p as u8) { pressed } else { released };
        let left = (0..HAND_SIZE).map(flag).collect();
        let right = (HAND_SIZE..KEY_COUNT).map(flag).collect();
        (left, right)
    }

    /// `O`/`.` per key, hands separated by a space.
    pub fn presence_string(&self) -> String {
        let (left, right) = self.render(PRESSED, RELEASED);
        format!("{} {}", left, right)
    }

    /// `1`/`0` per key in presence order, no separator.
    pub fn encode(&self) -> String {
        let (left, right) = self.render('1', '0');
        left + &right
    }

    /// The encoded flag string read as a decimal numeral.
    ///
    /// Kept for ordering compatibility with existing firmware tables; see
    /// [`Chord::binary_value`] for the real base-2 reading. Both orders agree.
    pub fn identifier(&self) -> u64 {
        (0..KEY_COUNT as u8).fold(0, |acc, p| acc * 10 + self.contains(p) as u64)
    }

    /// The encoded flag string read as binary (position 0 is the high bit).
    pub fn binary_value(&self) -> u16 {
        (0..KEY_COUNT as u8).fold(0, |acc, p| (acc << 1) | self.contains(p) as u16)
    }

    /// Anatomically possible on both hands: no pinky + middle without ring.
    pub fn is_feasible(&self, fingers: &FingerMap) -> bool {
        Hand::iter().all(|hand| {
            let pinky = fingers.mask(hand, Finger::Pinky);
            let ring = fingers.mask(hand, Finger::Ring);
            let middle = fingers.mask(hand, Finger::Middle);
            let straddle = pinky | middle;
            !(self.0 & straddle == straddle && self.0 & ring == 0)
        })
    }

    pub fn comfort(&self, fingers: &FingerMap) -> u64 {
        ComfortScorer::new(*fingers).score(self)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.presence_string())
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

impl TryFrom<String> for Chord {
    type Error = ChordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Chord::parse(&s)
    }
}

impl From<Chord> for String {
    fn from(chord: Chord) -> Self {
        chord.presence_string()
    }
}
