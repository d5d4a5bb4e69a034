use crate::consts::COMFORT_FEATURE_COUNT;
use strum_macros::{Display, EnumIter};

/// Ergonomic features in priority order. Earlier variants dominate every
/// later variant combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ComfortFeature {
    Feasible,
    NotBothPinkies,
    SingleWithoutPinky,
    DoubleWithoutPinky,
    SingleWithPinky,
    DoubleWithPinky,
    SpansHands,
    UsesIndex,
    UsesMiddle,
    UsesThumb,
    UsesRing,
    UsesPinky,
}

impl ComfortFeature {
    #[inline(always)]
    pub fn priority(self) -> usize {
        self as usize
    }

    /// Decimal place value: 10^(11 - priority).
    #[inline(always)]
    pub fn weight(self) -> u64 {
        10u64.pow((COMFORT_FEATURE_COUNT - 1 - self.priority()) as u32)
    }

    /// Column heading used in chord listings.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Feasible => "Fea",
            Self::NotBothPinkies => "!PP",
            Self::SingleWithoutPinky => "1",
            Self::DoubleWithoutPinky => "2",
            Self::SingleWithPinky => "1P",
            Self::DoubleWithPinky => "2P",
            Self::SpansHands => "LR",
            Self::UsesIndex => "Idx",
            Self::UsesMiddle => "Mid",
            Self::UsesThumb => "Thb",
            Self::UsesRing => "Rng",
            Self::UsesPinky => "Pnk",
        }
    }
}
