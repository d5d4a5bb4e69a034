pub mod features;

pub use self::features::ComfortFeature;

use crate::chord::{Chord, Finger, FingerMap, Hand};
use crate::consts::COMFORT_FEATURE_COUNT;
use strum::IntoEnumIterator;

/// Flags for every [`ComfortFeature`], indexed by priority.
pub type FeatureVector = [bool; COMFORT_FEATURE_COUNT];

/// Ranks chords by ergonomic comfort. Higher is better.
///
/// The score packs the feature vector into decimal digits so that a plain
/// integer comparison is a lexicographic comparison of the features.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComfortScorer {
    fingers: FingerMap,
}

impl ComfortScorer {
    pub fn new(fingers: FingerMap) -> Self {
        Self { fingers }
    }

    pub fn fingers(&self) -> &FingerMap {
        &self.fingers
    }

    pub fn features(&self, chord: &Chord) -> FeatureVector {
        let f = &self.fingers;
        let bits = chord.bits();
        let uses = |finger: Finger| bits & f.finger_mask(finger) != 0;

        let pinky = uses(Finger::Pinky);
        let one = chord.len() == 1;
        let two = chord.len() == 2;
        let both_pinkies = f.finger_mask(Finger::Pinky);
        let one_hand = chord.is_subset_of_mask(f.hand_mask(Hand::Left))
            || chord.is_subset_of_mask(f.hand_mask(Hand::Right));

        let mut out = [false; COMFORT_FEATURE_COUNT];
        for feature in ComfortFeature::iter() {
            out[feature.priority()] = match feature {
                ComfortFeature::Feasible => chord.is_feasible(f),
                ComfortFeature::NotBothPinkies => bits & both_pinkies != both_pinkies,
                ComfortFeature::SingleWithoutPinky => one && !pinky,
                ComfortFeature::DoubleWithoutPinky => two && !pinky,
                ComfortFeature::SingleWithPinky => one && pinky,
                ComfortFeature::DoubleWithPinky => two && pinky,
                ComfortFeature::SpansHands => !one_hand,
                ComfortFeature::UsesIndex => uses(Finger::Index),
                ComfortFeature::UsesMiddle => uses(Finger::Middle),
                ComfortFeature::UsesThumb => uses(Finger::Thumb),
                ComfortFeature::UsesRing => uses(Finger::Ring),
                ComfortFeature::UsesPinky => pinky,
            };
        }
        out
    }

    pub fn score(&self, chord: &Chord) -> u64 {
        score_features(&self.features(chord))
    }
}

pub fn score_features(features: &FeatureVector) -> u64 {
    ComfortFeature::iter()
        .filter(|f| features[f.priority()])
        .map(ComfortFeature::weight)
        .sum()
}
