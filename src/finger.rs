// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Finger-extension feature extraction.
//!
//! A finger counts as extended when its tip sits farther from the wrist than
//! its PIP joint - a cheap, rotation-tolerant proxy for "straightened
//! outward" that needs no 3-D pose. The thumb gets its own angular test; the
//! radial test misreads it in most hand orientations.

use crate::geometry::{distance, normalized_dot_product};
use crate::landmark::{JointId, LandmarkSet, Point};

/// Maximum cosine between the wrist→thumb-tip direction and the palm axis
/// (wrist→index-PIP) for the thumb to count as extended. Below this the
/// thumb has splayed away from the palm by more than ~25 degrees.
pub const THUMB_SPLAY_COS_MAX: f32 = 0.9;

/// Distances below this are treated as degenerate.
const DEGENERATE_DISTANCE: f32 = 1e-6;

/// The five fingers of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    /// Thumb.
    Thumb,
    /// Index finger.
    Index,
    /// Middle finger.
    Middle,
    /// Ring finger.
    Ring,
    /// Little finger.
    Little,
}

impl Finger {
    /// All five fingers.
    pub const ALL: [Self; 5] = [
        Self::Thumb,
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Little,
    ];

    /// Returns the string representation of this finger.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Little => "little",
        }
    }

    /// Returns the tip joint of this finger.
    #[must_use]
    pub const fn tip(self) -> JointId {
        match self {
            Self::Thumb => JointId::ThumbTip,
            Self::Index => JointId::IndexTip,
            Self::Middle => JointId::MiddleTip,
            Self::Ring => JointId::RingTip,
            Self::Little => JointId::LittleTip,
        }
    }

    /// Returns the PIP joint of this finger (the IP joint for the thumb).
    #[must_use]
    pub const fn pip(self) -> JointId {
        match self {
            Self::Thumb => JointId::ThumbIp,
            Self::Index => JointId::IndexPip,
            Self::Middle => JointId::MiddlePip,
            Self::Ring => JointId::RingPip,
            Self::Little => JointId::LittlePip,
        }
    }

    /// Test whether this finger is extended.
    ///
    /// Fails closed: if the wrist, the finger's tip, or the joints the test
    /// needs are absent from `landmarks`, the finger is reported not
    /// extended. Never errors.
    ///
    /// # Arguments
    ///
    /// * `landmarks` - The recognized hand landmarks for this frame.
    ///
    /// # Returns
    ///
    /// * `true` if the finger is extended.
    #[must_use]
    pub fn is_extended(self, landmarks: &LandmarkSet) -> bool {
        let Some(wrist) = landmarks.get(JointId::Wrist) else {
            return false;
        };

        match self {
            Self::Thumb => thumb_extends(landmarks, wrist),
            _ => extends(
                landmarks.get(self.tip()),
                landmarks.get(self.pip()),
                wrist,
            ),
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Radial extension test: the fingertip is farther from the wrist than the
/// knuckle.
fn extends(tip: Option<Point>, pip: Option<Point>, wrist: Point) -> bool {
    let (Some(tip), Some(pip)) = (tip, pip) else {
        return false;
    };

    distance(tip, wrist) > distance(pip, wrist)
}

/// Angular extension test for the thumb.
///
/// The thumb has no PIP joint laid out like the other fingers, so the radial
/// test misclassifies it. Instead, measure how far the thumb tip has splayed
/// away from the palm axis (wrist toward the index PIP): a tucked thumb
/// points along the palm, an extended thumb points well away from it.
fn thumb_extends(landmarks: &LandmarkSet, wrist: Point) -> bool {
    let (Some(tip), Some(palm)) = (
        landmarks.get(JointId::ThumbTip),
        landmarks.get(JointId::IndexPip),
    ) else {
        return false;
    };

    // A thumb tip or index PIP sitting on the wrist has no direction
    if distance(tip, wrist) < DEGENERATE_DISTANCE || distance(palm, wrist) < DEGENERATE_DISTANCE {
        return false;
    }

    normalized_dot_product(wrist, tip, palm) < THUMB_SPLAY_COS_MAX
}

/// A set of fingers backed by a bitmask.
///
/// Set equality is exact, which is what the gesture table matches on; no
/// allocation happens per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FingerSet(u8);

impl FingerSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// All five fingers.
    pub const ALL: Self = Self::of(&Finger::ALL);

    /// Build a set from a slice of fingers.
    ///
    /// # Arguments
    ///
    /// * `fingers` - The fingers to include.
    ///
    /// # Returns
    ///
    /// * A new `FingerSet` instance.
    #[must_use]
    pub const fn of(fingers: &[Finger]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < fingers.len() {
            bits |= 1 << fingers[i] as u8;
            i += 1;
        }
        Self(bits)
    }

    /// Returns the set with `finger` added.
    #[must_use]
    pub const fn with(self, finger: Finger) -> Self {
        Self(self.0 | 1 << finger as u8)
    }

    /// Add a finger to the set.
    pub fn insert(&mut self, finger: Finger) {
        *self = self.with(finger);
    }

    /// Returns whether the set contains `finger`.
    #[must_use]
    pub const fn contains(self, finger: Finger) -> bool {
        self.0 & (1 << finger as u8) != 0
    }

    /// Get the number of fingers in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the fingers in the set.
    pub fn iter(self) -> impl Iterator<Item = Finger> {
        Finger::ALL.into_iter().filter(move |&f| self.contains(f))
    }
}

impl FromIterator<Finger> for FingerSet {
    fn from_iter<I: IntoIterator<Item = Finger>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for finger in iter {
            set.insert(finger);
        }
        set
    }
}

/// Collect the set of extended fingers from recognized hand landmarks.
///
/// Returns the empty set when the wrist is absent - no finger can be
/// evaluated without the reference point.
///
/// # Arguments
///
/// * `landmarks` - The recognized hand landmarks for this frame.
///
/// # Returns
///
/// * The set of fingers for which the extension test holds.
#[must_use]
pub fn extended_fingers(landmarks: &LandmarkSet) -> FingerSet {
    if !landmarks.contains(JointId::Wrist) {
        return FingerSet::EMPTY;
    }

    Finger::ALL
        .into_iter()
        .filter(|finger| finger.is_extended(landmarks))
        .collect()
}
