// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Hand gesture classification.
//!
//! Maps the set of extended fingers onto a closed list of gestures. The
//! mapping is total: every one of the 32 possible finger subsets lands on
//! exactly one gesture, with [`HandGesture::Unsure`] absorbing everything
//! the table does not name.

use std::fmt;

use crate::finger::{Finger, FingerSet, extended_fingers};
use crate::landmark::{JointId, LandmarkSet};

/// Extended-finger subsets the classifier recognizes.
const METAL: FingerSet = FingerSet::of(&[Finger::Index, Finger::Little]);
const PEACE: FingerSet = FingerSet::of(&[Finger::Index, Finger::Middle]);
const CALL_ME: FingerSet = FingerSet::of(&[Finger::Thumb, Finger::Little]);
const POINTING: FingerSet = FingerSet::of(&[Finger::Index]);
const THUMBS_UP: FingerSet = FingerSet::of(&[Finger::Thumb]);

/// Hand gestures the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandGesture {
    /// Open hand, all five fingers extended.
    Five,
    /// Index and little finger extended.
    Metal,
    /// Index and middle finger extended.
    Peace,
    /// Thumb and little finger extended.
    CallMe,
    /// Index finger extended.
    Pointing,
    /// Thumb extended.
    ThumbsUp,
    /// No finger extended.
    Fist,
    /// No recognized gesture, or not enough landmarks to evaluate one.
    Unsure,
}

impl HandGesture {
    /// Classify the gesture shown by a set of recognized hand landmarks.
    ///
    /// Total and infallible: missing joints route to defined fallbacks
    /// rather than errors. Without a wrist no gesture is evaluable and the
    /// result is [`Self::Unsure`].
    ///
    /// # Arguments
    ///
    /// * `landmarks` - The recognized hand landmarks for this frame.
    ///
    /// # Returns
    ///
    /// * The matching gesture.
    #[must_use]
    pub fn classify(landmarks: &LandmarkSet) -> Self {
        // Every gesture measures against the wrist
        if !landmarks.contains(JointId::Wrist) {
            return Self::Unsure;
        }

        match extended_fingers(landmarks) {
            FingerSet::ALL => Self::Five,
            METAL => Self::Metal,
            PEACE => Self::Peace,
            CALL_ME => Self::CallMe,
            POINTING => Self::Pointing,
            THUMBS_UP => Self::ThumbsUp,
            FingerSet::EMPTY => Self::Fist,
            _ => Self::Unsure,
        }
    }

    /// Returns the string representation of this gesture.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Five => "five",
            Self::Metal => "metal",
            Self::Peace => "peace",
            Self::CallMe => "call_me",
            Self::Pointing => "pointing",
            Self::ThumbsUp => "thumbs_up",
            Self::Fist => "fist",
            Self::Unsure => "unsure",
        }
    }

    /// Returns the display label for this gesture (empty for `Unsure`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Five => "Five",
            Self::Metal => "Rock On",
            Self::Peace => "Peace",
            Self::CallMe => "Call Me",
            Self::Pointing => "Pointing",
            Self::ThumbsUp => "Thumbs Up",
            Self::Fist => "Fist",
            Self::Unsure => "",
        }
    }

    /// Returns the emoji glyph for this gesture (empty for `Unsure`).
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Five => "👋",
            Self::Metal => "🤘",
            Self::Peace => "✌️",
            Self::CallMe => "🤙",
            Self::Pointing => "☝️",
            Self::ThumbsUp => "👍",
            Self::Fist => "✊",
            Self::Unsure => "",
        }
    }

    /// Returns whether this is a recognized gesture rather than the fallback.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unsure)
    }
}

impl fmt::Display for HandGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_recognized() {
            write!(f, "{} {}", self.label(), self.emoji())
        } else {
            write!(f, "{}", self.as_str())
        }
    }
}
