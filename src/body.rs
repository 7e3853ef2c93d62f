// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body pose classification.
//!
//! Consumes the six arm joints and evaluates a fixed-priority rule list:
//! pray, then shrug, then muscle, with [`BodyPose::Unsure`] as the total
//! fallback. All thresholds are in normalized image units.

use std::fmt;

use crate::geometry::{distance, normalized_dot_product};
use crate::landmark::{JointId, LandmarkSet};

/// Maximum wrist-to-wrist distance for hands held together.
const WRISTS_TOGETHER_MAX: f32 = 0.2;

/// Maximum horizontal wrist drift from its own elbow for a shrug.
const SHRUG_WRIST_DRIFT_MAX: f32 = 0.15;

/// Cosine band in which the upper and lower arm count as perpendicular.
const MUSCLE_COS_BAND: std::ops::RangeInclusive<f32> = -0.3..=0.3;

/// Body poses the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPose {
    /// Hands brought together near the body centerline.
    Pray,
    /// Forearms raised with each wrist near vertically above its elbow.
    Shrug,
    /// Right arm flexed, upper and lower arm close to perpendicular.
    Muscle,
    /// No recognized pose, or not enough landmarks to evaluate one.
    Unsure,
}

impl BodyPose {
    /// Classify the pose shown by a set of recognized arm landmarks.
    ///
    /// Total and infallible. All six arm joints (both wrists, elbows, and
    /// shoulders) must be present; if any is absent the result is
    /// [`Self::Unsure`] - there is no partial-arm evaluation. When several
    /// rule predicates hold at once the first in priority order wins.
    ///
    /// # Arguments
    ///
    /// * `landmarks` - The recognized body landmarks for this frame.
    ///
    /// # Returns
    ///
    /// * The matching pose.
    #[must_use]
    pub fn classify(landmarks: &LandmarkSet) -> Self {
        let (
            Some(left_wrist),
            Some(left_elbow),
            Some(left_shoulder),
            Some(right_wrist),
            Some(right_elbow),
            Some(right_shoulder),
        ) = (
            landmarks.get(JointId::LeftWrist),
            landmarks.get(JointId::LeftElbow),
            landmarks.get(JointId::LeftShoulder),
            landmarks.get(JointId::RightWrist),
            landmarks.get(JointId::RightElbow),
            landmarks.get(JointId::RightShoulder),
        )
        else {
            return Self::Unsure;
        };

        // Pray: wrists together, between the shoulders
        let shoulder_span = if left_shoulder.x <= right_shoulder.x {
            left_shoulder.x..=right_shoulder.x
        } else {
            right_shoulder.x..=left_shoulder.x
        };
        if distance(left_wrist, right_wrist) < WRISTS_TOGETHER_MAX
            && shoulder_span.contains(&left_wrist.x)
        {
            return Self::Pray;
        }

        // Shrug: both wrists below their elbows (larger y = lower) and
        // nearly vertically aligned with them
        if left_wrist.y > left_elbow.y
            && right_wrist.y > right_elbow.y
            && (left_wrist.x - left_elbow.x).abs() < SHRUG_WRIST_DRIFT_MAX
            && (right_wrist.x - right_elbow.x).abs() < SHRUG_WRIST_DRIFT_MAX
        {
            return Self::Shrug;
        }

        // Muscle: right arm only - the flexed-bicep angle at the elbow
        if right_wrist.y > right_elbow.y
            && MUSCLE_COS_BAND.contains(&normalized_dot_product(
                right_elbow,
                right_wrist,
                right_shoulder,
            ))
        {
            return Self::Muscle;
        }

        Self::Unsure
    }

    /// Returns the string representation of this pose.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pray => "pray",
            Self::Shrug => "shrug",
            Self::Muscle => "muscle",
            Self::Unsure => "unsure",
        }
    }

    /// Returns the emoji glyph for this pose (empty for `Unsure`).
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Pray => "🙏",
            Self::Shrug => "🤷",
            Self::Muscle => "💪",
            Self::Unsure => "",
        }
    }

    /// Returns whether this is a recognized pose rather than the fallback.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unsure)
    }
}

impl fmt::Display for BodyPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
