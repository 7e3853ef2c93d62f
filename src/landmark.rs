// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark types shared by the hand and body classifiers.
//!
//! This module defines the named joints a pose oracle can report, the
//! recognized point type (position + confidence), and the per-frame
//! [`LandmarkSet`] container the classifiers consume.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Named anatomical landmarks, split into two disjoint families.
///
/// Hand joints cover the wrist plus the tip and PIP joint of each finger
/// (the thumb's second joint is its IP joint and fills the PIP slot).
/// Body joints cover the six arm landmarks the body classifier consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointId {
    /// Hand wrist - the reference point for all finger measurements.
    Wrist,
    /// Thumb tip.
    ThumbTip,
    /// Thumb IP joint.
    ThumbIp,
    /// Index finger tip.
    IndexTip,
    /// Index finger PIP joint.
    IndexPip,
    /// Middle finger tip.
    MiddleTip,
    /// Middle finger PIP joint.
    MiddlePip,
    /// Ring finger tip.
    RingTip,
    /// Ring finger PIP joint.
    RingPip,
    /// Little finger tip.
    LittleTip,
    /// Little finger PIP joint.
    LittlePip,
    /// Left wrist (body).
    LeftWrist,
    /// Left elbow (body).
    LeftElbow,
    /// Left shoulder (body).
    LeftShoulder,
    /// Right wrist (body).
    RightWrist,
    /// Right elbow (body).
    RightElbow,
    /// Right shoulder (body).
    RightShoulder,
}

impl JointId {
    /// Returns the snake_case string name used in frame records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbTip => "thumb_tip",
            Self::ThumbIp => "thumb_ip",
            Self::IndexTip => "index_tip",
            Self::IndexPip => "index_pip",
            Self::MiddleTip => "middle_tip",
            Self::MiddlePip => "middle_pip",
            Self::RingTip => "ring_tip",
            Self::RingPip => "ring_pip",
            Self::LittleTip => "little_tip",
            Self::LittlePip => "little_pip",
            Self::LeftWrist => "left_wrist",
            Self::LeftElbow => "left_elbow",
            Self::LeftShoulder => "left_shoulder",
            Self::RightWrist => "right_wrist",
            Self::RightElbow => "right_elbow",
            Self::RightShoulder => "right_shoulder",
        }
    }

    /// Returns whether this joint belongs to the hand family.
    #[must_use]
    pub const fn is_hand(&self) -> bool {
        matches!(
            self,
            Self::Wrist
                | Self::ThumbTip
                | Self::ThumbIp
                | Self::IndexTip
                | Self::IndexPip
                | Self::MiddleTip
                | Self::MiddlePip
                | Self::RingTip
                | Self::RingPip
                | Self::LittleTip
                | Self::LittlePip
        )
    }

    /// Returns whether this joint belongs to the body family.
    #[must_use]
    pub const fn is_body(&self) -> bool {
        !self.is_hand()
    }

    /// Returns whether this joint is a fingertip.
    #[must_use]
    pub const fn is_fingertip(&self) -> bool {
        matches!(
            self,
            Self::ThumbTip | Self::IndexTip | Self::MiddleTip | Self::RingTip | Self::LittleTip
        )
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JointId {
    type Err = JointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrist" => Ok(Self::Wrist),
            "thumb_tip" => Ok(Self::ThumbTip),
            "thumb_ip" | "thumb_pip" => Ok(Self::ThumbIp),
            "index_tip" => Ok(Self::IndexTip),
            "index_pip" => Ok(Self::IndexPip),
            "middle_tip" => Ok(Self::MiddleTip),
            "middle_pip" => Ok(Self::MiddlePip),
            "ring_tip" => Ok(Self::RingTip),
            "ring_pip" => Ok(Self::RingPip),
            "little_tip" | "pinky_tip" => Ok(Self::LittleTip),
            "little_pip" | "pinky_pip" => Ok(Self::LittlePip),
            "left_wrist" => Ok(Self::LeftWrist),
            "left_elbow" => Ok(Self::LeftElbow),
            "left_shoulder" => Ok(Self::LeftShoulder),
            "right_wrist" => Ok(Self::RightWrist),
            "right_elbow" => Ok(Self::RightElbow),
            "right_shoulder" => Ok(Self::RightShoulder),
            _ => Err(JointParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid joint name.
#[derive(Debug, Clone)]
pub struct JointParseError(String);

impl fmt::Display for JointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown joint name '{}'", self.0)
    }
}

impl std::error::Error for JointParseError {}

/// A recognized landmark point in normalized image space.
///
/// Coordinates lie in the unit square (`x, y` in `[0, 1]`, axis convention
/// fixed by the upstream oracle, larger `y` = lower in the image) and carry
/// the oracle's confidence score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position in `[0, 1]`.
    pub x: f32,
    /// Vertical position in `[0, 1]`.
    pub y: f32,
    /// Oracle confidence in `[0, 1]`.
    pub confidence: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal position in `[0, 1]`.
    /// * `y` - Vertical position in `[0, 1]`.
    /// * `confidence` - Oracle confidence in `[0, 1]`.
    ///
    /// # Returns
    ///
    /// * A new `Point` instance.
    #[must_use]
    pub const fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }
}

/// An immutable mapping from joints to recognized points for one frame.
///
/// Any joint may be absent - low-confidence or occluded joints are filtered
/// out before the set is built, and every lookup returns `Option<Point>` so
/// missing joints route to defined fallbacks instead of failing. The set is
/// never mutated after construction; a new frame builds a new set.
#[derive(Debug, Clone, Default)]
pub struct LandmarkSet {
    points: HashMap<JointId, Point>,
}

impl LandmarkSet {
    /// Build a set from recognized `(joint, point)` pairs.
    ///
    /// Later pairs with a duplicate joint replace earlier ones, matching the
    /// last-write-wins behavior of a dictionary built from oracle output.
    ///
    /// # Arguments
    ///
    /// * `points` - The recognized points for this frame.
    ///
    /// # Returns
    ///
    /// * A new `LandmarkSet` instance.
    #[must_use]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (JointId, Point)>,
    {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Look up a joint.
    ///
    /// # Returns
    ///
    /// * `Some(point)` if the joint was recognized this frame, otherwise `None`.
    #[must_use]
    pub fn get(&self, joint: JointId) -> Option<Point> {
        self.points.get(&joint).copied()
    }

    /// Returns whether the joint was recognized this frame.
    #[must_use]
    pub fn contains(&self, joint: JointId) -> bool {
        self.points.contains_key(&joint)
    }

    /// Get the number of recognized joints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no joints were recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the recognized `(joint, point)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, Point)> + '_ {
        self.points.iter().map(|(&joint, &point)| (joint, point))
    }
}

impl FromIterator<(JointId, Point)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (JointId, Point)>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
