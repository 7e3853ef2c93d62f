// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame classification pipeline.
//!
//! The [`GestureEngine`] is the entry point a capture loop calls once per
//! frame: it applies the configured confidence thresholds to the raw oracle
//! output, caps the number of hands evaluated, runs the hand and body
//! classifiers, and hands back the labels plus the recognized fingertip
//! points for overlay rendering.
//!
//! The engine is an explicit owned value - construct one per capture
//! session and drop it with the session. It holds configuration only, never
//! frame data, so a single engine can serve concurrent frame calls.

use crate::body::BodyPose;
use crate::config::EngineConfig;
use crate::hand::HandGesture;
use crate::landmark::{JointId, LandmarkSet, Point};

/// Fingertip joints in thumb-to-little order.
const TIP_JOINTS: [JointId; 5] = [
    JointId::ThumbTip,
    JointId::IndexTip,
    JointId::MiddleTip,
    JointId::RingTip,
    JointId::LittleTip,
];

/// One raw detection from the pose oracle: recognized joints with their
/// unfiltered confidence scores.
#[derive(Debug, Clone, Default)]
pub struct Observation {
    /// Recognized `(joint, point)` pairs, straight from the oracle.
    pub points: Vec<(JointId, Point)>,
}

impl Observation {
    /// Create an observation from recognized points.
    ///
    /// # Arguments
    ///
    /// * `points` - The recognized `(joint, point)` pairs.
    ///
    /// # Returns
    ///
    /// * A new `Observation` instance.
    #[must_use]
    pub fn new(points: Vec<(JointId, Point)>) -> Self {
        Self { points }
    }
}

/// The raw oracle output for one video frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Zero or more detected hands.
    pub hands: Vec<Observation>,
    /// The detected body, if any.
    pub body: Option<Observation>,
}

/// Classification output for one frame.
#[derive(Debug, Clone)]
pub struct FrameResults {
    /// One gesture per evaluated hand, in input order.
    pub gestures: Vec<HandGesture>,
    /// The body pose ([`BodyPose::Unsure`] when no body was supplied).
    pub body_pose: BodyPose,
    /// Recognized fingertip points across all evaluated hands, for overlay
    /// rendering. Pass-through data; the classifiers do not consume it.
    pub fingertips: Vec<Point>,
}

impl FrameResults {
    /// Get the number of evaluated hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    /// Check if no hands were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    /// Generate a verbose log string describing the results.
    ///
    /// # Returns
    ///
    /// * A string summary of recognized gestures (e.g. "Peace ✌️, Fist ✊, 🙏, ").
    #[must_use]
    pub fn verbose(&self) -> String {
        let mut parts: Vec<String> = self
            .gestures
            .iter()
            .filter(|gesture| gesture.is_recognized())
            .map(ToString::to_string)
            .collect();

        if self.body_pose.is_recognized() {
            parts.push(self.body_pose.emoji().to_string());
        }

        if parts.is_empty() {
            return "(no gestures), ".to_string();
        }
        format!("{}, ", parts.join(", "))
    }
}

/// The per-frame gesture classification engine.
///
/// Stateless between frames: every call to [`Self::process`] reads only its
/// own `Frame` argument, so one engine may be shared across threads, one
/// call per detected hand or body.
#[derive(Debug, Clone, Default)]
pub struct GestureEngine {
    config: EngineConfig,
}

impl GestureEngine {
    /// Create an engine with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Caller-policy thresholds and limits.
    ///
    /// # Returns
    ///
    /// * A new `GestureEngine` instance.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify all detections in one frame.
    ///
    /// Hand observations beyond the configured `max_hands` are dropped in
    /// input order. Joints at or below the family's confidence threshold are
    /// discarded before classification; joints from the wrong family are
    /// ignored. Never fails - degenerate input produces `Unsure` labels.
    ///
    /// # Arguments
    ///
    /// * `frame` - The raw oracle output for this frame.
    ///
    /// # Returns
    ///
    /// * The classification results.
    #[must_use]
    pub fn process(&self, frame: &Frame) -> FrameResults {
        let hands = frame.hands.iter().take(self.config.max_hands);
        let mut gestures = Vec::with_capacity(hands.len());
        let mut fingertips = Vec::new();

        for observation in hands {
            let landmarks = self.filter_hand(observation);
            gestures.push(HandGesture::classify(&landmarks));
            fingertips.extend(TIP_JOINTS.iter().filter_map(|&tip| landmarks.get(tip)));
        }

        let body_pose = frame
            .body
            .as_ref()
            .map_or(BodyPose::Unsure, |observation| {
                BodyPose::classify(&self.filter_body(observation))
            });

        FrameResults {
            gestures,
            body_pose,
            fingertips,
        }
    }

    /// Keep hand joints above the hand confidence threshold.
    fn filter_hand(&self, observation: &Observation) -> LandmarkSet {
        observation
            .points
            .iter()
            .copied()
            .filter(|&(joint, point)| {
                joint.is_hand() && point.confidence > self.config.hand_confidence
            })
            .collect()
    }

    /// Keep body joints above the body confidence threshold.
    fn filter_body(&self, observation: &Observation) -> LandmarkSet {
        observation
            .points
            .iter()
            .copied()
            .filter(|&(joint, point)| {
                joint.is_body() && point.confidence > self.config.body_confidence
            })
            .collect()
    }
}
