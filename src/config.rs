// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Engine configuration.
//!
//! This module defines the [`EngineConfig`] struct, which controls the
//! caller-policy parameters of the per-frame pipeline: confidence thresholds
//! for hand and body joints and the cap on hands evaluated per frame.

/// Configuration for the gesture engine.
///
/// This struct is used to customize the behavior of the per-frame pipeline.
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use gesture_inference::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_hand_confidence(0.6)
///     .with_body_confidence(0.3)
///     .with_max_hands(2);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Confidence threshold for hand joints (0.0 to 1.0).
    /// Joints with confidence at or below this value are discarded before
    /// classification.
    pub hand_confidence: f32,
    /// Confidence threshold for body joints (0.0 to 1.0).
    /// Body landmarks are noisier than hand landmarks, so the default is
    /// lower.
    pub body_confidence: f32,
    /// Maximum number of hand observations evaluated per frame.
    /// Extra observations are dropped in input order to keep per-frame cost
    /// constant.
    pub max_hands: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_confidence: 0.5,
            body_confidence: 0.3,
            max_hands: 2,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    ///
    /// # Returns
    ///
    /// * A new `EngineConfig` instance with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand joint confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The minimum confidence score (0.0 to 1.0), exclusive.
    ///
    /// # Returns
    ///
    /// * The modified `EngineConfig`.
    #[must_use]
    pub const fn with_hand_confidence(mut self, threshold: f32) -> Self {
        self.hand_confidence = threshold;
        self
    }

    /// Set the body joint confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The minimum confidence score (0.0 to 1.0), exclusive.
    ///
    /// # Returns
    ///
    /// * The modified `EngineConfig`.
    #[must_use]
    pub const fn with_body_confidence(mut self, threshold: f32) -> Self {
        self.body_confidence = threshold;
        self
    }

    /// Set the maximum number of hands evaluated per frame.
    ///
    /// # Arguments
    ///
    /// * `max` - The maximum number of hand observations.
    ///
    /// # Returns
    ///
    /// * The modified `EngineConfig`.
    #[must_use]
    pub const fn with_max_hands(mut self, max: usize) -> Self {
        self.max_hands = max;
        self
    }
}
