// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Fixed-index keypoint array adapters.
//!
//! Pose oracles emit keypoints as fixed-index arrays of `[x, y, confidence]`
//! rows. The tables here map the rows this crate consumes onto named joints;
//! everything else in the array is ignored.

use ndarray::ArrayView2;

use crate::engine::Observation;
use crate::landmark::{JointId, Point};

/// The 21-point hand layout, restricted to the joints the classifier
/// consumes. Row indices follow the standard hand-landmark numbering
/// (wrist first, then four points per finger from base to tip).
pub const HAND_KEYPOINTS: [(usize, JointId); 11] = [
    (0, JointId::Wrist),
    (3, JointId::ThumbIp),
    (4, JointId::ThumbTip),
    (6, JointId::IndexPip),
    (8, JointId::IndexTip),
    (10, JointId::MiddlePip),
    (12, JointId::MiddleTip),
    (14, JointId::RingPip),
    (16, JointId::RingTip),
    (18, JointId::LittlePip),
    (20, JointId::LittleTip),
];

/// COCO-17 body keypoints, restricted to the six arm joints.
pub const COCO_ARM_KEYPOINTS: [(usize, JointId); 6] = [
    (5, JointId::LeftShoulder),
    (6, JointId::RightShoulder),
    (7, JointId::LeftElbow),
    (8, JointId::RightElbow),
    (9, JointId::LeftWrist),
    (10, JointId::RightWrist),
];

/// Convert a hand keypoint array into a raw observation.
///
/// # Arguments
///
/// * `keypoints` - Array with shape (K, 3) containing `[x, y, confidence]`
///   rows in the 21-point hand layout. Rows beyond the layout are ignored;
///   a short array yields a partial observation.
///
/// # Returns
///
/// * A raw hand `Observation` for the engine.
#[must_use]
pub fn hand_observation(keypoints: ArrayView2<'_, f32>) -> Observation {
    observation_from(keypoints, &HAND_KEYPOINTS)
}

/// Convert a COCO-17 body keypoint array into a raw observation.
///
/// # Arguments
///
/// * `keypoints` - Array with shape (K, 3) containing `[x, y, confidence]`
///   rows in COCO-17 order. Only the six arm rows are consumed.
///
/// # Returns
///
/// * A raw body `Observation` for the engine.
#[must_use]
pub fn body_observation(keypoints: ArrayView2<'_, f32>) -> Observation {
    observation_from(keypoints, &COCO_ARM_KEYPOINTS)
}

fn observation_from(keypoints: ArrayView2<'_, f32>, table: &[(usize, JointId)]) -> Observation {
    // Rows need at least [x, y, confidence]
    if keypoints.ncols() < 3 {
        return Observation::default();
    }

    let points = table
        .iter()
        .filter(|&&(row, _)| row < keypoints.nrows())
        .map(|&(row, joint)| {
            let point = Point::new(
                keypoints[[row, 0]],
                keypoints[[row, 1]],
                keypoints[[row, 2]],
            );
            (joint, point)
        })
        .collect();

    Observation::new(points)
}
