// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the gesture classification library

use gesture_inference::{
    BodyPose, EngineConfig, Finger, FingerSet, Frame, GestureEngine, HandGesture, JointId,
    LandmarkSet, Observation, Point, extended_fingers,
};

/// Build hand landmarks with exactly the given fingers extended.
///
/// The wrist sits at the bottom center with the palm axis pointing up.
/// Extended fingers place the tip beyond the PIP joint; curled fingers fold
/// the tip back inside it. The thumb tip either splays sideways (extended)
/// or lies along the palm axis (tucked).
fn hand_with(extended: FingerSet) -> LandmarkSet {
    let wrist = Point::new(0.5, 0.8, 1.0);
    let mut points = vec![(JointId::Wrist, wrist)];

    for (i, finger) in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Little]
        .into_iter()
        .enumerate()
    {
        #[allow(clippy::cast_precision_loss)]
        let x = 0.4 + 0.05 * i as f32;
        points.push((finger.pip(), Point::new(x, 0.6, 1.0)));
        let tip_y = if extended.contains(finger) { 0.4 } else { 0.7 };
        points.push((finger.tip(), Point::new(x, tip_y, 1.0)));
    }

    points.push((JointId::ThumbIp, Point::new(0.45, 0.72, 1.0)));
    let thumb_tip = if extended.contains(Finger::Thumb) {
        Point::new(0.25, 0.8, 1.0)
    } else {
        Point::new(0.42, 0.62, 1.0)
    };
    points.push((JointId::ThumbTip, thumb_tip));

    LandmarkSet::from_points(points)
}

/// The gesture each extended-finger subset must map to.
fn expected_gesture(extended: FingerSet) -> HandGesture {
    if extended == FingerSet::ALL {
        HandGesture::Five
    } else if extended == FingerSet::of(&[Finger::Index, Finger::Little]) {
        HandGesture::Metal
    } else if extended == FingerSet::of(&[Finger::Index, Finger::Middle]) {
        HandGesture::Peace
    } else if extended == FingerSet::of(&[Finger::Thumb, Finger::Little]) {
        HandGesture::CallMe
    } else if extended == FingerSet::of(&[Finger::Index]) {
        HandGesture::Pointing
    } else if extended == FingerSet::of(&[Finger::Thumb]) {
        HandGesture::ThumbsUp
    } else if extended == FingerSet::EMPTY {
        HandGesture::Fist
    } else {
        HandGesture::Unsure
    }
}

/// Every subset of fingers, via bitmask enumeration.
fn all_subsets() -> Vec<FingerSet> {
    (0u8..32)
        .map(|mask| {
            Finger::ALL
                .into_iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, finger)| finger)
                .collect()
        })
        .collect()
}

#[test]
fn test_hand_classification_is_exhaustive() {
    // All 32 subsets reproduce geometrically and land on the table verbatim
    for subset in all_subsets() {
        let landmarks = hand_with(subset);
        assert_eq!(
            extended_fingers(&landmarks),
            subset,
            "geometry did not reproduce subset {subset:?}"
        );
        assert_eq!(
            HandGesture::classify(&landmarks),
            expected_gesture(subset),
            "wrong gesture for subset {subset:?}"
        );
    }
}

#[test]
fn test_missing_wrist_is_unsure_regardless_of_fingers() {
    for subset in all_subsets() {
        let landmarks: LandmarkSet = hand_with(subset)
            .iter()
            .filter(|&(joint, _)| joint != JointId::Wrist)
            .collect();
        assert_eq!(HandGesture::classify(&landmarks), HandGesture::Unsure);
        assert_eq!(extended_fingers(&landmarks), FingerSet::EMPTY);
    }
}

#[test]
fn test_empty_hand_versus_wrist_only() {
    // Nothing at all: no reference point, unsure
    assert_eq!(
        HandGesture::classify(&LandmarkSet::default()),
        HandGesture::Unsure
    );

    // Wrist present, nothing else: a closed hand
    let wrist_only = LandmarkSet::from_points([(JointId::Wrist, Point::new(0.5, 0.8, 1.0))]);
    assert_eq!(extended_fingers(&wrist_only), FingerSet::EMPTY);
    assert_eq!(HandGesture::classify(&wrist_only), HandGesture::Fist);
}

#[test]
fn test_five_scenario() {
    let landmarks = hand_with(FingerSet::ALL);
    assert_eq!(HandGesture::classify(&landmarks), HandGesture::Five);
}

#[test]
fn test_peace_scenario() {
    let landmarks = hand_with(FingerSet::of(&[Finger::Index, Finger::Middle]));
    assert_eq!(HandGesture::classify(&landmarks), HandGesture::Peace);
}

#[test]
fn test_classification_is_pure() {
    let landmarks = hand_with(FingerSet::of(&[Finger::Thumb, Finger::Little]));
    let first = HandGesture::classify(&landmarks);
    let second = HandGesture::classify(&landmarks);
    assert_eq!(first, second);
}

fn body(pairs: [(JointId, Point); 6]) -> LandmarkSet {
    LandmarkSet::from_points(pairs)
}

#[test]
fn test_pray_scenario() {
    let landmarks = body([
        (JointId::LeftWrist, Point::new(0.45, 0.5, 1.0)),
        (JointId::RightWrist, Point::new(0.55, 0.5, 1.0)),
        (JointId::LeftShoulder, Point::new(0.3, 0.2, 1.0)),
        (JointId::RightShoulder, Point::new(0.7, 0.2, 1.0)),
        (JointId::LeftElbow, Point::new(0.25, 0.4, 1.0)),
        (JointId::RightElbow, Point::new(0.75, 0.4, 1.0)),
    ]);
    assert_eq!(BodyPose::classify(&landmarks), BodyPose::Pray);
}

#[test]
fn test_pray_is_left_right_symmetric() {
    let original = [
        (JointId::LeftWrist, Point::new(0.45, 0.5, 1.0)),
        (JointId::RightWrist, Point::new(0.55, 0.5, 1.0)),
        (JointId::LeftShoulder, Point::new(0.3, 0.2, 1.0)),
        (JointId::RightShoulder, Point::new(0.7, 0.2, 1.0)),
        (JointId::LeftElbow, Point::new(0.25, 0.4, 1.0)),
        (JointId::RightElbow, Point::new(0.75, 0.4, 1.0)),
    ];
    let mirrored: [(JointId, Point); 6] = original.map(|(joint, point)| {
        let swapped = match joint {
            JointId::LeftWrist => JointId::RightWrist,
            JointId::RightWrist => JointId::LeftWrist,
            JointId::LeftElbow => JointId::RightElbow,
            JointId::RightElbow => JointId::LeftElbow,
            JointId::LeftShoulder => JointId::RightShoulder,
            JointId::RightShoulder => JointId::LeftShoulder,
            other => other,
        };
        (swapped, point)
    });

    assert_eq!(BodyPose::classify(&body(original)), BodyPose::Pray);
    assert_eq!(BodyPose::classify(&body(mirrored)), BodyPose::Pray);
}

#[test]
fn test_muscle_scenario() {
    // Upper arm vertical, forearm out sideways and below the elbow: the
    // elbow vectors are close to perpendicular
    let landmarks = body([
        (JointId::RightShoulder, Point::new(0.6, 0.2, 1.0)),
        (JointId::RightElbow, Point::new(0.6, 0.5, 1.0)),
        (JointId::RightWrist, Point::new(0.8, 0.55, 1.0)),
        (JointId::LeftShoulder, Point::new(0.3, 0.2, 1.0)),
        (JointId::LeftElbow, Point::new(0.25, 0.4, 1.0)),
        (JointId::LeftWrist, Point::new(0.05, 0.45, 1.0)),
    ]);
    assert_eq!(BodyPose::classify(&landmarks), BodyPose::Muscle);
}

#[test]
fn test_muscle_does_not_mirror() {
    // The same flex on the left arm, right arm hanging: no match
    let landmarks = body([
        (JointId::LeftShoulder, Point::new(0.4, 0.2, 1.0)),
        (JointId::LeftElbow, Point::new(0.4, 0.5, 1.0)),
        (JointId::LeftWrist, Point::new(0.2, 0.55, 1.0)),
        (JointId::RightShoulder, Point::new(0.7, 0.2, 1.0)),
        (JointId::RightElbow, Point::new(0.75, 0.4, 1.0)),
        (JointId::RightWrist, Point::new(0.95, 0.35, 1.0)),
    ]);
    assert_eq!(BodyPose::classify(&landmarks), BodyPose::Unsure);
}

#[test]
fn test_body_classification_is_total() {
    // Arbitrary joint positions always land on exactly one variant
    let grid = [0.1f32, 0.5, 0.9];
    for &wx in &grid {
        for &wy in &grid {
            for &ex in &grid {
                let landmarks = body([
                    (JointId::LeftWrist, Point::new(wx, wy, 1.0)),
                    (JointId::RightWrist, Point::new(1.0 - wx, wy, 1.0)),
                    (JointId::LeftElbow, Point::new(ex, 0.45, 1.0)),
                    (JointId::RightElbow, Point::new(1.0 - ex, 0.45, 1.0)),
                    (JointId::LeftShoulder, Point::new(0.35, 0.2, 1.0)),
                    (JointId::RightShoulder, Point::new(0.65, 0.2, 1.0)),
                ]);
                let pose = BodyPose::classify(&landmarks);
                assert!(matches!(
                    pose,
                    BodyPose::Pray | BodyPose::Shrug | BodyPose::Muscle | BodyPose::Unsure
                ));
            }
        }
    }
}

#[test]
fn test_engine_end_to_end() {
    let engine = GestureEngine::new(EngineConfig::new().with_hand_confidence(0.6));

    let hand = Observation::new(
        hand_with(FingerSet::of(&[Finger::Index, Finger::Middle]))
            .iter()
            .collect(),
    );
    let frame = Frame {
        hands: vec![hand],
        body: Some(Observation::new(vec![
            (JointId::LeftWrist, Point::new(0.45, 0.5, 0.7)),
            (JointId::RightWrist, Point::new(0.55, 0.5, 0.7)),
            (JointId::LeftShoulder, Point::new(0.3, 0.2, 0.7)),
            (JointId::RightShoulder, Point::new(0.7, 0.2, 0.7)),
            (JointId::LeftElbow, Point::new(0.25, 0.4, 0.7)),
            (JointId::RightElbow, Point::new(0.75, 0.4, 0.7)),
        ])),
    };

    let results = engine.process(&frame);
    assert_eq!(results.gestures, vec![HandGesture::Peace]);
    assert_eq!(results.body_pose, BodyPose::Pray);
    // All five fingertips were recognized at full confidence
    assert_eq!(results.fingertips.len(), 5);
    assert_eq!(results.verbose(), "Peace ✌️, 🙏, ");
}
