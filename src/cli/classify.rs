// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::time::Instant;

use crate::cli::args::ClassifyArgs;
use crate::source::FrameReader;
use crate::{EngineConfig, GestureEngine};
use crate::{error, info, success, verbose};

/// Run gesture classification over a recorded frame stream.
pub fn run_classification(args: &ClassifyArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let config = EngineConfig::new()
        .with_hand_confidence(args.hand_conf)
        .with_body_confidence(args.body_conf)
        .with_max_hands(args.max_hands);
    let engine = GestureEngine::new(config);

    let reader = match FrameReader::open(&args.source) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Failed to open '{}': {e}", args.source);
            process::exit(1);
        }
    };

    let started = Instant::now();
    let mut frames = 0usize;
    let mut hands = 0usize;
    let mut gestures = 0usize;
    let mut poses = 0usize;

    for frame in reader {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        };

        let frame_started = Instant::now();
        let results = engine.process(&frame);
        let elapsed_ms = frame_started.elapsed().as_secs_f64() * 1000.0;

        frames += 1;
        hands += results.len();
        gestures += results
            .gestures
            .iter()
            .filter(|gesture| gesture.is_recognized())
            .count();
        if results.body_pose.is_recognized() {
            poses += 1;
        }

        verbose!("frame {frames}: {}{elapsed_ms:.1}ms", results.verbose());
    }

    let total_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!("{hands} hands in {frames} frames, {gestures} gestures, {poses} body poses");
    success!("Done in {total_ms:.1}ms");
}
