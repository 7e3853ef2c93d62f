// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Gesture Inference Library
//!
//! Hand gesture and body pose classification library written in Rust,
//! turning the noisy, partially-missing landmark output of a pose-estimation
//! oracle into stable gesture labels at frame rate.
//!
//! ## Features
//!
//! - **Pure Classification Core** - Stateless, allocation-light rule
//!   evaluation; safe to call concurrently, one call per detected hand or body
//! - **Fails Closed** - Missing or occluded joints route to defined `Unsure`
//!   fallbacks; classification is total and never errors
//! - **Oracle Agnostic** - Consumes named joints directly, or standard
//!   21-point hand / COCO-17 body keypoint arrays via adapters
//! - **Frame Pipeline** - Confidence thresholding, per-frame hand cap, and
//!   fingertip pass-through for overlay rendering in one engine call
//! - **Replay CLI** - Classify recorded frame streams from JSON-lines files
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use gesture_inference::{EngineConfig, Frame, GestureEngine, Observation};
//! use gesture_inference::{JointId, Point};
//!
//! fn main() {
//!     let engine = GestureEngine::new(EngineConfig::new().with_hand_confidence(0.6));
//!
//!     // One frame of oracle output: a single hand
//!     let frame = Frame {
//!         hands: vec![Observation::new(vec![
//!             (JointId::Wrist, Point::new(0.5, 0.8, 0.9)),
//!             (JointId::IndexPip, Point::new(0.5, 0.6, 0.9)),
//!             (JointId::IndexTip, Point::new(0.5, 0.4, 0.9)),
//!         ])],
//!         body: None,
//!     };
//!
//!     let results = engine.process(&frame);
//!     for gesture in &results.gestures {
//!         println!("{gesture}");
//!     }
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Classify a recorded frame stream
//! gesture-inference classify --source frames.jsonl
//!
//! # With custom thresholds
//! gesture-inference classify --source frames.jsonl --hand-conf 0.6 --body-conf 0.3
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`landmark`] | Joint names, recognized points, and the per-frame [`LandmarkSet`] |
//! | [`finger`] | Finger-extension feature extraction ([`Finger`], [`FingerSet`]) |
//! | [`hand`] | Hand gesture classification ([`HandGesture`]) |
//! | [`body`] | Body pose classification ([`BodyPose`]) |
//! | [`engine`] | Per-frame pipeline ([`GestureEngine`], [`Frame`], [`FrameResults`]) |
//! | [`config`] | [`EngineConfig`] for thresholds and limits |
//! | [`keypoints`] | Fixed-index keypoint array adapters |
//! | [`source`] | JSON-lines frame stream reader ([`FrameReader`]) |
//! | [`geometry`] | Distance and angular utilities |
//! | [`error`] | Error types ([`GestureError`], [`Result`]) |

// Modules
pub mod body;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod finger;
pub mod geometry;
pub mod hand;
pub mod keypoints;
pub mod landmark;
pub mod source;

// Re-export main types for convenience
pub use body::BodyPose;
pub use config::EngineConfig;
pub use engine::{Frame, FrameResults, GestureEngine, Observation};
pub use error::{GestureError, Result};
pub use finger::{Finger, FingerSet, extended_fingers};
pub use hand::HandGesture;
pub use landmark::{JointId, LandmarkSet, Point};
pub use source::FrameReader;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
