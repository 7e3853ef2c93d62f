// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame stream input for the CLI.
//!
//! Reads recorded oracle output from a JSON-lines file, one frame per line:
//!
//! ```json
//! {"hands":[[{"joint":"wrist","x":0.5,"y":0.8,"confidence":0.9}]],
//!  "body":[{"joint":"left_wrist","x":0.45,"y":0.5,"confidence":0.7}]}
//! ```
//!
//! Joint names are the snake_case [`JointId`] names. Confidence scores are
//! carried through unfiltered - thresholding happens in the engine.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::engine::{Frame, Observation};
use crate::error::{GestureError, Result};
use crate::landmark::{JointId, Point};

/// One serialized keypoint.
#[derive(Debug, Deserialize)]
struct KeypointRecord {
    /// Snake_case joint name.
    joint: String,
    x: f32,
    y: f32,
    confidence: f32,
}

/// One serialized frame.
#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    hands: Vec<Vec<KeypointRecord>>,
    #[serde(default)]
    body: Option<Vec<KeypointRecord>>,
}

/// Iterator over frames in a JSON-lines stream.
///
/// Blank lines are skipped. Malformed lines and unknown joint names yield a
/// [`GestureError::ParseError`] carrying the 1-based line number.
#[derive(Debug)]
pub struct FrameReader<R> {
    lines: std::io::Lines<BufReader<R>>,
    line_number: usize,
}

impl FrameReader<File> {
    /// Open a frame stream from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON-lines frame file.
    ///
    /// # Returns
    ///
    /// * A reader over the file's frames.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> FrameReader<R> {
    /// Create a frame reader over any byte stream.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line_number: 0,
        }
    }

    fn parse_line(&self, line: &str) -> Result<Frame> {
        let record: FrameRecord =
            serde_json::from_str(line).map_err(|err| GestureError::ParseError {
                line: self.line_number,
                message: err.to_string(),
            })?;

        let hands = record
            .hands
            .iter()
            .map(|hand| self.parse_observation(hand))
            .collect::<Result<Vec<_>>>()?;
        let body = record
            .body
            .as_deref()
            .map(|body| self.parse_observation(body))
            .transpose()?;

        Ok(Frame { hands, body })
    }

    fn parse_observation(&self, records: &[KeypointRecord]) -> Result<Observation> {
        let points = records
            .iter()
            .map(|record| {
                let joint: JointId =
                    record
                        .joint
                        .parse()
                        .map_err(|err: crate::landmark::JointParseError| {
                            GestureError::ParseError {
                                line: self.line_number,
                                message: err.to_string(),
                            }
                        })?;
                Ok((joint, Point::new(record.x, record.y, record.confidence)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Observation::new(points))
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}
