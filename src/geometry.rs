// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Geometry utilities shared by the feature extractors.

use crate::landmark::Point;

/// Vectors shorter than this are treated as degenerate.
const MIN_VECTOR_NORM: f32 = 1e-6;

/// Calculate the Euclidean distance between two landmark points.
///
/// # Arguments
///
/// * `a` - First point.
/// * `b` - Second point.
///
/// # Returns
///
/// * Distance in normalized image units.
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Calculate the normalized dot product of two joint vectors.
///
/// Both vectors originate at `origin`; the result is the cosine of the angle
/// between them, independent of limb length. A zero-length vector (a joint
/// coinciding with the origin) yields the neutral value `0.0` rather than
/// failing.
///
/// # Arguments
///
/// * `origin` - Shared origin of both vectors (e.g. an elbow).
/// * `a` - Endpoint of the first vector.
/// * `b` - Endpoint of the second vector.
///
/// # Returns
///
/// * Cosine of the angle between the vectors, in `[-1.0, 1.0]`.
#[must_use]
pub fn normalized_dot_product(origin: Point, a: Point, b: Point) -> f32 {
    let (ax, ay) = (a.x - origin.x, a.y - origin.y);
    let (bx, by) = (b.x - origin.x, b.y - origin.y);

    let norm_a = ax.hypot(ay);
    let norm_b = bx.hypot(by);
    if norm_a < MIN_VECTOR_NORM || norm_b < MIN_VECTOR_NORM {
        return 0.0;
    }

    ax.mul_add(bx, ay * by) / (norm_a * norm_b)
}
