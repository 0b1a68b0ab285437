//! Triangle geometry helpers.

use glam::Vec3;

/// Unnormalized face normal `(b - a) × (c - a)`.
///
/// Its length is twice the triangle's area.
#[inline]
pub fn face_cross(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// Unit face normal for the winding `(a, b, c)`.
///
/// Returns `None` when the cross product is shorter than `threshold`
/// (collinear or coincident corners), since there is no direction to normalize.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3, threshold: f32) -> Option<Vec3> {
    let n = face_cross(a, b, c);
    let len = n.length();
    if len > threshold && len.is_finite() {
        Some(n / len)
    } else {
        None
    }
}
