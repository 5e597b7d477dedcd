//! Vector helpers shared by the intersector and the tracer.

use crate::Vec3;

/// Vectors shorter than this are treated as zero-length.
pub const NORMALIZE_EPSILON: f32 = 1e-8;

/// Normalize `v`, or return the zero vector when it is too short to
/// have a meaningful direction.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > NORMALIZE_EPSILON {
        v / len
    } else {
        Vec3::ZERO
    }
}

/// Mirror `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Largest of the three components.
#[inline]
pub fn max_component(v: Vec3) -> f32 {
    v.x.max(v.y).max(v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_or_zero() {
        let n = normalize_or_zero(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(normalize_or_zero(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(normalize_or_zero(Vec3::splat(1e-12)), Vec3::ZERO);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_max_component() {
        assert_eq!(max_component(Vec3::new(0.2, 0.9, 0.4)), 0.9);
        assert_eq!(max_component(Vec3::ZERO), 0.0);
    }
}
