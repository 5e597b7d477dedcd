//! Sphere and plane primitives.

use glint_math::{normalize_or_zero, Vec3};

use crate::Material;

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

/// An infinite plane through `point` facing along `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    /// Unit normal
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized on construction.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normalize_or_zero(normal),
            material,
        }
    }
}
