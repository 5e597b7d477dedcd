//! Bounded scene container.
//!
//! A scene holds at most [`MAX_SPHERES`] spheres and [`MAX_PLANES`] planes
//! plus a two-color sky gradient. Adding past capacity drops the primitive;
//! the plain `add_*` methods report this through their return value and the
//! `try_add_*` variants surface it as a [`SceneError`].

use std::fmt;

use glint_math::{normalize_or_zero, Color, Vec3};
use thiserror::Error;

use crate::{Plane, Sphere};

/// Sphere capacity of a scene.
pub const MAX_SPHERES: usize = 16;

/// Plane capacity of a scene.
pub const MAX_PLANES: usize = 4;

/// Which primitive list an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Sphere,
    Plane,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Sphere => f.write_str("sphere"),
            PrimitiveKind::Plane => f.write_str("plane"),
        }
    }
}

/// Errors that can occur while building scenes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene already holds the maximum of {capacity} {kind}s")]
    CapacityExceeded { kind: PrimitiveKind, capacity: usize },

    #[error("no scene preset with index {0}")]
    UnknownPreset(usize),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A fixed-capacity collection of primitives and a vertical sky gradient.
#[derive(Clone, Debug)]
pub struct Scene {
    name: String,
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    /// Sky color looking straight down
    pub sky_horizon: Color,
    /// Sky color looking straight up
    pub sky_zenith: Color,
}

impl Scene {
    /// Create an empty scene with the given sky gradient.
    pub fn new(name: impl Into<String>, sky_horizon: Color, sky_zenith: Color) -> Self {
        Self {
            name: name.into(),
            spheres: Vec::with_capacity(MAX_SPHERES),
            planes: Vec::with_capacity(MAX_PLANES),
            sky_horizon,
            sky_zenith,
        }
    }

    /// Scene name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a sphere. Returns `false` (and leaves the scene unchanged)
    /// when the scene is already full.
    pub fn add_sphere(&mut self, sphere: Sphere) -> bool {
        self.try_add_sphere(sphere).is_ok()
    }

    /// Append a plane. Returns `false` (and leaves the scene unchanged)
    /// when the scene is already full.
    pub fn add_plane(&mut self, plane: Plane) -> bool {
        self.try_add_plane(plane).is_ok()
    }

    /// Append a sphere, returning its index or a capacity error.
    pub fn try_add_sphere(&mut self, sphere: Sphere) -> SceneResult<usize> {
        push_bounded(&mut self.spheres, sphere, MAX_SPHERES, PrimitiveKind::Sphere)
    }

    /// Append a plane, returning its index or a capacity error.
    pub fn try_add_plane(&mut self, plane: Plane) -> SceneResult<usize> {
        push_bounded(&mut self.planes, plane, MAX_PLANES, PrimitiveKind::Plane)
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Sky radiance seen along `direction`.
    ///
    /// Blends horizon to zenith on the normalized direction's y component.
    /// A zero direction yields the midpoint of the gradient.
    pub fn sky_color(&self, direction: Vec3) -> Color {
        let a = 0.5 * (normalize_or_zero(direction).y + 1.0);
        self.sky_horizon.lerp(self.sky_zenith, a)
    }
}

fn push_bounded<T>(
    items: &mut Vec<T>,
    item: T,
    capacity: usize,
    kind: PrimitiveKind,
) -> SceneResult<usize> {
    if items.len() >= capacity {
        log::debug!("Dropping {}: scene is full ({} max)", kind, capacity);
        return Err(SceneError::CapacityExceeded { kind, capacity });
    }
    items.push(item);
    Ok(items.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;

    fn empty() -> Scene {
        Scene::new("test", Color::new(1.0, 1.0, 1.0), Color::new(0.5, 0.7, 1.0))
    }

    #[test]
    fn test_sphere_capacity_drops_silently() {
        let mut scene = empty();
        for i in 0..MAX_SPHERES {
            let center = Vec3::new(i as f32, 0.0, 0.0);
            assert!(scene.add_sphere(Sphere::new(center, 1.0, Material::default())));
        }
        assert!(!scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::default())));
        assert_eq!(scene.spheres().len(), MAX_SPHERES);
        // The overflowing sphere was not stored.
        assert_eq!(scene.spheres()[MAX_SPHERES - 1].center.x, (MAX_SPHERES - 1) as f32);
    }

    #[test]
    fn test_try_add_plane_reports_overflow() {
        let mut scene = empty();
        for i in 0..MAX_PLANES {
            let plane = Plane::new(Vec3::ZERO, Vec3::Y, Material::default());
            assert_eq!(scene.try_add_plane(plane), Ok(i));
        }
        let err = scene
            .try_add_plane(Plane::new(Vec3::ZERO, Vec3::Y, Material::default()))
            .unwrap_err();
        assert_eq!(
            err,
            SceneError::CapacityExceeded {
                kind: PrimitiveKind::Plane,
                capacity: MAX_PLANES
            }
        );
        assert_eq!(scene.planes().len(), MAX_PLANES);
        assert_eq!(err.to_string(), "scene already holds the maximum of 4 planes");
    }

    #[test]
    fn test_sky_gradient_endpoints() {
        let scene = empty();
        assert_eq!(scene.sky_color(Vec3::Y), scene.sky_zenith);
        assert_eq!(scene.sky_color(Vec3::NEG_Y), scene.sky_horizon);

        // Direction length does not matter
        assert_eq!(scene.sky_color(Vec3::new(0.0, 10.0, 0.0)), scene.sky_zenith);
    }

    #[test]
    fn test_sky_gradient_horizontal_is_midpoint() {
        let scene = empty();
        let mid = scene.sky_color(Vec3::X);
        let expected = (scene.sky_horizon + scene.sky_zenith) * 0.5;
        assert!((mid - expected).length() < 1e-6);
    }
}
