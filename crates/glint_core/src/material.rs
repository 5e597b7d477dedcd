//! Surface materials.

use glint_math::{Color, Vec3};

/// Surface response description.
///
/// Materials are small `Copy` values. Hit records carry their own copy so
/// per-hit modifiers (such as the floor checker pattern) never touch the
/// scene's stored primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse/albedo color (RGB, 0-1)
    pub albedo: Color,

    /// Emitted radiance (RGB, >= 0, may exceed 1)
    pub emission: Color,

    /// Roughness factor (0=mirror, 1=diffuse)
    pub roughness: f32,

    /// Metallic factor (0=dielectric, 1=metal).
    ///
    /// Carried for scene authoring; the sampling step does not read it.
    pub metallic: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec3::splat(0.5), // Grey default
            emission: Color::ZERO,
            roughness: 1.0,
            metallic: 0.0,
        }
    }
}

impl Material {
    /// Fully diffuse surface.
    pub fn diffuse(albedo: Color) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    /// Metal with the given roughness. `roughness` is clamped to [0, 1].
    pub fn metal(albedo: Color, roughness: f32) -> Self {
        Self {
            albedo,
            roughness: roughness.clamp(0.0, 1.0),
            metallic: 1.0,
            ..Default::default()
        }
    }

    /// Black body that only emits.
    pub fn emissive(emission: Color) -> Self {
        Self {
            albedo: Color::ZERO,
            emission,
            ..Default::default()
        }
    }

    /// Same material with its albedo scaled by `factor`.
    pub fn darkened(self, factor: f32) -> Self {
        Self {
            albedo: self.albedo * factor,
            ..self
        }
    }
}
