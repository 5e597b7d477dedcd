//! Compiled-in scene presets.
//!
//! Scenes are pure builders: each call produces a fresh [`Scene`]. The
//! renderer switches scenes by index and wraps around at [`count`].

use glint_math::{Color, Vec3};

use crate::{Material, Plane, Scene, SceneError, Sphere};

/// A named scene builder together with the primitive counts it produces.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub sphere_count: usize,
    pub plane_count: usize,
    build: fn() -> Scene,
}

impl Preset {
    /// Build a fresh scene from this preset.
    pub fn build(&self) -> Scene {
        let scene = (self.build)();
        debug_assert_eq!(scene.spheres().len(), self.sphere_count);
        debug_assert_eq!(scene.planes().len(), self.plane_count);
        scene
    }
}

/// All presets, in selection order.
pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "Showroom",
        sphere_count: 5,
        plane_count: 1,
        build: showroom,
    },
    Preset {
        name: "Mirror Hall",
        sphere_count: 4,
        plane_count: 2,
        build: mirror_hall,
    },
    Preset {
        name: "Sunset",
        sphere_count: 3,
        plane_count: 1,
        build: sunset,
    },
];

/// Number of available presets.
pub fn count() -> usize {
    PRESETS.len()
}

/// Look up a preset by index.
pub fn get(index: usize) -> Result<&'static Preset, SceneError> {
    PRESETS.get(index).ok_or(SceneError::UnknownPreset(index))
}

/// Build the scene for preset `index`.
pub fn build(index: usize) -> Result<Scene, SceneError> {
    let preset = get(index)?;
    let scene = preset.build();
    log::info!(
        "Built scene {} '{}': {} spheres, {} planes",
        index,
        scene.name(),
        scene.spheres().len(),
        scene.planes().len()
    );
    Ok(scene)
}

fn floor(albedo: Color) -> Plane {
    Plane::new(Vec3::ZERO, Vec3::Y, Material::diffuse(albedo))
}

fn showroom() -> Scene {
    let mut scene = Scene::new(
        "Showroom",
        Color::new(0.9, 0.9, 0.95),
        Color::new(0.35, 0.55, 0.95),
    );

    scene.add_plane(floor(Color::splat(0.8)));

    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Material::diffuse(Color::new(0.8, 0.25, 0.2)),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(-2.2, 1.0, 0.0),
        1.0,
        Material::metal(Color::splat(0.95), 0.0),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(2.2, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.9, 0.7, 0.3), 0.4),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(1.1, 0.4, 1.6),
        0.4,
        Material::diffuse(Color::new(0.2, 0.35, 0.85)),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 3.5, -1.0),
        0.6,
        Material::emissive(Color::splat(6.0)),
    ));

    scene
}

fn mirror_hall() -> Scene {
    let mut scene = Scene::new(
        "Mirror Hall",
        Color::new(0.05, 0.05, 0.08),
        Color::new(0.15, 0.15, 0.25),
    );

    scene.add_plane(floor(Color::splat(0.7)));
    scene.add_plane(Plane::new(
        Vec3::new(0.0, 0.0, -4.0),
        Vec3::Z,
        Material::metal(Color::splat(0.9), 0.05),
    ));

    for (i, x) in [-2.0_f32, 0.0, 2.0].into_iter().enumerate() {
        let tint = [
            Color::new(1.0, 0.85, 0.85),
            Color::splat(0.95),
            Color::new(0.85, 0.9, 1.0),
        ][i];
        scene.add_sphere(Sphere::new(Vec3::new(x, 0.8, 0.0), 0.8, Material::metal(tint, 0.0)));
    }
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 4.0, 1.5),
        1.0,
        Material::emissive(Color::new(5.0, 4.5, 4.0)),
    ));

    scene
}

fn sunset() -> Scene {
    let mut scene = Scene::new("Sunset", Color::new(0.5, 0.25, 0.1), Color::new(0.02, 0.03, 0.12));

    scene.add_plane(floor(Color::new(0.6, 0.55, 0.5)));

    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 6.0, -14.0),
        4.0,
        Material::emissive(Color::new(8.0, 4.0, 1.5)),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(-1.2, 1.0, 0.0),
        1.0,
        Material::diffuse(Color::splat(0.75)),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(1.3, 0.7, 0.8),
        0.7,
        Material {
            albedo: Color::new(0.9, 0.9, 0.9),
            roughness: 0.15,
            metallic: 1.0,
            ..Default::default()
        },
    ));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_matches_declared_counts() {
        for (i, preset) in PRESETS.iter().enumerate() {
            let scene = build(i).unwrap();
            assert_eq!(scene.name(), preset.name);
            assert_eq!(scene.spheres().len(), preset.sphere_count);
            assert_eq!(scene.planes().len(), preset.plane_count);
        }
    }

    #[test]
    fn test_every_preset_has_a_light() {
        for i in 0..count() {
            let scene = build(i).unwrap();
            assert!(scene.spheres().iter().any(|s| s.material.emission.max_element() > 0.0));
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(build(count()).unwrap_err(), SceneError::UnknownPreset(count()));
    }
}
