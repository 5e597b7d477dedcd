//! Monte Carlo light transport.
//!
//! One call to [`trace`] produces one radiance sample for one camera ray.
//! The bounce loop is iterative and stops on a sky miss, on Russian
//! roulette, or when the bounce cap is reached.

use glint_core::Scene;
use glint_math::{max_component, normalize_or_zero, reflect, Color, Interval, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::hit::{nearest_hit, HitRecord};
use crate::Rng;

/// Default bounce cap.
pub const MAX_BOUNCES: u32 = 6;

/// Default throughput level under which paths are considered for termination.
pub const ROULETTE_THRESHOLD: f32 = 0.01;

/// Scattered rays start this far off the surface, along the normal.
pub const SURFACE_OFFSET: f32 = 1e-3;

/// Smallest accepted hit distance.
pub const T_MIN: f32 = 1e-4;

/// What happens to a path whose throughput falls below the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouletteMode {
    /// Terminate unconditionally. Survivors are not reweighted, so dim
    /// paths lose energy and the image is biased slightly dark.
    #[default]
    Cutoff,
    /// Survive with probability `max_channel / threshold` and divide the
    /// throughput by that probability.
    Compensated,
}

/// Per-sample tracing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSettings {
    pub max_bounces: u32,
    pub roulette_threshold: f32,
    pub roulette: RouletteMode,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_bounces: MAX_BOUNCES,
            roulette_threshold: ROULETTE_THRESHOLD,
            roulette: RouletteMode::Cutoff,
        }
    }
}

/// Compute one radiance sample along `ray`.
pub fn trace(scene: &Scene, ray: &Ray, settings: &TraceSettings, rng: &mut Rng) -> Color {
    let mut color = Color::ZERO;
    let mut throughput = Color::ONE;
    let mut ray = *ray;

    for _ in 0..settings.max_bounces {
        let Some(hit) = nearest_hit(scene, &ray, Interval::forward(T_MIN)) else {
            color += throughput * scene.sky_color(ray.direction);
            break;
        };

        // Emission counts on the bounce it is seen, before any termination test
        color += throughput * hit.material.emission;

        let strength = max_component(throughput);
        if strength < settings.roulette_threshold {
            match settings.roulette {
                RouletteMode::Cutoff => break,
                RouletteMode::Compensated => {
                    let survival = strength / settings.roulette_threshold;
                    if rng.next_f32() >= survival {
                        break;
                    }
                    throughput /= survival;
                }
            }
        }

        let direction = scatter_direction(ray.direction, &hit, rng);
        throughput *= hit.material.albedo;
        ray = Ray::new(hit.position + hit.normal * SURFACE_OFFSET, direction);
    }

    color
}

/// Next path direction at `hit`.
///
/// Blends the mirror reflection of the incoming direction with a
/// cosine-weighted diffuse direction, using roughness as the weight.
pub fn scatter_direction(incoming: Vec3, hit: &HitRecord, rng: &mut Rng) -> Vec3 {
    let mirror = reflect(normalize_or_zero(incoming), hit.normal);
    let diffuse = normalize_or_zero(hit.normal + rng.random_unit_vector());
    normalize_or_zero(mirror.lerp(diffuse, hit.material.roughness))
}
