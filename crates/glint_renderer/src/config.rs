//! Render configuration.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::error::ConfigError;
use crate::tracer::{RouletteMode, TraceSettings, MAX_BOUNCES, ROULETTE_THRESHOLD};

/// Largest accepted image, in pixels. Pixel and bucket indices stay within `u32`.
pub const MAX_PIXELS: usize = u32::MAX as usize;

/// Orbit camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting orbit angle in radians
    pub angle: f32,
    /// Distance from the look-at point in the horizontal plane
    pub radius: f32,
    /// Height of the orbit above the look-at point
    pub elevation: f32,
    pub look_at: Vec3,
    /// Vertical field of view in degrees
    pub vfov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            radius: 7.0,
            elevation: 1.5,
            look_at: Vec3::new(0.0, 1.0, 0.0),
            vfov_degrees: 50.0,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum path length per sample
    pub max_bounces: u32,
    /// Throughput level under which Russian roulette kicks in
    pub roulette_threshold: f32,
    pub roulette: RouletteMode,
    /// Restore the master RNG to `seed` whenever accumulation resets
    pub reseed_on_reset: bool,
    /// Seed of the master RNG
    pub seed: u64,
    /// Tile size for parallel passes
    pub bucket_size: u32,
    /// Preset selected at startup
    pub scene: usize,
    /// Orbit speed in radians per frame, used by drivers that spin the camera
    pub rotation_speed: f32,
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
            max_bounces: MAX_BOUNCES,
            roulette_threshold: ROULETTE_THRESHOLD,
            roulette: RouletteMode::Cutoff,
            reseed_on_reset: false,
            seed: 0x5eed,
            bucket_size: DEFAULT_BUCKET_SIZE,
            scene: 0,
            rotation_speed: 0.0,
            camera: CameraConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Check that the configuration describes a renderable setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.pixel_count() > MAX_PIXELS {
            return Err(ConfigError::ResolutionTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_PIXELS,
            });
        }
        if self.max_bounces == 0 {
            return Err(ConfigError::NoBounces);
        }
        if !(self.roulette_threshold >= 0.0) {
            return Err(ConfigError::RouletteThreshold(self.roulette_threshold));
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::BucketSize);
        }
        // A zero radius puts the camera on the up axis, where the basis degenerates
        if !(self.camera.radius.abs() > 1e-6) {
            return Err(ConfigError::OrbitRadius(self.camera.radius));
        }
        if !(self.camera.vfov_degrees > 0.0 && self.camera.vfov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.camera.vfov_degrees));
        }
        Ok(())
    }

    /// Tracing parameters derived from this configuration.
    pub fn trace_settings(&self) -> TraceSettings {
        TraceSettings {
            max_bounces: self.max_bounces,
            roulette_threshold: self.roulette_threshold,
            roulette: self.roulette,
        }
    }

    /// Number of pixels in the output image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
