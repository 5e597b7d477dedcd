//! Error types for the renderer.

use glint_core::SceneError;
use thiserror::Error;

/// Invalid render configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("resolution must be non-zero, got {width}x{height}")]
    EmptyResolution { width: u32, height: u32 },

    #[error("resolution {width}x{height} exceeds {max} pixels")]
    ResolutionTooLarge { width: u32, height: u32, max: usize },

    #[error("max_bounces must be at least 1")]
    NoBounces,

    #[error("roulette threshold must be non-negative, got {0}")]
    RouletteThreshold(f32),

    #[error("bucket size must be at least 1")]
    BucketSize,

    #[error("camera orbit radius must be non-zero, got {0}")]
    OrbitRadius(f32),

    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
}

/// Errors that can occur while setting up or driving a renderer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Failure reported by a display sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("display unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Encode(String),
}
