//! Glint Renderer - progressive CPU path tracing
//!
//! A Monte Carlo path tracer for small sphere-and-plane scenes. Samples
//! are accumulated over successive passes and tone mapped into an RGBA8
//! frame for an external display.
//!
//! Per pass: the [`OrbitCamera`] generates a jittered ray per pixel,
//! [`trace`] estimates its radiance, and the [`AccumulationBuffer`] adds
//! it to the running per-pixel sum before the frame is resolved.

mod accumulator;
mod bucket;
mod camera;
mod config;
mod error;
mod hit;
mod renderer;
mod rng;
mod tracer;

pub use accumulator::{linear_to_gamma, reinhard, tone_map, tone_map_channel, AccumulationBuffer};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{OrbitCamera, WORLD_UP};
pub use config::{CameraConfig, RenderConfig, MAX_PIXELS};
pub use error::{ConfigError, RenderError, SinkError};
pub use hit::{nearest_hit, HitRecord, Hittable, CHECKER_DARKEN, CHECKER_SIZE, PARALLEL_EPSILON};
pub use renderer::{Frame, FrameSink, Renderer, Status};
pub use rng::Rng;
pub use tracer::{
    scatter_direction, trace, RouletteMode, TraceSettings, MAX_BOUNCES, ROULETTE_THRESHOLD,
    SURFACE_OFFSET, T_MIN,
};

/// Re-export the scene model and math types
pub use glint_core::{presets, Material, Plane, Scene, SceneError, Sphere};
pub use glint_math::{Color, Interval, Ray, Vec3};
