//! Glint math types.
//!
//! Thin layer over `glam` with the ray-tracing specific pieces the
//! renderer needs: rays, t-intervals and a few guarded vector helpers.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{max_component, normalize_or_zero, reflect, NORMALIZE_EPSILON};

/// Linear RGB radiance. Channels are unbounded above.
pub type Color = Vec3;
