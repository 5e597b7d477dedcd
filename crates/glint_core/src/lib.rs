//! Glint Core - scene model for the progressive path tracer.
//!
//! This crate provides:
//!
//! - **Surface description**: `Material`
//! - **Primitives**: `Sphere`, `Plane`
//! - **Scene container**: `Scene`, a bounded list of primitives plus a sky gradient
//! - **Presets**: compiled-in scenes selected by index
//!
//! # Example
//!
//! ```ignore
//! use glint_core::presets;
//!
//! let scene = presets::build(0)?;
//! println!("{}: {} spheres, {} planes",
//!     scene.name(),
//!     scene.spheres().len(),
//!     scene.planes().len());
//! ```

pub mod material;
pub mod presets;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use material::Material;
pub use primitive::{Plane, Sphere};
pub use scene::{PrimitiveKind, Scene, SceneError, MAX_PLANES, MAX_SPHERES};
