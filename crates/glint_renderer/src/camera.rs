//! Orbiting camera for ray generation.
//!
//! The camera sits on a horizontal circle of fixed radius around a look-at
//! point, raised by a fixed elevation. A single angle selects its position
//! on the circle.

use glint_math::{normalize_or_zero, Ray, Vec3};

use crate::config::CameraConfig;
use crate::Rng;

/// World up direction used to build the camera basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Camera orbiting a fixed point.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Orbit parameters
    angle: f32,
    radius: f32,
    elevation: f32,
    look_at: Vec3,

    // Cached computed values (set by update_basis())
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_height: f32,
    aspect: f32,
}

impl OrbitCamera {
    /// Create a camera for an `image_width` x `image_height` image.
    pub fn new(config: &CameraConfig, image_width: u32, image_height: u32) -> Self {
        let mut camera = Self {
            image_width,
            image_height,
            angle: config.angle,
            radius: config.radius,
            elevation: config.elevation,
            look_at: config.look_at,
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            half_height: (config.vfov_degrees.to_radians() / 2.0).tan(),
            aspect: image_width as f32 / image_height.max(1) as f32,
        };
        camera.update_basis();
        camera
    }

    /// Orbit angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Move the camera to `angle` on its orbit.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.update_basis();
    }

    /// Advance the orbit angle by `delta` radians.
    pub fn rotate(&mut self, delta: f32) {
        self.set_angle(self.angle + delta);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Forward, right and up unit vectors.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.forward, self.right, self.up)
    }

    fn update_basis(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        let offset = Vec3::new(self.radius * sin, self.elevation, self.radius * cos);
        self.position = self.look_at + offset;
        self.forward = normalize_or_zero(self.look_at - self.position);
        self.right = normalize_or_zero(self.forward.cross(WORLD_UP));
        self.up = self.right.cross(self.forward);
    }

    /// Generate a ray through pixel (x, y), jittered inside the pixel.
    pub fn get_ray(&self, x: u32, y: u32, rng: &mut Rng) -> Ray {
        let jx = rng.next_f32();
        let jy = rng.next_f32();
        self.ray_through(x as f32 + jx, y as f32 + jy)
    }

    /// Ray through continuous pixel coordinates. (0, 0) is the top-left
    /// corner of the image.
    pub fn ray_through(&self, px: f32, py: f32) -> Ray {
        let ndc_x = (px / self.image_width as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - (py / self.image_height as f32) * 2.0;

        let u = ndc_x * self.aspect * self.half_height;
        let v = ndc_y * self.half_height;

        let direction = normalize_or_zero(self.forward + self.right * u + self.up * v);
        Ray::new(self.position, direction)
    }
}
