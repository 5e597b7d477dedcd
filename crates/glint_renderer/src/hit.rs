//! Ray-primitive intersection.
//!
//! Scenes are small (at most 20 primitives), so the nearest-hit query is a
//! linear scan over spheres and then planes.

use glint_core::{Material, Plane, Scene, Sphere};
use glint_math::{Interval, Ray, Vec3};

/// Plane hits with |normal . direction| below this are rejected as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Side length of one checker square on planes.
pub const CHECKER_SIZE: f32 = 2.0;

/// Albedo scale applied on dark checker squares.
pub const CHECKER_DARKEN: f32 = 0.5;

/// Record of a ray-object intersection.
///
/// Only meaningful for the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal (outward for spheres, the plane's normal for planes)
    pub normal: Vec3,
    /// Material after per-hit modifiers
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if self.radius <= 0.0 {
            return None;
        }

        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        if a == 0.0 {
            return None;
        }
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let position = ray.at(root);
        Some(HitRecord {
            t: root,
            position,
            normal: (position - self.center) / self.radius,
            material: self.material,
        })
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let position = ray.at(t);
        let material = if is_dark_square(position) {
            self.material.darkened(CHECKER_DARKEN)
        } else {
            self.material
        };

        Some(HitRecord {
            t,
            position,
            normal: self.normal,
            material,
        })
    }
}

/// Closest hit among all spheres and planes of `scene` inside `ray_t`.
pub fn nearest_hit(scene: &Scene, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    let mut closest: Option<HitRecord> = None;
    let mut interval = ray_t;

    let spheres = scene.spheres().iter().map(|s| s as &dyn Hittable);
    let planes = scene.planes().iter().map(|p| p as &dyn Hittable);

    for object in spheres.chain(planes) {
        if let Some(rec) = object.hit(ray, interval) {
            interval = interval.with_max(rec.t);
            closest = Some(rec);
        }
    }

    closest
}

/// Checkerboard parity on the xz grid.
fn is_dark_square(p: Vec3) -> bool {
    let cx = (p.x / CHECKER_SIZE).floor() as i64;
    let cz = (p.z / CHECKER_SIZE).floor() as i64;
    (cx + cz).rem_euclid(2) == 1
}
