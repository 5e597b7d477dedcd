//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are sampled independently
//! and in parallel using rayon. Each bucket draws from its own RNG stream,
//! so a pass is reproducible no matter how the buckets are scheduled.

use glint_core::Scene;
use glint_math::Color;

use crate::{trace, OrbitCamera, Rng, TraceSettings};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket; also selects its RNG stream
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Split a `width` x `height` image into row-major buckets of at most
/// `bucket_size` pixels per side. Edge buckets are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

/// Take one radiance sample for every pixel of `bucket`.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &OrbitCamera,
    scene: &Scene,
    settings: &TraceSettings,
    rng: &mut Rng,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let ray = camera.get_ray(bucket.x + local_x, bucket.y + local_y, rng);
            pixels.push(trace(scene, &ray, settings, rng));
        }
    }

    BucketResult::new(*bucket, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::presets;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
        assert_eq!(buckets[3], Bucket::new(64, 64, 36, 6, 3));
    }

    #[test]
    fn test_generate_buckets_indices_in_order() {
        let buckets = generate_buckets(10, 10, 3);
        for (i, b) in buckets.iter().enumerate() {
            assert_eq!(b.index, i);
        }
    }

    #[test]
    fn test_zero_bucket_size_is_clamped() {
        let buckets = generate_buckets(2, 2, 0);
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn test_render_bucket_is_reproducible() {
        let scene = presets::build(0).unwrap();
        let camera = OrbitCamera::new(&Default::default(), 16, 16);
        let bucket = Bucket::new(4, 4, 8, 8, 3);
        let settings = TraceSettings::default();

        let a = render_bucket(&bucket, &camera, &scene, &settings, &mut Rng::stream(77, 3));
        let b = render_bucket(&bucket, &camera, &scene, &settings, &mut Rng::stream(77, 3));
        assert_eq!(a.pixels.len(), 64);
        assert_eq!(a.pixels, b.pixels);
    }
}
