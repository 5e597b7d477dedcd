//! Progressive accumulation buffer and tone mapping.
//!
//! The buffer keeps a per-pixel running radiance sum and one global sample
//! counter. Displayable pixels are always derived from `sum / samples`.

use glint_math::Color;

use crate::bucket::BucketResult;

/// Reinhard tone map, `c / (c + 1)`.
#[inline]
pub fn reinhard(c: f32) -> f32 {
    if c == f32::INFINITY {
        return 1.0;
    }
    c / (c + 1.0)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Map one linear radiance channel to 8 bits: Reinhard, gamma, clamp.
///
/// Negative and NaN radiance map to 0.
#[inline]
pub fn tone_map_channel(c: f32) -> u8 {
    (255.0 * linear_to_gamma(reinhard(c.max(0.0)))).clamp(0.0, 255.0) as u8
}

/// Convert a linear radiance to opaque 8-bit RGBA.
pub fn tone_map(color: Color) -> [u8; 4] {
    [
        tone_map_channel(color.x),
        tone_map_channel(color.y),
        tone_map_channel(color.z),
        255,
    ]
}

/// Running per-pixel radiance sums plus the number of completed passes.
#[derive(Debug, Clone)]
pub struct AccumulationBuffer {
    width: u32,
    height: u32,
    sum: Vec<Color>,
    samples: u32,
}

impl AccumulationBuffer {
    /// Create a new zeroed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sum: vec![Color::ZERO; width as usize * height as usize],
            samples: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of full passes accumulated since the last reset.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Zero all sums and the sample counter.
    pub fn reset(&mut self) {
        self.sum.fill(Color::ZERO);
        self.samples = 0;
    }

    /// Raw radiance sum at (x, y).
    pub fn sum(&self, x: u32, y: u32) -> Color {
        self.sum[self.index(x, y)]
    }

    /// Mean radiance at (x, y), black before the first pass.
    pub fn average(&self, x: u32, y: u32) -> Color {
        if self.samples == 0 {
            return Color::ZERO;
        }
        self.sum(x, y) / self.samples as f32
    }

    /// Add one complete sampling pass.
    ///
    /// `buckets` must cover every pixel exactly once; the sample counter
    /// advances by one.
    pub fn accumulate_pass<'a, I>(&mut self, buckets: I)
    where
        I: IntoIterator<Item = &'a BucketResult>,
    {
        let mut covered = 0usize;
        for result in buckets {
            let bucket = &result.bucket;
            for (i, color) in result.pixels.iter().enumerate() {
                let x = bucket.x + i as u32 % bucket.width;
                let y = bucket.y + i as u32 / bucket.width;
                let index = self.index(x, y);
                self.sum[index] += *color;
            }
            covered += result.pixels.len();
        }
        debug_assert_eq!(covered, self.sum.len(), "pass did not cover the image");
        self.samples += 1;
    }

    /// Tone map `sum / samples` for every pixel into `out`.
    pub fn resolve_into(&self, out: &mut [[u8; 4]]) {
        debug_assert_eq!(out.len(), self.sum.len());
        if self.samples == 0 {
            out.fill(tone_map(Color::ZERO));
            return;
        }
        let scale = 1.0 / self.samples as f32;
        for (pixel, sum) in out.iter_mut().zip(&self.sum) {
            *pixel = tone_map(*sum * scale);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
