//! Deterministic random number stream.
//!
//! A 128-bit xorshift generator. Every draw mutates the state in place, so
//! each logical stream (the whole image, or one bucket of it) owns its own
//! `Rng`. Two generators seeded with the same value produce bit-identical
//! sequences.

use glint_math::Vec3;
use rand::{Error, RngCore, SeedableRng};

/// Used in place of the all-zero state, which xorshift cannot leave.
const FALLBACK_STATE: [u32; 4] = [0x193a_6754, 0xa8a7_d469, 0x9783_0e05, 0x113b_a7bb];

/// Weyl increment used to spread stream indices across seeds.
const STREAM_INCREMENT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Rejection bounds for [`Rng::random_unit_vector`] on squared length.
const MIN_BALL_LEN_SQ: f32 = 0.001;

/// xorshift128 pseudo-random generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    state: [u32; 4],
}

impl Rng {
    /// Seed a generator from a 64-bit value.
    ///
    /// The seed is expanded with SplitMix64 so nearby seeds give
    /// unrelated streams.
    pub fn seed(seed: u64) -> Self {
        let mut sm = seed;
        let a = splitmix64(&mut sm);
        let b = splitmix64(&mut sm);
        Self::from_state([a as u32, (a >> 32) as u32, b as u32, (b >> 32) as u32])
    }

    /// Independent stream number `index` derived from `seed`.
    pub fn stream(seed: u64, index: u64) -> Self {
        Self::seed(seed ^ index.wrapping_add(1).wrapping_mul(STREAM_INCREMENT))
    }

    /// Build a generator from raw state. All-zero state is replaced by a
    /// fixed nonzero fallback.
    pub fn from_state(state: [u32; 4]) -> Self {
        if state == [0; 4] {
            Self {
                state: FALLBACK_STATE,
            }
        } else {
            Self { state }
        }
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let [x, y, z, w] = self.state;
        let t = x ^ (x << 11);
        let next = w ^ (w >> 19) ^ t ^ (t >> 8);
        self.state = [y, z, w, next];
        next
    }

    /// Uniform float in [0, 1).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // 24 high bits fit the f32 mantissa exactly, so 1.0 is never produced.
        (self.step() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Uniform float in [-1, 1).
    #[inline]
    pub fn next_signed(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }

    /// Random unit vector.
    ///
    /// Draws signed 3-vectors until one lands inside the unit ball (and
    /// not too close to its center), then normalizes it.
    pub fn random_unit_vector(&mut self) -> Vec3 {
        loop {
            let v = Vec3::new(self.next_signed(), self.next_signed(), self.next_signed());
            let len_sq = v.length_squared();
            if len_sq > MIN_BALL_LEN_SQ && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }

    /// Random unit vector in the hemisphere around `normal`.
    pub fn hemisphere(&mut self, normal: Vec3) -> Vec3 {
        let v = self.random_unit_vector();
        if v.dot(normal) < 0.0 {
            -v
        } else {
            v
        }
    }
}

impl RngCore for Rng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rng {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u32; 4];
        for (word, bytes) in state.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self::from_state(state)
    }

    fn seed_from_u64(seed: u64) -> Self {
        Rng::seed(seed)
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
