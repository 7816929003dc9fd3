//! Hash functions and the seeded simplex noise field.
//!
//! [`NoisePrimitive`] is the only stateful piece of the synthesizer: its
//! permutation table is shuffled once from a seed and never touched again, so
//! a single instance can be shared by reference across threads and calls.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seed used by [`NoisePrimitive::default`].
pub const DEFAULT_SEED: u64 = 0x5eed_f107;

/// Integer hash function using bit manipulation.
///
/// Produces a pseudo-random u32 from an input u32. Good for seeding
/// and deriving other random values.
#[inline]
pub fn hash(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x
}

/// Hash integer cell coordinates to a float in [0, 1).
///
/// Depends on nothing but the two coordinates, so the same cell always
/// hashes to the same value regardless of where or how it is sampled.
#[inline]
pub fn hash2_unit(x: i32, y: i32) -> f64 {
    let n = hash(
        (x as u32)
            .wrapping_mul(374761393)
            .wrapping_add((y as u32).wrapping_mul(668265263)),
    );
    n as f64 / (u32::MAX as f64 + 1.0)
}

const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

const GRAD2: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Seeded 2D simplex noise.
///
/// `sample` is continuous, returns values in roughly [-1, 1], and is a pure
/// function of its input for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct NoisePrimitive {
    seed: u64,
    perm: [u8; 512],
}

impl Default for NoisePrimitive {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoisePrimitive {
    /// Build the permutation table from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { seed, perm }
    }

    /// Build with a seed drawn from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// The seed this instance was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    fn gradient(&self, i: i64, j: i64) -> (f64, f64) {
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let idx = self.perm[ii + self.perm[jj] as usize] as usize % GRAD2.len();
        GRAD2[idx]
    }

    /// Sample the noise field at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew into simplex space to find the containing cell
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        let x1 = x0 - i1 + G2;
        let y1 = y0 - j1 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let i = i as i64;
        let j = j as i64;
        let corner = |dx: f64, dy: f64, g: (f64, f64)| -> f64 {
            let t = 0.5 - dx * dx - dy * dy;
            if t < 0.0 {
                0.0
            } else {
                let t2 = t * t;
                t2 * t2 * (g.0 * dx + g.1 * dy)
            }
        };

        let n0 = corner(x0, y0, self.gradient(i, j));
        let n1 = corner(x1, y1, self.gradient(i + i1 as i64, j + j1 as i64));
        let n2 = corner(x2, y2, self.gradient(i + 1, j + 1));

        70.0 * (n0 + n1 + n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(hash(42), hash(42));
        assert_ne!(hash(42), hash(43));
        assert_eq!(hash2_unit(3, 7), hash2_unit(3, 7));
        assert_ne!(hash2_unit(3, 7), hash2_unit(7, 3));
    }

    #[test]
    fn test_hash2_unit_range() {
        for y in -20..20 {
            for x in -20..20 {
                let v = hash2_unit(x, y);
                assert!((0.0..1.0).contains(&v), "hash2_unit out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_noise_range() {
        let noise = NoisePrimitive::default();
        for y in 0..100 {
            for x in 0..100 {
                let v = noise.sample(x as f64 * 0.173 - 7.0, y as f64 * 0.119 + 3.0);
                assert!((-1.0..=1.0).contains(&v), "noise out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_noise_continuity() {
        let noise = NoisePrimitive::default();
        for i in 0..200 {
            let x = i as f64 * 0.37;
            let y = i as f64 * -0.21;
            let v1 = noise.sample(x, y);
            let v2 = noise.sample(x + 1e-4, y + 1e-4);
            assert!((v1 - v2).abs() < 0.01, "noise should be continuous at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_noise_deterministic_per_seed() {
        let a = NoisePrimitive::new(7);
        let b = NoisePrimitive::new(7);
        let c = NoisePrimitive::new(8);

        let mut differs = false;
        for i in 0..64 {
            let (x, y) = (i as f64 * 0.61, i as f64 * 0.43 + 0.5);
            assert_eq!(a.sample(x, y), b.sample(x, y));
            differs |= a.sample(x, y) != c.sample(x, y);
        }
        assert!(differs, "different seeds should give different fields");
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_noise_not_flat() {
        let noise = NoisePrimitive::default();
        let values: Vec<f64> = (0..50).map(|i| noise.sample(i as f64 * 0.7, 0.3)).collect();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.5);
    }
}
