//! Seedable randomness for field generation and per-frame noise.
//!
//! Wraps `ChaCha8Rng` so identical seeds produce identical fields and frames on every platform.
//! Unseeded renderers draw their seed from OS entropy.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Stream id used for per-frame noise so it never perturbs field regeneration draws.
const NOISE_STREAM: u64 = 1;

/// Random source for wave generation and pixel noise.
#[derive(Clone, Debug)]
pub struct WaveRng(ChaCha8Rng);

impl WaveRng {
    /// Deterministic generator for `seed`.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Seeded generator when `seed` is set, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed_u64(seed),
            None => Self::from_entropy(),
        }
    }

    /// Independent generator for per-frame noise, derived from this one's seed.
    pub fn noise_stream(&self) -> Self {
        let mut rng = ChaCha8Rng::from_seed(self.0.get_seed());
        rng.set_stream(NOISE_STREAM);
        Self(rng)
    }
}

impl RngCore for WaveRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
