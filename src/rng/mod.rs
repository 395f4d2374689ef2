//! Random number generation with hardware entropy.
//!
//! Every generator in the crate is passed in explicitly as `&mut R` where
//! `R: rand::Rng`. [`Rand`] is the default source for the command line: its
//! state is seeded from a cycle counter and fresh counter readings are mixed
//! into every step.

mod hw;

use rand::RngCore;
use zeroize::Zeroize;

/// Odd 64-bit multipliers selected per step by the mixed state.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0xd6e8_feb8_6659_fd93,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
];

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

// =============================================================================
// RNG
// =============================================================================

pub struct Rand {
    state: u64,
}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Rand {
            state: hw::entropy(),
        }
    }

    #[inline(always)]
    pub fn get(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Rand {
    fn next_u32(&mut self) -> u32 {
        (self.get() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.get()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.get().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
