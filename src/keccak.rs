//! The Keccak-f[1600] permutation engine.
//!
//! This module owns the 1600-bit Keccak state as 25 lanes of 64 bits and
//! exposes the byte-granular primitives the sponge layer is built on:
//! XOR-in for absorbing, extraction for squeezing, and the 24-round
//! permutation itself (FIPS 202, section 3).
//!
//! Byte addressing is little-endian within a lane: state byte `b` lives at
//! bit position `8 * (b % 8)` of lane `b / 8`. Keeping the state in lanes and
//! shifting bytes in and out makes the layout independent of host endianness.

/// Number of 64-bit lanes in the state.
const LANES: usize = 25;

/// Number of rounds of Keccak-f[1600].
const ROUNDS: usize = 24;

/// Total addressable state bytes.
pub const STATE_BYTES: usize = 200;

/// Round constants for the iota step (FIPS 202, table in section 3.2.5).
const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets in lane-index order (`i = x + 5y`).
const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Pi destination index for each source lane.
const PI: [usize; LANES] = [
    0, 10, 20, 5, 15, 16, 1, 11, 21, 6, 7, 17, 2, 12, 22, 23, 8, 18, 3, 13, 14, 24, 9, 19, 4,
];

/// The 1600-bit Keccak state.
///
/// A freshly constructed state is all zeroes. The only observable state is
/// the 200 addressable bytes; the scratch arrays used by [`permute`] are
/// stack-local and carry nothing between calls.
///
/// [`permute`]: KeccakState::permute
#[derive(Clone, Debug, Default)]
pub struct KeccakState {
    lanes: [u64; LANES],
}

impl KeccakState {
    /// Creates a zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets every lane back to zero.
    pub fn reset(&mut self) {
        self.lanes = [0; LANES];
    }

    /// XORs `value` into the state byte at `offset`.
    #[inline]
    pub fn xor_byte(&mut self, value: u8, offset: usize) {
        debug_assert!(offset < STATE_BYTES);
        self.lanes[offset / 8] ^= u64::from(value) << (8 * (offset % 8));
    }

    /// XORs `src` into the state bytes starting at `offset`.
    ///
    /// Requires `offset + src.len() <= 200`. Callers split their input at
    /// the rate boundary, so a single call never wraps.
    pub fn xor_bytes(&mut self, src: &[u8], offset: usize) {
        debug_assert!(offset + src.len() <= STATE_BYTES);
        for (i, &byte) in src.iter().enumerate() {
            self.xor_byte(byte, offset + i);
        }
    }

    /// Copies the state bytes starting at `offset` into `dst`.
    ///
    /// Requires `offset + dst.len() <= 200`.
    pub fn extract_bytes(&self, dst: &mut [u8], offset: usize) {
        debug_assert!(offset + dst.len() <= STATE_BYTES);
        for (i, byte) in dst.iter_mut().enumerate() {
            let pos = offset + i;
            *byte = (self.lanes[pos / 8] >> (8 * (pos % 8))) as u8;
        }
    }

    /// Applies Keccak-f[1600]: 24 rounds of theta, rho, pi, chi and iota.
    ///
    /// Rho and pi are fused through a single scratch array, so one round
    /// costs two passes over the lanes plus the theta parity pass.
    pub fn permute(&mut self) {
        let a = &mut self.lanes;
        let mut b = [0u64; LANES];

        for rc in RC {
            // Theta: XOR each lane with the parity of its two neighbour columns.
            let mut c = [0u64; 5];
            for x in 0..5 {
                c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
            }
            for x in 0..5 {
                let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
                for y in 0..5 {
                    a[x + 5 * y] ^= d;
                }
            }

            // Rho and pi: rotate every lane and move it to its destination.
            for i in 0..LANES {
                b[PI[i]] = a[i].rotate_left(RHO[i]);
            }

            // Chi: XOR each lane with a non-linear function of its row.
            for y in 0..5 {
                for x in 0..5 {
                    a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
                }
            }

            // Iota.
            a[0] ^= rc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    /// Keccak-f[1600] of the all-zero state, from the XKCP known-answer
    /// intermediate values.
    const F1600_OF_ZERO: [u64; LANES] = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
        0xFF97A42D7F8E6FD4,
        0x90FEE5A0A44647C4,
        0x8C5BDA0CD6192E76,
        0xAD30A6F71B19059C,
        0x30935AB7D08FFC64,
        0xEB5AA93F2317D635,
        0xA9A6E6260D712103,
        0x81A57C16DBCF555F,
        0x43B831CD0347C826,
        0x01F22F1A11A5569F,
        0x05E5635A21D9AE61,
        0x64BEFEF28CC970F2,
        0x613670957BC46611,
        0xB87C5A554FD00ECB,
        0x8C3EE88A1CCF32C8,
        0x940C7922AE3A2614,
        0x1841F924A2C509E4,
        0x16F53526E70465C2,
        0x75F644E97F30A13B,
        0xEAF1FF7B5CECA249,
    ];

    #[test]
    fn permute_zero_state_known_answer() {
        let mut state = KeccakState::new();
        state.permute();
        assert_eq!(state.lanes, F1600_OF_ZERO);
    }

    #[test]
    fn permute_matches_reference_f1600() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5ead_beef);
        for _ in 0..16 {
            let mut input = [0u8; STATE_BYTES];
            rng.fill_bytes(&mut input);

            let mut state = KeccakState::new();
            state.xor_bytes(&input, 0);
            state.permute();
            let mut ours = [0u8; STATE_BYTES];
            state.extract_bytes(&mut ours, 0);

            let mut reference = [0u64; LANES];
            for (lane, chunk) in reference.iter_mut().zip(input.chunks_exact(8)) {
                *lane = u64::from_le_bytes(chunk.try_into().unwrap());
            }
            keccak::f1600(&mut reference);
            let mut expected = [0u8; STATE_BYTES];
            for (chunk, lane) in expected.chunks_exact_mut(8).zip(reference.iter()) {
                chunk.copy_from_slice(&lane.to_le_bytes());
            }

            assert_eq!(ours, expected);
        }
    }

    #[test]
    fn byte_addressing_is_little_endian_within_a_lane() {
        let mut state = KeccakState::new();
        state.xor_byte(0xAB, 9);
        assert_eq!(state.lanes[1], 0xAB00);

        let mut byte = [0u8; 1];
        state.extract_bytes(&mut byte, 9);
        assert_eq!(byte[0], 0xAB);
    }

    #[test]
    fn xor_bytes_spans_lane_boundaries() {
        let mut state = KeccakState::new();
        let src: Vec<u8> = (1..=16).collect();
        state.xor_bytes(&src, 4);

        let mut out = [0u8; 16];
        state.extract_bytes(&mut out, 4);
        assert_eq!(out[..], src[..]);

        // Bytes outside the written range stay zero.
        let mut edge = [0u8; 4];
        state.extract_bytes(&mut edge, 0);
        assert_eq!(edge, [0; 4]);
    }

    #[test]
    fn xor_is_an_involution() {
        let mut state = KeccakState::new();
        state.xor_bytes(&[0x5A; 32], 100);
        state.xor_bytes(&[0x5A; 32], 100);
        let mut out = [0u8; STATE_BYTES];
        state.extract_bytes(&mut out, 0);
        assert_eq!(out, [0; STATE_BYTES]);
    }

    #[test]
    fn reset_clears_every_byte() {
        let mut state = KeccakState::new();
        state.xor_bytes(&[0xFF; STATE_BYTES], 0);
        state.permute();
        state.reset();

        let mut out = [0u8; STATE_BYTES];
        state.extract_bytes(&mut out, 0);
        assert_eq!(out, [0; STATE_BYTES]);
    }
}
