//! The SHAKE128 sponge construction.
//!
//! This module implements the absorb/squeeze state machine over the
//! [`KeccakState`] permutation engine, with the SHAKE domain-separation
//! suffix `0x1F` and rate/capacity split 168/32.
//!
//! # Usage
//! - Input is absorbed with [`update`], in as many chunks as the caller
//!   likes; any chunking of the same byte sequence leaves the sponge in the
//!   same state.
//! - The first [`digest`] call pads and finalizes the sponge; it and every
//!   later `digest` call return output from the start of the squeezed
//!   stream, so repeated calls re-emit the same prefix.
//!
//! [`update`]: Shake128Sponge::update
//! [`digest`]: Shake128Sponge::digest

use crate::errors::{Error, Result};
use crate::keccak::KeccakState;

/// Bytes of state absorbing input and producing output per block.
pub const RATE: usize = 168;

/// Bytes of state never touched by input or output.
pub const CAPACITY: usize = 32;

/// SHAKE domain-separation suffix, XORed right after the last input byte.
const SUFFIX: u8 = 0x1F;

/// Final padding byte, XORed into the last byte of the rate block.
const PAD_TAIL: u8 = 0x80;

/// A SHAKE128 extendable-output context.
///
/// A freshly constructed sponge is in the absorb phase. The first call to
/// [`digest`](Self::digest) applies padding and moves it to the squeeze
/// phase, after which [`update`](Self::update) is rejected until
/// [`reset`](Self::reset).
#[derive(Clone, Debug, Default)]
pub struct Shake128Sponge {
    state: KeccakState,
    /// Bytes XORed into the current rate block, always `< RATE`.
    absorbed: usize,
    /// Whether padding has been applied and squeezing has begun.
    finalized: bool,
    /// Offset within the current squeezed rate block.
    squeeze_offset: usize,
}

impl Shake128Sponge {
    /// Creates a sponge in the absorb phase with a zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs `data` into the sponge.
    ///
    /// Bytes are absorbed in order, at most a rate block at a time; every
    /// full block triggers a permutation. Splitting the same input across
    /// several `update` calls is equivalent to a single call.
    ///
    /// # Errors
    /// Returns [`Error::UpdateAfterFinalize`] if the sponge is already in
    /// the squeeze phase. The sponge state is not changed.
    pub fn update(&mut self, mut data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::UpdateAfterFinalize);
        }

        while !data.is_empty() {
            let chunk = usize::min(RATE - self.absorbed, data.len());
            self.state.xor_bytes(&data[..chunk], self.absorbed);
            self.absorbed += chunk;
            data = &data[chunk..];

            if self.absorbed == RATE {
                self.state.permute();
                self.absorbed = 0;
            }
        }
        Ok(())
    }

    /// Finalizes the sponge if needed and returns `output_len` bytes.
    ///
    /// The first call XORs the SHAKE suffix after the absorbed input and the
    /// padding tail into the last rate byte, then permutes. When the input
    /// fills the block up to its last byte, the two padding bytes coincide
    /// and the XORs collapse into a single `0x9F`.
    ///
    /// Squeezing always restarts from the beginning of the output stream:
    /// calling `digest` twice returns the same leading bytes, and asking for
    /// more output later re-emits the shorter output as a prefix. Blocks
    /// beyond the first are squeezed from a scratch copy of the state, so
    /// the finalized state itself never advances.
    ///
    /// A zero `output_len` still finalizes the sponge and returns an empty
    /// vector.
    pub fn digest(&mut self, output_len: usize) -> Vec<u8> {
        if !self.finalized {
            self.state.xor_byte(SUFFIX, self.absorbed);
            self.state.xor_byte(PAD_TAIL, RATE - 1);
            self.state.permute();
            self.finalized = true;
        }
        self.squeeze_offset = 0;

        let mut block = self.state.clone();
        let mut output = vec![0u8; output_len];
        let mut written = 0;
        while written < output_len {
            if self.squeeze_offset == RATE {
                block.permute();
                self.squeeze_offset = 0;
            }

            let chunk = usize::min(RATE - self.squeeze_offset, output_len - written);
            block.extract_bytes(&mut output[written..written + chunk], self.squeeze_offset);
            self.squeeze_offset += chunk;
            written += chunk;
        }
        output
    }

    /// Returns the sponge to its freshly constructed state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.absorbed = 0;
        self.finalized = false;
        self.squeeze_offset = 0;
    }

    /// One-shot SHAKE128: hashes `data` and returns `output_len` bytes.
    pub fn hash(data: &[u8], output_len: usize) -> Vec<u8> {
        let mut sponge = Self::new();
        sponge.update(data).expect("a fresh sponge accepts input");
        sponge.digest(output_len)
    }
}
