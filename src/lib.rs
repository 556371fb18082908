//! Portable SHAKE128, the 128-bit-security extendable-output function from
//! the SHA-3 family (FIPS 202).
//!
//! The crate is a sponge construction over an in-crate Keccak-f[1600]
//! permutation: [`keccak`] owns the 1600-bit state and the permutation,
//! [`sponge`] drives the absorb/squeeze state machine with SHAKE domain
//! separation on top of it.
//!
//! # Usage
//!
//! ```
//! use shake128::Shake128Sponge;
//!
//! let mut sponge = Shake128Sponge::new();
//! sponge.update(b"abc").unwrap();
//! let output = sponge.digest(32);
//!
//! assert_eq!(output, Shake128Sponge::hash(b"abc", 32));
//! ```
//!
//! Output length is a parameter: shorter outputs are prefixes of longer ones
//! for the same input, and repeated [`digest`](Shake128Sponge::digest) calls
//! re-emit from the start of the output stream.

#![deny(unused_variables)]
#![deny(unused_mut)]

pub mod errors;
pub mod keccak;
pub mod sponge;

pub use errors::*;
pub use keccak::KeccakState;
pub use sponge::{Shake128Sponge, CAPACITY, RATE};
