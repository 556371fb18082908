//! Error types for the SHAKE128 sponge.
//!
//! This module defines the [`Error`] enum for the single programmer-visible
//! failure mode of the sponge state machine: feeding more input into a
//! context that has already been finalized.

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Represents a misuse of the sponge state machine.
///
/// Well-formed input can never fail: any input length (including zero) and
/// any output length are valid.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `update` was called on a context already in the squeeze phase.
    ///
    /// The context is left untouched and remains usable for further
    /// `digest` calls.
    #[error("update called after the sponge was finalized")]
    UpdateAfterFinalize,
}
