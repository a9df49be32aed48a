//! Error type shared by the effect and its bindings.

use thiserror::Error;

/// Errors raised by the neumorphism effect.
///
/// Numeric parameters are clamped rather than rejected, so the only failures
/// are values with no sensible clamp: unknown light origins and pixel buffers
/// with an unsupported channel layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
