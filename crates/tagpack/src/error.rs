use std::collections::TryReserveError;

use thiserror::Error;

/// Reasons a single encode call can fail.
///
/// Every variant is fatal to the call that produced it; the encoder discards
/// whatever it had written for that value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A number whose magnitude the wire format cannot carry without loss.
    /// Only raised with `strict_numbers` enabled, or by the serde bridge for
    /// integers wider than 64 bits.
    #[error("number {value} is not representable")]
    UnrepresentableNumber { value: String },
    /// A host value outside the closed set of encodable kinds.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
    /// The output buffer could not grow.
    #[error("encoding failed: {0}")]
    EncodingFailure(String),
    /// A length or element count too large for a 32-bit length field.
    #[error("length {len} exceeds the 32-bit length field")]
    LengthOverflow { len: usize },
    /// Composite nesting went past the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimit { limit: usize },
    /// Error raised by a `Serialize` implementation.
    #[error("{0}")]
    Message(String),
}

impl From<TryReserveError> for EncodeError {
    fn from(e: TryReserveError) -> Self {
        EncodeError::EncodingFailure(e.to_string())
    }
}

impl serde::ser::Error for EncodeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        EncodeError::Message(msg.to_string())
    }
}
