//! One-shot encoding helpers.

use crate::{EncodeError, Encoder, EncoderOptions, Value};

/// Encodes with default options. `None` in, `None` out.
pub fn encode(value: Option<&Value>) -> Result<Option<Vec<u8>>, EncodeError> {
    Encoder::new().encode(value)
}

/// Encodes with the given options.
pub fn encode_with(
    options: EncoderOptions,
    value: Option<&Value>,
) -> Result<Option<Vec<u8>>, EncodeError> {
    Encoder::with_options(options).encode(value)
}
