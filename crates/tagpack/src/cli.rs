//! Logic behind the `tagpack` binary: JSON text in, encoded bytes out.

use std::path::Path;

use thiserror::Error;

use crate::{EncodeError, Encoder, EncoderOptions, Value};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses `json` and encodes it.
///
/// Input that is empty or only whitespace means no value was supplied and
/// yields `Ok(None)`; the literal `null` yields `[0xc0]`.
pub fn pack_json(json: &str, options: &EncoderOptions) -> Result<Option<Vec<u8>>, CliError> {
    let json = json.trim();
    if json.is_empty() {
        return Ok(None);
    }
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    let value = Value::from(parsed);
    let mut encoder = Encoder::with_options(options.clone());
    Ok(encoder.encode(Some(&value))?)
}

/// Reads [`EncoderOptions`] from a TOML file.
pub fn load_options(path: &Path) -> Result<EncoderOptions, CliError> {
    let text = std::fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.display().to_string(),
        source,
    })
}

/// Lowercase hex, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
