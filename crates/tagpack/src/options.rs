//! Encoder configuration.

use serde::Deserialize;

/// Which variant of the tag table to emit.
///
/// The two modes differ only for positive integers of 128 and above, for
/// `i32::MIN`, and for units that need a 32-bit length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compat {
    /// Self-consistent output.
    ///
    /// Positive integers use the unsigned forms `0xcc`/`0xcd`/`0xce`, and
    /// integers above 65535, str32 and bin32 units are always written.
    #[default]
    Standard,
    /// Byte-for-byte output of the legacy serializer.
    ///
    /// Positive integers of 128 and above reuse the signed tags
    /// `0xd0`/`0xd1`/`0xd2`. The units that need a 32-bit payload
    /// (integers above 65535, text or blobs longer than 65535 bytes) produce
    /// no bytes at all, and `i32::MIN` is written as an empty fixmap.
    Reference,
}

/// Options controlling a single [`Encoder`](crate::Encoder).
///
/// Deserializable so the command line tool can read it from a TOML file:
///
/// ```toml
/// compat = "reference"
/// strict_numbers = true
/// max_depth = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderOptions {
    pub compat: Compat,
    /// Reject lossy number conversions instead of truncating to `f32`.
    ///
    /// Only magnitude loss is rejected: an integer outside the 32-bit range
    /// that `f32` cannot hold exactly, or a finite float that overflows `f32`.
    /// Ordinary fractional rounding (e.g. `0.1`) is always accepted.
    pub strict_numbers: bool,
    /// Maximum nesting of sequences and mappings. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compat(mut self, compat: Compat) -> Self {
        self.compat = compat;
        self
    }

    pub fn strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = strict;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
