//! Compact, self-describing binary encoding for in-memory value graphs.
//!
//! Each encoded unit starts with a tag byte that says how to read what
//! follows. Small values, strings and collections carry their value or length
//! inside the tag; larger ones get a 1, 2 or 4 byte big-endian length chosen
//! by payload size. The tag table follows MessagePack conventions.
//!
//! # Example
//!
//! ```
//! use tagpack::{encode, Value};
//!
//! let value = Value::Sequence(vec![Value::Null, Value::from(true), Value::from("hi")]);
//! assert_eq!(
//!     encode(Some(&value)).unwrap(),
//!     Some(vec![0x93, 0xc0, 0xc3, 0xa2, b'h', b'i'])
//! );
//! assert_eq!(encode(None).unwrap(), None);
//! ```
//!
//! Numbers that are not exactly 32-bit integers are narrowed to single
//! precision; see [`Value::Float`] and [`EncoderOptions::strict_numbers`].

pub mod cli;
pub mod constants;
mod encoder;
mod error;
mod options;
pub mod ser;
mod util;
mod value;

pub use constants::Marker;
pub use encoder::Encoder;
pub use error::EncodeError;
pub use options::{Compat, EncoderOptions};
pub use ser::{to_value, to_vec};
pub use util::{encode, encode_with};
pub use value::{Mapping, Value};
