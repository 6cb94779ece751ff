//! Byte buffer primitives for tagpack.
//!
//! The only type here is [`Writer`], a single growable output sink. Encoders
//! append headers and payloads to it and take the finished bytes with
//! [`Writer::flush`].
//!
//! # Example
//!
//! ```
//! use tagpack_buffers::Writer;
//!
//! let mut writer = Writer::new();
//! writer.u8u16(0xda, 3);
//! writer.utf8("abc");
//! assert_eq!(writer.flush(), [0xda, 0x00, 0x03, b'a', b'b', b'c']);
//! ```

mod writer;

pub use writer::Writer;
