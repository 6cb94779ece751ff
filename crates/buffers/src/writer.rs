//! Append-only byte writer with amortized growth.

use std::collections::TryReserveError;

/// An append-only byte sink.
///
/// Bytes are only ever appended; nothing already written is patched in place.
/// The only way to remove bytes is [`Writer::rewind`], which drops everything
/// after a previously taken [`Writer::mark`].
///
/// # Example
///
/// ```
/// use tagpack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer. No memory is allocated until the first write.
    pub fn new() -> Self {
        Self {
            uint8: Vec::new(),
        }
    }

    /// Creates a writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Makes room for at least `additional` more bytes, reporting allocation
    /// failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.uint8.try_reserve(additional)
    }

    /// Current cursor position, i.e. the number of bytes written since the
    /// last flush.
    #[inline]
    pub fn x(&self) -> usize {
        self.uint8.len()
    }

    /// Returns the current cursor position, for a later [`Writer::rewind`].
    #[inline]
    pub fn mark(&self) -> usize {
        self.uint8.len()
    }

    /// Discards every byte written after `mark`.
    pub fn rewind(&mut self, mark: usize) {
        self.uint8.truncate(mark);
    }

    /// Drops anything not yet flushed and starts a fresh unit.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the bytes written since the last flush, leaving the writer
    /// empty with the same capacity for the next unit.
    pub fn flush(&mut self) -> Vec<u8> {
        self.uint8.split_off(0)
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes two bytes, a tag followed by a one-byte value.
    #[inline]
    pub fn u8u8(&mut self, tag: u8, val: u8) {
        self.uint8.extend_from_slice(&[tag, val]);
    }

    /// Writes a u8 followed by a u16 (big-endian).
    pub fn u8u16(&mut self, tag: u8, val: u16) {
        let [a, b] = val.to_be_bytes();
        self.uint8.extend_from_slice(&[tag, a, b]);
    }

    /// Writes a u8 followed by a u32 (big-endian).
    pub fn u8u32(&mut self, tag: u8, val: u32) {
        let [a, b, c, d] = val.to_be_bytes();
        self.uint8.extend_from_slice(&[tag, a, b, c, d]);
    }

    /// Writes a u8 followed by a f32 (big-endian).
    pub fn u8f32(&mut self, tag: u8, val: f32) {
        let [a, b, c, d] = val.to_be_bytes();
        self.uint8.extend_from_slice(&[tag, a, b, c, d]);
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.uint8.extend_from_slice(bytes);
        bytes.len()
    }
}
