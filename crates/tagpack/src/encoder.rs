//! `Encoder` — depth-first tag/length encoder for [`Value`] graphs.

use tagpack_buffers::Writer;
use tracing::{debug, trace};

use crate::constants::{
    Marker, MAX_FIXCOLLECTION_LEN, MAX_FIXSTR_LEN, MAX_POSITIVE_FIXINT, MIN_NEGATIVE_FIXINT,
};
use crate::value::{float_as_int32, Mapping};
use crate::{Compat, EncodeError, EncoderOptions, Value};

/// Encodes values into the tagged binary format.
///
/// One encoder can be reused for many values; each call returns its own
/// buffer. A failed call leaves nothing behind in the writer.
///
/// ```
/// use tagpack::{Encoder, Value};
///
/// let mut encoder = Encoder::new();
/// let value = Value::mapping([("a", Value::from(1)), ("b", Value::from(2))]);
/// let bytes = encoder.encode(Some(&value)).unwrap();
/// assert_eq!(bytes, Some(vec![0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0x02]));
/// assert_eq!(encoder.encode(None).unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    pub writer: Writer,
    options: EncoderOptions,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_options(EncoderOptions::default())
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            writer: Writer::new(),
            options,
        }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encodes `value`, or returns `Ok(None)` when no value is supplied.
    ///
    /// In [`Compat::Reference`] mode a top-level value whose bytes are dropped
    /// also yields `Ok(None)`, since nothing was written for it.
    pub fn encode(&mut self, value: Option<&Value>) -> Result<Option<Vec<u8>>, EncodeError> {
        let Some(value) = value else {
            trace!("absent value, nothing encoded");
            return Ok(None);
        };
        let bytes = self.encode_value(value)?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(bytes))
    }

    /// Encodes `value` into a fresh buffer.
    pub fn encode_value(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        let mark = self.writer.mark();
        if let Err(err) = self.write_any(value) {
            self.writer.rewind(mark);
            debug!(kind = value.kind(), %err, "encode failed");
            return Err(err);
        }
        let bytes = self.writer.flush();
        trace!(kind = value.kind(), len = bytes.len(), "encoded value");
        Ok(bytes)
    }

    /// Appends `value` to the writer without flushing.
    ///
    /// On error the writer may hold a partial unit; [`Encoder::encode_value`]
    /// rewinds it.
    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        self.write_at_depth(value, 0)
    }

    fn write_at_depth(&mut self, value: &Value, depth: usize) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_bool(*b),
            Value::Integer(i) => self.write_integer(*i),
            Value::Float(f) => self.write_number(*f),
            Value::Text(s) => self.write_str(s),
            Value::Bytes(b) => self.write_bin(b),
            Value::Sequence(items) => {
                let depth = self.enter(depth)?;
                self.write_arr_hdr(items.len())?;
                for item in items {
                    self.write_at_depth(item, depth)?;
                }
                Ok(())
            }
            Value::Mapping(map) => {
                let depth = self.enter(depth)?;
                self.write_map_at_depth(map, depth)
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, EncodeError> {
        let depth = depth + 1;
        match self.options.max_depth {
            Some(limit) if depth > limit => Err(EncodeError::DepthLimit { limit }),
            _ => Ok(depth),
        }
    }

    fn reserve(&mut self, additional: usize) -> Result<(), EncodeError> {
        self.writer.try_reserve(additional)?;
        Ok(())
    }

    pub fn write_null(&mut self) -> Result<(), EncodeError> {
        self.reserve(1)?;
        self.writer.u8(Marker::Nil.byte());
        Ok(())
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), EncodeError> {
        self.reserve(1)?;
        let marker = if b { Marker::True } else { Marker::False };
        self.writer.u8(marker.byte());
        Ok(())
    }

    /// Writes an `f64`, taking the integer forms when it is exactly an `i32`.
    pub fn write_number(&mut self, num: f64) -> Result<(), EncodeError> {
        match float_as_int32(num) {
            Some(int) => self.write_int32(int),
            None => {
                if self.options.strict_numbers && num.is_finite() && (num as f32).is_infinite() {
                    debug!(num, "float overflows f32");
                    return Err(EncodeError::UnrepresentableNumber {
                        value: num.to_string(),
                    });
                }
                self.write_float32(num as f32)
            }
        }
    }

    /// Writes an `i64`. Anything outside the `i32` range is narrowed to `f32`.
    pub fn write_integer(&mut self, int: i64) -> Result<(), EncodeError> {
        if let Ok(int) = i32::try_from(int) {
            return self.write_int32(int);
        }
        let narrowed = int as f32;
        if self.options.strict_numbers && narrowed as i128 != i128::from(int) {
            debug!(int, "integer not exactly representable as f32");
            return Err(EncodeError::UnrepresentableNumber {
                value: int.to_string(),
            });
        }
        self.write_float32(narrowed)
    }

    pub fn write_float32(&mut self, float: f32) -> Result<(), EncodeError> {
        self.reserve(5)?;
        self.writer.u8f32(Marker::Float32.byte(), float);
        Ok(())
    }

    /// Writes a 32-bit integer with the smallest form that holds it.
    pub fn write_int32(&mut self, int: i32) -> Result<(), EncodeError> {
        self.reserve(5)?;
        let reference = self.options.compat == Compat::Reference;
        if int >= 0 {
            let uint = int as u32;
            if uint <= MAX_POSITIVE_FIXINT {
                self.writer.u8(uint as u8);
            } else if uint <= 0xff {
                let tag = if reference { Marker::Int8 } else { Marker::Uint8 };
                self.writer.u8u8(tag.byte(), uint as u8);
            } else if uint <= 0xffff {
                let tag = if reference { Marker::Int16 } else { Marker::Uint16 };
                self.writer.u8u16(tag.byte(), uint as u16);
            } else if reference {
                debug!(int, "dropping 32-bit positive integer");
            } else {
                self.writer.u8u32(Marker::Uint32.byte(), uint);
            }
        } else if int >= MIN_NEGATIVE_FIXINT {
            self.writer
                .u8(Marker::NegativeFixint.byte() | (int - MIN_NEGATIVE_FIXINT) as u8);
        } else if int >= -0x80 {
            self.writer.u8u8(Marker::Int8.byte(), int as i8 as u8);
        } else if int >= -0x8000 {
            self.writer.u8u16(Marker::Int16.byte(), int as i16 as u16);
        } else if int > i32::MIN || !reference {
            self.writer.u8u32(Marker::Int32.byte(), int as u32);
        } else {
            debug!("i32::MIN written as empty fixmap");
            self.writer.u8(Marker::Fixmap.byte());
        }
        Ok(())
    }

    fn drops_long_unit(&self, length: usize) -> bool {
        self.options.compat == Compat::Reference && length > 0xffff
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        self.reserve(5)?;
        if length <= MAX_FIXSTR_LEN {
            self.writer.u8(Marker::Fixstr.byte() | length as u8);
        } else if length <= 0xff {
            self.writer.u8u8(Marker::Str8.byte(), length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(Marker::Str16.byte(), length as u16);
        } else {
            self.writer.u8u32(Marker::Str32.byte(), length_u32(length)?);
        }
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        let length = s.len();
        if self.drops_long_unit(length) {
            debug!(length, "dropping str32 unit");
            return Ok(());
        }
        self.write_str_hdr(length)?;
        self.reserve(length)?;
        self.writer.utf8(s);
        Ok(())
    }

    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        self.reserve(5)?;
        if length <= 0xff {
            self.writer.u8u8(Marker::Bin8.byte(), length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(Marker::Bin16.byte(), length as u16);
        } else {
            self.writer.u8u32(Marker::Bin32.byte(), length_u32(length)?);
        }
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), EncodeError> {
        let length = buf.len();
        if self.drops_long_unit(length) {
            debug!(length, "dropping bin32 unit");
            return Ok(());
        }
        self.write_bin_hdr(length)?;
        self.reserve(length)?;
        self.writer.buf(buf);
        Ok(())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        self.reserve(5)?;
        if length <= MAX_FIXCOLLECTION_LEN {
            self.writer.u8(Marker::Fixarray.byte() | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(Marker::Array16.byte(), length as u16);
        } else {
            self.writer.u8u32(Marker::Array32.byte(), length_u32(length)?);
        }
        Ok(())
    }

    pub fn write_arr(&mut self, items: &[Value]) -> Result<(), EncodeError> {
        let depth = self.enter(0)?;
        self.write_arr_hdr(items.len())?;
        for item in items {
            self.write_at_depth(item, depth)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        self.reserve(5)?;
        if length <= MAX_FIXCOLLECTION_LEN {
            self.writer.u8(Marker::Fixmap.byte() | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(Marker::Map16.byte(), length as u16);
        } else {
            self.writer.u8u32(Marker::Map32.byte(), length_u32(length)?);
        }
        Ok(())
    }

    pub fn write_map(&mut self, map: &Mapping) -> Result<(), EncodeError> {
        let depth = self.enter(0)?;
        self.write_map_at_depth(map, depth)
    }

    fn write_map_at_depth(&mut self, map: &Mapping, depth: usize) -> Result<(), EncodeError> {
        self.write_map_hdr(map.len())?;
        for (key, val) in map {
            self.write_str(key)?;
            self.write_at_depth(val, depth)?;
        }
        Ok(())
    }
}

fn length_u32(length: usize) -> Result<u32, EncodeError> {
    u32::try_from(length).map_err(|_| EncodeError::LengthOverflow { len: length })
}
