//! Test-only stream walker. Reads just enough of each unit to find where it
//! ends, so tests can check that an encoded buffer is a single well-framed
//! value.

#![allow(dead_code)]

fn be(bytes: &[u8], at: usize, width: usize) -> Option<usize> {
    let field = bytes.get(at..at + width)?;
    Some(field.iter().fold(0usize, |acc, b| (acc << 8) | usize::from(*b)))
}

/// Returns the offset just past the unit starting at `pos`.
pub fn skip_unit(bytes: &[u8], pos: usize) -> Option<usize> {
    let tag = *bytes.get(pos)?;
    let body = pos + 1;
    let end = match tag {
        0x00..=0x7f | 0xe0..=0xff | 0xc0 | 0xc2 | 0xc3 => body,
        0x80..=0x8f => skip_units(bytes, body, usize::from(tag & 0x0f) * 2)?,
        0x90..=0x9f => skip_units(bytes, body, usize::from(tag & 0x0f))?,
        0xa0..=0xbf => body + usize::from(tag & 0x1f),
        0xc4 | 0xd9 => body + 1 + be(bytes, body, 1)?,
        0xc5 | 0xda => body + 2 + be(bytes, body, 2)?,
        0xc6 | 0xdb => body + 4 + be(bytes, body, 4)?,
        0xca | 0xce | 0xd2 => body + 4,
        0xcc | 0xd0 => body + 1,
        0xcd | 0xd1 => body + 2,
        0xdc => skip_units(bytes, body + 2, be(bytes, body, 2)?)?,
        0xdd => skip_units(bytes, body + 4, be(bytes, body, 4)?)?,
        0xde => skip_units(bytes, body + 2, be(bytes, body, 2)? * 2)?,
        0xdf => skip_units(bytes, body + 4, be(bytes, body, 4)? * 2)?,
        _ => return None,
    };
    (end <= bytes.len()).then_some(end)
}

fn skip_units(bytes: &[u8], mut pos: usize, count: usize) -> Option<usize> {
    for _ in 0..count {
        pos = skip_unit(bytes, pos)?;
    }
    Some(pos)
}

/// True when `bytes` holds exactly one complete unit.
pub fn is_single_unit(bytes: &[u8]) -> bool {
    skip_unit(bytes, 0) == Some(bytes.len())
}
