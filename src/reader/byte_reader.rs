use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{WkbError, WkbResult};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    BigEndian,
    LittleEndian,
}

impl From<u8> for Endianness {
    /// WKB marks big-endian with `0`; every other value is read as little-endian.
    fn from(value: u8) -> Self {
        match value {
            0 => Endianness::BigEndian,
            _ => Endianness::LittleEndian,
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        match value {
            Endianness::BigEndian => 0,
            Endianness::LittleEndian => 1,
        }
    }
}

/// A cursor over a WKB buffer whose byte order can change between reads.
///
/// Each read either consumes exactly the bytes it needs or fails with
/// [`WkbError::TruncatedInput`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    position: usize,
    byte_order: Endianness,
}

impl<'a> ByteReader<'a> {
    /// A reader starting at the beginning of `buf` in big-endian order.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_byte_order(buf, Endianness::BigEndian)
    }

    /// A reader starting at the beginning of `buf` in the given order.
    pub fn with_byte_order(buf: &'a [u8], byte_order: Endianness) -> Self {
        Self {
            buf,
            position: 0,
            byte_order,
        }
    }

    /// The order applied to the next multi-byte read.
    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// Change the order for every read that follows.
    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    fn take(&mut self, needed: usize) -> WkbResult<&'a [u8]> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(WkbError::TruncatedInput {
                offset: self.position,
                needed,
                remaining,
            });
        }
        let bytes = &self.buf[self.position..self.position + needed];
        self.position += needed;
        Ok(bytes)
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> WkbResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read an unsigned 32-bit integer in the active byte order.
    pub fn read_u32(&mut self) -> WkbResult<u32> {
        let bytes = self.take(4)?;
        Ok(match self.byte_order {
            Endianness::BigEndian => BigEndian::read_u32(bytes),
            Endianness::LittleEndian => LittleEndian::read_u32(bytes),
        })
    }

    /// Read a signed 32-bit integer in the active byte order.
    pub fn read_i32(&mut self) -> WkbResult<i32> {
        let bytes = self.take(4)?;
        Ok(match self.byte_order {
            Endianness::BigEndian => BigEndian::read_i32(bytes),
            Endianness::LittleEndian => LittleEndian::read_i32(bytes),
        })
    }

    /// Read an IEEE-754 double in the active byte order.
    pub fn read_f64(&mut self) -> WkbResult<f64> {
        let bytes = self.take(8)?;
        Ok(match self.byte_order {
            Endianness::BigEndian => BigEndian::read_f64(bytes),
            Endianness::LittleEndian => LittleEndian::read_f64(bytes),
        })
    }
}
