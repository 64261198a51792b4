//! Hand-assembled WKB buffers for tests.

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::reader::Endianness;

/// Writes WKB bytes field by field in whatever byte order is currently selected.
///
/// Switching the order with [`WkbBuilder::order`] affects every field written afterwards,
/// including the marker byte of the next header, which is how mixed-endian buffers are built.
pub(crate) struct WkbBuilder {
    buf: Vec<u8>,
    order: Endianness,
}

impl WkbBuilder {
    pub(crate) fn new(order: Endianness) -> Self {
        Self { buf: vec![], order }
    }

    pub(crate) fn order(mut self, order: Endianness) -> Self {
        self.order = order;
        self
    }

    /// The byte order marker followed by the type code.
    pub(crate) fn header(mut self, code: u32) -> Self {
        self.buf.write_u8(self.order.into()).unwrap();
        self.u32(code)
    }

    pub(crate) fn u32(mut self, value: u32) -> Self {
        match self.order {
            Endianness::BigEndian => self.buf.write_u32::<BigEndian>(value).unwrap(),
            Endianness::LittleEndian => self.buf.write_u32::<LittleEndian>(value).unwrap(),
        }
        self
    }

    pub(crate) fn i32(mut self, value: i32) -> Self {
        match self.order {
            Endianness::BigEndian => self.buf.write_i32::<BigEndian>(value).unwrap(),
            Endianness::LittleEndian => self.buf.write_i32::<LittleEndian>(value).unwrap(),
        }
        self
    }

    pub(crate) fn coords(mut self, values: &[f64]) -> Self {
        for value in values {
            match self.order {
                Endianness::BigEndian => self.buf.write_f64::<BigEndian>(*value).unwrap(),
                Endianness::LittleEndian => self.buf.write_f64::<LittleEndian>(*value).unwrap(),
            }
        }
        self
    }

    /// A complete point geometry.
    pub(crate) fn point(self, code: u32, values: &[f64]) -> Self {
        self.header(code).coords(values)
    }

    /// A headerless point sequence: count then coordinates, `dim` ordinates per point.
    pub(crate) fn points(self, dim: usize, values: &[f64]) -> Self {
        let count = (values.len() / dim) as u32;
        self.u32(count).coords(values)
    }

    pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        self.buf
    }
}

/// A closed unit square ring, XY.
pub(crate) const SQUARE: [f64; 10] = [0., 0., 1., 0., 1., 1., 0., 1., 0., 0.];

/// A closed triangle ring, XYZ.
pub(crate) const TRIANGLE_Z: [f64; 12] = [0., 0., 0., 1., 0., 0., 0., 1., 0., 0., 0., 0.];

/// A polygon made of the given XY rings.
pub(crate) fn polygon(order: Endianness, rings: &[&[f64]]) -> Vec<u8> {
    let mut builder = WkbBuilder::new(order).header(3).u32(rings.len() as u32);
    for ring in rings {
        builder = builder.points(2, ring);
    }
    builder.build()
}
