//! Decoding of WKB bytes into the [`Geometry`](crate::geometry::Geometry) tree.
//!
//! See <https://portal.ogc.org/files/?artifact_id=25355> for the encoding of the 2D kinds and ISO
//! SQL/MM part 3 for the curve, surface and Z/M extensions.

mod byte_reader;
mod collection;
mod geometry;
mod header;
mod linestring;
mod point;
mod polygon;

pub use byte_reader::{ByteReader, Endianness};
pub use geometry::GeometryReader;
pub use header::read_geometry_type;
