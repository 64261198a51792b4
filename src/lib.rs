//! A reader for [Well-Known Binary](https://libgeos.org/specifications/wkb/) geometries,
//! covering the OGC Simple Features kinds together with the ISO SQL/MM curve and surface
//! extensions, Z/M ordinates in both the ISO and the legacy 2.5D encoding, and mixed byte order
//! within one buffer.
//!
//! ```
//! use sf_wkb::{read_geometry, Geometry};
//!
//! // big-endian POINT Z (1 2 3), using the legacy 2.5D flag
//! let mut buf = vec![0u8, 0x80, 0, 0, 1];
//! for value in [1f64, 2., 3.] {
//!     buf.extend_from_slice(&value.to_be_bytes());
//! }
//!
//! let Some(Geometry::Point(point)) = read_geometry(&buf).unwrap() else {
//!     panic!("expected a point");
//! };
//! assert_eq!(point.z(), Some(3.));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use api::{
    read_geometry, read_geometry_as, read_geometry_with_filter, read_geometry_with_options,
};
pub use common::{GeometryKind, GeometryTypeInfo};
pub use error::{WkbError, WkbResult};
pub use filter::{FiniteFilterType, GeometryFilter, PointFiniteFilter};
pub use geometry::{Dimension, Geometry};
pub use options::ReaderOptions;
pub use reader::{read_geometry_type, ByteReader, Endianness, GeometryReader};

mod api;
pub mod common;
pub mod error;
pub mod filter;
pub mod geo;
pub mod geometry;
pub mod options;
pub mod reader;
#[cfg(test)]
pub(crate) mod test;
