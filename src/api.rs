//! One-call entry points for decoding a single WKB buffer.
//!
//! These wrap a [`GeometryReader`] over a fresh [`ByteReader`]. Bytes following the geometry are
//! ignored; use the reader types directly to decode several geometries from one buffer.

use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::filter::GeometryFilter;
use crate::geometry::Geometry;
use crate::options::ReaderOptions;
use crate::reader::{ByteReader, GeometryReader};

/// Parse a WKB buffer into a [`Geometry`].
///
/// Without a filter the result is always `Some` on success.
pub fn read_geometry(buf: &[u8]) -> WkbResult<Option<Geometry>> {
    GeometryReader::new().read(&mut ByteReader::new(buf))
}

/// Parse a WKB buffer with custom [`ReaderOptions`].
pub fn read_geometry_with_options(
    buf: &[u8],
    options: ReaderOptions,
) -> WkbResult<Option<Geometry>> {
    GeometryReader::with_options(options).read(&mut ByteReader::new(buf))
}

/// Parse a WKB buffer, dropping every node `filter` rejects.
///
/// Returns `Ok(None)` if the outermost geometry itself is rejected.
pub fn read_geometry_with_filter(
    buf: &[u8],
    filter: &dyn GeometryFilter,
) -> WkbResult<Option<Geometry>> {
    GeometryReader::new()
        .with_filter(filter)
        .read(&mut ByteReader::new(buf))
}

/// Parse a WKB buffer that must hold a geometry of kind `expected`, or one of its subtypes.
///
/// ```
/// use sf_wkb::{read_geometry_as, GeometryKind, WkbError};
///
/// // little-endian POINT (1 2)
/// let mut buf = vec![1u8, 1, 0, 0, 0];
/// buf.extend_from_slice(&1f64.to_le_bytes());
/// buf.extend_from_slice(&2f64.to_le_bytes());
///
/// let err = read_geometry_as(&buf, GeometryKind::Polygon).unwrap_err();
/// assert!(matches!(err, WkbError::TypeMismatch { .. }));
/// ```
pub fn read_geometry_as(buf: &[u8], expected: GeometryKind) -> WkbResult<Option<Geometry>> {
    GeometryReader::new().read_expected(&mut ByteReader::new(buf), expected)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WkbError;
    use crate::filter::PointFiniteFilter;
    use crate::geometry::Point;
    use crate::reader::Endianness;
    use crate::test::{polygon, WkbBuilder, SQUARE};

    #[test]
    fn reads_top_level_geometry() {
        let buf = polygon(Endianness::BigEndian, &[&SQUARE]);
        let geometry = read_geometry(&buf).unwrap().unwrap();
        assert_eq!(geometry.kind(), GeometryKind::Polygon);
        assert_eq!(geometry.num_points(), 5);
    }

    #[test]
    fn options_bound_depth() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(7)
            .u32(1)
            .point(1, &[1., 2.])
            .build();
        let result = read_geometry_with_options(&buf, ReaderOptions { max_depth: 1 });
        assert_eq!(result, Err(WkbError::DepthExceeded(1)));
        assert!(read_geometry_with_options(&buf, ReaderOptions { max_depth: 2 }).is_ok());
    }

    #[test]
    fn filtered_top_level_is_none() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .point(1, &[f64::INFINITY, 2.])
            .build();
        let filter = PointFiniteFilter::default();
        assert_eq!(read_geometry_with_filter(&buf, &filter), Ok(None));
    }

    #[test]
    fn filter_prunes_multi_point_members() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(4)
            .u32(3)
            .point(1, &[1., 2.])
            .point(1, &[f64::NAN, f64::NAN])
            .point(1, &[3., 4.])
            .build();
        let geometry = read_geometry_with_filter(&buf, &PointFiniteFilter::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            geometry.into_multi_point().unwrap().into_points(),
            vec![Point::new(1., 2.), Point::new(3., 4.)]
        );
    }

    #[test]
    fn read_as_supertype() {
        let buf = polygon(Endianness::LittleEndian, &[&SQUARE]);
        let geometry = read_geometry_as(&buf, GeometryKind::Surface).unwrap();
        assert!(geometry.unwrap().is_polygon());

        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(17)
            .u32(0)
            .build();
        let geometry = read_geometry_as(&buf, GeometryKind::Polygon).unwrap();
        assert!(geometry.unwrap().is_triangle());
    }

    #[test]
    fn empty_buffer_is_truncated() {
        assert_eq!(
            read_geometry(&[]),
            Err(WkbError::TruncatedInput {
                offset: 0,
                needed: 1,
                remaining: 0
            })
        );
    }
}
