use tracing::trace;

use crate::common::GeometryKind;
use crate::error::{WkbError, WkbResult};
use crate::filter::{FilterGate, GeometryFilter};
use crate::geometry::{Dimension, Geometry};
use crate::options::ReaderOptions;
use crate::reader::header::read_geometry_type;
use crate::reader::point::read_point;
use crate::reader::ByteReader;

/// Reads WKB geometries into a [`Geometry`] tree.
///
/// The reader itself holds no per-buffer state: the cursor and active byte order live in the
/// [`ByteReader`], so one `GeometryReader` can decode any number of buffers, including from
/// several threads at once, each with its own `ByteReader`.
///
/// ```
/// use sf_wkb::{ByteReader, GeometryKind, GeometryReader};
///
/// // little-endian POINT (1 2)
/// let mut buf = vec![1u8, 1, 0, 0, 0];
/// buf.extend_from_slice(&1f64.to_le_bytes());
/// buf.extend_from_slice(&2f64.to_le_bytes());
///
/// let geometry = GeometryReader::new()
///     .read(&mut ByteReader::new(&buf))
///     .unwrap()
///     .unwrap();
/// assert_eq!(geometry.kind(), GeometryKind::Point);
/// ```
#[derive(Clone, Copy, Default)]
pub struct GeometryReader<'f> {
    pub(crate) gate: FilterGate<'f>,
    options: ReaderOptions,
}

impl<'f> GeometryReader<'f> {
    /// A reader with default options and no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A reader with the given options and no filter.
    pub fn with_options(options: ReaderOptions) -> Self {
        Self {
            gate: FilterGate::default(),
            options,
        }
    }

    /// Drop every node that `filter` rejects.
    pub fn with_filter(self, filter: &'f dyn GeometryFilter) -> Self {
        Self {
            gate: FilterGate::new(Some(filter)),
            ..self
        }
    }

    /// The options this reader was built with.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Read one top-level geometry.
    ///
    /// Returns `Ok(None)` only when a filter rejects the geometry itself.
    pub fn read(&self, reader: &mut ByteReader<'_>) -> WkbResult<Option<Geometry>> {
        self.read_geometry(reader, None, None)
    }

    /// Read one top-level geometry that must satisfy `expected`.
    pub fn read_expected(
        &self,
        reader: &mut ByteReader<'_>,
        expected: GeometryKind,
    ) -> WkbResult<Option<Geometry>> {
        self.read_geometry(reader, None, Some(expected))
    }

    /// Read one geometry as if it were contained in a geometry of kind `containing`.
    ///
    /// The reader's byte order is the same after this call as before it, whether it succeeds or
    /// fails. The cursor is left after the geometry even when the filter rejects it.
    pub fn read_geometry(
        &self,
        reader: &mut ByteReader<'_>,
        containing: Option<GeometryKind>,
        expected: Option<GeometryKind>,
    ) -> WkbResult<Option<Geometry>> {
        self.read_nested(reader, containing, expected, 1)
    }

    pub(crate) fn read_nested(
        &self,
        reader: &mut ByteReader<'_>,
        containing: Option<GeometryKind>,
        expected: Option<GeometryKind>,
        depth: usize,
    ) -> WkbResult<Option<Geometry>> {
        let byte_order = reader.byte_order();
        let result = self.read_nested_in_order(reader, containing, expected, depth);
        reader.set_byte_order(byte_order);
        result
    }

    fn read_nested_in_order(
        &self,
        reader: &mut ByteReader<'_>,
        containing: Option<GeometryKind>,
        expected: Option<GeometryKind>,
        depth: usize,
    ) -> WkbResult<Option<Geometry>> {
        if depth > self.options.max_depth {
            return Err(WkbError::DepthExceeded(self.options.max_depth));
        }

        let info = read_geometry_type(reader)?;
        let dim = Dimension::from_flags(info.has_z, info.has_m);
        trace!(kind = %info.kind, %dim, depth, offset = reader.position(), "reading geometry");

        use GeometryKind as K;
        let geometry: Geometry = match info.kind {
            K::Geometry | K::Curve | K::Surface => {
                return Err(WkbError::AbstractTypeInstantiation(info.kind));
            }
            K::Point => read_point(reader, dim)?.into(),
            K::LineString => self.read_line_string(reader, dim)?.into(),
            K::CircularString => self.read_circular_string(reader, dim)?.into(),
            K::Polygon => self.read_polygon(reader, dim)?.into(),
            K::Triangle => self.read_triangle(reader, dim)?.into(),
            K::MultiPoint => self.read_multi_point(reader, dim, depth)?.into(),
            K::MultiLineString => self.read_multi_line_string(reader, dim, depth)?.into(),
            K::MultiPolygon => self.read_multi_polygon(reader, dim, depth)?.into(),
            K::GeometryCollection => self.read_geometry_collection(reader, dim, depth)?.into(),
            K::MultiCurve => self.read_multi_curve(reader, dim, depth)?.into(),
            K::MultiSurface => self.read_multi_surface(reader, dim, depth)?.into(),
            K::CompoundCurve => self.read_compound_curve(reader, dim, depth)?.into(),
            K::CurvePolygon => self.read_curve_polygon(reader, dim, depth)?.into(),
            K::PolyhedralSurface => self.read_polyhedral_surface(reader, dim, depth)?.into(),
            K::Tin => self.read_tin(reader, dim, depth)?.into(),
        };

        if !self.gate.admits(containing, &geometry) {
            return Ok(None);
        }

        if let Some(expected) = expected {
            if !expected.accepts(geometry.kind()) {
                return Err(WkbError::TypeMismatch {
                    expected,
                    actual: geometry.kind(),
                });
            }
        }

        Ok(Some(geometry))
    }
}

/// Read the element count of a count-prefixed sequence.
///
/// The count is signed; a negative count reads as zero elements.
pub(crate) fn read_count(reader: &mut ByteReader<'_>) -> WkbResult<usize> {
    let count = reader.read_i32()?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// An allocation size for `count` elements that the remaining bytes could actually hold.
///
/// The count comes straight from the buffer, so it is never trusted on its own.
pub(crate) fn capacity_hint(
    count: usize,
    reader: &ByteReader<'_>,
    min_element_size: usize,
) -> usize {
    count.min(reader.remaining() / min_element_size.max(1))
}
