use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::{Dimension, Geometry, Polygon, Triangle};
use crate::reader::geometry::{capacity_hint, read_count};
use crate::reader::{ByteReader, GeometryReader};

/// Smallest possible ring: just its point count.
const MIN_RING_BYTES: usize = 4;

impl GeometryReader<'_> {
    /// Read a ring count and that many headerless rings.
    ///
    /// See page 65 of <https://portal.ogc.org/files/?artifact_id=25355>.
    pub(crate) fn read_polygon(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
    ) -> WkbResult<Polygon> {
        let num_rings = read_count(reader)?;
        let mut polygon =
            Polygon::with_capacity(dim, capacity_hint(num_rings, reader, MIN_RING_BYTES));
        for _ in 0..num_rings {
            let ring = self.read_line_string(reader, dim)?;
            if let Some(ring) =
                self.gate
                    .admit_element(GeometryKind::Polygon, ring, Geometry::into_line_string)
            {
                polygon.push_ring(ring);
            }
        }
        Ok(polygon)
    }

    pub(crate) fn read_triangle(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
    ) -> WkbResult<Triangle> {
        let num_rings = read_count(reader)?;
        let mut triangle =
            Triangle::with_capacity(dim, capacity_hint(num_rings, reader, MIN_RING_BYTES));
        for _ in 0..num_rings {
            let ring = self.read_line_string(reader, dim)?;
            if let Some(ring) =
                self.gate
                    .admit_element(GeometryKind::Triangle, ring, Geometry::into_line_string)
            {
                triangle.push_ring(ring);
            }
        }
        Ok(triangle)
    }
}
