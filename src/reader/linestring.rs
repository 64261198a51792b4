use crate::common::GeometryKind;
use crate::error::WkbResult;
use crate::geometry::{CircularString, Dimension, Geometry, LineString};
use crate::reader::geometry::{capacity_hint, read_count};
use crate::reader::point::read_point;
use crate::reader::{ByteReader, GeometryReader};

impl GeometryReader<'_> {
    /// Read a point count and that many headerless points.
    ///
    /// This is also how polygon rings are stored, so it is called without a preceding header.
    pub(crate) fn read_line_string(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
    ) -> WkbResult<LineString> {
        let num_points = read_count(reader)?;
        let mut line_string =
            LineString::with_capacity(dim, capacity_hint(num_points, reader, 8 * dim.size()));
        for _ in 0..num_points {
            let point = read_point(reader, dim)?;
            if let Some(point) =
                self.gate
                    .admit_element(GeometryKind::LineString, point, Geometry::into_point)
            {
                line_string.push_point(point);
            }
        }
        Ok(line_string)
    }

    pub(crate) fn read_circular_string(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
    ) -> WkbResult<CircularString> {
        let num_points = read_count(reader)?;
        let mut circular_string =
            CircularString::with_capacity(dim, capacity_hint(num_points, reader, 8 * dim.size()));
        for _ in 0..num_points {
            let point = read_point(reader, dim)?;
            if let Some(point) =
                self.gate
                    .admit_element(GeometryKind::CircularString, point, Geometry::into_point)
            {
                circular_string.push_point(point);
            }
        }
        Ok(circular_string)
    }
}
