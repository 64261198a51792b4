use crate::common::GeometryKind;
use crate::error::{WkbError, WkbResult};
use crate::geometry::{
    CompoundCurve, CurvePolygon, Dimension, Geometry, GeometryCollection, MultiCurve,
    MultiLineString, MultiPoint, MultiPolygon, MultiSurface, PolyhedralSurface, Tin,
};
use crate::reader::geometry::{capacity_hint, read_count};
use crate::reader::{ByteReader, GeometryReader};

/// Smallest possible nested geometry: a byte order marker and a type code.
const MIN_GEOMETRY_BYTES: usize = 5;

impl GeometryReader<'_> {
    /// Read a count followed by that many fully headered geometries.
    ///
    /// Each child must satisfy `expected` and is filtered with `containing` as its container;
    /// children the filter rejects are left out.
    fn read_children(
        &self,
        reader: &mut ByteReader<'_>,
        depth: usize,
        containing: GeometryKind,
        expected: GeometryKind,
    ) -> WkbResult<Vec<Geometry>> {
        let num_geometries = read_count(reader)?;
        let mut children =
            Vec::with_capacity(capacity_hint(num_geometries, reader, MIN_GEOMETRY_BYTES));
        for _ in 0..num_geometries {
            if let Some(child) =
                self.read_nested(reader, Some(containing), Some(expected), depth + 1)?
            {
                children.push(child);
            }
        }
        Ok(children)
    }

    /// GeometryCollection, MultiCurve and MultiSurface share this rule: any concrete child is
    /// accepted and children are filtered as members of a GeometryCollection.
    fn read_any_children(
        &self,
        reader: &mut ByteReader<'_>,
        depth: usize,
    ) -> WkbResult<Vec<Geometry>> {
        self.read_children(
            reader,
            depth,
            GeometryKind::GeometryCollection,
            GeometryKind::Geometry,
        )
    }

    pub(crate) fn read_multi_point(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<MultiPoint> {
        let points = self
            .read_children(reader, depth, GeometryKind::MultiPoint, GeometryKind::Point)?
            .into_iter()
            .map(|child| {
                child.into_point().map_err(|other| WkbError::TypeMismatch {
                    expected: GeometryKind::Point,
                    actual: other.kind(),
                })
            })
            .collect::<WkbResult<Vec<_>>>()?;
        Ok(MultiPoint::from_points(dim, points))
    }

    pub(crate) fn read_multi_line_string(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<MultiLineString> {
        let line_strings = self.read_children(
            reader,
            depth,
            GeometryKind::MultiLineString,
            GeometryKind::LineString,
        )?;
        Ok(MultiLineString::from_geometries(dim, line_strings))
    }

    pub(crate) fn read_multi_polygon(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<MultiPolygon> {
        let polygons = self.read_children(
            reader,
            depth,
            GeometryKind::MultiPolygon,
            GeometryKind::Polygon,
        )?;
        Ok(MultiPolygon::from_geometries(dim, polygons))
    }

    pub(crate) fn read_geometry_collection(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<GeometryCollection> {
        let geometries = self.read_any_children(reader, depth)?;
        Ok(GeometryCollection::from_geometries(dim, geometries))
    }

    pub(crate) fn read_multi_curve(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<MultiCurve> {
        let curves = self.read_any_children(reader, depth)?;
        Ok(MultiCurve::from_geometries(dim, curves))
    }

    pub(crate) fn read_multi_surface(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<MultiSurface> {
        let surfaces = self.read_any_children(reader, depth)?;
        Ok(MultiSurface::from_geometries(dim, surfaces))
    }

    pub(crate) fn read_compound_curve(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<CompoundCurve> {
        let segments = self.read_children(
            reader,
            depth,
            GeometryKind::CompoundCurve,
            GeometryKind::LineString,
        )?;
        Ok(CompoundCurve::from_geometries(dim, segments))
    }

    pub(crate) fn read_curve_polygon(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<CurvePolygon> {
        let rings = self.read_children(
            reader,
            depth,
            GeometryKind::CurvePolygon,
            GeometryKind::Curve,
        )?;
        Ok(CurvePolygon::from_geometries(dim, rings))
    }

    pub(crate) fn read_polyhedral_surface(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<PolyhedralSurface> {
        let patches = self.read_children(
            reader,
            depth,
            GeometryKind::PolyhedralSurface,
            GeometryKind::Polygon,
        )?;
        Ok(PolyhedralSurface::from_geometries(dim, patches))
    }

    pub(crate) fn read_tin(
        &self,
        reader: &mut ByteReader<'_>,
        dim: Dimension,
        depth: usize,
    ) -> WkbResult<Tin> {
        let triangles =
            self.read_children(reader, depth, GeometryKind::Tin, GeometryKind::Polygon)?;
        Ok(Tin::from_geometries(dim, triangles))
    }
}
