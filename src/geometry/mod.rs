//! The in-memory geometry tree produced by the reader.
//!
//! Every node records its [`Dimension`] when it is created and never changes it afterwards.
//! Only the concrete Simple Features kinds have a variant; the abstract `Geometry`, `Curve` and
//! `Surface` kinds cannot be represented.

mod collection;
mod dimension;
mod linestring;
mod point;
mod polygon;

pub use collection::{
    CompoundCurve, CurvePolygon, GeometryCollection, MultiCurve, MultiLineString, MultiPoint,
    MultiPolygon, MultiSurface, PolyhedralSurface, Tin,
};
pub use dimension::Dimension;
pub use linestring::{CircularString, LineString};
pub use point::Point;
pub use polygon::{Polygon, Triangle};

use enum_as_inner::EnumAsInner;

use crate::common::GeometryKind;

/// A decoded geometry of any concrete kind.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
    CurvePolygon(CurvePolygon),
    MultiCurve(MultiCurve),
    MultiSurface(MultiSurface),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
    Triangle(Triangle),
}

impl Geometry {
    /// The concrete kind of this geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
            Geometry::CircularString(_) => GeometryKind::CircularString,
            Geometry::CompoundCurve(_) => GeometryKind::CompoundCurve,
            Geometry::CurvePolygon(_) => GeometryKind::CurvePolygon,
            Geometry::MultiCurve(_) => GeometryKind::MultiCurve,
            Geometry::MultiSurface(_) => GeometryKind::MultiSurface,
            Geometry::PolyhedralSurface(_) => GeometryKind::PolyhedralSurface,
            Geometry::Tin(_) => GeometryKind::Tin,
            Geometry::Triangle(_) => GeometryKind::Triangle,
        }
    }

    pub fn dim(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dim(),
            Geometry::LineString(g) => g.dim(),
            Geometry::Polygon(g) => g.dim(),
            Geometry::MultiPoint(g) => g.dim(),
            Geometry::MultiLineString(g) => g.dim(),
            Geometry::MultiPolygon(g) => g.dim(),
            Geometry::GeometryCollection(g) => g.dim(),
            Geometry::CircularString(g) => g.dim(),
            Geometry::CompoundCurve(g) => g.dim(),
            Geometry::CurvePolygon(g) => g.dim(),
            Geometry::MultiCurve(g) => g.dim(),
            Geometry::MultiSurface(g) => g.dim(),
            Geometry::PolyhedralSurface(g) => g.dim(),
            Geometry::Tin(g) => g.dim(),
            Geometry::Triangle(g) => g.dim(),
        }
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
            Geometry::CircularString(g) => g.is_empty(),
            Geometry::CompoundCurve(g) => g.is_empty(),
            Geometry::CurvePolygon(g) => g.is_empty(),
            Geometry::MultiCurve(g) => g.is_empty(),
            Geometry::MultiSurface(g) => g.is_empty(),
            Geometry::PolyhedralSurface(g) => g.is_empty(),
            Geometry::Tin(g) => g.is_empty(),
            Geometry::Triangle(g) => g.is_empty(),
        }
    }

    /// Total number of points in this geometry and all of its descendants.
    ///
    /// An empty (NaN) `Point` counts as zero, like an empty `MultiPoint`.
    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Point(g) => usize::from(!g.is_empty()),
            Geometry::LineString(g) => g.num_points(),
            Geometry::CircularString(g) => g.num_points(),
            Geometry::Polygon(g) => g.rings().iter().map(|ring| ring.num_points()).sum(),
            Geometry::Triangle(g) => g.rings().iter().map(|ring| ring.num_points()).sum(),
            Geometry::MultiPoint(g) => g.num_points(),
            Geometry::MultiLineString(g) => sum_points(g.geometries()),
            Geometry::MultiPolygon(g) => sum_points(g.geometries()),
            Geometry::GeometryCollection(g) => sum_points(g.geometries()),
            Geometry::CompoundCurve(g) => sum_points(g.geometries()),
            Geometry::CurvePolygon(g) => sum_points(g.geometries()),
            Geometry::MultiCurve(g) => sum_points(g.geometries()),
            Geometry::MultiSurface(g) => sum_points(g.geometries()),
            Geometry::PolyhedralSurface(g) => sum_points(g.geometries()),
            Geometry::Tin(g) => sum_points(g.geometries()),
        }
    }
}

fn sum_points(geometries: &[Geometry]) -> usize {
    geometries.iter().map(Geometry::num_points).sum()
}

macro_rules! impl_from_node {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )+
    };
}

impl_from_node!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    CircularString,
    CompoundCurve,
    CurvePolygon,
    MultiCurve,
    MultiSurface,
    PolyhedralSurface,
    Tin,
    Triangle,
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_and_dimension() {
        let geom: Geometry = Point::new_z(1., 2., 3.).into();
        assert_eq!(geom.kind(), GeometryKind::Point);
        assert!(geom.has_z());
        assert!(!geom.has_m());

        let geom: Geometry = Tin::new(Dimension::XYZM).into();
        assert_eq!(geom.kind(), GeometryKind::Tin);
        assert_eq!(geom.dim(), Dimension::XYZM);
        assert!(geom.is_empty());
    }

    #[test]
    fn counts_nested_points() {
        let mut line = LineString::new(Dimension::XY);
        line.push_point(Point::new(0., 0.));
        line.push_point(Point::new(1., 1.));

        let mut multi = MultiPoint::new(Dimension::XY);
        multi.push_point(Point::new(5., 5.));

        let mut collection = GeometryCollection::new(Dimension::XY);
        collection.push_geometry(line.into());
        collection.push_geometry(multi.into());
        collection.push_geometry(Point::new(9., 9.).into());

        assert_eq!(Geometry::from(collection).num_points(), 4);
    }

    #[test]
    fn empty_point_has_no_points() {
        let empty: Geometry = Point::new(f64::NAN, f64::NAN).into();
        assert_eq!(empty.num_points(), 0);
        assert_eq!(Geometry::from(MultiPoint::new(Dimension::XY)).num_points(), 0);

        let mut collection = GeometryCollection::new(Dimension::XY);
        collection.push_geometry(empty);
        collection.push_geometry(Point::new(1., 1.).into());
        assert_eq!(Geometry::from(collection).num_points(), 1);
    }

    #[test]
    fn into_inner() {
        let geom: Geometry = Point::new(1., 2.).into();
        assert!(geom.is_point());
        assert_eq!(geom.into_point().unwrap().x(), 1.);
    }
}
