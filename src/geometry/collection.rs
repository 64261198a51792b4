use crate::geometry::{Dimension, Geometry, Point};

/// A collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    dim: Dimension,
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            points: vec![],
        }
    }

    pub fn with_capacity(dim: Dimension, capacity: usize) -> Self {
        Self {
            dim,
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn from_points(dim: Dimension, points: Vec<Point>) -> Self {
        Self { dim, points }
    }

    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Defines a container whose children are full geometries, each carrying its own WKB header.
///
/// The reader only appends children whose kind satisfies the container's element kind, so e.g. a
/// decoded `MultiPolygon` holds only `Polygon` (or `Triangle`) values.
macro_rules! nested_geometry {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            dim: Dimension,
            geometries: Vec<Geometry>,
        }

        impl $name {
            pub fn new(dim: Dimension) -> Self {
                Self {
                    dim,
                    geometries: vec![],
                }
            }

            pub fn with_capacity(dim: Dimension, capacity: usize) -> Self {
                Self {
                    dim,
                    geometries: Vec::with_capacity(capacity),
                }
            }

            pub fn from_geometries(dim: Dimension, geometries: Vec<Geometry>) -> Self {
                Self { dim, geometries }
            }

            pub fn push_geometry(&mut self, geometry: Geometry) {
                self.geometries.push(geometry);
            }

            pub fn geometries(&self) -> &[Geometry] {
                &self.geometries
            }

            pub fn into_geometries(self) -> Vec<Geometry> {
                self.geometries
            }

            pub fn num_geometries(&self) -> usize {
                self.geometries.len()
            }

            pub fn dim(&self) -> Dimension {
                self.dim
            }

            pub fn is_empty(&self) -> bool {
                self.geometries.is_empty()
            }
        }
    };
}

nested_geometry!(
    /// A collection of line strings.
    MultiLineString
);
nested_geometry!(
    /// A collection of polygons.
    MultiPolygon
);
nested_geometry!(
    /// A heterogeneous collection of geometries.
    GeometryCollection
);
nested_geometry!(
    /// A collection of curves.
    MultiCurve
);
nested_geometry!(
    /// A collection of surfaces.
    MultiSurface
);
nested_geometry!(
    /// A contiguous sequence of curve segments, each starting where the previous one ends.
    CompoundCurve
);
nested_geometry!(
    /// A surface whose rings are curves rather than plain line strings.
    CurvePolygon
);
nested_geometry!(
    /// A set of polygon patches sharing common edges.
    PolyhedralSurface
);
nested_geometry!(
    /// A triangulated irregular network.
    Tin
);
