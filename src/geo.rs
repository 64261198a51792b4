//! Conversion of decoded geometries to [`geo_types`].
//!
//! Only the first two dimensions are kept. Kinds with arcs (`CircularString`, `CompoundCurve`,
//! `CurvePolygon`) have no `geo_types` counterpart and fail to convert, as does any container
//! holding one.

use crate::error::{WkbError, WkbResult};
use crate::geometry::{Geometry, LineString, Point, Triangle};

/// Convert a [`Point`] to a [`geo_types::Point`].
///
/// An empty point converts to a point with NaN coordinates.
pub fn point_to_geo(point: &Point) -> geo_types::Point<f64> {
    geo_types::Point::new(point.x(), point.y())
}

/// Convert a [`LineString`] to a [`geo_types::LineString`].
pub fn line_string_to_geo(line_string: &LineString) -> geo_types::LineString<f64> {
    geo_types::LineString::new(
        line_string
            .points()
            .iter()
            .map(|point| geo_types::Coord {
                x: point.x(),
                y: point.y(),
            })
            .collect(),
    )
}

/// Convert a list of rings to a [`geo_types::Polygon`], the first ring being the exterior.
///
/// A polygon without rings converts to a polygon with an empty exterior.
pub fn rings_to_geo(rings: &[LineString]) -> geo_types::Polygon<f64> {
    let exterior = rings
        .first()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo_types::LineString::new(vec![]));
    let interiors = rings.iter().skip(1).map(line_string_to_geo).collect();
    geo_types::Polygon::new(exterior, interiors)
}

/// Convert a [`Triangle`] to a [`geo_types::Triangle`] when it has the expected shape: one ring
/// of three vertices, optionally closed. Anything else becomes a [`geo_types::Polygon`].
pub fn triangle_to_geo(triangle: &Triangle) -> geo_types::Geometry<f64> {
    if let [ring] = triangle.rings() {
        if let [a, b, c] | [a, b, c, _] = ring.points() {
            return geo_types::Geometry::Triangle(geo_types::Triangle::new(
                point_to_geo(a).0,
                point_to_geo(b).0,
                point_to_geo(c).0,
            ));
        }
    }
    geo_types::Geometry::Polygon(rings_to_geo(triangle.rings()))
}

fn unsupported(geometry: &Geometry) -> WkbError {
    WkbError::IncorrectGeometryType(format!(
        "{} cannot be converted to geo-types",
        geometry.kind()
    ))
}

fn polygons_to_geo(geometries: Vec<Geometry>) -> WkbResult<geo_types::MultiPolygon<f64>> {
    let polygons = geometries
        .into_iter()
        .map(|child| match child {
            Geometry::Polygon(polygon) => Ok(rings_to_geo(polygon.rings())),
            Geometry::Triangle(triangle) => Ok(rings_to_geo(triangle.rings())),
            other => Err(unsupported(&other)),
        })
        .collect::<WkbResult<_>>()?;
    Ok(geo_types::MultiPolygon::new(polygons))
}

fn collection_to_geo(
    geometries: Vec<Geometry>,
) -> WkbResult<geo_types::GeometryCollection<f64>> {
    let geometries = geometries
        .into_iter()
        .map(geo_types::Geometry::try_from)
        .collect::<WkbResult<_>>()?;
    Ok(geo_types::GeometryCollection::new_from(geometries))
}

impl TryFrom<Geometry> for geo_types::Geometry<f64> {
    type Error = WkbError;

    fn try_from(value: Geometry) -> WkbResult<Self> {
        let geometry: geo_types::Geometry<f64> = match value {
            Geometry::Point(point) => geo_types::Geometry::Point(point_to_geo(&point)),
            Geometry::LineString(line_string) => {
                geo_types::Geometry::LineString(line_string_to_geo(&line_string))
            }
            Geometry::Polygon(polygon) => {
                geo_types::Geometry::Polygon(rings_to_geo(polygon.rings()))
            }
            Geometry::Triangle(triangle) => triangle_to_geo(&triangle),
            Geometry::MultiPoint(multi_point) => geo_types::Geometry::MultiPoint(
                multi_point.points().iter().map(point_to_geo).collect(),
            ),
            Geometry::MultiLineString(multi_line_string) => {
                let line_strings = multi_line_string
                    .into_geometries()
                    .into_iter()
                    .map(|child| match child {
                        Geometry::LineString(line_string) => {
                            Ok(line_string_to_geo(&line_string))
                        }
                        other => Err(unsupported(&other)),
                    })
                    .collect::<WkbResult<_>>()?;
                geo_types::MultiLineString::new(line_strings).into()
            }
            Geometry::MultiPolygon(g) => {
                geo_types::Geometry::MultiPolygon(polygons_to_geo(g.into_geometries())?)
            }
            Geometry::PolyhedralSurface(g) => {
                geo_types::Geometry::MultiPolygon(polygons_to_geo(g.into_geometries())?)
            }
            Geometry::Tin(g) => {
                geo_types::Geometry::MultiPolygon(polygons_to_geo(g.into_geometries())?)
            }
            Geometry::GeometryCollection(g) => {
                geo_types::Geometry::GeometryCollection(collection_to_geo(g.into_geometries())?)
            }
            Geometry::MultiCurve(g) => {
                geo_types::Geometry::GeometryCollection(collection_to_geo(g.into_geometries())?)
            }
            Geometry::MultiSurface(g) => {
                geo_types::Geometry::GeometryCollection(collection_to_geo(g.into_geometries())?)
            }
            other @ (Geometry::CircularString(_)
            | Geometry::CompoundCurve(_)
            | Geometry::CurvePolygon(_)) => return Err(unsupported(&other)),
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use ::geo::{line_string, point, polygon, Area};
    use geozero::{CoordDimensions, ToWkb};

    use super::*;
    use crate::api::read_geometry;
    use crate::reader::Endianness;
    use crate::test::{WkbBuilder, TRIANGLE_Z};

    fn round_trip(geometry: geo_types::Geometry<f64>) -> geo_types::Geometry<f64> {
        let wkb = geometry.to_wkb(CoordDimensions::xy()).unwrap();
        let decoded = read_geometry(&wkb).unwrap().unwrap();
        decoded.try_into().unwrap()
    }

    #[test]
    fn polygon_with_interior() {
        let polygon = polygon!(
            exterior: [(x: 0., y: 0.), (x: 4., y: 0.), (x: 4., y: 4.), (x: 0., y: 4.)],
            interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 2., y: 2.), (x: 1., y: 2.)]],
        );
        let converted = round_trip(polygon.clone().into());
        let converted = geo_types::Polygon::try_from(converted).unwrap();
        assert_eq!(converted, polygon);
        assert_relative_eq!(converted.unsigned_area(), 15.);
    }

    #[test]
    fn line_string_and_point() {
        let line = line_string![(x: 0., y: 0.), (x: 1.5, y: -2.)];
        assert_eq!(round_trip(line.clone().into()), line.into());

        let point = point!(x: 1., y: 2.);
        assert_eq!(round_trip(point.into()), point.into());
    }

    #[test]
    fn collections() {
        let collection = geo_types::GeometryCollection::new_from(vec![
            point!(x: 1., y: 2.).into(),
            geo_types::MultiLineString::new(vec![
                line_string![(x: 0., y: 0.), (x: 1., y: 1.)],
                line_string![(x: 2., y: 2.), (x: 3., y: 3.)],
            ])
            .into(),
            geo_types::MultiPoint::from(vec![(0., 0.), (5., 5.)]).into(),
        ]);
        let expected = geo_types::Geometry::GeometryCollection(collection);
        assert_eq!(round_trip(expected.clone()), expected);
    }

    #[test]
    fn z_is_dropped() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .point(1001, &[1., 2., 3.])
            .build();
        let converted: geo_types::Geometry<f64> =
            read_geometry(&buf).unwrap().unwrap().try_into().unwrap();
        assert_eq!(converted, point!(x: 1., y: 2.).into());
    }

    #[test]
    fn triangle_and_tin() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(1017)
            .u32(1)
            .points(3, &TRIANGLE_Z)
            .build();
        let converted: geo_types::Geometry<f64> =
            read_geometry(&buf).unwrap().unwrap().try_into().unwrap();
        let triangle = geo_types::Triangle::try_from(converted).unwrap();
        assert_relative_eq!(triangle.unsigned_area(), 0.5);

        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(1016)
            .u32(2)
            .header(1017)
            .u32(1)
            .points(3, &TRIANGLE_Z)
            .header(1017)
            .u32(1)
            .points(3, &TRIANGLE_Z)
            .build();
        let converted: geo_types::Geometry<f64> =
            read_geometry(&buf).unwrap().unwrap().try_into().unwrap();
        let multi_polygon = geo_types::MultiPolygon::try_from(converted).unwrap();
        assert_eq!(multi_polygon.0.len(), 2);
        assert_relative_eq!(multi_polygon.unsigned_area(), 1.);
    }

    #[test]
    fn curves_are_rejected() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(8)
            .points(2, &[0., 0., 1., 1., 2., 0.])
            .build();
        let decoded = read_geometry(&buf).unwrap().unwrap();
        let result = geo_types::Geometry::<f64>::try_from(decoded);
        assert!(matches!(result, Err(WkbError::IncorrectGeometryType(_))));

        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .header(7)
            .u32(1)
            .header(9)
            .u32(0)
            .build();
        let decoded = read_geometry(&buf).unwrap().unwrap();
        let result = geo_types::Geometry::<f64>::try_from(decoded);
        assert!(matches!(result, Err(WkbError::IncorrectGeometryType(_))));
    }
}
