//! Geometry type codes as defined by ISO SQL/MM and OGC Simple Features.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WkbError, WkbResult};

/// The legacy "2.5D" flag some producers set on the type code to signal a Z coordinate.
pub const WKB_25D_BIT: u32 = 0x8000_0000;

/// Width of one ISO dimensional band: `+1000` Z, `+2000` M, `+3000` ZM.
const ISO_BAND: u32 = 1000;

/// The kinds of geometry that can appear in a WKB type code.
///
/// The discriminant is the 2D base code. `Geometry`, `Curve` and `Surface` are abstract and never
/// appear as a decoded node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryKind {
    /// Abstract root of the hierarchy
    Geometry = 0,
    /// A Point
    Point = 1,
    /// A LineString
    LineString = 2,
    /// A Polygon
    Polygon = 3,
    /// A MultiPoint
    MultiPoint = 4,
    /// A MultiLineString
    MultiLineString = 5,
    /// A MultiPolygon
    MultiPolygon = 6,
    /// A GeometryCollection
    GeometryCollection = 7,
    /// A CircularString
    CircularString = 8,
    /// A CompoundCurve
    CompoundCurve = 9,
    /// A CurvePolygon
    CurvePolygon = 10,
    /// A MultiCurve
    MultiCurve = 11,
    /// A MultiSurface
    MultiSurface = 12,
    /// Abstract one-dimensional geometry
    Curve = 13,
    /// Abstract two-dimensional geometry
    Surface = 14,
    /// A PolyhedralSurface
    PolyhedralSurface = 15,
    /// A triangulated irregular network
    Tin = 16,
    /// A Triangle
    Triangle = 17,
}

impl GeometryKind {
    /// The Simple Features name of this kind, e.g. `"MultiLineString"`.
    pub fn name(&self) -> &'static str {
        use GeometryKind::*;
        match self {
            Geometry => "Geometry",
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiLineString => "MultiLineString",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
            CircularString => "CircularString",
            CompoundCurve => "CompoundCurve",
            CurvePolygon => "CurvePolygon",
            MultiCurve => "MultiCurve",
            MultiSurface => "MultiSurface",
            Curve => "Curve",
            Surface => "Surface",
            PolyhedralSurface => "PolyhedralSurface",
            Tin => "TIN",
            Triangle => "Triangle",
        }
    }

    /// Whether this kind can never be instantiated.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            GeometryKind::Geometry | GeometryKind::Curve | GeometryKind::Surface
        )
    }

    /// Whether a geometry of kind `actual` can stand where `self` is expected.
    ///
    /// This follows the Simple Features class hierarchy: a `Curve` accepts any line-like kind, a
    /// `Polygon` accepts a `Triangle`, a `GeometryCollection` accepts every homogeneous
    /// collection, and so on. Concrete kinds always accept themselves.
    pub fn accepts(&self, actual: GeometryKind) -> bool {
        use GeometryKind::*;
        if *self == actual {
            return true;
        }
        match self {
            Geometry => true,
            Curve => matches!(actual, LineString | CircularString | CompoundCurve),
            Surface => matches!(
                actual,
                CurvePolygon | Polygon | Triangle | PolyhedralSurface | Tin
            ),
            LineString => actual == CircularString,
            Polygon => actual == Triangle,
            CurvePolygon => matches!(actual, Polygon | Triangle),
            PolyhedralSurface => actual == Tin,
            MultiCurve => actual == MultiLineString,
            MultiSurface => actual == MultiPolygon,
            GeometryCollection => matches!(
                actual,
                MultiPoint | MultiLineString | MultiPolygon | MultiCurve | MultiSurface
            ),
            _ => false,
        }
    }

    /// The ISO type code for this kind with the given dimensions.
    pub fn code(&self, has_z: bool, has_m: bool) -> u32 {
        let band = match (has_z, has_m) {
            (false, false) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (true, true) => 3,
        };
        band * ISO_BAND + u32::from(*self)
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The decoded header of one WKB geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryTypeInfo {
    /// The type code exactly as read from the buffer, legacy bit included
    pub raw_code: u32,
    /// The resolved geometry kind
    pub kind: GeometryKind,
    /// Whether each coordinate carries a Z value
    pub has_z: bool,
    /// Whether each coordinate carries an M value
    pub has_m: bool,
}

/// Resolve a type code (with the legacy 2.5D bit already removed) to its kind and the Z/M flags
/// implied by its ISO band.
pub fn resolve_type_code(code: u32) -> WkbResult<(GeometryKind, bool, bool)> {
    let (has_z, has_m) = match code / ISO_BAND {
        0 => (false, false),
        1 => (true, false),
        2 => (false, true),
        3 => (true, true),
        _ => return Err(WkbError::UnsupportedCode(code)),
    };
    let kind = GeometryKind::try_from_primitive(code % ISO_BAND)
        .map_err(|_| WkbError::UnsupportedCode(code))?;
    Ok((kind, has_z, has_m))
}
