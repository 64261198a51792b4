//! Inclusion predicates applied to geometries as they are read.
//!
//! A filter sees every materialized node: whole geometries (with the kind of the collection that
//! contains them, or `None` at the top level) as well as the headerless points of line strings
//! and the rings of polygons. Rejecting a node drops it from its parent; it is never an error.

use tracing::debug;

use crate::common::GeometryKind;
use crate::geometry::{Geometry, Point};

/// Decides whether a decoded geometry is kept.
pub trait GeometryFilter {
    /// Return `false` to drop `geometry` from its container, or from the result at the top level.
    fn filter(&self, containing: Option<GeometryKind>, geometry: &Geometry) -> bool;
}

impl<F> GeometryFilter for F
where
    F: Fn(Option<GeometryKind>, &Geometry) -> bool,
{
    fn filter(&self, containing: Option<GeometryKind>, geometry: &Geometry) -> bool {
        self(containing, geometry)
    }
}

/// Which non-finite values a [`PointFiniteFilter`] lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiniteFilterType {
    /// Only finite values
    #[default]
    Finite,
    /// Finite values and NaN
    FiniteAndNan,
    /// Finite values and infinities
    FiniteAndInfinite,
}

impl FiniteFilterType {
    fn passes(&self, value: f64) -> bool {
        match self {
            FiniteFilterType::Finite => value.is_finite(),
            FiniteFilterType::FiniteAndNan => !value.is_infinite(),
            FiniteFilterType::FiniteAndInfinite => !value.is_nan(),
        }
    }
}

/// Drops points whose coordinates are not finite.
///
/// Only `Point` nodes are inspected; every other geometry passes. X and Y are always checked, Z
/// and M only when enabled and present on the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointFiniteFilter {
    filter_type: FiniteFilterType,
    filter_z: bool,
    filter_m: bool,
}

impl PointFiniteFilter {
    /// A filter checking X and Y only.
    pub fn new(filter_type: FiniteFilterType) -> Self {
        Self {
            filter_type,
            filter_z: false,
            filter_m: false,
        }
    }

    /// Also check Z values.
    pub fn with_z(self, filter_z: bool) -> Self {
        Self { filter_z, ..self }
    }

    /// Also check M values.
    pub fn with_m(self, filter_m: bool) -> Self {
        Self { filter_m, ..self }
    }

    /// Which non-finite values pass.
    pub fn filter_type(&self) -> FiniteFilterType {
        self.filter_type
    }

    fn passes_point(&self, point: &Point) -> bool {
        let passes = |value: Option<f64>| value.map_or(true, |v| self.filter_type.passes(v));
        self.filter_type.passes(point.x())
            && self.filter_type.passes(point.y())
            && (!self.filter_z || passes(point.z()))
            && (!self.filter_m || passes(point.m()))
    }
}

impl GeometryFilter for PointFiniteFilter {
    fn filter(&self, _containing: Option<GeometryKind>, geometry: &Geometry) -> bool {
        match geometry {
            Geometry::Point(point) => self.passes_point(point),
            _ => true,
        }
    }
}

/// Applies an optional filter; no filter admits everything.
#[derive(Clone, Copy, Default)]
pub(crate) struct FilterGate<'f> {
    filter: Option<&'f dyn GeometryFilter>,
}

impl<'f> FilterGate<'f> {
    pub(crate) fn new(filter: Option<&'f dyn GeometryFilter>) -> Self {
        Self { filter }
    }

    pub(crate) fn admits(&self, containing: Option<GeometryKind>, geometry: &Geometry) -> bool {
        let Some(filter) = self.filter else {
            return true;
        };
        let admitted = filter.filter(containing, geometry);
        if !admitted {
            debug!(kind = %geometry.kind(), ?containing, "filtered out geometry");
        }
        admitted
    }

    /// Gate a headerless element (a point of a line or a ring of a polygon) that its parent stores
    /// unwrapped. `unwrap` recovers the element after the filter has inspected it.
    pub(crate) fn admit_element<T: Into<Geometry>>(
        &self,
        containing: GeometryKind,
        element: T,
        unwrap: fn(Geometry) -> Result<T, Geometry>,
    ) -> Option<T> {
        if self.filter.is_none() {
            return Some(element);
        }
        let geometry = element.into();
        if self.admits(Some(containing), &geometry) {
            unwrap(geometry).ok()
        } else {
            None
        }
    }
}
