use crate::geometry::{Dimension, Point};

/// A sequence of points joined by straight segments.
///
/// Also used for the headerless rings of a [`Polygon`](crate::geometry::Polygon) or
/// [`Triangle`](crate::geometry::Triangle).
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    dim: Dimension,
    points: Vec<Point>,
}

impl LineString {
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

    /// Whether the first and last points share the same x/y position.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.x() == last.x() && first.y() == last.y(),
            _ => false,
        }
    }
}

/// A sequence of points where each consecutive triple describes a circular arc.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularString {
    dim: Dimension,
    points: Vec<Point>,
}

impl CircularString {
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

    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
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
