use crate::geometry::{Dimension, LineString};

/// A planar surface bounded by one exterior ring and any number of interior rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    dim: Dimension,
    rings: Vec<LineString>,
}

impl Polygon {
    pub fn new(dim: Dimension) -> Self {
        Self { dim, rings: vec![] }
    }

    pub fn with_capacity(dim: Dimension, capacity: usize) -> Self {
        Self {
            dim,
            rings: Vec::with_capacity(capacity),
        }
    }

    pub fn push_ring(&mut self, ring: LineString) {
        self.rings.push(ring);
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }

    /// The first ring, if any.
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// Every ring after the first.
    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// A polygon with a single exterior ring of three distinct vertices.
///
/// The ring count is not enforced; rings are stored as read.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    dim: Dimension,
    rings: Vec<LineString>,
}

impl Triangle {
    pub fn new(dim: Dimension) -> Self {
        Self { dim, rings: vec![] }
    }

    pub fn with_capacity(dim: Dimension, capacity: usize) -> Self {
        Self {
            dim,
            rings: Vec::with_capacity(capacity),
        }
    }

    pub fn push_ring(&mut self, ring: LineString) {
        self.rings.push(ring);
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
