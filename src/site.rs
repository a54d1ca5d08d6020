//! Site Structure
//!
//! A generated point of the mosaic together with its sampling bookkeeping and
//! its Voronoi cell.

use glam::{DVec2, IVec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single site of the mosaic
///
/// Sites live in one arena (`Vec<Site>`) and refer to each other by index, so
/// `id` is always the site's own position in that arena.
///
/// # Lifecycle
///
/// - During sampling, `position` is fixed at creation while `parent` and
///   `candidate_neighbors` are filled in.
/// - The Voronoi pass then fills `neighbors` and `polygon`; both are empty
///   before it runs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Index of this site in the generated sequence
    pub id: usize,

    /// Location inside `[0, width) × [0, height)`
    ///
    /// `x` is the east-west axis and `y` holds the world's z coordinate.
    pub position: DVec2,

    /// Site that spawned this one during sampling
    ///
    /// The first site has no spawner; after sampling it is pointed at the
    /// second site so every site has a reference direction for angular sorting.
    pub parent: Option<usize>,

    /// Every site found within one packing diameter during sampling
    ///
    /// Symmetric: if `a` lists `b`, `b` lists `a`. A superset of `neighbors`.
    pub candidate_neighbors: Vec<usize>,

    /// Accepted Voronoi neighbors, in angular sweep order
    pub neighbors: Vec<usize>,

    /// Voronoi cell boundary, one vertex per entry of `neighbors`
    ///
    /// Vertices are unwrapped around `position`: a cell that straddles a domain
    /// edge keeps its shape, so vertices may lie outside the domain.
    pub polygon: Vec<DVec2>,
}

impl Site {
    /// Create a site with no relations yet
    pub fn new(id: usize, position: DVec2) -> Self {
        Self {
            id,
            position,
            parent: None,
            candidate_neighbors: Vec::new(),
            neighbors: Vec::new(),
            polygon: Vec::new(),
        }
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this site is a Voronoi neighbor of another site
    #[inline]
    pub fn is_neighbor_of(&self, other_id: usize) -> bool {
        self.neighbors.contains(&other_id)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.polygon.len()
    }

    /// Polygon vertices truncated toward zero to block coordinates
    pub fn block_polygon(&self) -> Vec<IVec2> {
        self.polygon
            .iter()
            .map(|v| IVec2::new(v.x as i32, v.y as i32))
            .collect()
    }

    /// Area enclosed by the polygon (shoelace formula)
    ///
    /// Returns 0.0 for polygons with fewer than three vertices.
    pub fn approximate_area(&self) -> f64 {
        if self.polygon.len() < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for i in 0..self.polygon.len() {
            let v1 = self.polygon[i] - self.position;
            let v2 = self.polygon[(i + 1) % self.polygon.len()] - self.position;
            twice_area += v1.perp_dot(v2);
        }

        twice_area.abs() * 0.5
    }
}
