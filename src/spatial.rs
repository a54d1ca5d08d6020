//! Spatial indexing for fast position-to-site lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::DVec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

#[cfg(feature = "spatial-index")]
use crate::torus::Torus;

/// KD-tree over site positions with toroidal nearest-neighbor queries
///
/// The tree stores each site once. A query is answered by searching the query
/// point and its eight images one domain-width away, which finds the nearest
/// site under wrap-around distance.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
    torus: Torus,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build spatial index from site positions
    ///
    /// # Example
    ///
    /// ```
    /// use voronoi_mosaic::*;
    /// use glam::DVec2;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let positions = vec![DVec2::new(1.0, 1.0), DVec2::new(50.0, 50.0)];
    /// let index = SpatialIndex::new(&positions, Torus::new(100.0, 100.0));
    ///
    /// // Wraps across the corner of the domain
    /// assert_eq!(index.find_nearest(DVec2::new(99.0, 99.0)), 0);
    /// # }
    /// ```
    pub fn new(positions: &[DVec2], torus: Torus) -> Self {
        let points: Vec<[f64; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
            torus,
        }
    }

    /// Find the site nearest to a position
    ///
    /// The position is wrapped into the domain first, so any coordinate works.
    pub fn find_nearest(&self, position: DVec2) -> usize {
        let wrapped = self.torus.wrap(position);

        let mut best: Option<(f64, usize)> = None;
        for dx in [-1.0, 0.0, 1.0] {
            for dz in [-1.0, 0.0, 1.0] {
                let query = [
                    wrapped.x + dx * self.torus.width,
                    wrapped.y + dz * self.torus.height,
                ];
                let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
                if best.map_or(true, |(distance, _)| result.distance < distance) {
                    best = Some((result.distance, result.item as usize));
                }
            }
        }

        best.map_or(0, |(_, item)| item)
    }
}
