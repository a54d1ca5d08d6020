//! Voronoi cell construction from candidate neighbors
//!
//! Each site's cell is built from its own candidate-neighbor set alone:
//! candidates are swept in angular order and a pair is accepted when the
//! circumcircle through the site and the pair holds no other candidate.
//! This is exact only when the candidate set already contains every true
//! Voronoi neighbor.

use std::f64::consts::TAU;

use glam::DVec2;
use tracing::{debug, warn};

use crate::site::Site;
use crate::torus::Torus;

/// Neighbors and boundary of one cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGeometry {
    /// Accepted neighbor IDs in sweep order
    pub neighbors: Vec<usize>,
    /// Cell vertices, unwrapped around the site
    pub polygon: Vec<DVec2>,
}

/// Builds neighbor lists and polygons for sampled sites
#[derive(Debug, Clone, Copy)]
pub struct VoronoiBuilder {
    torus: Torus,
}

impl VoronoiBuilder {
    pub fn new(torus: Torus) -> Self {
        Self { torus }
    }

    /// Fill `neighbors` and `polygon` of every site
    ///
    /// All cells are computed from the frozen sampling results before any
    /// site is written, so cells never see each other's output.
    pub fn build(&self, sites: &mut [Site]) {
        let frozen: &[Site] = sites;
        let cells: Vec<CellGeometry> = (0..frozen.len())
            .map(|id| self.build_cell(frozen, id))
            .collect();

        for (site, cell) in sites.iter_mut().zip(cells) {
            site.neighbors = cell.neighbors;
            site.polygon = cell.polygon;
        }

        debug!(sites = sites.len(), "voronoi cells built");
    }

    /// Compute one site's cell
    ///
    /// Sites without a parent or without candidates get an empty cell.
    pub fn build_cell(&self, sites: &[Site], id: usize) -> CellGeometry {
        let site = &sites[id];
        let Some(parent) = site.parent else {
            return CellGeometry::default();
        };
        if site.candidate_neighbors.is_empty() {
            return CellGeometry::default();
        }

        // Work in a frame centered on the site so edges of the torus vanish
        let local = |other: usize| self.torus.displacement(site.position, sites[other].position);
        let reference = local(parent);

        let mut ordered: Vec<(usize, DVec2, f64)> = site
            .candidate_neighbors
            .iter()
            .map(|&other| {
                let offset = local(other);
                (other, offset, angle_between(reference, offset))
            })
            .collect();
        ordered.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut cell = CellGeometry::default();
        let (mut pa, mut pa_offset, _) = ordered[0];

        'sweep: for &(pb, pb_offset, _) in &ordered[1..] {
            let center = circumcenter(pa_offset, pb_offset);
            let radius_sq = center.length_squared();
            for &(pc, pc_offset, _) in &ordered {
                if pc != pa && pc != pb && (pc_offset - center).length_squared() < radius_sq {
                    continue 'sweep;
                }
            }

            self.push_vertex(&mut cell, site, pb, center);
            pa = pb;
            pa_offset = pb_offset;
        }

        let center = circumcenter(pa_offset, reference);
        self.push_vertex(&mut cell, site, parent, center);
        cell
    }

    fn push_vertex(&self, cell: &mut CellGeometry, site: &Site, neighbor: usize, center: DVec2) {
        if !center.is_finite() {
            warn!(site = site.id, neighbor, "degenerate circumcenter accepted");
        }
        cell.neighbors.push(neighbor);
        cell.polygon.push(site.position + center);
    }
}

/// Counter-clockwise angle from `base` to `v`, in `[0, 2π)`
pub(crate) fn angle_between(base: DVec2, v: DVec2) -> f64 {
    let angle = (base.perp_dot(v).atan2(base.dot(v)) + TAU) % TAU;
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// Circumcenter of the triangle `(0, a, b)`
///
/// Collinear inputs produce non-finite coordinates.
pub(crate) fn circumcenter(a: DVec2, b: DVec2) -> DVec2 {
    let d = 2.0 * a.perp_dot(b);
    let qa = a.length_squared();
    let qb = b.length_squared();
    DVec2::new((b.y * qa - a.y * qb) / d, (a.x * qb - b.x * qa) / d)
}
