//! Toroidal Poisson-disk dart throwing
//!
//! Grows a point set outward from one random seed point. Each active site
//! spawns new sites at exactly `radius` distance in every direction that is
//! not blocked by an existing site, until no free direction remains.
//!
//! # Algorithm
//!
//! 1. Place a uniformly random first site and make it active
//! 2. Pop the most recently added active site (depth-first growth)
//! 3. For each site within one packing diameter, block the arc of directions
//!    `[angle - θ, angle + θ]` with `θ = acos(distance / diameter)` and record
//!    the pair as candidate neighbors
//! 4. While a free direction remains, spawn a site there, make it active and
//!    block its own arc
//! 5. Repeat until no active site remains

use glam::DVec2;
use rand::Rng;
use tracing::{debug, trace};

use super::grid::SpatialGrid;
use super::ranges::AngularIntervalSet;
use crate::config::MosaicConfig;
use crate::error::Result;
use crate::site::Site;
use crate::torus::Torus;

/// Dart-throwing sampler over a torus
///
/// Owns the grid and active list for one run. Sites come back with `parent`
/// and `candidate_neighbors` filled in; `neighbors` and `polygon` are left
/// for the Voronoi pass.
#[derive(Debug, Clone)]
pub struct PoissonSampler {
    torus: Torus,
    radius: f64,
    diameter: f64,
    max_quadrance: f64,
}

impl PoissonSampler {
    /// Create a sampler for a validated configuration
    pub fn new(config: &MosaicConfig) -> Result<Self> {
        config.validate()?;
        let diameter = config.diameter();
        Ok(Self {
            torus: Torus::new(config.width, config.height),
            radius: config.radius,
            diameter,
            max_quadrance: diameter * diameter,
        })
    }

    #[inline]
    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// Run the sampler to completion
    ///
    /// The first site is patched to point at the second site as its parent
    /// once sampling ends.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Site>> {
        let mut grid = SpatialGrid::new(self.torus.width, self.torus.height, self.diameter);
        let mut sites = Vec::new();

        let first = DVec2::new(
            rng.gen::<f64>() * self.torus.width,
            rng.gen::<f64>() * self.torus.height,
        );
        let first = self.torus.wrap(first);
        sites.push(Site::new(0, first));
        grid.insert(first.x, first.y, 0);
        let mut candidates = vec![0usize];

        while let Some(candidate) = candidates.pop() {
            let mut free = AngularIntervalSet::full();
            let origin = sites[candidate].position;

            for neighbor in grid.query_around(origin.x, origin.y) {
                if neighbor != candidate {
                    self.subtract_site(&mut free, &mut sites, candidate, neighbor);
                }
            }

            while !free.is_empty() {
                let angle = free.sample_uniform(rng)?;
                let id = sites.len();
                let position = self
                    .torus
                    .wrap(origin + DVec2::new(angle.cos(), angle.sin()) * self.radius);

                let mut site = Site::new(id, position);
                site.parent = Some(candidate);
                sites.push(site);
                candidates.push(id);
                grid.insert(position.x, position.y, id);
                trace!(id, parent = candidate, x = position.x, z = position.y, "spawned site");

                self.subtract_site(&mut free, &mut sites, candidate, id);
            }
        }

        if sites.len() > 1 {
            sites[0].parent = Some(1);
        }

        debug!(
            sites = sites.len(),
            width = self.torus.width,
            height = self.torus.height,
            radius = self.radius,
            "poisson sampling complete"
        );
        Ok(sites)
    }

    /// Block the directions from `candidate` that `other` makes unusable
    ///
    /// Only sites closer than one diameter matter; those also become mutual
    /// candidate neighbors.
    fn subtract_site(
        &self,
        free: &mut AngularIntervalSet,
        sites: &mut [Site],
        candidate: usize,
        other: usize,
    ) {
        let offset = self
            .torus
            .displacement(sites[candidate].position, sites[other].position);
        let quadrance = offset.length_squared();
        if quadrance >= self.max_quadrance {
            return;
        }

        let distance = quadrance.sqrt();
        let angle = offset.y.atan2(offset.x);
        let theta = (distance / self.diameter).acos();
        free.subtract(angle - theta, angle + theta);

        link(sites, candidate, other);
    }
}

fn link(sites: &mut [Site], a: usize, b: usize) {
    if !sites[a].candidate_neighbors.contains(&b) {
        sites[a].candidate_neighbors.push(b);
    }
    if !sites[b].candidate_neighbors.contains(&a) {
        sites[b].candidate_neighbors.push(a);
    }
}
