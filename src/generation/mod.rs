//! Core mosaic generation algorithm
//!
//! Samples a toroidal Poisson-disk point set and derives an approximate
//! Voronoi cell for every site.

mod grid;
mod poisson;
mod ranges;
mod voronoi;

pub use grid::SpatialGrid;
pub use poisson::PoissonSampler;
pub use ranges::AngularIntervalSet;
pub use voronoi::{CellGeometry, VoronoiBuilder};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::MosaicConfig;
use crate::error::Result;
use crate::site::Site;

/// Generate sites with neighbors and polygons from a configuration
///
/// Sampling runs first and is strictly sequential; the Voronoi pass then reads
/// the frozen sampling results. The output is a pure function of the config.
pub fn generate_sites(config: &MosaicConfig) -> Result<Vec<Site>> {
    let sampler = PoissonSampler::new(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    // Step 1: Poisson-disk sampling
    let mut sites = sampler.generate(&mut rng)?;

    // Step 2: Voronoi cells
    VoronoiBuilder::new(sampler.torus()).build(&mut sites);

    Ok(sites)
}

/// Generate sites for a `width × height` torus
///
/// # Example
///
/// ```rust
/// use voronoi_mosaic::generate;
///
/// let sites = generate(256.0, 256.0, 16.0, 42).unwrap();
/// assert!(!sites.is_empty());
/// ```
///
/// # Errors
///
/// Returns `InvalidConfig` when a dimension or the radius is non-positive, or
/// when either dimension is shorter than two packing diameters.
pub fn generate(width: f64, height: f64, radius: f64, seed: u64) -> Result<Vec<Site>> {
    generate_sites(&MosaicConfig {
        width,
        height,
        radius,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MosaicError;
    use crate::torus::Torus;
    use std::f64::consts::PI;

    #[test]
    fn test_invalid_parameters_fail_fast() {
        assert!(matches!(generate(256.0, 256.0, 0.0, 1), Err(MosaicError::InvalidConfig(_))));
        assert!(matches!(generate(0.0, 256.0, 16.0, 1), Err(MosaicError::InvalidConfig(_))));
        assert!(matches!(generate(256.0, -3.0, 16.0, 1), Err(MosaicError::InvalidConfig(_))));
    }

    #[test]
    fn test_small_domains_rejected() {
        let too_small = [(16.0, 16.0, 16.0), (1.0, 1000.0, 5.0), (64.0, 63.0, 16.0)];
        for (width, height, radius) in too_small {
            assert!(
                matches!(generate(width, height, radius, 3), Err(MosaicError::InvalidConfig(_))),
                "{} x {} with radius {}",
                width,
                height,
                radius
            );
        }

        // The smallest accepted domain still terminates with spacing intact
        let torus = Torus::new(64.0, 64.0);
        let sites = generate(64.0, 64.0, 16.0, 3).unwrap();
        assert!(sites.len() > 1);
        for a in &sites {
            for b in sites.iter().skip(a.id + 1) {
                assert!(torus.distance_squared(a.position, b.position) >= 256.0 - 1e-6);
            }
        }
    }

    #[test]
    fn test_reference_scenario() {
        let sites = generate(256.0, 256.0, 16.0, 42).unwrap();
        let torus = Torus::new(256.0, 256.0);
        assert!(!sites.is_empty());

        for site in &sites {
            assert!(site.position.x >= 0.0 && site.position.x < 256.0);
            assert!(site.position.y >= 0.0 && site.position.y < 256.0);
        }

        // Sites are never closer than the spawn radius
        for a in &sites {
            for b in sites.iter().skip(a.id + 1) {
                assert!(torus.distance(a.position, b.position) >= 16.0 - 1e-6);
            }
        }

        for site in &sites {
            assert!(!site.polygon.is_empty());
            assert_eq!(site.polygon.len(), site.neighbors.len());
            if site.neighbors.len() >= 3 {
                assert_ne!(site.polygon.first(), site.polygon.last());
            }
            for vertex in &site.polygon {
                assert!(vertex.is_finite());
            }
        }
    }

    #[test]
    fn test_site_count_respects_packing_bounds() {
        let (width, height, radius) = (256.0, 256.0, 16.0);
        let sites = generate(width, height, radius, 7).unwrap();

        // Disks of radius r/2 cannot overlap; disks of radius r must cover the torus
        let cells = (width / (2.0 * radius)).ceil() * (height / (2.0 * radius)).ceil();
        let upper = cells as usize * 8;
        let lower = (width * height / (PI * radius * radius)) as usize;
        assert!(sites.len() <= upper, "{} sites", sites.len());
        assert!(sites.len() >= lower, "{} sites", sites.len());
    }

    #[test]
    fn test_polygon_closes_on_parent() {
        let sites = generate(200.0, 200.0, 10.0, 3).unwrap();
        for site in &sites {
            assert_eq!(site.neighbors.last().copied(), site.parent);
        }
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        for (width, height, radius, seed) in [
            (256.0, 256.0, 16.0, 42),
            (256.0, 256.0, 12.0, 99),
            (300.0, 180.0, 9.0, 1234),
        ] {
            let sites = generate(width, height, radius, seed).unwrap();
            let mut links = 0usize;
            for site in &sites {
                for &other in &site.neighbors {
                    assert!(site.candidate_neighbors.contains(&other));
                    assert!(
                        sites[other].is_neighbor_of(site.id),
                        "{} lists {} but not the reverse (seed {})",
                        site.id,
                        other,
                        seed
                    );
                    links += 1;
                }
            }
            assert!(links > 0);
        }
    }

    #[test]
    fn test_determinism() {
        let first = generate(300.0, 180.0, 9.0, 1234).unwrap();
        let second = generate(300.0, 180.0, 9.0, 1234).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_multiple_domain_keeps_spacing() {
        let torus = Torus::new(150.0, 110.0);
        let sites = generate(150.0, 110.0, 8.0, 5).unwrap();
        for a in &sites {
            for b in sites.iter().skip(a.id + 1) {
                assert!(torus.distance_squared(a.position, b.position) >= 64.0 - 1e-6);
            }
        }
    }
}
