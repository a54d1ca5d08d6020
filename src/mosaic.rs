//! Mosaic main structure

use std::collections::HashSet;

use crate::biome::BiomeSampler;
use crate::config::MosaicConfig;
use crate::error::{MosaicError, Result};
use crate::generation::generate_sites;
use crate::site::Site;
use crate::torus::Torus;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::DVec2;

/// A complete tessellation of a toroidal domain
///
/// Stores all generated sites in memory for fast queries and graph walks.
///
/// # Examples
///
/// ```
/// use voronoi_mosaic::*;
///
/// let config = MosaicConfigBuilder::new()
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mosaic = Mosaic::generate(config).unwrap();
/// println!("Generated {} sites", mosaic.site_count());
///
/// if let Some(site) = mosaic.get_site(0) {
///     println!("Site 0 has {} neighbors", site.neighbor_count());
/// }
/// ```
#[derive(Clone)]
pub struct Mosaic {
    /// Configuration used to generate this mosaic
    config: MosaicConfig,

    /// All sites (indexed by site ID)
    sites: Vec<Site>,

    /// Spatial index for fast position-to-site lookups (requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl Mosaic {
    /// Generate a mosaic from a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn generate(config: MosaicConfig) -> Result<Self> {
        let sites = generate_sites(&config)?;

        // Build spatial index (requires spatial-index feature)
        #[cfg(feature = "spatial-index")]
        let spatial_index = {
            let positions: Vec<DVec2> = sites.iter().map(|s| s.position).collect();
            SpatialIndex::new(&positions, Torus::new(config.width, config.height))
        };

        Ok(Self {
            config,
            sites,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    #[inline]
    pub fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// The wrap-around domain the sites live on
    #[inline]
    pub fn torus(&self) -> Torus {
        Torus::new(self.config.width, self.config.height)
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Get a site by ID
    ///
    /// Returns `None` if the site ID is out of bounds.
    #[inline]
    pub fn get_site(&self, id: usize) -> Option<&Site> {
        self.sites.get(id)
    }

    /// Get a site by ID, failing with `SiteNotFound` when out of bounds
    pub fn try_get_site(&self, id: usize) -> Result<&Site> {
        self.sites.get(id).ok_or(MosaicError::SiteNotFound(id))
    }

    #[inline]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Consume the mosaic, keeping only its sites
    pub fn into_sites(self) -> Vec<Site> {
        self.sites
    }

    /// Get neighbor IDs for a site
    ///
    /// Returns empty slice if site ID is invalid.
    pub fn get_neighbors(&self, site_id: usize) -> &[usize] {
        self.sites
            .get(site_id)
            .map(|s| s.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Find the site whose cell contains a position (requires spatial-index feature)
    ///
    /// The position may lie outside the domain; it is wrapped first.
    #[cfg(feature = "spatial-index")]
    pub fn find_site_at(&self, position: DVec2) -> usize {
        self.spatial_index.find_nearest(position)
    }

    /// Find sites within a given hop count from a center site (BFS)
    ///
    /// Includes the center site. Returns empty vec if center_id is invalid.
    pub fn find_sites_within_hops(&self, center_id: usize, hops: usize) -> Vec<usize> {
        if center_id >= self.sites.len() {
            return vec![];
        }

        let mut visited = HashSet::new();
        let mut current = vec![center_id];
        visited.insert(center_id);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &site_id in &current {
                for &neighbor in self.get_neighbors(site_id) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            current = next;
        }

        let mut found: Vec<usize> = visited.into_iter().collect();
        found.sort_unstable();
        found
    }

    /// Classify every site, in site order
    pub fn assign_biomes<S: BiomeSampler>(&self, sampler: &S) -> Vec<S::Output> {
        self.sites
            .iter()
            .map(|site| sampler.sample(site, self.config.seed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomePicker;
    use crate::MosaicConfigBuilder;

    fn mosaic() -> Mosaic {
        let config = MosaicConfigBuilder::new().seed(42).build().unwrap();
        Mosaic::generate(config).unwrap()
    }

    #[test]
    fn test_mosaic_generation() {
        let mosaic = mosaic();
        assert!(mosaic.site_count() > 0);
        assert_eq!(mosaic.config().seed, 42);
        assert_eq!(mosaic.torus(), Torus::new(256.0, 256.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MosaicConfig {
            width: -1.0,
            ..MosaicConfig::default()
        };
        assert!(matches!(
            Mosaic::generate(config),
            Err(MosaicError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_get_site() {
        let mosaic = mosaic();
        assert!(mosaic.get_site(0).is_some());
        assert!(mosaic.get_site(mosaic.site_count()).is_none());
        assert_eq!(
            mosaic.try_get_site(mosaic.site_count()).unwrap_err(),
            MosaicError::SiteNotFound(mosaic.site_count())
        );
    }

    #[test]
    fn test_get_neighbors() {
        let mosaic = mosaic();
        let neighbors = mosaic.get_neighbors(0);
        assert!(neighbors.len() >= 3);
        assert!(neighbors.len() <= 12);
        assert!(mosaic.get_neighbors(999_999).is_empty());
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_site_at() {
        let mosaic = mosaic();
        for site in mosaic.sites().iter().take(20) {
            assert_eq!(mosaic.find_site_at(site.position), site.id);
        }

        // A shifted copy of a position lands on the same site
        let site = mosaic.get_site(3).unwrap();
        let shifted = site.position + DVec2::new(256.0, -256.0);
        assert_eq!(mosaic.find_site_at(shifted), 3);
    }

    #[test]
    fn test_find_sites_within_hops() {
        let mosaic = mosaic();

        let r0 = mosaic.find_sites_within_hops(0, 0);
        assert_eq!(r0, vec![0]);

        let r1 = mosaic.find_sites_within_hops(0, 1);
        let mut expected: Vec<usize> = mosaic.get_neighbors(0).to_vec();
        expected.push(0);
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(r1, expected);

        let r2 = mosaic.find_sites_within_hops(0, 2);
        assert!(r2.len() > r1.len());

        assert!(mosaic.find_sites_within_hops(999_999, 3).is_empty());
    }

    #[test]
    fn test_assign_biomes() {
        let mosaic = mosaic();
        let picker = BiomePicker::new(vec!["forest", "swamp", "savanna"]).unwrap();

        let biomes = mosaic.assign_biomes(&picker);
        assert_eq!(biomes.len(), mosaic.site_count());
        assert_eq!(biomes, mosaic.assign_biomes(&picker));
        assert!(biomes.iter().any(|b| *b != biomes[0]));
    }
}
