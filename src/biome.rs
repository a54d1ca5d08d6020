//! Per-site biome selection
//!
//! Biomes are supplied by the caller as a fixed sequence; a seed selects one of
//! them deterministically.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{MosaicError, Result};
use crate::site::Site;

/// Trait for classifying mosaic sites
pub trait BiomeSampler {
    /// The biome type produced by this sampler
    type Output;

    /// Classify a site of a mosaic generated with `mosaic_seed`
    fn sample(&self, site: &Site, mosaic_seed: u64) -> Self::Output;
}

/// Deterministic pick from a caller-supplied biome list
///
/// # Example
///
/// ```rust
/// use voronoi_mosaic::BiomePicker;
///
/// let picker = BiomePicker::new(vec!["forest", "desert", "tundra"]).unwrap();
/// assert_eq!(picker.pick(7), picker.pick(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BiomePicker<B> {
    biomes: Vec<B>,
}

impl<B> BiomePicker<B> {
    /// Create a picker over `biomes`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the list is empty.
    pub fn new(biomes: Vec<B>) -> Result<Self> {
        if biomes.is_empty() {
            return Err(MosaicError::InvalidConfig(
                "biome list must not be empty".into(),
            ));
        }
        Ok(Self { biomes })
    }

    pub fn biomes(&self) -> &[B] {
        &self.biomes
    }

    /// Index selected by `seed`
    pub fn index(&self, seed: u64) -> usize {
        ChaCha8Rng::seed_from_u64(seed).gen_range(0..self.biomes.len())
    }

    /// Biome selected by `seed`
    pub fn pick(&self, seed: u64) -> &B {
        &self.biomes[self.index(seed)]
    }
}

/// Seed for one site, mixed from the mosaic seed and the site ID
pub fn site_seed(mosaic_seed: u64, site_id: usize) -> u64 {
    mosaic_seed ^ (site_id as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl<B: Clone> BiomeSampler for BiomePicker<B> {
    type Output = B;

    fn sample(&self, site: &Site, mosaic_seed: u64) -> B {
        self.pick(site_seed(mosaic_seed, site.id)).clone()
    }
}
