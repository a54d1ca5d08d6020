//! Mosaic Configuration and Builder
//!
//! This module provides configuration types for deterministic mosaic generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};

/// Default domain width in world units
pub const DEFAULT_WIDTH: f64 = 256.0;
/// Default domain height in world units
pub const DEFAULT_HEIGHT: f64 = 256.0;
/// Default minimum-spacing radius in world units
pub const DEFAULT_RADIUS: f64 = 16.0;

/// Configuration for deterministic mosaic generation
///
/// The domain is a torus of `width × height`: sites, distances and polygons all
/// wrap around its edges. The same configuration always produces the identical
/// site sequence.
///
/// # Example
///
/// ```rust
/// use voronoi_mosaic::*;
///
/// let config = MosaicConfigBuilder::new()
///     .seed(42)
///     .domain(512.0, 256.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.diameter(), 32.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosaicConfig {
    /// Domain extent along x
    pub width: f64,

    /// Domain extent along z
    pub height: f64,

    /// Spawn distance between a site and the sites it generates
    ///
    /// Also the minimum spacing between any two sites. Twice this value (the
    /// packing diameter) is the range in which sites are treated as candidate
    /// neighbors of each other.
    pub radius: f64,

    /// Random seed for deterministic generation
    pub seed: u64,
}

impl MosaicConfig {
    /// Packing diameter (twice the radius)
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Check that the domain and radius are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any dimension or the radius is non-positive or not finite,
    /// or if either dimension is smaller than two packing diameters.
    pub fn validate(&self) -> Result<()> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("radius", self.radius)?;

        // Below this a spawn step can wrap onto another image of the same site
        let min_extent = 2.0 * self.diameter();
        if self.width < min_extent || self.height < min_extent {
            return Err(MosaicError::InvalidConfig(format!(
                "domain {} x {} must be at least {} (two packing diameters) on each axis",
                self.width, self.height, min_extent
            )));
        }
        Ok(())
    }
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            seed: 0,
        }
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MosaicError::InvalidConfig(format!(
            "{} must be positive and finite (got {})",
            name, value
        )));
    }
    Ok(())
}

/// Builder for creating MosaicConfig with validation
///
/// # Example
///
/// ```rust
/// use voronoi_mosaic::*;
///
/// // Use defaults
/// let config = MosaicConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = MosaicConfigBuilder::new()
///     .seed(12345)
///     .domain(1024.0, 1024.0)
///     .unwrap()
///     .radius(48.0)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MosaicConfigBuilder {
    seed: Option<u64>,
    width: f64,
    height: f64,
    radius: f64,
}

impl MosaicConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - domain: 256 × 256
    /// - radius: 16
    pub fn new() -> Self {
        Self {
            seed: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the domain extent
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is non-positive or not finite
    pub fn domain(mut self, width: f64, height: f64) -> Result<Self> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Set the spawn radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius <= 0.0 or not finite
    pub fn radius(mut self, radius: f64) -> Result<Self> {
        check_positive("radius", radius)?;
        self.radius = radius;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<MosaicConfig> {
        let config = MosaicConfig {
            width: self.width,
            height: self.height,
            radius: self.radius,
            seed: self.seed.unwrap_or_else(rand::random),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for MosaicConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
