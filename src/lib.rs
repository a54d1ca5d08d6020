//! Toroidal Poisson-disk mosaics
//!
//! Partitions a wrap-around 2D domain into evenly spaced, irregular cells:
//! a seeded Poisson-disk sampler places the sites, then an approximate
//! Voronoi pass gives every site its neighbors and boundary polygon.
//!
//! # Quick Start
//!
//! ```rust
//! use voronoi_mosaic::*;
//!
//! let config = MosaicConfigBuilder::new()
//!     .seed(42)
//!     .domain(512.0, 512.0)
//!     .unwrap()
//!     .radius(24.0)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mosaic = Mosaic::generate(config).unwrap();
//! for site in mosaic.sites().iter().take(3) {
//!     println!("site {} has {} neighbors", site.id, site.neighbor_count());
//! }
//!
//! // Or the plain function form
//! let sites = generate(256.0, 256.0, 16.0, 42).unwrap();
//! assert!(!sites.is_empty());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-site lookups using KD-tree
//! - `serde`: Enables serialization support for configuration and sites

pub mod error;
pub mod config;
pub mod torus;
pub mod site;
pub mod generation;
pub mod biome;
pub mod mosaic;

#[cfg(feature = "spatial-index")]
pub mod spatial;

pub use error::{MosaicError, Result};
pub use config::{MosaicConfig, MosaicConfigBuilder};
pub use torus::Torus;
pub use site::Site;
pub use generation::{generate, generate_sites};
pub use biome::{BiomePicker, BiomeSampler};
pub use mosaic::Mosaic;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

pub use glam::DVec2;
