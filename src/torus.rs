//! Wrap-around domain arithmetic
//!
//! All distance and direction calculations on the mosaic go through [`Torus`],
//! so that the shortest path between two points may cross a domain edge.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `width × height` domain whose opposite edges are identified
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    /// Extent along x
    pub width: f64,
    /// Extent along z
    pub height: f64,
}

impl Torus {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a point into `[0, width) × [0, height)`
    pub fn wrap(&self, point: DVec2) -> DVec2 {
        DVec2::new(wrap_axis(point.x, self.width), wrap_axis(point.y, self.height))
    }

    /// Shortest displacement from `from` to `to`
    ///
    /// Both points must already lie inside the domain. Each component falls in
    /// `[-extent/2, extent/2)`.
    pub fn displacement(&self, from: DVec2, to: DVec2) -> DVec2 {
        DVec2::new(
            shortest_offset(to.x - from.x, self.width),
            shortest_offset(to.y - from.y, self.height),
        )
    }

    /// Toroidal Euclidean distance
    #[inline]
    pub fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        self.displacement(a, b).length()
    }

    /// Squared toroidal distance
    #[inline]
    pub fn distance_squared(&self, a: DVec2, b: DVec2) -> f64 {
        self.displacement(a, b).length_squared()
    }
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

fn shortest_offset(delta: f64, extent: f64) -> f64 {
    (delta + 1.5 * extent) % extent - extent / 2.0
}
