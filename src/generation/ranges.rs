//! Free-direction bookkeeping around a spawning site
//!
//! [`AngularIntervalSet`] tracks which directions in `[0, 2π)` are still open
//! for placing a new site.

use std::f64::consts::TAU;

use rand::Rng;

use crate::error::{MosaicError, Result};

/// Subset of the circle `[0, 2π)` that is still free
///
/// Stored as sorted, disjoint half-open intervals `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularIntervalSet {
    intervals: Vec<(f64, f64)>,
}

impl AngularIntervalSet {
    /// A set covering the full circle
    pub fn full() -> Self {
        Self {
            intervals: vec![(0.0, TAU)],
        }
    }

    /// True once no free arc remains
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total free arc length
    pub fn free_length(&self) -> f64 {
        self.intervals.iter().map(|(start, end)| end - start).sum()
    }

    /// Remove the arc `[start, end]`, taken modulo 2π
    ///
    /// Arcs of length 2π or more clear the set. An arc with `end < start`
    /// removes nothing.
    pub fn subtract(&mut self, start: f64, end: f64) {
        if !(end >= start) {
            return;
        }
        if end - start >= TAU {
            self.intervals.clear();
            return;
        }

        let lo = start.rem_euclid(TAU);
        let hi = lo + (end - start);
        if hi > TAU {
            self.remove(lo, TAU);
            self.remove(0.0, hi - TAU);
        } else {
            self.remove(lo, hi);
        }
    }

    fn remove(&mut self, lo: f64, hi: f64) {
        let mut kept = Vec::with_capacity(self.intervals.len() + 1);
        for &(start, end) in &self.intervals {
            if hi <= start || lo >= end {
                kept.push((start, end));
                continue;
            }
            if start < lo {
                kept.push((start, lo));
            }
            if hi < end {
                kept.push((hi, end));
            }
        }
        self.intervals = kept;
    }

    /// Draw an angle uniformly from the remaining free arcs
    ///
    /// Each interval is chosen with probability proportional to its length.
    ///
    /// # Errors
    ///
    /// Returns `Internal` when the set is empty. Callers check [`is_empty`]
    /// first, so this indicates a logic defect.
    ///
    /// [`is_empty`]: AngularIntervalSet::is_empty
    pub fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        let Some(&(last_start, last_end)) = self.intervals.last() else {
            return Err(MosaicError::Internal(
                "sampled a direction from an exhausted interval set".into(),
            ));
        };

        let mut remaining = rng.gen::<f64>() * self.free_length();
        for &(start, end) in &self.intervals {
            let length = end - start;
            if remaining < length {
                return Ok(start + remaining);
            }
            remaining -= length;
        }

        // Rounding left us just past the final interval
        Ok(last_start + (last_end - last_start) * 0.5)
    }
}

impl Default for AngularIntervalSet {
    fn default() -> Self {
        Self::full()
    }
}
