//! Bucketed neighbor index over the torus
//!
//! Buckets are at least one packing diameter wide, so two sites closer than
//! a diameter always share a bucket or sit in adjacent ones.

/// Uniform bucket grid over a `width × height` torus
#[derive(Debug, Clone)]
pub struct SpatialGrid<T> {
    columns: usize,
    rows: usize,
    cell_width: f64,
    cell_height: f64,
    buckets: Vec<Vec<T>>,
}

impl<T: Copy> SpatialGrid<T> {
    /// Create an empty grid whose cells are no smaller than `min_cell_size`
    ///
    /// When an extent is an exact multiple of `min_cell_size` the cells are
    /// exactly that size. Otherwise the cells are stretched so that the extent
    /// divides evenly and no partial cell remains at the wrap seam.
    pub fn new(width: f64, height: f64, min_cell_size: f64) -> Self {
        let columns = ((width / min_cell_size).floor() as usize).max(1);
        let rows = ((height / min_cell_size).floor() as usize).max(1);
        Self {
            columns,
            rows,
            cell_width: width / columns as f64,
            cell_height: height / rows as f64,
            buckets: vec![Vec::new(); columns * rows],
        }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Bucket coordinates of a point, before wrapping
    ///
    /// Returns fractional coordinates; `floor` gives the bucket index.
    #[inline]
    pub fn cell_coords(&self, x: f64, z: f64) -> (f64, f64) {
        (x / self.cell_width, z / self.cell_height)
    }

    /// Store `item` in the bucket containing `(x, z)`
    pub fn insert(&mut self, x: f64, z: f64, item: T) {
        let (cx, cz) = self.cell_coords(x, z);
        let column = wrap_index(cx.floor() as i64, self.columns);
        let row = wrap_index(cz.floor() as i64, self.rows);
        self.buckets[row * self.columns + column].push(item);
    }

    /// All items whose bucket indices fall inside the inclusive rectangle
    ///
    /// Indices wrap around the torus. Each bucket is visited once even when
    /// the rectangle is wider than the grid.
    pub fn query_region(&self, x_min: i64, z_min: i64, x_max: i64, z_max: i64) -> Vec<T> {
        let columns = wrapped_span(x_min, x_max, self.columns);
        let rows = wrapped_span(z_min, z_max, self.rows);

        let mut found = Vec::new();
        for &row in &rows {
            for &column in &columns {
                found.extend_from_slice(&self.buckets[row * self.columns + column]);
            }
        }
        found
    }

    /// Items in the buckets around a point
    ///
    /// Covers `floor(c) - 1 ..= ceil(c)` on each axis, which holds every item
    /// within one cell size of the point.
    pub fn query_around(&self, x: f64, z: f64) -> Vec<T> {
        let (cx, cz) = self.cell_coords(x, z);
        self.query_region(
            cx.floor() as i64 - 1,
            cz.floor() as i64 - 1,
            cx.ceil() as i64,
            cz.ceil() as i64,
        )
    }

    /// Total number of stored items
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

fn wrap_index(index: i64, count: usize) -> usize {
    index.rem_euclid(count as i64) as usize
}

fn wrapped_span(min: i64, max: i64, count: usize) -> Vec<usize> {
    if max < min {
        return Vec::new();
    }
    let mut span = Vec::new();
    for index in min..=max {
        let wrapped = wrap_index(index, count);
        if span.contains(&wrapped) {
            break;
        }
        span.push(wrapped);
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_follow_cell_size() {
        let grid: SpatialGrid<usize> = SpatialGrid::new(256.0, 256.0, 32.0);
        assert_eq!(grid.columns(), 8);
        assert_eq!(grid.rows(), 8);

        // 100 / 32 leaves a partial cell; it is absorbed into wider cells
        let grid: SpatialGrid<usize> = SpatialGrid::new(100.0, 20.0, 32.0);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 1);
    }

    #[test]
    fn test_insert_and_query_region() {
        let mut grid = SpatialGrid::new(256.0, 256.0, 32.0);
        assert!(grid.is_empty());
        grid.insert(10.0, 10.0, 0usize);
        grid.insert(40.0, 10.0, 1);
        grid.insert(200.0, 200.0, 2);

        let mut found = grid.query_region(0, 0, 1, 0);
        found.sort();
        assert_eq!(found, vec![0, 1]);

        assert!(grid.query_region(3, 3, 4, 4).is_empty());
        assert_eq!(grid.len(), 3);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_query_wraps_around_edges() {
        let mut grid = SpatialGrid::new(256.0, 256.0, 32.0);
        grid.insert(250.0, 250.0, 7usize);

        // Cell (-1, -1) is the far corner of the torus
        assert_eq!(grid.query_region(-1, -1, 0, 0), vec![7]);
        assert_eq!(grid.query_around(5.0, 5.0), vec![7]);
    }

    #[test]
    fn test_wide_query_visits_each_bucket_once() {
        let mut grid = SpatialGrid::new(64.0, 64.0, 32.0);
        grid.insert(1.0, 1.0, 0usize);
        grid.insert(40.0, 40.0, 1);

        let mut found = grid.query_region(-1, -1, 1, 1);
        found.sort();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn test_query_around_finds_everything_within_cell_size() {
        let mut grid = SpatialGrid::new(320.0, 320.0, 32.0);
        let center = (160.0, 160.0);
        let mut id = 0usize;
        for step in 0..16 {
            let angle = step as f64 * std::f64::consts::TAU / 16.0;
            grid.insert(center.0 + 31.9 * angle.cos(), center.1 + 31.9 * angle.sin(), id);
            id += 1;
        }

        let found = grid.query_around(center.0, center.1);
        assert_eq!(found.len(), 16);
    }
}
