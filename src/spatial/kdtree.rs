//! Static 2D k-d tree for nearest-neighbor queries.
//!
//! The tree is built once over a fixed point set by recursive median
//! splits on alternating axes, stored implicitly in a single vector:
//! each subrange's root sits at its midpoint, with the left subtree in
//! the lower half and the right subtree in the upper half. Build is
//! O(n log n), nearest queries are O(log n) on balanced input.

/// One indexed point in the tree.
#[derive(Clone, Copy, Debug)]
struct Entry {
    point: [f64; 2],
    index: usize,
}

/// Balanced 2D k-d tree over a fixed point set.
///
/// Points keep the index they had in the input slice, so query results
/// can be mapped back to the caller's own numbering.
pub struct KdTree2 {
    entries: Vec<Entry>,
}

impl KdTree2 {
    /// Build a tree over the given points.
    pub fn build(points: &[[f64; 2]]) -> Self {
        let mut entries: Vec<Entry> = points
            .iter()
            .enumerate()
            .map(|(index, &point)| Entry { point, index })
            .collect();
        build_recursive(&mut entries, 0);
        Self { entries }
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the point closest to `query` by Euclidean distance.
    ///
    /// Returns the original index of the winner and the distance to it.
    /// Exactly equidistant candidates resolve to the lowest original index.
    pub fn nearest(&self, query: [f64; 2]) -> Option<(usize, f64)> {
        if self.entries.is_empty() {
            return None;
        }
        let mut best = Best {
            index: usize::MAX,
            dist2: f64::INFINITY,
        };
        self.search(0, self.entries.len(), 0, query, &mut best);
        Some((best.index, best.dist2.sqrt()))
    }

    fn search(&self, lo: usize, hi: usize, axis: usize, query: [f64; 2], best: &mut Best) {
        if lo >= hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        let entry = &self.entries[mid];
        let d2 = dist2(entry.point, query);
        if d2 < best.dist2 || (d2 == best.dist2 && entry.index < best.index) {
            best.dist2 = d2;
            best.index = entry.index;
        }

        let delta = query[axis] - entry.point[axis];
        let (near, far) = if delta < 0.0 {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };

        self.search(near.0, near.1, 1 - axis, query, best);
        // The far half can only win if the splitting plane is within the
        // current best radius; <= keeps exact ties visible for the
        // lowest-index rule.
        if delta * delta <= best.dist2 {
            self.search(far.0, far.1, 1 - axis, query, best);
        }
    }
}

struct Best {
    index: usize,
    dist2: f64,
}

fn build_recursive(entries: &mut [Entry], axis: usize) {
    if entries.len() <= 1 {
        return;
    }
    let mid = entries.len() / 2;
    entries.select_nth_unstable_by(mid, |a, b| a.point[axis].total_cmp(&b.point[axis]));
    let (left, rest) = entries.split_at_mut(mid);
    build_recursive(left, 1 - axis);
    build_recursive(&mut rest[1..], 1 - axis);
}

#[inline]
fn dist2(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}
