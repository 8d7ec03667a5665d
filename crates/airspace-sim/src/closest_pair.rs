//! Closest-pair search by divide and conquer over pre-sorted index arrays.
//!
//! Returns the global minimum pairwise distance together with every pair that
//! achieves it within `DISTANCE_EPSILON`. Runs in O(n log n): points are sorted
//! once by x and once by y, and each recursion level works on index ranges of
//! those arrays. The y-ordered array is partitioned in place before recursing
//! and merged back afterwards, so no subsequence is ever copied.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use airspace_core::constants::DISTANCE_EPSILON;
use airspace_core::types::Point;

use crate::geometry::{distance, nearly_equal, strictly_less};

/// Subsets at or below this size are solved by exhaustive comparison.
const BRUTE_FORCE_MAX: usize = 3;

/// Unordered id pair, stored with the lexicographically smaller id first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    pub first: String,
    pub second: String,
}

impl PairKey {
    /// Canonicalize an unordered pair.
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_owned(),
            second: second.to_owned(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.first == id || self.second == id
    }

    pub fn into_tuple(self) -> (String, String) {
        (self.first, self.second)
    }
}

/// Result of a closest-pair search.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestPairs {
    /// `f64::INFINITY` when fewer than two points were given.
    pub min_distance: f64,
    /// Every pair at `min_distance` (within epsilon), canonicalized.
    pub witnesses: BTreeSet<PairKey>,
}

impl ClosestPairs {
    fn empty() -> Self {
        Self {
            min_distance: f64::INFINITY,
            witnesses: BTreeSet::new(),
        }
    }

    /// The smallest witness in canonical order.
    pub fn first(&self) -> Option<&PairKey> {
        self.witnesses.iter().next()
    }

    /// Whether `id` belongs to any witness pair.
    pub fn involves(&self, id: &str) -> bool {
        self.witnesses.iter().any(|pair| pair.contains(id))
    }
}

/// Find the minimum pairwise distance and all pairs achieving it.
///
/// Point ids must be unique; duplicate ids would be folded into one witness key.
pub fn closest_pairs(points: &[Point]) -> ClosestPairs {
    let n = points.len();
    if n < 2 {
        return ClosestPairs::empty();
    }

    // Px: x-ascending. Ties broken by y then id so the order never depends on input order.
    let mut px: Vec<usize> = (0..n).collect();
    px.sort_by(|&a, &b| {
        let (pa, pb) = (&points[a], &points[b]);
        pa.x.total_cmp(&pb.x)
            .then(pa.y.total_cmp(&pb.y))
            .then_with(|| pa.id.cmp(&pb.id))
    });

    let mut rank = vec![0; n];
    for (r, &i) in px.iter().enumerate() {
        rank[i] = r;
    }

    // Py: y-ascending, ties broken by x-rank.
    let mut py: Vec<usize> = (0..n).collect();
    py.sort_by(|&a, &b| cmp_y(points, &rank, a, b));

    let mut search = Search {
        points,
        px: &px,
        rank: &rank,
        py,
        scratch: vec![0; n],
        strip: Vec::with_capacity(n),
    };

    let best = search.solve(0, n);
    let min_distance = best.distance;

    let witnesses = best
        .pairs
        .into_iter()
        .filter(|&(a, b)| nearly_equal(distance(&points[a], &points[b]), min_distance))
        .map(|(a, b)| PairKey::new(&points[a].id, &points[b].id))
        .collect();

    ClosestPairs {
        min_distance,
        witnesses,
    }
}

fn cmp_y(points: &[Point], rank: &[usize], a: usize, b: usize) -> Ordering {
    points[a]
        .y
        .total_cmp(&points[b].y)
        .then(rank[a].cmp(&rank[b]))
}

/// Running minimum over a subset, with every pair tied at that minimum.
struct Candidate {
    distance: f64,
    pairs: Vec<(usize, usize)>,
}

impl Candidate {
    fn none() -> Self {
        Self {
            distance: f64::INFINITY,
            pairs: Vec::new(),
        }
    }

    fn offer(&mut self, a: usize, b: usize, d: f64) {
        if strictly_less(d, self.distance) {
            self.distance = d;
            self.pairs.clear();
            self.pairs.push((a, b));
        } else if nearly_equal(d, self.distance) {
            self.distance = self.distance.min(d);
            self.pairs.push((a, b));
        }
    }

    /// Keep whichever side achieves the smaller distance; both when tied.
    fn combine(mut left: Candidate, mut right: Candidate) -> Candidate {
        if nearly_equal(left.distance, right.distance) {
            left.distance = left.distance.min(right.distance);
            left.pairs.append(&mut right.pairs);
            left
        } else if left.distance < right.distance {
            left
        } else {
            right
        }
    }
}

/// Arena for one search: the input points plus index arrays into them.
struct Search<'a> {
    points: &'a [Point],
    px: &'a [usize],
    /// Position of each point within `px`.
    rank: &'a [usize],
    py: Vec<usize>,
    scratch: Vec<usize>,
    strip: Vec<usize>,
}

impl Search<'_> {
    fn cmp_y(&self, a: usize, b: usize) -> Ordering {
        cmp_y(self.points, self.rank, a, b)
    }

    fn pair_distance(&self, a: usize, b: usize) -> f64 {
        distance(&self.points[a], &self.points[b])
    }

    /// Solve the subset `px[lo..hi]`. Requires `py[lo..hi]` to hold the same
    /// members in y order, and leaves it that way on return.
    fn solve(&mut self, lo: usize, hi: usize) -> Candidate {
        if hi - lo <= BRUTE_FORCE_MAX {
            return self.brute_force(lo, hi);
        }

        let mid = lo + (hi - lo) / 2;
        let split_x = self.points[self.px[mid]].x;

        self.partition_py(lo, mid, hi);
        let left = self.solve(lo, mid);
        let right = self.solve(mid, hi);
        self.merge_py(lo, mid, hi);

        let mut best = Candidate::combine(left, right);
        self.scan_strip(lo, hi, split_x, &mut best);
        best
    }

    fn brute_force(&self, lo: usize, hi: usize) -> Candidate {
        let mut best = Candidate::none();
        for i in lo..hi {
            for j in (i + 1)..hi {
                let (a, b) = (self.px[i], self.px[j]);
                best.offer(a, b, self.pair_distance(a, b));
            }
        }
        best
    }

    /// Stable split of `py[lo..hi]` into left members (x-rank below `mid`)
    /// followed by right members, preserving y order on each side.
    fn partition_py(&mut self, lo: usize, mid: usize, hi: usize) {
        self.scratch[lo..hi].copy_from_slice(&self.py[lo..hi]);
        let (mut left, mut right) = (lo, mid);
        for k in lo..hi {
            let i = self.scratch[k];
            if self.rank[i] < mid {
                self.py[left] = i;
                left += 1;
            } else {
                self.py[right] = i;
                right += 1;
            }
        }
    }

    /// Merge the y-sorted halves `py[lo..mid]` and `py[mid..hi]` back together.
    fn merge_py(&mut self, lo: usize, mid: usize, hi: usize) {
        self.scratch[lo..hi].copy_from_slice(&self.py[lo..hi]);
        let (mut a, mut b, mut k) = (lo, mid, lo);
        while a < mid && b < hi {
            if self.cmp_y(self.scratch[a], self.scratch[b]) != Ordering::Greater {
                self.py[k] = self.scratch[a];
                a += 1;
            } else {
                self.py[k] = self.scratch[b];
                b += 1;
            }
            k += 1;
        }
        let rest = if a < mid { a..mid } else { b..hi };
        let len = rest.len();
        self.py[k..k + len].copy_from_slice(&self.scratch[rest]);
    }

    /// Compare points near the split line. Both the strip width and the
    /// window bound include `DISTANCE_EPSILON` so pairs exactly at the current
    /// minimum are still reported as ties.
    fn scan_strip(&mut self, lo: usize, hi: usize, split_x: f64, best: &mut Candidate) {
        let mut strip = std::mem::take(&mut self.strip);
        strip.clear();
        strip.extend(
            self.py[lo..hi]
                .iter()
                .copied()
                .filter(|&i| (self.points[i].x - split_x).abs() < best.distance + DISTANCE_EPSILON),
        );

        for (k, &a) in strip.iter().enumerate() {
            for &b in &strip[k + 1..] {
                if self.points[b].y - self.points[a].y >= best.distance + DISTANCE_EPSILON {
                    break;
                }
                best.offer(a, b, self.pair_distance(a, b));
            }
        }

        self.strip = strip;
    }
}
