use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One of the three drawable regions of a two-circle Venn diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Left crescent: in A, not in B.
    AOnly,
    /// The lens shared by both circles.
    Intersection,
    /// Right crescent: in B, not in A.
    BOnly,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::AOnly, Region::Intersection, Region::BOnly];

    /// Region of `elem`, or `None` if it is in neither set.
    pub fn classify<T: Ord>(elem: &T, a: &BTreeSet<T>, b: &BTreeSet<T>) -> Option<Region> {
        match (a.contains(elem), b.contains(elem)) {
            (true, true) => Some(Region::Intersection),
            (true, false) => Some(Region::AOnly),
            (false, true) => Some(Region::BOnly),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::AOnly => "a_only",
            Region::Intersection => "intersection",
            Region::BOnly => "b_only",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four sets derived from an input pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSets<T: Ord> {
    pub union: BTreeSet<T>,
    pub intersection: BTreeSet<T>,
    pub a_only: BTreeSet<T>,
    pub b_only: BTreeSet<T>,
}

impl<T: Ord + Clone> RegionSets<T> {
    pub fn from_sets(a: &BTreeSet<T>, b: &BTreeSet<T>) -> Self {
        Self {
            union: a.union(b).cloned().collect(),
            intersection: a.intersection(b).cloned().collect(),
            a_only: a.difference(b).cloned().collect(),
            b_only: b.difference(a).cloned().collect(),
        }
    }
}

impl<T: Ord> RegionSets<T> {
    /// Element counts per region, the only numeric drivers of the geometry.
    pub fn counts(&self) -> RegionCounts {
        RegionCounts {
            union: self.union.len(),
            intersection: self.intersection.len(),
            a_only: self.a_only.len(),
            b_only: self.b_only.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionCounts {
    pub union: usize,
    pub intersection: usize,
    pub a_only: usize,
    pub b_only: usize,
}
