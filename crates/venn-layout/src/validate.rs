use serde::Serialize;

use crate::calculator::{Layout, PositionMap};
use crate::region::Region;

/// Two placements closer than the requested minimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collision<T> {
    pub first: T,
    pub second: T,
    pub distance: f64,
}

/// A placement outside its region's packing boundary or circles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Escape<T> {
    pub element: T,
    pub region: Region,
}

/// Every pair of lattice placements closer than `min_distance`.
///
/// Centre fallbacks are excluded; they are already reported as packing
/// exhaustion.
pub fn find_collisions<T: Ord + Clone>(
    map: &PositionMap<T>,
    min_distance: f64,
) -> Vec<Collision<T>> {
    let placed: Vec<_> = map.iter().filter(|(_, p)| !p.fallback).collect();
    let mut collisions = Vec::new();
    for (i, (ea, pa)) in placed.iter().enumerate() {
        for (eb, pb) in &placed[i + 1..] {
            let distance = pa.point.distance(&pb.point);
            if distance < min_distance {
                collisions.push(Collision {
                    first: (*ea).clone(),
                    second: (*eb).clone(),
                    distance,
                });
            }
        }
    }
    collisions
}

/// Every lattice placement that lies outside its region boundary, or on the
/// wrong side of a circle for its region.
pub fn check_containment<T: Ord + Clone>(map: &PositionMap<T>, layout: &Layout) -> Vec<Escape<T>> {
    // Lattice points are built as centre + offset; allow for that rounding.
    const SLACK: f64 = 1e-9;
    map.iter()
        .filter(|(_, p)| !p.fallback)
        .filter(|(_, p)| {
            let c = layout.region_center(p.region);
            let (dx, dy) = (p.point.x - c.x, p.point.y - c.y);
            let shrink = 1.0 - SLACK;
            !layout.region_boundary(p.region).contains(dx * shrink, dy * shrink)
                || !layout.region_clearance(p.region).admits(&p.point)
        })
        .map(|(e, p)| Escape {
            element: e.clone(),
            region: p.region,
        })
        .collect()
}
