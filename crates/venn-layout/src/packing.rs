//! Hexagonal-lattice packing of labels into a bounded region.
//!
//! Candidates are generated on a hex grid around the region centre, filtered
//! to the boundary, ordered innermost first, then handed out to elements in
//! caller order. Elements beyond the lattice capacity land on the centre.
//! A [`Clearance`] narrows the candidates further to discs they must stay
//! inside of or clear of.

use serde::{Deserialize, Serialize};
use venn_core::Point2D;

/// Vertical row pitch of a hex lattice, relative to the horizontal spacing.
const HEX_ROW_RATIO: f64 = 0.866_025_403_784_438_6; // √3 / 2

/// Shape that candidates must fall inside, relative to the packing centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Boundary {
    Circle { radius: f64 },
    /// Axis-aligned ellipse approximating the lens.
    ///
    /// The ellipse bulges slightly past the true lens off the centre line; add
    /// both circles to the [`Clearance`] to stay inside the lens itself.
    Lens { width: f64, height: f64 },
}

impl Boundary {
    /// Whether the offset `(dx, dy)` from the centre lies inside or on the boundary.
    pub fn contains(&self, dx: f64, dy: f64) -> bool {
        match *self {
            Boundary::Circle { radius } => dx.hypot(dy) <= radius,
            Boundary::Lens { width, height } => {
                if width <= 0.0 || height <= 0.0 {
                    return false;
                }
                let nx = 2.0 * dx / width;
                let ny = 2.0 * dy / height;
                nx * nx + ny * ny <= 1.0
            }
        }
    }

    /// Half-extents of the lattice window that covers this boundary.
    fn grid_extent(&self, dx: f64, dy: f64) -> (i64, i64) {
        match *self {
            Boundary::Circle { radius } => (
                (2.0 * radius / dx) as i64 + 1,
                (2.0 * radius / dy) as i64 + 1,
            ),
            Boundary::Lens { width, height } => {
                ((width / dx) as i64 + 2, (height / dy) as i64 + 2)
            }
        }
    }
}

/// Disc in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Point2D,
    pub radius: f64,
}

impl Disc {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Inside or on the rim.
    pub fn contains(&self, p: &Point2D) -> bool {
        p.distance(&self.center) <= self.radius
    }

    /// Outside or on the rim.
    pub fn excludes(&self, p: &Point2D) -> bool {
        p.distance(&self.center) >= self.radius
    }
}

/// Extra constraints on candidates, checked after the boundary test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clearance {
    /// Discs every candidate must lie inside.
    pub within: Vec<Disc>,
    /// Discs every candidate must stay clear of.
    pub outside: Vec<Disc>,
}

impl Clearance {
    pub fn admits(&self, p: &Point2D) -> bool {
        self.within.iter().all(|d| d.contains(p)) && self.outside.iter().all(|d| d.excludes(p))
    }
}

/// Hex-lattice candidate slots inside `boundary`, sorted by distance from `center`.
///
/// Ties keep lattice generation order (row-major, bottom row first), so the
/// sequence is fully deterministic.
pub fn hex_candidates(center: Point2D, boundary: &Boundary, spacing: f64) -> Vec<Point2D> {
    hex_candidates_within(center, boundary, &Clearance::default(), spacing)
}

/// [`hex_candidates`] restricted by `clearance`.
pub fn hex_candidates_within(
    center: Point2D,
    boundary: &Boundary,
    clearance: &Clearance,
    spacing: f64,
) -> Vec<Point2D> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Vec::new();
    }
    let dx = spacing;
    let dy = spacing * HEX_ROW_RATIO;
    let (cols, rows) = boundary.grid_extent(dx, dy);

    let mut slots: Vec<(f64, Point2D)> = Vec::new();
    for row in -rows..=rows {
        let shift = if row % 2 != 0 { dx / 2.0 } else { 0.0 };
        let y = row as f64 * dy;
        for col in -cols..=cols {
            let x = col as f64 * dx + shift;
            if !boundary.contains(x, y) {
                continue;
            }
            let point = center.offset(x, y);
            if clearance.admits(&point) {
                slots.push((x.hypot(y), point));
            }
        }
    }
    slots.sort_by(|a, b| a.0.total_cmp(&b.0));
    slots.into_iter().map(|(_, p)| p).collect()
}

/// Placement of one region's elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedRegion<T> {
    /// `(element, point, fallback)` in caller order.
    pub placements: Vec<(T, Point2D, bool)>,
    /// Number of lattice slots available inside the boundary.
    pub capacity: usize,
}

impl<T> PackedRegion<T> {
    /// Elements that did not get a lattice slot.
    pub fn overflow(&self) -> usize {
        self.placements.iter().filter(|(_, _, fb)| *fb).count()
    }
}

/// Assign `elements`, in order, to the innermost free slots of `boundary`.
pub fn pack<T: Clone>(
    elements: &[T],
    center: Point2D,
    boundary: &Boundary,
    element_size: f64,
    padding: f64,
) -> PackedRegion<T> {
    pack_within(elements, center, boundary, &Clearance::default(), element_size, padding)
}

/// [`pack`] with candidates restricted by `clearance`.
pub fn pack_within<T: Clone>(
    elements: &[T],
    center: Point2D,
    boundary: &Boundary,
    clearance: &Clearance,
    element_size: f64,
    padding: f64,
) -> PackedRegion<T> {
    if elements.is_empty() {
        return PackedRegion {
            placements: Vec::new(),
            capacity: 0,
        };
    }
    let slots = hex_candidates_within(center, boundary, clearance, element_size + padding);
    let placements = elements
        .iter()
        .enumerate()
        .map(|(i, elem)| match slots.get(i) {
            Some(p) => (elem.clone(), *p, false),
            None => (elem.clone(), center, true),
        })
        .collect();
    PackedRegion {
        placements,
        capacity: slots.len(),
    }
}
