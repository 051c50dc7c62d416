use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use venn_core::hash::hash_points;
use venn_core::{ContentHash, LayoutConfig, Point2D, Tier, TierParams};

use crate::packing::{pack_within, Boundary, Clearance, Disc};
use crate::region::{Region, RegionCounts, RegionSets};
use crate::sizer::{size_crescents, size_lens, CrescentParams, LensParams};
use crate::tier::select_tier;
use crate::warning::LayoutWarning;

/// Geometric plan for one pair of sets. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub counts: RegionCounts,
    pub tier: Tier,
    pub base: TierParams,
    pub circle_radius: f64,
    pub circle_separation: f64,
    pub circle_a_center: Point2D,
    pub circle_b_center: Point2D,
    pub lens: LensParams,
    pub crescents: CrescentParams,
    /// Offset of each crescent packing centre from its circle centre.
    ///
    /// At least the configured fraction of the radius, and never less than
    /// the distance to the middle of the crescent along the centre line.
    pub crescent_center_offset: f64,
    pub warnings: Vec<LayoutWarning>,
}

impl Layout {
    /// Packing centre of `region`.
    pub fn region_center(&self, region: Region) -> Point2D {
        match region {
            Region::AOnly => self.circle_a_center.offset(-self.crescent_center_offset, 0.0),
            Region::Intersection => self.circle_a_center.midpoint(&self.circle_b_center),
            Region::BOnly => self.circle_b_center.offset(self.crescent_center_offset, 0.0),
        }
    }

    /// Packing boundary of `region`, relative to its centre.
    pub fn region_boundary(&self, region: Region) -> Boundary {
        match region {
            Region::AOnly => Boundary::Circle {
                radius: self.crescents.a_only_radius,
            },
            Region::Intersection => Boundary::Lens {
                width: self.lens.width,
                height: self.lens.height,
            },
            Region::BOnly => Boundary::Circle {
                radius: self.crescents.b_only_radius,
            },
        }
    }

    /// `(element_size, padding)` used when packing `region`.
    pub fn region_spacing(&self, region: Region) -> (f64, f64) {
        match region {
            Region::Intersection => (self.lens.element_size, self.lens.padding),
            Region::AOnly | Region::BOnly => {
                (self.crescents.element_size, self.crescents.padding)
            }
        }
    }

    /// Circle constraints for `region`: inside its own circle(s) and clear
    /// of the other one.
    pub fn region_clearance(&self, region: Region) -> Clearance {
        let a = Disc::new(self.circle_a_center, self.circle_radius);
        let b = Disc::new(self.circle_b_center, self.circle_radius);
        let (within, outside) = match region {
            Region::AOnly => (vec![a], vec![b]),
            Region::Intersection => (vec![a, b], Vec::new()),
            Region::BOnly => (vec![b], vec![a]),
        };
        Clearance { within, outside }
    }

    /// Minimum distance between labels of different regions.
    pub fn label_clearance(&self) -> f64 {
        let (lens_size, lens_padding) = self.region_spacing(Region::Intersection);
        let (crescent_size, crescent_padding) = self.region_spacing(Region::AOnly);
        (lens_size + lens_padding + crescent_size + crescent_padding) / 2.0
    }

    /// Label font size for `region`.
    pub fn region_font_size(&self, region: Region) -> u32 {
        match region {
            Region::Intersection => self.lens.font_size,
            Region::AOnly | Region::BOnly => self.crescents.font_size,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Where one element was placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub point: Point2D,
    pub region: Region,
    /// Placed at the region centre because the lattice ran out of slots.
    pub fallback: bool,
}

/// Element → placement, ordered by element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionMap<T: Ord> {
    placements: BTreeMap<T, Placement>,
    pub warnings: Vec<LayoutWarning>,
}

impl<T: Ord> PositionMap<T> {
    pub fn get(&self, elem: &T) -> Option<&Placement> {
        self.placements.get(elem)
    }

    pub fn point(&self, elem: &T) -> Option<Point2D> {
        self.placements.get(elem).map(|p| p.point)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &Placement)> {
        self.placements.iter()
    }

    pub fn region_count(&self, region: Region) -> usize {
        self.placements
            .values()
            .filter(|p| p.region == region)
            .count()
    }

    pub fn fallback_count(&self) -> usize {
        self.placements.values().filter(|p| p.fallback).count()
    }

    /// SHA-256 over the placed coordinates in element order.
    pub fn content_hash(&self) -> ContentHash {
        hash_points(self.placements.values().map(|p| &p.point))
    }
}

const PACK_ORDER: [Region; 3] = [Region::Intersection, Region::AOnly, Region::BOnly];

/// Venn layout calculator bound to one calibration.
#[derive(Debug, Clone, Default)]
pub struct VennCalculator {
    config: LayoutConfig,
}

impl VennCalculator {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Size the circles, lens and crescents for the pair `(a, b)`.
    pub fn compute_layout<T: Ord + Clone>(&self, a: &BTreeSet<T>, b: &BTreeSet<T>) -> Layout {
        let counts = RegionSets::from_sets(a, b).counts();
        let (tier, base) = select_tier(&self.config.tiers, counts.union);

        tracing::debug!(
            "venn layout: union={} intersection={} a_only={} b_only={} tier={}",
            counts.union,
            counts.intersection,
            counts.a_only,
            counts.b_only,
            tier
        );

        // Sized independently: neither call sees the other's output.
        let (lens, lens_warnings) = size_lens(counts.intersection, &base, &self.config);
        let (crescents, crescent_warnings) =
            size_crescents(counts.a_only, counts.b_only, &base, &self.config);

        let mut warnings = lens_warnings;
        warnings.extend(crescent_warnings);
        if lens.font_size != crescents.font_size {
            warnings.push(LayoutWarning::FontMismatch {
                lens: lens.font_size,
                crescent: crescents.font_size,
            });
        }

        let half = lens.separation / 2.0;
        let crescent_center_offset =
            (base.radius * self.config.crescent_center_offset).max(base.radius - half);
        Layout {
            counts,
            tier,
            base,
            circle_radius: base.radius,
            circle_separation: lens.separation,
            circle_a_center: Point2D::new(-half, 0.0),
            circle_b_center: Point2D::new(half, 0.0),
            crescent_center_offset,
            lens,
            crescents,
            warnings,
        }
    }

    /// Place `elements` (in caller order within each region) according to `layout`.
    ///
    /// The lens is packed first, then each crescent, and every region keeps
    /// [`Layout::label_clearance`] away from labels already placed. Elements
    /// in neither set are skipped and reported as a warning.
    pub fn pack_elements<T: Ord + Clone>(
        &self,
        elements: &[T],
        a: &BTreeSet<T>,
        b: &BTreeSet<T>,
        layout: &Layout,
    ) -> PositionMap<T> {
        let mut by_region: BTreeMap<Region, Vec<T>> = BTreeMap::new();
        let mut unclassified = 0;
        let mut seen = BTreeSet::new();
        for elem in elements {
            if !seen.insert(elem) {
                continue;
            }
            match Region::classify(elem, a, b) {
                Some(region) => by_region.entry(region).or_default().push(elem.clone()),
                None => unclassified += 1,
            }
        }

        let mut placements = BTreeMap::new();
        let mut warnings = Vec::new();
        let gap = layout.label_clearance();
        let mut occupied: Vec<Point2D> = Vec::new();
        for region in PACK_ORDER {
            let Some(members) = by_region.remove(&region) else {
                continue;
            };
            let (element_size, padding) = layout.region_spacing(region);
            let mut clearance = layout.region_clearance(region);
            clearance
                .outside
                .extend(occupied.iter().map(|p| Disc::new(*p, gap)));
            let packed = pack_within(
                &members,
                layout.region_center(region),
                &layout.region_boundary(region),
                &clearance,
                element_size,
                padding,
            );
            let overflow = packed.overflow();
            if overflow > 0 {
                tracing::warn!(
                    "{} region: {} of {} element(s) fell back to the centre",
                    region,
                    overflow,
                    members.len()
                );
                warnings.push(LayoutWarning::PackingExhausted {
                    region,
                    capacity: packed.capacity,
                    overflow,
                });
            }
            for (elem, point, fallback) in packed.placements {
                if !fallback {
                    occupied.push(point);
                }
                placements.insert(
                    elem,
                    Placement {
                        point,
                        region,
                        fallback,
                    },
                );
            }
        }

        if unclassified > 0 {
            tracing::warn!("{} element(s) belong to neither set", unclassified);
            warnings.push(LayoutWarning::UnclassifiedElement {
                count: unclassified,
            });
        }

        PositionMap {
            placements,
            warnings,
        }
    }
}

/// [`VennCalculator::compute_layout`] with the default calibration.
pub fn compute_layout<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> Layout {
    VennCalculator::default().compute_layout(a, b)
}

/// [`VennCalculator::pack_elements`] with the default calibration.
pub fn pack_elements<T: Ord + Clone>(
    elements: &[T],
    a: &BTreeSet<T>,
    b: &BTreeSet<T>,
    layout: &Layout,
) -> PositionMap<T> {
    VennCalculator::default().pack_elements(elements, a, b, layout)
}
