use std::collections::BTreeSet;
use std::f64::consts::PI;

use proptest::prelude::*;
use venn_core::{Point2D, SolverConfig};
use venn_layout::{
    compute_layout, hex_candidates, lens_area, lens_dimensions, pack, pack_elements,
    solve_separation, Boundary, SolveOutcome,
};

fn boundary_strategy() -> impl Strategy<Value = Boundary> {
    prop_oneof![
        (0.3f64..3.0).prop_map(|radius| Boundary::Circle { radius }),
        (0.3f64..3.0, 0.3f64..4.0).prop_map(|(width, height)| Boundary::Lens { width, height }),
    ]
}

proptest! {
    #[test]
    fn lens_area_boundary_conditions(r in 0.01f64..100.0) {
        prop_assert!((lens_area(r, 0.0) - PI * r * r).abs() <= 1e-9 * r * r);
        prop_assert_eq!(lens_area(r, 2.0 * r), 0.0);
        prop_assert!(lens_dimensions(r, 2.0 * r).is_empty());
    }

    #[test]
    fn lens_area_monotone_in_separation(
        r in 0.1f64..10.0,
        t1 in 0.0f64..1.0,
        t2 in 0.0f64..1.0,
    ) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let (d1, d2) = (lo * 2.0 * r, hi * 2.0 * r);
        prop_assert!(lens_area(r, d1) + 1e-9 >= lens_area(r, d2));
    }

    #[test]
    fn lens_dimensions_shrink_with_separation(r in 0.1f64..10.0, t in 0.0f64..0.999) {
        let size = lens_dimensions(r, t * 2.0 * r);
        prop_assert!(size.width > 0.0 && size.width <= 2.0 * r);
        prop_assert!(size.height > 0.0 && size.height <= 2.0 * r + 1e-12);
    }

    #[test]
    fn solver_round_trip(r in 0.5f64..5.0, t in 0.05f64..0.995) {
        let config = SolverConfig::default();
        let d0 = t * 2.0 * r;
        let target = lens_area(r, d0);
        prop_assume!(target <= PI * r * r * config.max_overlap_fraction);

        let solve = solve_separation(r, target, &config);
        prop_assert_eq!(solve.outcome, SolveOutcome::Converged);
        prop_assert!((lens_area(r, solve.distance) - target).abs() < config.tolerance);
        prop_assert!(solve.distance >= 0.0 && solve.distance <= 2.0 * r);
    }

    #[test]
    fn packing_is_complete_contained_and_spaced(
        boundary in boundary_strategy(),
        element_size in 0.1f64..0.5,
        padding in 0.05f64..0.4,
        requested in 1usize..80,
    ) {
        let center = Point2D::new(0.7, -0.3);
        let spacing = element_size + padding;
        let capacity = hex_candidates(center, &boundary, spacing).len();
        let count = requested.min(capacity);
        let elements: Vec<usize> = (0..count).collect();

        let packed = pack(&elements, center, &boundary, element_size, padding);
        prop_assert_eq!(packed.overflow(), 0);
        prop_assert_eq!(packed.placements.len(), count);

        for (_, p, _) in &packed.placements {
            let (dx, dy) = (p.x - center.x, p.y - center.y);
            prop_assert!(boundary.contains(dx * (1.0 - 1e-9), dy * (1.0 - 1e-9)));
        }
        for (i, (_, p, _)) in packed.placements.iter().enumerate() {
            for (_, q, _) in &packed.placements[i + 1..] {
                prop_assert!(p.distance(q) >= spacing - 1e-9);
            }
        }
    }

    #[test]
    fn layout_and_packing_are_deterministic(
        a in proptest::collection::btree_set(0u16..120, 0..50),
        b in proptest::collection::btree_set(0u16..120, 0..50),
    ) {
        let first = compute_layout(&a, &b);
        let second = compute_layout(&a, &b);
        prop_assert_eq!(&first, &second);

        let elements: Vec<u16> = a.union(&b).cloned().collect();
        let m1 = pack_elements(&elements, &a, &b, &first);
        let m2 = pack_elements(&elements, &a, &b, &second);
        prop_assert_eq!(m1.content_hash(), m2.content_hash());
        prop_assert_eq!(m1.len(), elements.len());
    }

    #[test]
    fn every_layout_is_usable(
        a in proptest::collection::btree_set(0u32..400, 0..200),
        b in proptest::collection::btree_set(0u32..400, 0..200),
    ) {
        let layout = compute_layout(&a, &b);
        prop_assert!(layout.circle_radius > 0.0);
        prop_assert!(layout.circle_separation >= 0.0);
        prop_assert!(layout.circle_separation < 2.0 * layout.circle_radius);
        prop_assert!(layout.lens.area > 0.0);
        prop_assert!(layout.crescents.a_only_radius > 0.0);
        prop_assert!(layout.crescents.b_only_radius > 0.0);
        prop_assert!(layout.crescents.font_size > 0);
        let union: BTreeSet<u32> = a.union(&b).cloned().collect();
        prop_assert_eq!(layout.counts.union, union.len());
    }
}
