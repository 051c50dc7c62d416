//! Closed-form geometry of the lens formed by two equal circles.
//!
//! The lens functions take the common radius `r` and the distance `d` between
//! the circle centres. Lens area is strictly decreasing in `d` over
//! `[0, 2r]`, which the separation solver relies on.

use std::f64::consts::PI;

use venn_core::Size2D;

/// Area of a full circle of radius `r`.
pub fn circle_area(r: f64) -> f64 {
    PI * r * r
}

/// Radius of the circle with the given area.
pub fn radius_for_area(area: f64) -> f64 {
    (area.max(0.0) / PI).sqrt()
}

/// Area of the lens shared by two circles of radius `r` whose centres are `d` apart.
///
/// `A = 2r²·acos(d/2r) − (d/2)·√(4r² − d²)`, clamped at zero.
pub fn lens_area(r: f64, d: f64) -> f64 {
    if d >= 2.0 * r {
        return 0.0;
    }
    if d <= 0.0 {
        return circle_area(r);
    }
    let sector = 2.0 * r * r * (d / (2.0 * r)).acos();
    let triangle = (d / 2.0) * (4.0 * r * r - d * d).sqrt();
    (sector - triangle).max(0.0)
}

/// Bounding extent of the lens: `width` along the centre line, `height` across it.
pub fn lens_dimensions(r: f64, d: f64) -> Size2D {
    if d >= 2.0 * r {
        return Size2D::zero();
    }
    let d = d.max(0.0);
    let half = d / 2.0;
    Size2D::new(2.0 * r - d, 2.0 * (r * r - half * half).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lens_area_concentric() {
        assert!((lens_area(2.0, 0.0) - 4.0 * PI).abs() < 1e-12);
        assert!((lens_area(2.0, -1.0) - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_lens_area_disjoint() {
        assert_eq!(lens_area(2.0, 4.0), 0.0);
        assert_eq!(lens_area(2.0, 10.0), 0.0);
    }

    #[test]
    fn test_lens_area_at_radius() {
        // d = r: area = (2π/3 − √3/2)·r²
        let r = 1.5;
        let expected = (2.0 * PI / 3.0 - 3f64.sqrt() / 2.0) * r * r;
        assert!((lens_area(r, r) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lens_area_near_tangent_not_negative() {
        let r = 1.8;
        assert!(lens_area(r, 2.0 * r - 1e-12) >= 0.0);
    }

    #[test]
    fn test_lens_dimensions() {
        let size = lens_dimensions(2.0, 2.0);
        assert!((size.width - 2.0).abs() < 1e-12);
        assert!((size.height - 2.0 * 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_lens_dimensions_full_overlap() {
        let size = lens_dimensions(1.0, 0.0);
        assert_eq!(size, Size2D::new(2.0, 2.0));
    }

    #[test]
    fn test_lens_dimensions_disjoint() {
        assert!(lens_dimensions(1.0, 2.0).is_empty());
        assert!(lens_dimensions(1.0, 3.0).is_empty());
    }

    #[test]
    fn test_radius_for_area_inverts_circle_area() {
        let r = 0.73;
        assert!((radius_for_area(circle_area(r)) - r).abs() < 1e-12);
        assert_eq!(radius_for_area(-1.0), 0.0);
    }
}
