//! Per-region sizing.
//!
//! The lens and the crescents are sized by separate functions that share
//! nothing but the tier's base constants. A crescent shrink never touches the
//! lens font or area, and the lens never influences crescent sizing.

use serde::{Deserialize, Serialize};
use venn_core::{LayoutConfig, TierParams};

use crate::geometry::{circle_area, lens_area, lens_dimensions, radius_for_area};
use crate::solver::{solve_separation, SolveOutcome};
use crate::warning::LayoutWarning;

/// Sizing of the intersection lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensParams {
    pub font_size: u32,
    pub element_size: f64,
    pub padding: f64,
    /// Area the labels need, including packing loss and safety margin.
    pub required_area: f64,
    /// Area actually produced by `separation`.
    pub area: f64,
    pub width: f64,
    pub height: f64,
    /// Distance between the two circle centres.
    pub separation: f64,
    pub solve_outcome: SolveOutcome,
    pub solve_iterations: u32,
}

/// Sizing shared by both crescents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrescentParams {
    pub font_size: u32,
    pub element_size: f64,
    pub padding: f64,
    pub a_only_radius: f64,
    pub b_only_radius: f64,
    /// Ratio applied to the base font and padding; `1.0` when no shrink happened.
    pub scale: f64,
}

impl CrescentParams {
    pub fn max_radius(&self) -> f64 {
        self.a_only_radius.max(self.b_only_radius)
    }
}

fn footprint(element_size: f64, padding: f64) -> f64 {
    let side = element_size + padding;
    side * side
}

/// Size the lens for `intersection_size` labels and solve the circle separation.
pub fn size_lens(
    intersection_size: usize,
    base: &TierParams,
    config: &LayoutConfig,
) -> (LensParams, Vec<LayoutWarning>) {
    let mut warnings = Vec::new();
    let element_size = config.element_size(base.font_size);

    let required_area = if intersection_size > 0 {
        intersection_size as f64 * footprint(element_size, base.padding)
            / config.packing_efficiency
            * config.lens_safety_margin
    } else {
        config.lens_floor_area
    };

    let solve = solve_separation(base.radius, required_area, &config.solver);
    match solve.outcome {
        SolveOutcome::Converged => {}
        SolveOutcome::Unreachable => {
            let max_area = circle_area(base.radius) * config.solver.max_overlap_fraction;
            tracing::warn!(
                "lens needs {:.3} but at most {:.3} is reachable",
                required_area,
                max_area
            );
            warnings.push(LayoutWarning::UnreachableLensArea {
                required: required_area,
                max_area,
            });
        }
        SolveOutcome::BudgetExhausted => {
            let residual = solve.residual(required_area);
            tracing::warn!(
                "separation search exhausted {} iterations, residual {:.4}",
                solve.iterations,
                residual
            );
            warnings.push(LayoutWarning::SolverBudgetExhausted {
                iterations: solve.iterations,
                residual,
            });
        }
    }

    let area = lens_area(base.radius, solve.distance);
    let size = lens_dimensions(base.radius, solve.distance);

    tracing::debug!(
        "lens: n={} required={:.3} area={:.3} d={:.3} ({:.3} x {:.3})",
        intersection_size,
        required_area,
        area,
        solve.distance,
        size.width,
        size.height
    );

    let params = LensParams {
        font_size: base.font_size,
        element_size,
        padding: base.padding,
        required_area,
        area,
        width: size.width,
        height: size.height,
        separation: solve.distance,
        solve_outcome: solve.outcome,
        solve_iterations: solve.iterations,
    };
    (params, warnings)
}

fn crescent_radius(count: usize, footprint: f64, config: &LayoutConfig) -> f64 {
    if count == 0 {
        return config.crescent_floor_radius;
    }
    radius_for_area(count as f64 * footprint / config.packing_efficiency)
}

/// Size both crescents, shrinking their labels if either would outgrow its circle.
pub fn size_crescents(
    a_only_size: usize,
    b_only_size: usize,
    base: &TierParams,
    config: &LayoutConfig,
) -> (CrescentParams, Vec<LayoutWarning>) {
    let mut warnings = Vec::new();
    let limit = base.radius * config.crescent_max_fraction;

    let mut font_size = base.font_size;
    let mut padding = base.padding;
    let mut element_size = config.element_size(font_size);
    let mut fp = footprint(element_size, padding);
    let mut r_a = crescent_radius(a_only_size, fp, config);
    let mut r_b = crescent_radius(b_only_size, fp, config);
    let mut scale = 1.0;

    if r_a.max(r_b) > limit {
        scale = limit / r_a.max(r_b) * config.crescent_shrink_headroom;
        let scaled_font = (base.font_size as f64 * scale).floor() as u32;
        font_size = scaled_font.max(config.min_font_size).min(base.font_size);
        padding = base.padding * scale;
        element_size = config.element_size(font_size);
        fp = footprint(element_size, padding);
        r_a = crescent_radius(a_only_size, fp, config);
        r_b = crescent_radius(b_only_size, fp, config);

        tracing::warn!(
            "crescent labels shrunk from {}pt to {}pt (scale {:.3})",
            base.font_size,
            font_size,
            scale
        );
        warnings.push(LayoutWarning::CrescentShrunk {
            from_font: base.font_size,
            to_font: font_size,
        });

        if r_a.max(r_b) > limit {
            tracing::warn!(
                "crescent radius {:.3} still exceeds {:.3} after shrinking",
                r_a.max(r_b),
                limit
            );
            warnings.push(LayoutWarning::CrescentOverflow {
                radius: r_a.max(r_b),
                limit,
            });
        }
    }

    tracing::debug!(
        "crescents: a={} b={} font={} r_a={:.3} r_b={:.3}",
        a_only_size,
        b_only_size,
        font_size,
        r_a,
        r_b
    );

    let params = CrescentParams {
        font_size,
        element_size,
        padding,
        a_only_radius: r_a,
        b_only_radius: r_b,
        scale,
    };
    (params, warnings)
}
