//! Bisection search for the circle separation that yields a target lens area.

use serde::{Deserialize, Serialize};
use venn_core::SolverConfig;

use crate::geometry::{circle_area, lens_area};

/// How a separation search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveOutcome {
    /// Area within tolerance of the target.
    Converged,
    /// Ran out of iterations; the last midpoint is a best estimate.
    BudgetExhausted,
    /// Target larger than any practical overlap; circles fully overlapped.
    Unreachable,
}

/// Result of [`solve_separation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationSolve {
    /// Distance between the circle centres.
    pub distance: f64,
    /// Lens area at `distance`.
    pub achieved_area: f64,
    pub iterations: u32,
    pub outcome: SolveOutcome,
}

impl SeparationSolve {
    /// Absolute error between the achieved and requested area.
    pub fn residual(&self, required_area: f64) -> f64 {
        (self.achieved_area - required_area).abs()
    }
}

/// Find the centre distance `d ∈ [0, 2r]` whose lens area is `required_area`.
///
/// Never fails: an unreachable target yields `d = 0`, and an exhausted
/// iteration budget yields the last midpoint.
pub fn solve_separation(r: f64, required_area: f64, config: &SolverConfig) -> SeparationSolve {
    if required_area > circle_area(r) * config.max_overlap_fraction {
        return SeparationSolve {
            distance: 0.0,
            achieved_area: lens_area(r, 0.0),
            iterations: 0,
            outcome: SolveOutcome::Unreachable,
        };
    }

    let mut lo = 0.0;
    let mut hi = 2.0 * r;
    let mut mid = (lo + hi) / 2.0;
    let mut area = lens_area(r, mid);

    for i in 1..=config.max_iterations {
        mid = (lo + hi) / 2.0;
        area = lens_area(r, mid);

        if (area - required_area).abs() < config.tolerance {
            return SeparationSolve {
                distance: mid,
                achieved_area: area,
                iterations: i,
                outcome: SolveOutcome::Converged,
            };
        }

        if area > required_area {
            // Too much overlap: push the circles apart.
            lo = mid;
        } else {
            hi = mid;
        }
    }

    tracing::debug!(
        "separation search hit {} iterations (r={:.3}, target={:.4}, area={:.4})",
        config.max_iterations,
        r,
        required_area,
        area
    );

    SeparationSolve {
        distance: mid,
        achieved_area: area,
        iterations: config.max_iterations,
        outcome: SolveOutcome::BudgetExhausted,
    }
}
