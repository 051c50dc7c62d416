use serde::{Deserialize, Serialize};

use crate::error::{VennError, VennResult};
use crate::types::{Tier, TierParams};

/// One row of the tier table. `max_union: None` is a catch-all.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TierThreshold {
    pub tier: Tier,
    #[serde(default)]
    pub max_union: Option<usize>,
    pub params: TierParams,
}

impl TierThreshold {
    /// Last row of the built-in table: any union size, smallest labels.
    pub const CATCH_ALL: TierThreshold = TierThreshold {
        tier: Tier::Warning,
        max_union: None,
        params: TierParams::new(1.2, 20, 0.15),
    };

    pub fn new(tier: Tier, max_union: Option<usize>, params: TierParams) -> Self {
        Self {
            tier,
            max_union,
            params,
        }
    }

    /// Whether a union of `union_size` elements falls in this row.
    pub fn admits(&self, union_size: usize) -> bool {
        self.max_union.map_or(true, |max| union_size <= max)
    }
}

fn default_tiers() -> Vec<TierThreshold> {
    vec![
        TierThreshold::new(Tier::Comfortable, Some(15), TierParams::new(2.2, 38, 0.35)),
        TierThreshold::new(Tier::Moderate, Some(25), TierParams::new(2.0, 32, 0.28)),
        TierThreshold::new(Tier::Tight, Some(40), TierParams::new(1.8, 28, 0.22)),
        TierThreshold::new(Tier::VeryTight, Some(60), TierParams::new(1.5, 24, 0.18)),
        TierThreshold::CATCH_ALL,
    ]
}

/// Bisection settings for the lens separation solver.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Absolute lens-area tolerance at which the search stops.
    pub tolerance: f64,
    pub max_iterations: u32,
    /// Fraction of `πR²` above which a lens target counts as unreachable.
    pub max_overlap_fraction: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.005,
            max_iterations: 100,
            max_overlap_fraction: 0.95,
        }
    }
}

/// Calibration for the layout engine.
///
/// The font and packing constants are tuned to one renderer's text metrics;
/// a different text stack should recalibrate them here rather than in code.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Share of a region's area usable by hexagonally packed labels.
    pub packing_efficiency: f64,
    /// Font points per scene unit.
    pub font_to_unit: f64,
    /// Multiplier applied to the required lens area.
    pub lens_safety_margin: f64,
    /// Lens area requested when the intersection is empty.
    pub lens_floor_area: f64,
    /// Radius assigned to an empty crescent.
    pub crescent_floor_radius: f64,
    /// Largest crescent radius, as a fraction of the circle radius, before shrinking.
    pub crescent_max_fraction: f64,
    /// Extra shrink applied on top of the exact fit ratio.
    pub crescent_shrink_headroom: f64,
    /// Crescent font never shrinks below this size.
    pub min_font_size: u32,
    /// Outward displacement of crescent packing centres, as a fraction of the radius.
    pub crescent_center_offset: f64,
    pub solver: SolverConfig,
    pub tiers: Vec<TierThreshold>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            packing_efficiency: 0.75,
            font_to_unit: 95.0,
            lens_safety_margin: 1.15,
            lens_floor_area: 0.1,
            crescent_floor_radius: 0.1,
            crescent_max_fraction: 0.65,
            crescent_shrink_headroom: 0.9,
            min_font_size: 8,
            crescent_center_offset: 0.35,
            solver: SolverConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl LayoutConfig {
    pub fn from_toml_str(contents: &str) -> VennResult<Self> {
        let config: LayoutConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &std::path::Path) -> VennResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| VennError::config_file(e.to_string(), path))?;
        Self::from_toml_str(&contents)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> VennResult<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Physical size of a label rendered at `font_size`.
    pub fn element_size(&self, font_size: u32) -> f64 {
        font_size as f64 / self.font_to_unit
    }

    /// Check that every constant is usable and the tier table is ordered.
    pub fn validate(&self) -> VennResult<()> {
        let positive = [
            ("packing_efficiency", self.packing_efficiency),
            ("font_to_unit", self.font_to_unit),
            ("lens_safety_margin", self.lens_safety_margin),
            ("lens_floor_area", self.lens_floor_area),
            ("crescent_floor_radius", self.crescent_floor_radius),
            ("crescent_max_fraction", self.crescent_max_fraction),
            ("crescent_shrink_headroom", self.crescent_shrink_headroom),
            ("solver.tolerance", self.solver.tolerance),
            ("solver.max_overlap_fraction", self.solver.max_overlap_fraction),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(VennError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.packing_efficiency > 1.0 {
            return Err(VennError::InvalidConfig(
                "packing_efficiency must be in (0, 1]".into(),
            ));
        }
        if self.crescent_shrink_headroom > 1.0 || self.solver.max_overlap_fraction > 1.0 {
            return Err(VennError::InvalidConfig(
                "crescent_shrink_headroom and solver.max_overlap_fraction must not exceed 1".into(),
            ));
        }
        if self.crescent_center_offset < 0.0 {
            return Err(VennError::InvalidConfig(
                "crescent_center_offset must not be negative".into(),
            ));
        }
        if self.solver.max_iterations == 0 {
            return Err(VennError::InvalidConfig(
                "solver.max_iterations must be at least 1".into(),
            ));
        }
        if self.min_font_size == 0 {
            return Err(VennError::InvalidConfig(
                "min_font_size must be at least 1".into(),
            ));
        }
        self.validate_tiers()
    }

    fn validate_tiers(&self) -> VennResult<()> {
        if self.tiers.is_empty() {
            return Err(VennError::InvalidConfig("tier table is empty".into()));
        }
        for (i, row) in self.tiers.iter().enumerate() {
            let p = &row.params;
            if !(p.radius > 0.0 && p.padding >= 0.0 && p.font_size > 0) {
                return Err(VennError::InvalidConfig(format!(
                    "tier '{}' has non-positive sizing",
                    row.tier
                )));
            }
            if row.max_union.is_none() && i + 1 != self.tiers.len() {
                return Err(VennError::InvalidConfig(format!(
                    "catch-all tier '{}' must be last",
                    row.tier
                )));
            }
        }
        for pair in self.tiers.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if let (Some(a), Some(b)) = (prev.max_union, next.max_union) {
                if b <= a {
                    return Err(VennError::InvalidConfig(format!(
                        "tier thresholds must increase: '{}' ({}) then '{}' ({})",
                        prev.tier, a, next.tier, b
                    )));
                }
            }
            let (p, n) = (&prev.params, &next.params);
            if n.radius > p.radius || n.font_size > p.font_size || n.padding > p.padding {
                return Err(VennError::InvalidConfig(format!(
                    "tier '{}' is larger than the sparser tier '{}'",
                    next.tier, prev.tier
                )));
            }
        }
        Ok(())
    }
}
