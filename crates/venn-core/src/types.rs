use serde::{Deserialize, Serialize};

/// Visual density bucket, chosen from the size of the union of both sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Plenty of room: large circles and labels.
    Comfortable,
    Moderate,
    Tight,
    VeryTight,
    /// Beyond the calibrated range; labels will be small.
    Warning,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Comfortable => "comfortable",
            Tier::Moderate => "moderate",
            Tier::Tight => "tight",
            Tier::VeryTight => "very_tight",
            Tier::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base sizing constants carried by a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierParams {
    /// Radius of both Venn circles, in scene units.
    pub radius: f64,
    /// Label font size, in points.
    pub font_size: u32,
    /// Gap between neighbouring labels, in scene units.
    pub padding: f64,
}

impl TierParams {
    pub const fn new(radius: f64, font_size: u32, padding: f64) -> Self {
        Self {
            radius,
            font_size,
            padding,
        }
    }
}
