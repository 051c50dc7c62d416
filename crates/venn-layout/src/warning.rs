use serde::Serialize;

use crate::region::Region;

/// A quality-degradation signal. Layout always completes; these explain where
/// the result falls short of the ideal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// The lens target exceeds the largest practical overlap.
    UnreachableLensArea { required: f64, max_area: f64 },
    /// The separation search stopped before reaching tolerance.
    SolverBudgetExhausted { iterations: u32, residual: f64 },
    /// Crescent labels were shrunk to fit inside their circles.
    CrescentShrunk { from_font: u32, to_font: u32 },
    /// Crescents still exceed their allotted radius at the minimum font.
    CrescentOverflow { radius: f64, limit: f64 },
    FontMismatch { lens: u32, crescent: u32 },
    /// More elements than lattice slots; the rest sit at the region centre.
    PackingExhausted {
        region: Region,
        capacity: usize,
        overflow: usize,
    },
    /// Elements handed to packing that belong to neither set.
    UnclassifiedElement { count: usize },
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutWarning::UnreachableLensArea { required, max_area } => write!(
                f,
                "lens area {:.3} exceeds the reachable maximum {:.3}; circles fully overlapped",
                required, max_area
            ),
            LayoutWarning::SolverBudgetExhausted {
                iterations,
                residual,
            } => write!(
                f,
                "separation search stopped after {} iterations (residual {:.4})",
                iterations, residual
            ),
            LayoutWarning::CrescentShrunk { from_font, to_font } => write!(
                f,
                "crescent font shrunk from {} to {} to fit",
                from_font, to_font
            ),
            LayoutWarning::CrescentOverflow { radius, limit } => write!(
                f,
                "crescent radius {:.3} still exceeds limit {:.3}",
                radius, limit
            ),
            LayoutWarning::FontMismatch { lens, crescent } => write!(
                f,
                "different font sizes: lens={}, crescents={}",
                lens, crescent
            ),
            LayoutWarning::PackingExhausted {
                region,
                capacity,
                overflow,
            } => write!(
                f,
                "{} region holds {} slots; {} element(s) placed at its centre",
                region, capacity, overflow
            ),
            LayoutWarning::UnclassifiedElement { count } => {
                write!(f, "{} element(s) belong to neither set and were skipped", count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_font_mismatch() {
        let w = LayoutWarning::FontMismatch {
            lens: 28,
            crescent: 23,
        };
        assert_eq!(w.to_string(), "different font sizes: lens=28, crescents=23");
    }

    #[test]
    fn test_display_packing_exhausted() {
        let w = LayoutWarning::PackingExhausted {
            region: Region::Intersection,
            capacity: 3,
            overflow: 2,
        };
        assert!(w.to_string().contains("intersection"));
        assert!(w.to_string().contains("2 element(s)"));
    }

    #[test]
    fn test_serialize_tagged() {
        let w = LayoutWarning::UnclassifiedElement { count: 1 };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["kind"], "unclassified_element");
        assert_eq!(json["count"], 1);
    }
}
