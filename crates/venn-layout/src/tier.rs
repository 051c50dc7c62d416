use venn_core::{Tier, TierParams, TierThreshold};

/// Pick the first tier whose bound admits `union_size`.
///
/// Falls back to the last row when a custom table has no catch-all, and to
/// the built-in catch-all when the table is empty.
pub fn select_tier(tiers: &[TierThreshold], union_size: usize) -> (Tier, TierParams) {
    let row = tiers
        .iter()
        .find(|row| row.admits(union_size))
        .or_else(|| tiers.last())
        .unwrap_or(&TierThreshold::CATCH_ALL);
    (row.tier, row.params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use venn_core::LayoutConfig;

    fn tier_of(n: usize) -> Tier {
        select_tier(&LayoutConfig::default().tiers, n).0
    }

    #[test]
    fn test_thresholds_inclusive() {
        assert_eq!(tier_of(0), Tier::Comfortable);
        assert_eq!(tier_of(15), Tier::Comfortable);
        assert_eq!(tier_of(16), Tier::Moderate);
        assert_eq!(tier_of(25), Tier::Moderate);
        assert_eq!(tier_of(26), Tier::Tight);
        assert_eq!(tier_of(40), Tier::Tight);
        assert_eq!(tier_of(41), Tier::VeryTight);
        assert_eq!(tier_of(60), Tier::VeryTight);
        assert_eq!(tier_of(61), Tier::Warning);
        assert_eq!(tier_of(100_000), Tier::Warning);
    }

    #[test]
    fn test_params_non_increasing() {
        let tiers = LayoutConfig::default().tiers;
        let mut prev = select_tier(&tiers, 0).1;
        for n in 1..200 {
            let params = select_tier(&tiers, n).1;
            assert!(params.radius <= prev.radius);
            assert!(params.font_size <= prev.font_size);
            assert!(params.padding <= prev.padding);
            prev = params;
        }
    }

    #[test]
    fn test_table_without_catch_all_uses_last_row() {
        let tiers = vec![
            TierThreshold::new(Tier::Comfortable, Some(5), TierParams::new(2.0, 30, 0.3)),
            TierThreshold::new(Tier::Tight, Some(10), TierParams::new(1.5, 24, 0.2)),
        ];
        assert_eq!(select_tier(&tiers, 50).0, Tier::Tight);
    }

    #[test]
    fn test_empty_table_falls_back() {
        let (tier, params) = select_tier(&[], 3);
        let defaults = LayoutConfig::default().tiers;
        let last = defaults.last().unwrap();
        assert_eq!(tier, last.tier);
        assert_eq!(params, last.params);
    }
}
