//! Parallel layout of many independent set pairs.

use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::calculator::{Layout, VennCalculator};

/// Compute one layout per pair on the rayon pool. Output order matches input order.
pub fn compute_layouts<T>(
    calculator: &VennCalculator,
    pairs: &[(BTreeSet<T>, BTreeSet<T>)],
) -> Vec<Layout>
where
    T: Ord + Clone + Sync,
{
    pairs
        .par_iter()
        .map(|(a, b)| calculator.compute_layout(a, b))
        .collect()
}
