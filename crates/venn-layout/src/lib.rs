//! # venn-layout
//!
//! Spatial layout for two-set Venn diagrams: circle sizing and separation,
//! per-region label sizing, and collision-free label placement.
//!
//! The pipeline is pure and synchronous. A caller hands in two sets,
//! gets back a [`Layout`] (circles, lens and crescent sizing) and then a
//! [`PositionMap`] (one point per element). Anything that falls short of
//! the ideal is reported as a [`LayoutWarning`], never as an error.

pub mod batch;
pub mod calculator;
pub mod geometry;
pub mod packing;
pub mod region;
pub mod sizer;
pub mod solver;
pub mod tier;
pub mod validate;
pub mod warning;

pub use calculator::{compute_layout, pack_elements, Layout, Placement, PositionMap, VennCalculator};
pub use geometry::{lens_area, lens_dimensions};
pub use packing::{
    hex_candidates, hex_candidates_within, pack, pack_within, Boundary, Clearance, Disc,
    PackedRegion,
};
pub use region::{Region, RegionCounts, RegionSets};
pub use sizer::{size_crescents, size_lens, CrescentParams, LensParams};
pub use solver::{solve_separation, SeparationSolve, SolveOutcome};
pub use tier::select_tier;
pub use warning::LayoutWarning;
