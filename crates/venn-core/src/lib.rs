//! # venn-core
//!
//! Core types and primitives for the Venn layout engine.
//! This crate contains the foundational types shared across all Venn crates:
//! points and sizes, density tiers, the calibration config, content hashing,
//! and error types.

pub mod config;
pub mod error;
pub mod hash;
pub mod math;
pub mod types;

pub use config::{LayoutConfig, SolverConfig, TierThreshold};
pub use error::{VennError, VennResult};
pub use hash::ContentHash;
pub use math::{Point2D, Size2D};
pub use types::{Tier, TierParams};
