//! Core valuation logic.
//!
//! - `valuation`: derived metrics and the scenario table
//! - `verdict`: outcome badge
//! - `compare`: head-to-head comparison
//! - `presets`: static FDV and comparable-protocol tables

pub mod compare;
pub mod presets;
pub mod valuation;
pub mod verdict;

pub use compare::*;
pub use presets::*;
pub use valuation::*;
pub use verdict::*;
