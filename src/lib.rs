//! # Reality Check
//!
//! Airdrop math for points programs: given accrued points, the average cost
//! per point, the total token supply and an FDV scenario, compute what the
//! position is actually worth.
//!
//! ## Architecture
//!
//! - **Core**: valuation engine, verdict badge, head-to-head comparison and
//!   the static FDV preset tables
//! - **Display**: abbreviated currency formatting, share card and report rows
//! - **CLI**: configuration, commands and output rendering
//!
//! Every computation is a pure function of its inputs; nothing is cached or
//! persisted between evaluations.
//!
//! ## Example
//!
//! ```rust
//! use reality_check::prelude::*;
//!
//! let result = evaluate(170_000.0, 0.19, 1e9, 1e9, 150_000.0)?;
//! assert_eq!(fmt(result.net_profit), "$137,700");
//! assert_eq!(Verdict::classify(170_000.0, result.net_profit, 150_000.0), Verdict::Profit);
//! # Ok::<(), reality_check::error::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    unused_lifetimes,
    unused_qualifications
)]

pub mod cli;
pub mod core;
pub mod display;
pub mod error;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        compare::{compare, Comparison, ComparisonState, Winner},
        presets::{find_preset, ComparableProtocol, FdvPreset, COMPARABLE_PROTOCOLS, FDV_PRESETS},
        valuation::{evaluate, scenario_table, ProjectInputs, ScenarioRow, ValuationResult},
        verdict::{Tier, Verdict},
    };
    pub use crate::display::{
        card::ShareCard,
        currency::{fmt, fmt_card, format_usd, FormatStyle},
        report::{CheckInputs, Report},
        Tone,
    };
    pub use crate::error::{Error, Result};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Reality Check";
