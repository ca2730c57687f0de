//! Calculator constants and magic numbers.
//!
//! All numeric thresholds and input defaults live here for easy auditing.

// ═══════════════════════════════════════════════════════════════════════════════
// VALUATION CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Seed-round valuation the venture multiplier is measured against ($80M)
pub const BASELINE_FDV: f64 = 80_000_000.0;

/// Percentage scale for ROI
pub const PERCENT: f64 = 100.0;

// ═══════════════════════════════════════════════════════════════════════════════
// FORMATTING THRESHOLDS
// ═══════════════════════════════════════════════════════════════════════════════

/// One billion, the `B` suffix threshold
pub const BILLION: f64 = 1_000_000_000.0;

/// One million, the `M` suffix threshold
pub const MILLION: f64 = 1_000_000.0;

/// One thousand, below which cents are shown
pub const THOUSAND: f64 = 1_000.0;

/// Starting precision for sub-dollar values in verbose style
pub const MIN_SUBUNIT_DECIMALS: usize = 2;

/// Precision cap for sub-dollar values in verbose style
pub const MAX_SUBUNIT_DECIMALS: usize = 6;

/// Fixed precision for sub-dollar values in compact style
pub const COMPACT_SUBUNIT_DECIMALS: usize = 4;

/// Display text for values that cannot be rendered (infinite, NaN)
pub const NOT_AVAILABLE: &str = "N/A";

// ═══════════════════════════════════════════════════════════════════════════════
// INPUT DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default accrued points
pub const DEFAULT_POINTS: f64 = 170_000.0;

/// Default average cost per point ($)
pub const DEFAULT_COST_PER_POINT: f64 = 0.19;

/// Default total token supply
pub const DEFAULT_SUPPLY: f64 = 1_000_000_000.0;

/// Default profit goal ($)
pub const DEFAULT_GOAL: f64 = 150_000.0;

/// Default FDV preset index for the primary project (`$100M — Bearish`)
pub const DEFAULT_FDV_PRESET_INDEX: usize = 1;

/// Default FDV preset index for the comparison project (`$300M — Moderate`)
pub const DEFAULT_COMPARE_FDV_PRESET_INDEX: usize = 3;

/// Minimum token supply accepted at the input boundary
pub const MIN_SUPPLY: f64 = 1.0;

/// Display label of the primary project
pub const PRIMARY_PROJECT_LABEL: &str = "Hibachi";

/// Fallback label for an unnamed comparison project
pub const DEFAULT_COMPARE_LABEL: &str = "Project B";
