//! Utility modules for the calculator.
//!
//! This module contains shared utilities:
//! - Constants
//! - Validation helpers

pub mod constants;
pub mod validation;

pub use constants::*;
pub use validation::*;
