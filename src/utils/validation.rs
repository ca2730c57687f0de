//! Input validation utilities.
//!
//! The valuation engine only accepts finite, non-negative inputs and a
//! strictly positive supply. These helpers enforce that boundary so the
//! arithmetic never sees a zero divisor or a NaN.

use crate::error::{Error, Result};

/// Validate that a value is a finite number
pub fn validate_finite(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_input(name, format!("{} is not a finite number", value)));
    }
    Ok(())
}

/// Validate that a value is finite and not negative
pub fn validate_non_negative(value: f64, name: &str) -> Result<()> {
    validate_finite(value, name)?;

    if value < 0.0 {
        return Err(Error::invalid_input(name, format!("{} must not be negative", value)));
    }

    Ok(())
}

/// Validate a token supply, which is used as a divisor
pub fn validate_supply(supply: f64) -> Result<()> {
    validate_finite(supply, "supply")?;

    if supply <= 0.0 {
        return Err(Error::invalid_input(
            "supply",
            format!("{} must be greater than zero", supply),
        ));
    }

    Ok(())
}

/// Validate the full input set of a single valuation
pub fn validate_valuation_inputs(
    points: f64,
    cost_per_point: f64,
    supply: f64,
    fdv: f64,
    goal: f64,
) -> Result<()> {
    validate_non_negative(points, "points")?;
    validate_non_negative(cost_per_point, "cost_per_point")?;
    validate_supply(supply)?;
    validate_non_negative(fdv, "fdv")?;
    validate_non_negative(goal, "goal")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_supply() {
        assert!(validate_supply(1.0).is_ok());
        assert!(validate_supply(1e9).is_ok());
        assert!(validate_supply(0.0).is_err());
        assert!(validate_supply(-5.0).is_err());
        assert!(validate_supply(f64::NAN).is_err());
        assert!(validate_supply(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0.0, "points").is_ok());
        assert!(validate_non_negative(12.5, "points").is_ok());

        let err = validate_non_negative(-1.0, "points").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref name, .. } if name == "points"));
    }

    #[test]
    fn test_validate_valuation_inputs_names_offender() {
        let err = validate_valuation_inputs(1.0, 0.1, 1e9, 1e8, -1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref name, .. } if name == "goal"));

        let err = validate_valuation_inputs(1.0, 0.1, 0.0, 1e8, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref name, .. } if name == "supply"));
    }
}
