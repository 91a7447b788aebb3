//! Integer helpers for reducing radius ratios.

use spiro_core::{Result, SpiroError};

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(0, n) == n`; callers that need a non-zero divisor must reject zero inputs.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Convert a user-supplied radius into an exact positive integer.
///
/// Fractional radii have no well-defined closing period, so they are rejected
/// instead of being truncated.
pub fn integral_radius(name: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SpiroError::invalid(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    if value.fract() != 0.0 {
        return Err(SpiroError::invalid(format!(
            "{name} must be a whole number, got {value}"
        )));
    }
    if value > u32::MAX as f64 {
        return Err(SpiroError::invalid(format!("{name} is too large: {value}")));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(300, 50), 50);
        assert_eq!(gcd(50, 300), 50);
        assert_eq!(gcd(220, 65), 5);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
    }

    #[test]
    fn test_integral_radius_accepts_whole_numbers() {
        assert_eq!(integral_radius("R", 300.0).unwrap(), 300);
        assert_eq!(integral_radius("r", 1.0).unwrap(), 1);
    }

    #[test]
    fn test_integral_radius_rejects_fractions_and_non_positive() {
        assert!(integral_radius("r", 50.5).is_err());
        assert!(integral_radius("r", 0.0).is_err());
        assert!(integral_radius("r", -3.0).is_err());
        assert!(integral_radius("r", f64::NAN).is_err());
        assert!(integral_radius("r", f64::INFINITY).is_err());
    }
}
