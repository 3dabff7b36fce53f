//! Price arithmetic and display.
//!
//! Cart prices arrive as plain decimal numbers and are summed as `f64`.
//! Totals are rounded to cents only once, after summation.

use serde::{Deserialize, Serialize};

/// Flat amount taken off the cart total when the discount is applied.
///
/// Same unit as item prices; not a percentage.
pub const DISCOUNT: f64 = 10.0;

/// Number of decimal places shown for every amount.
pub const DECIMAL_PLACES: usize = 2;

/// Round to two decimal places, half away from zero.
///
/// NaN and infinities pass through unchanged.
///
/// ```
/// use turbo_cart::money::round2;
/// assert_eq!(round2(19.99), 19.99);
/// assert_eq!(round2(0.125), 0.13);
/// ```
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// How amounts are rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Symbol written before the amount (e.g., "$").
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

fn default_symbol() -> String {
    "$".to_string()
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
        }
    }
}

impl PriceFormat {
    /// Create a format with the given currency symbol.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self, amount: f64) -> String {
        format!("{}{}", self.symbol, display_amount(amount))
    }
}

/// Format without symbol, always with two decimals (e.g., "49.99").
pub fn display_amount(amount: f64) -> String {
    format!("{:.places$}", amount, places = DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_sum_of_halves() {
        assert_eq!(round2(9.995 * 2.0), 19.99);
    }

    #[test]
    fn test_round2_keeps_whole_numbers() {
        assert_eq!(round2(15.0), 15.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_drops_float_noise() {
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_round2_propagates_nan() {
        assert!(round2(f64::NAN).is_nan());
    }

    #[test]
    fn test_display_two_decimals() {
        let format = PriceFormat::default();
        assert_eq!(format.display(15.0), "$15.00");
        assert_eq!(format.display(19.99), "$19.99");
        assert_eq!(format.display(DISCOUNT), "$10.00");
    }

    #[test]
    fn test_display_negative_final() {
        assert_eq!(PriceFormat::default().display(-4.5), "$-4.50");
    }

    #[test]
    fn test_custom_symbol() {
        let format = PriceFormat::with_symbol("\u{20ac}");
        assert_eq!(format.display(3.5), "\u{20ac}3.50");
    }
}
