//! Currency formatting.

use tray_core::Decimal;

/// Render an amount with a currency prefix and exactly two decimal places.
///
/// Rounds half to even, and only here: the order keeps full precision.
pub fn format_price(amount: Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(format_price(Decimal::new(7, 0), "$"), "$7.00");
        assert_eq!(format_price(Decimal::new(15, 1), "$"), "$1.50");
        assert_eq!(format_price(Decimal::ZERO, "$"), "$0.00");
    }

    #[test]
    fn test_rounds_extra_precision() {
        // 7.00 * 0.08 keeps four places internally
        assert_eq!(format_price(Decimal::new(5600, 4), "$"), "$0.56");
        assert_eq!(format_price(Decimal::new(1234, 3), "$"), "$1.23");
        // Half to even
        assert_eq!(format_price(Decimal::new(125, 3), "$"), "$0.12");
        assert_eq!(format_price(Decimal::new(135, 3), "$"), "$0.14");
    }

    #[test]
    fn test_custom_symbol() {
        assert_eq!(format_price(Decimal::new(250, 2), "€"), "€2.50");
        assert_eq!(format_price(Decimal::new(250, 2), ""), "2.50");
    }
}
