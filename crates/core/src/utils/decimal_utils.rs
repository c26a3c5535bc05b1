use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_PRECISION;

/// `amount / base` expressed as a percentage (already multiplied by 100),
/// rounded for display. A zero or negative base yields zero instead of an
/// invalid numeric result.
pub fn percent_of(amount: Decimal, base: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount / base * dec!(100)).round_dp(PERCENT_PRECISION)
}
