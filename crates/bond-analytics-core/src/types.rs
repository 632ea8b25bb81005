use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Prices and face amounts, quoted per 100 of face.
pub type Money = Decimal;

/// Rates quoted in percent per annum (5 = 5%). Never as decimals.
pub type Percent = Decimal;

/// Year fractions
pub type Years = Decimal;

/// Flat face value assumed for every instrument.
pub const FACE_VALUE: Money = dec!(100);

/// Decimal places carried by every derived figure in the output artifact.
pub const OUTPUT_DP: u32 = 3;

/// Round a derived figure to the output precision.
pub fn round_output(value: Decimal) -> Decimal {
    value.round_dp(OUTPUT_DP)
}
