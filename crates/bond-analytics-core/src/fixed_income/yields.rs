use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent, Years, FACE_VALUE};

/// Annual coupon cash amount per 100 face for a coupon rate in percent.
pub fn annual_coupon(coupon_rate: Percent) -> Option<Money> {
    (coupon_rate / dec!(100)).checked_mul(FACE_VALUE)
}

/// Running (current) yield in percent: annual coupon over clean price.
///
/// Defined only for a strictly positive price.
pub fn running_yield(coupon_rate: Percent, price: Money) -> Option<Percent> {
    if price <= Decimal::ZERO {
        return None;
    }
    annual_coupon(coupon_rate)?
        .checked_div(price)?
        .checked_mul(dec!(100))
}

/// Approximate yield to maturity in percent.
///
/// ```text
/// ytm = (C + (F - P) / T) / ((F + P) / 2) * 100
/// ```
///
/// Linear approximation, not a root solve. Defined only for a positive
/// price and a positive time to maturity.
pub fn ytm_approx(coupon_rate: Percent, price: Money, years: Years) -> Option<Percent> {
    if price <= Decimal::ZERO || years <= Decimal::ZERO {
        return None;
    }
    let coupon = annual_coupon(coupon_rate)?;
    let pull_to_par = (FACE_VALUE - price).checked_div(years)?;
    let average_price = FACE_VALUE.checked_add(price)?.checked_div(dec!(2))?;
    coupon
        .checked_add(pull_to_par)?
        .checked_div(average_price)?
        .checked_mul(dec!(100))
}
