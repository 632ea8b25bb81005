use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Percent, Years, FACE_VALUE};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Coupon payments per year assumed when none is configured.
pub const DEFAULT_COUPON_FREQUENCY: u32 = 2;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Macaulay duration in years of a bullet bond, PV-weighted over its
/// coupon schedule.
///
/// Returns `None` when `years <= 0`, the frequency is zero, the discounted
/// cash flows do not sum to a positive amount, or the arithmetic overflows.
pub fn macaulay_duration(
    coupon_rate: Percent,
    ytm_pct: Percent,
    years: Years,
    freq: u32,
) -> Option<Years> {
    let schedule = Schedule::new(coupon_rate, ytm_pct, years, freq)?;
    schedule.macaulay()
}

/// Approximate modified duration in years: Macaulay duration divided by
/// `1 + ytm / freq`.
///
/// A maturity shorter than one coupon period is still priced as a single
/// period.
pub fn modified_duration(
    coupon_rate: Percent,
    ytm_pct: Option<Percent>,
    years: Years,
    freq: u32,
) -> Option<Years> {
    let schedule = Schedule::new(coupon_rate, ytm_pct?, years, freq)?;
    schedule.macaulay()?.checked_div(schedule.one_plus_y()?)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

struct Schedule {
    periods: u32,
    freq: Decimal,
    coupon_per_period: Decimal,
    yield_per_period: Decimal,
}

impl Schedule {
    fn new(coupon_rate: Percent, ytm_pct: Percent, years: Years, freq: u32) -> Option<Self> {
        if years <= Decimal::ZERO || freq == 0 {
            return None;
        }
        let freq_dec = Decimal::from(freq);
        let periods = years.checked_mul(freq_dec)?.round().to_u32()?.max(1);
        let coupon_per_period = (coupon_rate / dec!(100))
            .checked_mul(FACE_VALUE)?
            .checked_div(freq_dec)?;
        let yield_per_period = (ytm_pct / dec!(100)).checked_div(freq_dec)?;
        Some(Self {
            periods,
            freq: freq_dec,
            coupon_per_period,
            yield_per_period,
        })
    }

    fn one_plus_y(&self) -> Option<Decimal> {
        Decimal::ONE.checked_add(self.yield_per_period)
    }

    /// Sum of t * PV(CF) over sum of PV(CF), discounting iteratively
    /// (df_k = df_{k-1} * (1 + y)).
    fn macaulay(&self) -> Option<Decimal> {
        let one_plus_y = self.one_plus_y()?;
        if one_plus_y.is_zero() {
            return None;
        }

        let mut pv_total = Decimal::ZERO;
        let mut weighted_sum = Decimal::ZERO;
        let mut df = Decimal::ONE;

        for k in 1..=self.periods {
            df = match df.checked_mul(one_plus_y) {
                Some(next) => next,
                // Remaining flows discount below decimal precision.
                None => break,
            };
            let cf = if k == self.periods {
                self.coupon_per_period.checked_add(FACE_VALUE)?
            } else {
                self.coupon_per_period
            };
            let pv = cf.checked_div(df)?;
            let t_years = Decimal::from(k) / self.freq;
            pv_total = pv_total.checked_add(pv)?;
            weighted_sum = weighted_sum.checked_add(t_years.checked_mul(pv)?)?;
        }

        if pv_total <= Decimal::ZERO {
            return None;
        }
        weighted_sum.checked_div(pv_total)
    }
}
