//! Annuity factor utilities
//!
//! Every geometric series in the model goes through here. A zero rate takes the
//! closed-form linear branch before any `(1 + i)^n - 1` denominator is formed.

/// Compound growth multiplier `(1 + rate)^periods`
pub fn growth_factor(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return 1.0;
    }
    (1.0 + rate).powf(periods)
}

/// Level payment that amortizes `principal` over `periods` at `periodic_rate`
pub fn level_payment(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    let n = periods as f64;
    if periodic_rate == 0.0 {
        return principal / n;
    }
    let factor = growth_factor(periodic_rate, n);
    principal * periodic_rate * factor / (factor - 1.0)
}

/// Outstanding principal after `elapsed` level payments
///
/// Zero once the loan is paid off (`elapsed >= periods`).
pub fn remaining_balance(principal: f64, periodic_rate: f64, periods: u32, elapsed: u32) -> f64 {
    if elapsed >= periods {
        return 0.0;
    }
    let n = periods as f64;
    let k = elapsed as f64;
    if periodic_rate == 0.0 {
        return principal * (1.0 - k / n);
    }
    let full = growth_factor(periodic_rate, n);
    let done = growth_factor(periodic_rate, k);
    principal * (full - done) / (full - 1.0)
}

/// Sum of `terms` values starting at `first`, each `growth_rate` above the last
pub fn geometric_sum(first: f64, growth_rate: f64, terms: u32) -> f64 {
    let n = terms as f64;
    if growth_rate == 0.0 {
        return first * n;
    }
    first * (growth_factor(growth_rate, n) - 1.0) / growth_rate
}

/// Monthly rate that compounds to `annual_rate` over twelve months
pub fn monthly_equivalent_rate(annual_rate: f64) -> f64 {
    if annual_rate == 0.0 {
        return 0.0;
    }
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// Round to `decimals` places, ties to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if decimals == 0 {
        return value.round_ties_even();
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
