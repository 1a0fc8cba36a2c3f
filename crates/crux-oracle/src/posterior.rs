//! Exact posterior tail probability for integer-count Beta posteriors.
//!
//! For integer shapes the Beta CDF reduces to a binomial tail:
//! `P(Beta(a, b) <= x) = P(Bin(a+b-1, x) >= a)`, hence
//! `P(p > 1/2) = P(Bin(n, 1/2) <= a-1)` with `n = a + b - 1`.
//! Terms are accumulated in log space so large counts stay finite.

use std::f64::consts::LN_2;

/// `P(p > 0.5)` under a `Beta(alpha, beta)` posterior with integer counts.
pub fn posterior_above_half(alpha: u32, beta: u32) -> f64 {
    if alpha == 0 {
        return 0.0;
    }
    if beta == 0 {
        return 1.0;
    }
    let n = f64::from(alpha + beta - 1);
    let mut ln_choose = 0.0_f64;
    let mut sum = 0.0_f64;
    for k in 0..alpha {
        sum += (ln_choose - n * LN_2).exp();
        // C(n, k+1) = C(n, k) * (n - k) / (k + 1)
        ln_choose += (n - f64::from(k)).ln() - f64::from(k + 1).ln();
    }
    sum.clamp(0.0, 1.0)
}
