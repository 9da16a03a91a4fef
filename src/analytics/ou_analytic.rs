// src/analytics/ou_analytic.rs
//! Closed-form moments of the Ornstein-Uhlenbeck process
//!
//! # Mathematical Foundation
//!
//! Solving dX = θ(μ - X)dt + σ dW with the integrating factor e^(θt) gives:
//! ```text
//! X_t = X_0 e^(-θt) + μ(1 - e^(-θt)) + σ e^(-θt) ∫₀ᵗ e^(θs) dW_s
//! ```
//!
//! The stochastic integral has zero expectation, so:
//! ```text
//! E[X_t]   = μ + (X_0 - μ) e^(-θt)
//! Var[X_t] = σ² (1 - e^(-2θt)) / (2θ)
//! ```
//!
//! and X_t is Gaussian with those moments. As t → ∞ the mean tends to μ and
//! the variance to σ²/(2θ), the stationary distribution.
//!
//! These are reference formulas for chart annotations and test oracles; the
//! simulator itself never samples from this transition density.

use crate::math_utils::{norm_cdf, norm_ppf};

/// Conditional mean of X_t given X_0
///
/// # Formula
/// ```text
/// E[X_t] = μ + (X_0 - μ) e^(-θt)
/// ```
pub fn ou_mean(x0: f64, theta: f64, mu: f64, t: f64) -> f64 {
    mu + (x0 - mu) * (-theta * t).exp()
}

/// Conditional variance of X_t, θ > 0
///
/// # Formula
/// ```text
/// Var[X_t] = σ² (1 - e^(-2θt)) / (2θ)
/// ```
pub fn ou_variance(theta: f64, sigma: f64, t: f64) -> f64 {
    sigma * sigma * (1.0 - (-2.0 * theta * t).exp()) / (2.0 * theta)
}

/// Conditional standard deviation of X_t
pub fn ou_std_dev(theta: f64, sigma: f64, t: f64) -> f64 {
    ou_variance(theta, sigma, t).sqrt()
}

/// Limit of the variance as t → ∞: σ² / (2θ)
pub fn stationary_variance(theta: f64, sigma: f64) -> f64 {
    sigma * sigma / (2.0 * theta)
}

/// P(X_t ≤ x) under the exact Gaussian transition law
///
/// Degenerates to a step at the deterministic mean when σ = 0.
pub fn ou_terminal_cdf(x0: f64, theta: f64, mu: f64, sigma: f64, t: f64, x: f64) -> f64 {
    let m = ou_mean(x0, theta, mu, t);
    let s = ou_std_dev(theta, sigma, t);
    if s == 0.0 {
        return if x >= m { 1.0 } else { 0.0 };
    }
    norm_cdf((x - m) / s)
}

/// Quantile of X_t under the exact Gaussian transition law, p ∈ (0, 1)
///
/// Useful for confidence bands around the mean-reversion line.
pub fn ou_terminal_quantile(x0: f64, theta: f64, mu: f64, sigma: f64, t: f64, p: f64) -> f64 {
    let m = ou_mean(x0, theta, mu, t);
    let s = ou_std_dev(theta, sigma, t);
    m + s * norm_ppf(p)
}
