// src/models/ou.rs
//! Ornstein-Uhlenbeck Mean-Reverting Process
//!
//! # Mathematical Framework
//!
//! ```text
//! dX_t = θ(μ - X_t) dt + σ dW_t
//! ```
//!
//! Where:
//! - θ > 0: rate at which X_t reverts toward the long-term mean
//! - μ: long-term mean (any real number)
//! - σ ≥ 0: volatility (diffusion strength); σ = 0 degenerates to the
//!   deterministic relaxation dX = θ(μ - X) dt
//!
//! The drift pulls the state toward μ proportionally to its distance from μ,
//! which is what makes the process mean-reverting.

use super::model::SdeModel;
use crate::error::{validation::*, SimResult};
use std::f64;

/// Ornstein-Uhlenbeck process parameters
///
/// Constructed through [`OuProcess::new`], which rejects θ ≤ 0, σ < 0, and
/// non-finite inputs. Upstream input controls are expected to keep the values
/// in sensible display ranges; this constructor only guards the region where
/// the dynamics themselves stop making sense.
#[derive(Debug, Clone, Copy)]
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> SimResult<Self> {
        validate_positive("theta", theta)?;
        validate_finite("theta", theta)?;
        validate_finite("mu", mu)?;
        validate_non_negative("sigma", sigma)?;
        validate_finite("sigma", sigma)?;

        Ok(OuProcess { theta, mu, sigma })
    }
}

impl SdeModel for OuProcess {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }
}
