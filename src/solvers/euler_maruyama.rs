// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `ΔW_n ~ N(0, Δt)` are independent normal increments
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: conditionally stable; for the Ornstein-Uhlenbeck drift
//!   the explicit scheme is well behaved whenever θ·Δt ≪ 1
//!
//! No adaptive step size, no variance reduction: the scheme stays the plain
//! first-order method on a fixed grid.

use crate::models::model::SdeModel;
use crate::rng;
use rand::Rng;
use std::f64;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single Euler-Maruyama step
    ///
    /// # Algorithm
    ///
    /// 1. Generate normal random draw: Z ~ N(0,1)
    /// 2. Compute drift: a(X_n, t_n) * Δt
    /// 3. Compute diffusion: b(X_n, t_n) * √Δt * Z
    /// 4. Update: X_{n+1} = X_n + drift + diffusion
    ///
    /// # Parameters
    /// - `model`: SDE model providing drift and diffusion functions
    /// - `x`: Current state (modified in-place)
    /// - `t`: Current time
    /// - `dt`: Time step size
    /// - `rng`: Random number generator
    pub fn step<M: SdeModel, R: Rng + ?Sized>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        rng: &mut R,
    ) {
        let normal_draw = rng::get_normal_draw(rng);
        let dw = dt.sqrt() * normal_draw;
        model.step_with_dw(x, t, dt, dw);
    }
}
