//! # ou-sim: Monte Carlo Simulation of the Ornstein-Uhlenbeck Process
//!
//! A Rust library for simulating sample paths of the Ornstein-Uhlenbeck (OU)
//! mean-reverting diffusion with the Euler-Maruyama scheme, aimed at
//! visualizing mean reversion and at validating the discretization against
//! the process's closed-form moments.
//!
//! ## Key Features
//!
//! - **Euler-Maruyama path engine**: P independent discretized trajectories
//!   over an evenly spaced time grid, one batch of normal draws per time step
//! - **Explicit randomness**: the RNG handle is passed in, so seeded runs are
//!   bit-reproducible and unseeded runs stay exploratory
//! - **Closed-form analytics**: transition mean/variance, stationary variance,
//!   and terminal quantiles for reference lines and test oracles
//! - **Validated inputs**: non-positive reversion rates, negative volatility,
//!   and degenerate run shapes are rejected up front
//! - **CSV export**: time-indexed path matrix for any external renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use ou_sim::models::ou::OuProcess;
//! use ou_sim::sim::path_engine::{simulate, SimConfig};
//! use ou_sim::rng;
//!
//! // dX = θ(μ - X) dt + σ dW with θ = 1, μ = 0, σ = 0.5
//! let model = OuProcess::new(1.0, 0.0, 0.5).expect("valid parameters");
//!
//! // T = 5, N = 500 steps, P = 5 paths, X0 = 5
//! let cfg = SimConfig::default();
//!
//! let mut rng = rng::seed_rng_from_u64(42);
//! let sim = simulate(&model, &cfg, &mut rng).expect("valid configuration");
//!
//! assert_eq!(sim.paths.dim(), (5, 500));
//! assert_eq!(sim.time_grid.len(), 500);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The OU process solves the SDE:
//! ```text
//! dX_t = θ(μ - X_t) dt + σ dW_t
//! ```
//! Its expectation reverts to μ at rate θ:
//! ```text
//! E[X_t] = μ + (X_0 - μ) e^(-θt)
//! ```
//! The library discretizes the SDE rather than sampling the known Gaussian
//! transition density; the closed form is used only as an analytic reference.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod models;
pub mod solvers;
pub mod sim;
pub mod analytics;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
